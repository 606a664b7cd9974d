//! Directory-wide summary statistics for the Reports screen

use crate::models::{Business, ReportSummary};
use crate::ranking;

/// Number of businesses shown in the report's top list
pub const TOP_BUSINESS_COUNT: usize = 3;

/// Compute aggregate values used by the Reports screen
///
/// Pure and recomputed on every call so the report can never go stale.
/// `average_rating` covers only businesses with at least one review and is
/// `None` when no business qualifies.
pub fn compute_summary(businesses: &[Business]) -> ReportSummary {
    let rated: Vec<&Business> = businesses.iter().filter(|b| b.review_count > 0).collect();

    let average_rating = if rated.is_empty() {
        None
    } else {
        Some(rated.iter().map(|b| b.average_rating).sum::<f64>() / rated.len() as f64)
    };

    ReportSummary {
        total_businesses: businesses.len() as i64,
        average_rating,
        favorite_count: businesses.iter().filter(|b| b.is_favorite).count() as i64,
        top_businesses: ranking::top_businesses(businesses, TOP_BUSINESS_COUNT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn business(name: &str, rating: f64, count: i64, favorite: bool) -> Business {
        Business {
            id: 0,
            name: name.to_string(),
            category: Category::Food,
            average_rating: rating,
            review_count: count,
            deal_text: String::new(),
            is_favorite: favorite,
        }
    }

    #[test]
    fn test_empty_directory() {
        let summary = compute_summary(&[]);
        assert_eq!(summary.total_businesses, 0);
        assert_eq!(summary.favorite_count, 0);
        assert_eq!(summary.average_rating, None);
        assert!(summary.top_businesses.is_empty());
    }

    #[test]
    fn test_average_skips_unrated_businesses() {
        let collection = vec![
            business("Sunrise Café", 4.0, 2, false),
            business("Green Leaf Market", 2.0, 1, false),
            business("TechFix Repair", 0.0, 0, false),
        ];
        let summary = compute_summary(&collection);
        assert_eq!(summary.total_businesses, 3);
        // Mean over the two rated businesses only
        assert_eq!(summary.average_rating, Some(3.0));
    }

    #[test]
    fn test_no_rated_businesses_reports_unavailable() {
        let collection = vec![
            business("Sunrise Café", 0.0, 0, true),
            business("Green Leaf Market", 0.0, 0, false),
        ];
        let summary = compute_summary(&collection);
        // Never 0.0: "no data" must stay distinct from "zero rating"
        assert_eq!(summary.average_rating, None);
        assert_eq!(summary.favorite_count, 1);
    }

    #[test]
    fn test_top_list_is_ranked_and_capped() {
        let collection = vec![
            business("A", 2.0, 1, false),
            business("B", 5.0, 3, false),
            business("C", 4.0, 2, false),
            business("D", 3.0, 1, false),
        ];
        let summary = compute_summary(&collection);
        assert_eq!(summary.top_businesses.len(), TOP_BUSINESS_COUNT);
        let top: Vec<&str> = summary
            .top_businesses
            .iter()
            .map(|b| b.name.as_str())
            .collect();
        assert_eq!(top, ["B", "C", "D"]);
    }

    #[test]
    fn test_top_list_never_exceeds_collection() {
        let collection = vec![business("Solo Stop", 5.0, 1, false)];
        let summary = compute_summary(&collection);
        assert_eq!(summary.top_businesses.len(), 1);
    }
}
