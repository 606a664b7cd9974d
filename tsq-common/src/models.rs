//! Domain models for the Town Square directory
//!
//! Simple value containers read from and written to the database, plus the
//! computed summary returned to the Reports screen.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Business category shown in the directory
///
/// Closed set. The UI filter value "All" means "no filter" and is not a
/// category; callers map it to `None` before querying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Food,
    Retail,
    Services,
}

impl Category {
    /// String form stored in the database and shown in the UI
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Retail => "Retail",
            Category::Services => "Services",
        }
    }

    /// Parse a category from its database or query-string form
    ///
    /// Case-insensitive; returns `None` for anything outside the closed set
    /// (including "All").
    pub fn parse(s: &str) -> Option<Category> {
        match s.trim().to_ascii_lowercase().as_str() {
            "food" => Some(Category::Food),
            "retail" => Some(Category::Retail),
            "services" => Some(Category::Services),
            _ => None,
        }
    }

    pub fn all_variants() -> &'static [Category] {
        &[Category::Food, Category::Retail, Category::Services]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a local business shown in the directory
///
/// `average_rating` and `review_count` are derived from the business's
/// review set; every review insert recomputes both in the same transaction,
/// so they are never set directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    pub id: i64,
    pub name: String,
    pub category: Category,
    /// Mean of all review ratings, 0.0 while the business has no reviews
    pub average_rating: f64,
    pub review_count: i64,
    pub deal_text: String,
    pub is_favorite: bool,
}

impl Business {
    /// Rating key used by the ranking engine
    ///
    /// Unrated businesses rank with 0.0, below any rated business.
    pub fn effective_rating(&self) -> f64 {
        if self.review_count == 0 {
            0.0
        } else {
            self.average_rating
        }
    }
}

/// Represents a single user review for a business
///
/// Reviews are append-only: created once, never edited or deleted except by
/// business deletion (foreign-key cascade).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub business_id: i64,
    pub rating: u8,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Aggregated information for the Reports screen
///
/// Computed on demand from a snapshot of the directory; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_businesses: i64,
    /// Mean of `average_rating` over businesses with at least one review;
    /// `None` while nothing has been rated, so "no data" stays distinct
    /// from a 0.0 rating.
    pub average_rating: Option<f64>,
    pub favorite_count: i64,
    /// Up to three businesses in ranked order
    pub top_businesses: Vec<Business>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in Category::all_variants() {
            let parsed = Category::parse(category.as_str()).unwrap();
            assert_eq!(*category, parsed, "Round-trip failed for {:?}", category);
        }
    }

    #[test]
    fn test_category_parse_case_insensitive() {
        assert_eq!(Category::parse("food"), Some(Category::Food));
        assert_eq!(Category::parse("RETAIL"), Some(Category::Retail));
        assert_eq!(Category::parse("  Services  "), Some(Category::Services));
    }

    #[test]
    fn test_category_parse_invalid() {
        assert_eq!(Category::parse(""), None);
        assert_eq!(Category::parse("Groceries"), None);
        // "All" is a filter value, not a category
        assert_eq!(Category::parse("All"), None);
    }

    #[test]
    fn test_effective_rating_unrated() {
        let business = Business {
            id: 1,
            name: "Sunrise Café".to_string(),
            category: Category::Food,
            average_rating: 0.0,
            review_count: 0,
            deal_text: String::new(),
            is_favorite: false,
        };
        assert_eq!(business.effective_rating(), 0.0);
    }
}
