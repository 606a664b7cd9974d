//! Recommendation ranking for the directory
//!
//! One explainable total order shared by the recommendation screen and the
//! reports top list: favorites first, then average rating, then review
//! count, with the business name as the final alphabetical tie-break.

use std::cmp::Ordering;

use crate::models::{Business, Category};

/// Compare two businesses under the ranking policy
///
/// Key order, each breaking ties for the one before it:
/// 1. `is_favorite` (favorites first)
/// 2. effective rating, descending (unrated businesses rank as 0.0)
/// 3. `review_count`, descending
/// 4. name, ascending, case-insensitive
///
/// The name key makes the order total and deterministic for any pair.
pub fn compare(a: &Business, b: &Business) -> Ordering {
    b.is_favorite
        .cmp(&a.is_favorite)
        .then_with(|| b.effective_rating().total_cmp(&a.effective_rating()))
        .then_with(|| b.review_count.cmp(&a.review_count))
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
}

/// Rank businesses for recommendation
///
/// Filters to the preferred category when one is given. When the filtered
/// set comes back empty, the identical ordering is applied to the whole
/// collection instead; only the input set changes, never the policy.
/// `None` (the UI's "All") skips the filter entirely.
pub fn rank(businesses: &[Business], preferred_category: Option<Category>) -> Vec<Business> {
    let mut picked: Vec<Business> = match preferred_category {
        Some(category) => businesses
            .iter()
            .filter(|b| b.category == category)
            .cloned()
            .collect(),
        None => businesses.to_vec(),
    };

    // Nothing in the preferred category: recommend from the whole directory.
    if picked.is_empty() {
        picked = businesses.to_vec();
    }

    picked.sort_by(compare);
    picked
}

/// Top businesses across the whole directory, in ranked order
///
/// Returns at most `n` entries; fewer when the directory is smaller.
pub fn top_businesses(businesses: &[Business], n: usize) -> Vec<Business> {
    let mut ranked = rank(businesses, None);
    ranked.truncate(n);
    ranked
}
