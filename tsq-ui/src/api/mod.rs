//! HTTP API handlers

mod businesses;
mod error;
mod health;
mod reports;
mod reviews;

pub use businesses::{create_business, list_businesses, recommendations, set_favorite};
pub use error::ApiError;
pub use health::{health_check, health_routes};
pub use reports::report_summary;
pub use reviews::{list_reviews, new_challenge, submit_review};
