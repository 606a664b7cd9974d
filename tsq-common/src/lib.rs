//! # Town Square Common Library
//!
//! Shared code for the Town Square directory service including:
//! - Domain models (Business, Review, ReportSummary)
//! - Database schema and queries
//! - Input validation for directory writes
//! - Human-verification challenge generation
//! - Recommendation ranking and report aggregation
//! - Configuration loading

pub mod challenge;
pub mod config;
#[cfg(feature = "sqlx")]
pub mod db;
pub mod error;
pub mod models;
pub mod ranking;
pub mod report;
pub mod validate;

pub use error::{Error, Result};
pub use models::{Business, Category, ReportSummary, Review};
