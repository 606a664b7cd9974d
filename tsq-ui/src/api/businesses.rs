//! Directory browsing and management endpoints

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use tsq_common::db::queries;
use tsq_common::models::{Business, Category};
use tsq_common::{ranking, validate, Error};

use crate::api::ApiError;
use crate::AppState;

/// Query parameters for directory listing
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Category name, or "All" for no filter
    pub category: Option<String>,

    #[serde(default)]
    pub favorites_only: bool,

    /// Sort key: "rating" orders by rating; default is alphabetical
    pub sort: Option<String>,
}

/// Map a raw category value to a filter
///
/// Absent, blank, and "All" all mean "no filter"; anything else must be a
/// real category.
fn parse_category_filter(raw: Option<&str>) -> Result<Option<Category>, ApiError> {
    let raw = match raw {
        Some(value) => value.trim(),
        None => return Ok(None),
    };
    if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    match Category::parse(raw) {
        Some(category) => Ok(Some(category)),
        None => Err(Error::InvalidInput(format!("Unknown category: {}", raw)).into()),
    }
}

/// GET /api/businesses
pub async fn list_businesses(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Business>>, ApiError> {
    let category = parse_category_filter(query.category.as_deref())?;
    let sort_by_rating = matches!(query.sort.as_deref(), Some("rating"));

    let businesses =
        queries::get_businesses(&state.db, category, query.favorites_only, sort_by_rating).await?;
    Ok(Json(businesses))
}

/// Request body for creating a business
#[derive(Debug, Deserialize)]
pub struct NewBusinessRequest {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub deal_text: String,
}

/// POST /api/businesses
///
/// Deal text is optional; when present it must pass validation.
pub async fn create_business(
    State(state): State<AppState>,
    Json(body): Json<NewBusinessRequest>,
) -> Result<Json<Business>, ApiError> {
    let name = validate::validate_business_name(&body.name)?;
    let category = Category::parse(&body.category)
        .ok_or_else(|| Error::InvalidInput(format!("Unknown category: {}", body.category)))?;
    let deal_text = if body.deal_text.trim().is_empty() {
        String::new()
    } else {
        validate::validate_deal_text(&body.deal_text)?
    };

    let business = queries::add_business(&state.db, &name, category, &deal_text).await?;
    Ok(Json(business))
}

/// Request body for the favorite toggle
#[derive(Debug, Deserialize)]
pub struct FavoriteRequest {
    pub favorite: bool,
}

/// PUT /api/businesses/:id/favorite
pub async fn set_favorite(
    State(state): State<AppState>,
    Path(business_id): Path<i64>,
    Json(body): Json<FavoriteRequest>,
) -> Result<Json<Business>, ApiError> {
    queries::toggle_favorite(&state.db, business_id, body.favorite).await?;
    let business = queries::get_business(&state.db, business_id).await?;
    Ok(Json(business))
}

/// Query parameters for recommendations
#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    /// Preferred category, or "All" for no preference
    pub category: Option<String>,
}

/// GET /api/recommendations
///
/// Favorites-first ranking within the preferred category, falling back to
/// the whole directory when the category has no businesses.
pub async fn recommendations(
    State(state): State<AppState>,
    Query(query): Query<RecommendQuery>,
) -> Result<Json<Vec<Business>>, ApiError> {
    let preferred = parse_category_filter(query.category.as_deref())?;
    let snapshot = queries::get_businesses(&state.db, None, false, false).await?;
    Ok(Json(ranking::rank(&snapshot, preferred)))
}
