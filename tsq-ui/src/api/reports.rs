//! Directory summary report endpoint

use axum::extract::State;
use axum::Json;
use tsq_common::db::queries;
use tsq_common::models::ReportSummary;
use tsq_common::report;

use crate::api::ApiError;
use crate::AppState;

/// GET /api/reports/summary
///
/// Recomputed from a fresh snapshot on every call; nothing is cached.
pub async fn report_summary(
    State(state): State<AppState>,
) -> Result<Json<ReportSummary>, ApiError> {
    let snapshot = queries::get_businesses(&state.db, None, false, false).await?;
    Ok(Json(report::compute_summary(&snapshot)))
}
