//! Review submission and its anti-automation gate

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tsq_common::challenge::{check_challenge, generate_challenge};
use tsq_common::db::queries;
use tsq_common::models::{Business, Review};
use tsq_common::{validate, Error};
use uuid::Uuid;

use crate::api::ApiError;
use crate::AppState;

/// Challenge handed to the client before a review submission
#[derive(Debug, Serialize)]
pub struct ChallengeResponse {
    pub challenge_id: Uuid,
    pub prompt: String,
}

/// POST /api/challenges
///
/// Issues a fresh verification challenge. Each id is good for exactly one
/// submission attempt.
pub async fn new_challenge(State(state): State<AppState>) -> Json<ChallengeResponse> {
    let challenge = generate_challenge();
    let prompt = challenge.prompt().to_string();
    let challenge_id = state.store_challenge(challenge);
    Json(ChallengeResponse {
        challenge_id,
        prompt,
    })
}

/// Request body for submitting a review
///
/// `rating` and `answer` arrive as the raw strings the user typed; the
/// validation gate owns their parsing.
#[derive(Debug, Deserialize)]
pub struct NewReviewRequest {
    pub challenge_id: Uuid,
    pub answer: String,
    pub rating: String,
    pub text: String,
}

/// POST /api/businesses/:id/reviews
///
/// Gate order: verification challenge, then rating and text validation,
/// then the transactional write. The challenge id is removed from the
/// store up front, so a failed attempt cannot retry the same question.
pub async fn submit_review(
    State(state): State<AppState>,
    Path(business_id): Path<i64>,
    Json(body): Json<NewReviewRequest>,
) -> Result<Json<Business>, ApiError> {
    let mut challenge = state.take_challenge(&body.challenge_id).ok_or_else(|| {
        Error::VerificationFailed(
            "Verification question has expired. Please answer the new question.".to_string(),
        )
    })?;
    check_challenge(&mut challenge, &body.answer)?;

    let rating = validate::validate_rating(&body.rating)?;
    let text = validate::validate_review_text(&body.text)?;

    let business = queries::add_review(&state.db, business_id, rating, &text).await?;
    Ok(Json(business))
}

/// GET /api/businesses/:id/reviews
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(business_id): Path<i64>,
) -> Result<Json<Vec<Review>>, ApiError> {
    // 404 for unknown businesses rather than an empty list
    queries::get_business(&state.db, business_id).await?;
    let reviews = queries::get_reviews(&state.db, business_id).await?;
    Ok(Json(reviews))
}
