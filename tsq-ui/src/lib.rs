//! tsq-ui library - Town Square directory service
//!
//! HTTP front end for browsing the directory, submitting reviews, and
//! viewing recommendations and reports.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;
use tsq_common::challenge::VerificationChallenge;
use uuid::Uuid;

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Outstanding verification challenges, keyed by the id handed to the
    /// client. Entries are removed on first use, so a challenge id can
    /// never be answered twice.
    challenges: Arc<Mutex<HashMap<Uuid, VerificationChallenge>>>,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self {
            db,
            challenges: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Store a freshly generated challenge and return the id handed to the
    /// client
    pub fn store_challenge(&self, challenge: VerificationChallenge) -> Uuid {
        let id = Uuid::new_v4();
        self.lock_challenges().insert(id, challenge);
        id
    }

    /// Remove a challenge from the store, consuming the id
    ///
    /// Returns `None` for unknown or already-used ids.
    pub fn take_challenge(&self, id: &Uuid) -> Option<VerificationChallenge> {
        self.lock_challenges().remove(id)
    }

    // The store holds plain data, so it stays usable even if a holder
    // panicked mid-operation.
    fn lock_challenges(&self) -> MutexGuard<'_, HashMap<Uuid, VerificationChallenge>> {
        match self.challenges.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post, put};

    Router::new()
        .route(
            "/api/businesses",
            get(api::list_businesses).post(api::create_business),
        )
        .route("/api/businesses/:id/favorite", put(api::set_favorite))
        .route(
            "/api/businesses/:id/reviews",
            get(api::list_reviews).post(api::submit_review),
        )
        .route("/api/recommendations", get(api::recommendations))
        .route("/api/reports/summary", get(api::report_summary))
        .route("/api/challenges", post(api::new_challenge))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
