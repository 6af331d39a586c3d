//! Route definitions for learner profiles.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::profiles;
use crate::state::AppState;

/// Profile routes, merged at the `/api/v1` root.
///
/// ```text
/// POST /profiles                        -> create_profile
/// GET  /profiles/{user_id}              -> get_profile
/// GET  /profiles/{user_id}/stats        -> get_stats
/// POST /profiles/{user_id}/progress     -> record_progress
/// POST /profiles/{user_id}/enrollments  -> enroll
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/profiles", post(profiles::create_profile))
        .route("/profiles/{user_id}", get(profiles::get_profile))
        .route("/profiles/{user_id}/stats", get(profiles::get_stats))
        .route("/profiles/{user_id}/progress", post(profiles::record_progress))
        .route("/profiles/{user_id}/enrollments", post(profiles::enroll))
}
