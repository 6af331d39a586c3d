pub mod contacts;
pub mod health;
pub mod profiles;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /profiles                                  create (POST)
/// /profiles/{user_id}                        get
/// /profiles/{user_id}/stats                  dashboard counters
/// /profiles/{user_id}/progress               record lesson progress (POST)
/// /profiles/{user_id}/enrollments            enroll in a course (POST)
///
/// /contact                                   submit contact form (POST)
/// /admin/contacts                            list submissions, newest first
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(profiles::router())
        .merge(contacts::router())
}
