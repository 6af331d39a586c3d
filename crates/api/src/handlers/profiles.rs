//! Handlers for learner profiles, progress and enrollment.
//!
//! The caller's identity comes from the path. Requests are expected to have
//! been authenticated by the gateway in front of this service.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use learnpath_db::models::profile::{CreateProfile, Enroll, RecordProgress};
use learnpath_db::repositories::ProfileRepo;

use super::json_body;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/profiles
///
/// Create the profile for a newly signed-up learner.
pub async fn create_profile(
    State(state): State<AppState>,
    payload: Result<Json<CreateProfile>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = json_body(payload)?;
    let profile = ProfileRepo::create_profile(&state.store, input).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: profile })))
}

/// GET /api/v1/profiles/{user_id}
pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let profile = ProfileRepo::get_profile(&state.store, &user_id).await?;
    Ok(Json(DataResponse { data: profile }))
}

/// GET /api/v1/profiles/{user_id}/stats
///
/// Dashboard counters: enrolled and completed courses, learning time and
/// completed lessons.
pub async fn get_stats(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let profile = ProfileRepo::get_profile(&state.store, &user_id).await?;
    Ok(Json(DataResponse {
        data: profile.stats(),
    }))
}

/// POST /api/v1/profiles/{user_id}/progress
///
/// Record time and completion on a lesson and return the updated profile.
pub async fn record_progress(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    payload: Result<Json<RecordProgress>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = json_body(payload)?;
    let profile = ProfileRepo::record_progress(&state.store, &user_id, &input).await?;
    Ok(Json(DataResponse { data: profile }))
}

/// POST /api/v1/profiles/{user_id}/enrollments
///
/// Enroll in a course. Repeating the call returns the unchanged profile.
pub async fn enroll(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    payload: Result<Json<Enroll>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = json_body(payload)?;
    let profile = ProfileRepo::enroll(&state.store, &user_id, &input).await?;
    Ok(Json(DataResponse { data: profile }))
}
