//! Handlers for the contact form and its admin listing.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use learnpath_db::models::contact::CreateContactSubmission;
use learnpath_db::repositories::ContactRepo;
use serde::Serialize;

use super::json_body;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body returned after a successful submission.
#[derive(Debug, Serialize)]
pub struct SubmissionCreated {
    pub id: String,
}

/// POST /api/v1/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<CreateContactSubmission>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = json_body(payload)?;
    let id = ContactRepo::submit(&state.store, input).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SubmissionCreated { id },
        }),
    ))
}

/// GET /api/v1/admin/contacts
///
/// All submissions, most recent first.
pub async fn list_contacts(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let contacts = ContactRepo::list_all(&state.store).await?;
    Ok(Json(DataResponse { data: contacts }))
}
