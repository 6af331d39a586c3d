//! Route definitions for contact submissions.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::contacts;
use crate::state::AppState;

/// Contact routes, merged at the `/api/v1` root.
///
/// ```text
/// POST /contact         -> submit_contact
/// GET  /admin/contacts  -> list_contacts
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/contact", post(contacts::submit_contact))
        .route("/admin/contacts", get(contacts::list_contacts))
}
