//! Contact form submission record and DTO.

use learnpath_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A stored contact form submission (`contact:<id>`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub submitted_at: Timestamp,
    pub status: String,
}

/// DTO for a new contact form submission.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateContactSubmission {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}
