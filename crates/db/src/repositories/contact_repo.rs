//! Repository for contact form submissions (`contact:<id>`).
//!
//! Submissions are append-only: they are written once and never updated or
//! deleted here.

use chrono::Utc;
use learnpath_core::contact::{
    is_known_inquiry_type, new_submission_id, resolve_contact_type, sort_newest_first, STATUS_NEW,
};
use learnpath_core::error::CoreError;
use learnpath_core::keys::{contact_key, CONTACT_PREFIX};
use validator::Validate;

use super::{decode, save_record};
use crate::error::{RepoError, StoreError};
use crate::models::contact::{ContactSubmission, CreateContactSubmission};
use crate::Store;

/// Provides data access for contact submissions.
pub struct ContactRepo;

impl ContactRepo {
    /// Validate and store a new submission. Returns its generated id.
    pub async fn submit(store: &Store, input: CreateContactSubmission) -> Result<String, RepoError> {
        input.validate().map_err(CoreError::from)?;

        let kind = resolve_contact_type(input.kind.as_deref());
        if !is_known_inquiry_type(&kind) {
            tracing::debug!(kind = %kind, "Contact submission with unrecognized inquiry type");
        }

        let submission = ContactSubmission {
            id: new_submission_id(),
            name: input.name,
            email: input.email,
            subject: input.subject,
            message: input.message,
            kind,
            submitted_at: Utc::now(),
            status: STATUS_NEW.to_string(),
        };
        Self::insert(store, &submission).await?;

        tracing::info!(
            submission_id = %submission.id,
            kind = %submission.kind,
            "Contact submission stored",
        );
        Ok(submission.id)
    }

    /// Store a fully formed submission under its id, timestamps included.
    pub async fn insert(store: &Store, submission: &ContactSubmission) -> Result<(), StoreError> {
        save_record(store, &contact_key(&submission.id), submission).await
    }

    /// All submissions, most recent first.
    pub async fn list_all(store: &Store) -> Result<Vec<ContactSubmission>, StoreError> {
        let mut submissions = store
            .kv()
            .scan_prefix(CONTACT_PREFIX)
            .await?
            .into_iter()
            .map(|value| {
                let key = value
                    .get("id")
                    .and_then(|id| id.as_str())
                    .map_or_else(|| format!("{CONTACT_PREFIX}?"), contact_key);
                decode::<ContactSubmission>(&key, value)
            })
            .collect::<Result<Vec<_>, _>>()?;

        sort_newest_first(&mut submissions, |s| s.submitted_at);
        Ok(submissions)
    }
}
