//! Key namespaces used in the key-value store.
//!
//! Every record lives under `<prefix><id>`. The store itself treats keys as
//! opaque strings; these helpers are the only place the layout is defined.

/// Prefix for learner profile records.
pub const PROFILE_PREFIX: &str = "user_profile:";

/// Prefix for contact form submissions.
pub const CONTACT_PREFIX: &str = "contact:";

/// Key of the profile record for `user_id`.
pub fn profile_key(user_id: &str) -> String {
    format!("{PROFILE_PREFIX}{user_id}")
}

/// Key of the contact submission record `submission_id`.
pub fn contact_key(submission_id: &str) -> String {
    format!("{CONTACT_PREFIX}{submission_id}")
}
