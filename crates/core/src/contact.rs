//! Contact form submission rules.
//!
//! Submissions are append-only. Listing order is newest first by
//! submission time; equal timestamps keep their scan order.

use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Status assigned to every new submission.
pub const STATUS_NEW: &str = "new";

/// Inquiry type used when the form omits one.
pub const DEFAULT_CONTACT_TYPE: &str = "general";

/// Inquiry types offered by the contact form. Other values are accepted
/// and stored verbatim.
pub const INQUIRY_TYPES: &[&str] = &[
    "partnership",
    "volunteer",
    "student",
    "curriculum",
    "media",
    DEFAULT_CONTACT_TYPE,
];

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fresh submission identifier (UUID v4).
pub fn new_submission_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Resolve the stored inquiry type, falling back to [`DEFAULT_CONTACT_TYPE`]
/// when absent or blank.
pub fn resolve_contact_type(kind: Option<&str>) -> String {
    match kind.map(str::trim) {
        Some(k) if !k.is_empty() => k.to_string(),
        _ => DEFAULT_CONTACT_TYPE.to_string(),
    }
}

/// Whether `kind` is one of the form's known inquiry types.
pub fn is_known_inquiry_type(kind: &str) -> bool {
    INQUIRY_TYPES.contains(&kind)
}

/// Stable sort, most recent `submitted_at` first.
pub fn sort_newest_first<T>(items: &mut [T], submitted_at: impl Fn(&T) -> Timestamp) {
    items.sort_by(|a, b| submitted_at(b).cmp(&submitted_at(a)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn contact_type_defaults_to_general() {
        assert_eq!(resolve_contact_type(None), "general");
        assert_eq!(resolve_contact_type(Some("")), "general");
        assert_eq!(resolve_contact_type(Some("  ")), "general");
        assert_eq!(resolve_contact_type(Some("media")), "media");
    }

    #[test]
    fn unknown_types_are_kept() {
        assert_eq!(resolve_contact_type(Some("press-kit")), "press-kit");
        assert!(!is_known_inquiry_type("press-kit"));
        assert!(is_known_inquiry_type("volunteer"));
    }

    #[test]
    fn submission_ids_are_unique_uuids() {
        let a = new_submission_id();
        let b = new_submission_id();
        assert_ne!(a, b);
        assert!(uuid::Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn sort_is_newest_first_and_stable() {
        let t0 = Utc::now();
        let mut items = vec![
            ("old", t0),
            ("tie-a", t0 + Duration::seconds(5)),
            ("newest", t0 + Duration::seconds(10)),
            ("tie-b", t0 + Duration::seconds(5)),
        ];
        sort_newest_first(&mut items, |(_, ts)| *ts);
        let order: Vec<&str> = items.iter().map(|(name, _)| *name).collect();
        assert_eq!(order, vec!["newest", "tie-a", "tie-b", "old"]);
    }
}
