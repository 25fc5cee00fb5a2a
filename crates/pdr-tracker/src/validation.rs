//! Activity validation — structural completeness before a record is accepted.
//!
//! Validation is advisory: the factory happily builds incomplete records,
//! and it is the store that refuses to commit them.

use crate::record::Activity;

/// Result of checking an activity's required fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityValidation {
    /// Names of empty required fields, in declaration order.
    pub missing: Vec<&'static str>,
    pub is_valid: bool,
}

/// Check every required field of `activity`.
///
/// `title`, `description`, `date_completed`, and `provider` must be
/// non-empty. Whitespace counts as content.
pub fn check_activity(activity: &Activity) -> ActivityValidation {
    let required: [(&'static str, &str); 4] = [
        ("title", &activity.title),
        ("description", &activity.description),
        ("date_completed", &activity.date_completed),
        ("provider", &activity.provider),
    ];

    let missing: Vec<&'static str> = required
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect();

    ActivityValidation {
        is_valid: missing.is_empty(),
        missing,
    }
}

/// `true` iff the activity has all required fields.
pub fn validate_activity(activity: &Activity) -> bool {
    check_activity(activity).is_valid
}
