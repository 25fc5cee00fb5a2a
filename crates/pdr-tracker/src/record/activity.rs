//! Activity records — a single completed professional-development event.

use serde::{Deserialize, Serialize};

use crate::record::CompetencyId;

// ---------------------------------------------------------------------------
// Identifier
// ---------------------------------------------------------------------------

/// Unique identifier for an activity (`act_` prefix).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActivityId(pub String);

impl std::fmt::Display for ActivityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Activity type
// ---------------------------------------------------------------------------

/// Kind of professional-development activity.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    /// Courses, workshops, and training sessions.
    #[default]
    Training,
    /// Professional certifications and qualifications.
    Certification,
    /// Significant work projects and initiatives.
    Project,
    /// Formal education and academic achievements.
    Education,
}

impl ActivityType {
    pub const ALL: [ActivityType; 4] = [
        ActivityType::Training,
        ActivityType::Certification,
        ActivityType::Project,
        ActivityType::Education,
    ];

    /// Stable lowercase tag.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Training => "training",
            Self::Certification => "certification",
            Self::Project => "project",
            Self::Education => "education",
        }
    }

    /// Parse a tag produced by [`ActivityType::as_tag`] (case-insensitive).
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_tag().eq_ignore_ascii_case(tag.trim()))
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

// ---------------------------------------------------------------------------
// Activity status
// ---------------------------------------------------------------------------

/// Verification status of an activity. Set only by explicit external action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
}

impl ActivityStatus {
    pub const ALL: [ActivityStatus; 3] = [
        ActivityStatus::Pending,
        ActivityStatus::Verified,
        ActivityStatus::Rejected,
    ];

    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_tag().eq_ignore_ascii_case(tag.trim()))
    }
}

impl std::fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

// ---------------------------------------------------------------------------
// Activity
// ---------------------------------------------------------------------------

/// A recorded professional-development activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub activity_type: ActivityType,
    pub title: String,
    pub description: String,
    /// ISO-8601 calendar date (`YYYY-MM-DD`).
    pub date_completed: String,
    pub provider: String,
    pub status: ActivityStatus,
    /// Opaque evidentiary attachments (file names, URIs).
    pub documentation: Vec<String>,
    /// Competencies this activity counts as evidence for.
    pub competencies: Vec<CompetencyId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflection: Option<String>,
}

impl Activity {
    pub fn is_verified(&self) -> bool {
        self.status == ActivityStatus::Verified
    }

    /// Parsed completion date, if `date_completed` is well formed.
    pub fn completed_on(&self) -> Option<chrono::NaiveDate> {
        crate::time::parse_date(&self.date_completed)
    }

    /// Return a copy of this activity with every field set in `patch`
    /// overwritten. Fields absent from the patch keep their current value.
    pub fn merged(&self, patch: &ActivityPatch) -> Activity {
        let mut next = self.clone();
        if let Some(t) = patch.activity_type {
            next.activity_type = t;
        }
        if let Some(ref v) = patch.title {
            next.title = v.clone();
        }
        if let Some(ref v) = patch.description {
            next.description = v.clone();
        }
        if let Some(ref v) = patch.date_completed {
            next.date_completed = v.clone();
        }
        if let Some(ref v) = patch.provider {
            next.provider = v.clone();
        }
        if let Some(s) = patch.status {
            next.status = s;
        }
        if let Some(ref v) = patch.documentation {
            next.documentation = v.clone();
        }
        if let Some(ref v) = patch.reflection {
            next.reflection = Some(v.clone());
        }
        next
    }

    /// Add a competency link if not already present.
    pub(crate) fn link_competency(&mut self, id: &CompetencyId) {
        if !self.competencies.contains(id) {
            self.competencies.push(id.clone());
        }
    }
}

/// Sparse update for an [`Activity`].
///
/// The identifier and competency links are not updatable here; links are
/// owned by the store's `link_evidence` so they stay in step with evidence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityPatch {
    pub activity_type: Option<ActivityType>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub date_completed: Option<String>,
    pub provider: Option<String>,
    pub status: Option<ActivityStatus>,
    pub documentation: Option<Vec<String>>,
    pub reflection: Option<String>,
}

impl ActivityPatch {
    /// Patch that only changes the verification status.
    pub fn status(status: ActivityStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// `true` when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
