//! Record factory — well-formed records with defaults and fresh identifiers.
//!
//! Each `create_*` function takes a draft whose `Some` fields override the
//! defaults. Identifiers are 16 random bytes, base58-encoded behind a kind
//! prefix. That is collision resistant within a process; it makes no promise
//! across independent writers sharing one collection.

use rand::RngCore;

use super::{
    Activity, ActivityId, ActivityStatus, ActivityType, Competency, CompetencyId,
    CompetencyStatus, ProficiencyLevel, ProfileId, UserProfile,
};

// ---------------------------------------------------------------------------
// Identifier generation
// ---------------------------------------------------------------------------

fn generate_id(prefix: &str) -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    format!("{prefix}_{}", bs58::encode(bytes).into_string())
}

/// Fresh activity identifier.
pub fn generate_activity_id() -> ActivityId {
    ActivityId(generate_id("act"))
}

/// Fresh competency identifier.
pub fn generate_competency_id() -> CompetencyId {
    CompetencyId(generate_id("cmp"))
}

/// Fresh profile identifier.
pub fn generate_profile_id() -> ProfileId {
    ProfileId(generate_id("usr"))
}

// ---------------------------------------------------------------------------
// Drafts
// ---------------------------------------------------------------------------

/// Caller-supplied fields for a new [`Activity`].
#[derive(Debug, Clone, Default)]
pub struct ActivityDraft {
    pub activity_type: Option<ActivityType>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub date_completed: Option<String>,
    pub provider: Option<String>,
    pub status: Option<ActivityStatus>,
    pub documentation: Option<Vec<String>>,
    pub competencies: Option<Vec<CompetencyId>>,
    pub reflection: Option<String>,
}

impl ActivityDraft {
    /// Draft with the four required text fields set.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        date_completed: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            date_completed: Some(date_completed.into()),
            provider: Some(provider.into()),
            ..Self::default()
        }
    }

    pub fn activity_type(mut self, activity_type: ActivityType) -> Self {
        self.activity_type = Some(activity_type);
        self
    }

    pub fn status(mut self, status: ActivityStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn document(mut self, reference: impl Into<String>) -> Self {
        self.documentation
            .get_or_insert_with(Vec::new)
            .push(reference.into());
        self
    }
}

/// Caller-supplied fields for a new [`Competency`].
#[derive(Debug, Clone, Default)]
pub struct CompetencyDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub level: Option<ProficiencyLevel>,
    pub status: Option<CompetencyStatus>,
    pub evidence: Option<Vec<Activity>>,
}

impl CompetencyDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            ..Self::default()
        }
    }
}

/// Caller-supplied fields for a new [`UserProfile`].
#[derive(Debug, Clone, Default)]
pub struct ProfileDraft {
    pub name: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub joined_date: Option<String>,
    pub supervisor: Option<String>,
    pub current_goals: Option<Vec<String>>,
    pub competencies: Option<Vec<CompetencyId>>,
    pub certifications: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Factories
// ---------------------------------------------------------------------------

/// Build an activity. Defaults: `training`, `pending`, completed today,
/// empty text fields and lists.
pub fn create_activity(draft: ActivityDraft) -> Activity {
    Activity {
        id: generate_activity_id(),
        activity_type: draft.activity_type.unwrap_or_default(),
        title: draft.title.unwrap_or_default(),
        description: draft.description.unwrap_or_default(),
        date_completed: draft
            .date_completed
            .unwrap_or_else(crate::time::today_iso),
        provider: draft.provider.unwrap_or_default(),
        status: draft.status.unwrap_or_default(),
        documentation: draft.documentation.unwrap_or_default(),
        competencies: draft.competencies.unwrap_or_default(),
        reflection: draft.reflection,
    }
}

/// Build a competency. Defaults: `beginner`, `in_progress`, no evidence.
pub fn create_competency(draft: CompetencyDraft) -> Competency {
    Competency {
        id: generate_competency_id(),
        name: draft.name.unwrap_or_default(),
        description: draft.description.unwrap_or_default(),
        level: draft.level.unwrap_or_default(),
        status: draft.status.unwrap_or_default(),
        evidence: draft.evidence.unwrap_or_default(),
    }
}

/// Build a profile. Defaults: empty text, joined today, empty lists.
pub fn create_profile(draft: ProfileDraft) -> UserProfile {
    UserProfile {
        id: generate_profile_id(),
        name: draft.name.unwrap_or_default(),
        role: draft.role.unwrap_or_default(),
        department: draft.department.unwrap_or_default(),
        joined_date: draft.joined_date.unwrap_or_else(crate::time::today_iso),
        supervisor: draft.supervisor.unwrap_or_default(),
        current_goals: draft.current_goals.unwrap_or_default(),
        competencies: draft.competencies.unwrap_or_default(),
        certifications: draft.certifications.unwrap_or_default(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
