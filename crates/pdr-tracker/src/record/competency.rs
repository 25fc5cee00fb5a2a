//! Competency areas — tracked skills with an ordered proficiency level.

use serde::{Deserialize, Serialize};

use crate::record::Activity;

// ---------------------------------------------------------------------------
// Identifier
// ---------------------------------------------------------------------------

/// Unique identifier for a competency area (`cmp_` prefix).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CompetencyId(pub String);

impl std::fmt::Display for CompetencyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Proficiency level
// ---------------------------------------------------------------------------

/// Ordered proficiency ladder. Levels only move up, one step at a time.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ProficiencyLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ProficiencyLevel {
    pub const ALL: [ProficiencyLevel; 4] = [
        ProficiencyLevel::Beginner,
        ProficiencyLevel::Intermediate,
        ProficiencyLevel::Advanced,
        ProficiencyLevel::Expert,
    ];

    /// The successor level. `Expert` is a fixed point.
    pub fn next(&self) -> ProficiencyLevel {
        match self {
            Self::Beginner => Self::Intermediate,
            Self::Intermediate => Self::Advanced,
            Self::Advanced => Self::Expert,
            Self::Expert => Self::Expert,
        }
    }

    /// `true` if `to` is this level or its direct successor.
    pub fn can_transition_to(&self, to: ProficiencyLevel) -> bool {
        to == *self || to == self.next()
    }

    /// Position on the ladder as a display gauge (25, 50, 75, 100).
    pub fn ladder_percent(&self) -> u8 {
        match self {
            Self::Beginner => 25,
            Self::Intermediate => 50,
            Self::Advanced => 75,
            Self::Expert => 100,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_tag().eq_ignore_ascii_case(tag.trim()))
    }
}

impl std::fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

// ---------------------------------------------------------------------------
// Competency status
// ---------------------------------------------------------------------------

/// Whether the current level's requirement is satisfied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetencyStatus {
    #[default]
    InProgress,
    Verified,
}

impl CompetencyStatus {
    pub const ALL: [CompetencyStatus; 2] = [CompetencyStatus::InProgress, CompetencyStatus::Verified];

    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Verified => "verified",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_tag().eq_ignore_ascii_case(tag.trim()))
    }
}

impl std::fmt::Display for CompetencyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

// ---------------------------------------------------------------------------
// Competency
// ---------------------------------------------------------------------------

/// A tracked skill area.
///
/// `evidence` holds snapshots of the activities linked to this competency,
/// in the order they were linked. It only grows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competency {
    pub id: CompetencyId,
    pub name: String,
    pub description: String,
    pub level: ProficiencyLevel,
    pub status: CompetencyStatus,
    pub evidence: Vec<Activity>,
}

impl Competency {
    /// Return a copy with every field set in `patch` overwritten.
    ///
    /// Level ordering is not checked here; the store enforces it.
    pub fn merged(&self, patch: &CompetencyPatch) -> Competency {
        let mut next = self.clone();
        if let Some(ref v) = patch.name {
            next.name = v.clone();
        }
        if let Some(ref v) = patch.description {
            next.description = v.clone();
        }
        if let Some(l) = patch.level {
            next.level = l;
        }
        if let Some(s) = patch.status {
            next.status = s;
        }
        next
    }
}

/// Sparse update for a [`Competency`]. Evidence is append-only and is
/// changed through the store's evidence operations instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompetencyPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub level: Option<ProficiencyLevel>,
    pub status: Option<CompetencyStatus>,
}

impl CompetencyPatch {
    /// Patch moving to `level` and resetting status to in-progress, the
    /// usual shape of an approved level-up.
    pub fn level_up(level: ProficiencyLevel) -> Self {
        Self {
            level: Some(level),
            status: Some(CompetencyStatus::InProgress),
            ..Self::default()
        }
    }
}
