//! Data structures for progression decisions.

use serde::{Deserialize, Serialize};

use crate::record::{CompetencyId, ProficiencyLevel};

/// Minimum evidence completion percentage for any level-up.
pub const PROGRESS_THRESHOLD: u8 = 75;

/// Evidence needed to hold a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRequirement {
    pub min_evidence: usize,
    pub min_verified: usize,
}

/// Outcome of checking a competency against its next level's requirement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelUpAssessment {
    pub competency: CompetencyId,
    pub current_level: ProficiencyLevel,
    pub target_level: ProficiencyLevel,
    pub requirement: LevelRequirement,
    pub evidence_count: usize,
    pub verified_count: usize,
    pub progress: u8,
    pub meets_verified: bool,
    pub meets_evidence: bool,
    pub meets_progress: bool,
    pub is_eligible: bool,
    pub shortfalls: Vec<String>,
}
