//! Progression engine — pure functions over a competency's evidence.

use crate::record::{Competency, ProficiencyLevel};

use super::types::*;

// ---------------------------------------------------------------------------
// Evidence counting
// ---------------------------------------------------------------------------

/// Number of evidence items whose own status is `verified`.
pub fn verified_evidence_count(competency: &Competency) -> usize {
    competency
        .evidence
        .iter()
        .filter(|e| e.is_verified())
        .count()
}

/// Verified evidence as an integer percentage of all evidence.
///
/// Returns 0 for a competency with no evidence. Rounds half-up, so 3 of 8
/// (37.5%) reports 38.
pub fn progress(competency: &Competency) -> u8 {
    let total = competency.evidence.len();
    if total == 0 {
        return 0;
    }
    let verified = verified_evidence_count(competency);
    // round(100 * v / t) with half-up rounding, in integers.
    ((200 * verified + total) / (2 * total)) as u8
}

/// `true` when verified evidence reaches `required`.
pub fn meets_verified_threshold(competency: &Competency, required: usize) -> bool {
    verified_evidence_count(competency) >= required
}

// ---------------------------------------------------------------------------
// Requirements table
// ---------------------------------------------------------------------------

/// Evidence needed to hold `level`.
pub fn requirements_for(level: ProficiencyLevel) -> LevelRequirement {
    let (min_evidence, min_verified) = match level {
        ProficiencyLevel::Beginner => (1, 1),
        ProficiencyLevel::Intermediate => (3, 2),
        ProficiencyLevel::Advanced => (5, 4),
        ProficiencyLevel::Expert => (8, 6),
    };
    LevelRequirement {
        min_evidence,
        min_verified,
    }
}

// ---------------------------------------------------------------------------
// Eligibility
// ---------------------------------------------------------------------------

/// Check a competency against the requirement of its next level.
///
/// All three must hold: verified count, total evidence count, and a current
/// progress of at least [`PROGRESS_THRESHOLD`]. An expert competency is
/// measured against the expert requirement again, since expert is its own
/// successor.
pub fn assess_level_up(competency: &Competency) -> LevelUpAssessment {
    let target_level = competency.level.next();
    let requirement = requirements_for(target_level);
    let evidence_count = competency.evidence.len();
    let verified_count = verified_evidence_count(competency);
    let progress = progress(competency);

    let mut shortfalls = Vec::new();

    let meets_verified = verified_count >= requirement.min_verified;
    if !meets_verified {
        shortfalls.push(format!(
            "Verified evidence not met: required {}, actual {}",
            requirement.min_verified, verified_count
        ));
    }

    let meets_evidence = evidence_count >= requirement.min_evidence;
    if !meets_evidence {
        shortfalls.push(format!(
            "Insufficient evidence: required {}, actual {}",
            requirement.min_evidence, evidence_count
        ));
    }

    let meets_progress = progress >= PROGRESS_THRESHOLD;
    if !meets_progress {
        shortfalls.push(format!(
            "Progress not met: required {}%, actual {}%",
            PROGRESS_THRESHOLD, progress
        ));
    }

    LevelUpAssessment {
        competency: competency.id.clone(),
        current_level: competency.level,
        target_level,
        requirement,
        evidence_count,
        verified_count,
        progress,
        meets_verified,
        meets_evidence,
        meets_progress,
        is_eligible: meets_verified && meets_evidence && meets_progress,
        shortfalls,
    }
}

/// `true` iff the competency satisfies its next level's requirement.
pub fn eligible_for_level_up(competency: &Competency) -> bool {
    assess_level_up(competency).is_eligible
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
