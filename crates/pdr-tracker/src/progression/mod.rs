//! Competency progression — evidence completion and level-up eligibility.
//!
//! The progression module provides:
//! - Evidence completion percentage per competency
//! - The fixed per-level requirement table
//! - Level-up eligibility with a per-condition breakdown
//!
//! Nothing here mutates a competency. Advancing a level is an external
//! decision applied through the store.

pub mod engine;
pub mod types;

pub use types::{LevelRequirement, LevelUpAssessment, PROGRESS_THRESHOLD};

pub use engine::{
    assess_level_up, eligible_for_level_up, meets_verified_threshold, progress, requirements_for,
    verified_evidence_count,
};
