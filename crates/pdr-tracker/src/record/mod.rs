//! Record model — activities, competencies, and user profiles.
//!
//! The record module provides:
//! - Activity records with type, status, documentation, and linked competencies
//! - Competency areas with an ordered proficiency level and accumulated evidence
//! - User profiles (read-only context for reports)
//! - Patch types that merge only the fields a caller explicitly sets
//! - A record factory filling documented defaults and fresh identifiers

pub mod activity;
pub mod competency;
pub mod factory;
pub mod profile;

pub use activity::{Activity, ActivityId, ActivityPatch, ActivityStatus, ActivityType};
pub use competency::{Competency, CompetencyId, CompetencyPatch, CompetencyStatus, ProficiencyLevel};
pub use profile::{ProfileId, UserProfile};

pub use factory::{
    create_activity, create_competency, create_profile, ActivityDraft, CompetencyDraft,
    ProfileDraft,
};
