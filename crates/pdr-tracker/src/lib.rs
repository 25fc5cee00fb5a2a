//! PDR Tracker — professional development records for people, not paperwork.
//!
//! Records completed activities (training, certification, project work,
//! education), links them as evidence to tracked competencies, decides
//! when a competency is eligible for its next proficiency level, and
//! reduces the resulting record set into dashboard and report statistics.

pub mod error;
pub mod progression;
pub mod record;
pub mod report;
pub mod stats;
pub mod storage;
pub mod store;
pub mod time;
pub mod validation;

// Re-export primary types
pub use error::{PdrError, Result};
pub use record::{
    Activity, ActivityDraft, ActivityId, ActivityPatch, ActivityStatus, ActivityType, Competency,
    CompetencyDraft, CompetencyId, CompetencyPatch, CompetencyStatus, ProficiencyLevel,
    ProfileDraft, ProfileId, UserProfile,
};
pub use store::{SharedStore, Store, StoreSnapshot};

// Re-export engine types
pub use progression::{LevelRequirement, LevelUpAssessment};
pub use stats::{ActivityStats, CompetencyStats, Timeframe};
pub use validation::ActivityValidation;
