//! Error types for PDR Tracker.
//!
//! Every failure is local to the operation that produced it: a mutation
//! either commits completely or returns one of these without touching state.

use crate::record::ProficiencyLevel;

/// Error types covering all store and storage operations.
#[derive(Debug, thiserror::Error)]
pub enum PdrError {
    #[error("Activity is missing required fields: {}", missing.join(", "))]
    Validation { missing: Vec<String> },

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Record already exists: {0}")]
    DuplicateId(String),

    #[error("Level cannot move from {from} to {to}")]
    LevelTransition {
        from: ProficiencyLevel,
        to: ProficiencyLevel,
    },

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid file format: {0}")]
    InvalidFileFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PdrError {
    /// `true` for the errors a caller can fix and resubmit.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PdrError::Validation { .. } | PdrError::LevelTransition { .. }
        )
    }
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, PdrError>;
