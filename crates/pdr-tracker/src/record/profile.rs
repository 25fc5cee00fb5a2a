//! User profiles. Read-only context for the rest of the crate.

use serde::{Deserialize, Serialize};

use crate::record::CompetencyId;

/// Unique identifier for a profile (`usr_` prefix).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileId(pub String);

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity and organisational context of the person whose records these are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: ProfileId,
    pub name: String,
    pub role: String,
    pub department: String,
    pub joined_date: String,
    pub supervisor: String,
    pub current_goals: Vec<String>,
    pub competencies: Vec<CompetencyId>,
    pub certifications: Vec<String>,
}

impl UserProfile {
    /// "Name - Role" heading used on reports.
    pub fn heading(&self) -> String {
        match (self.name.is_empty(), self.role.is_empty()) {
            (false, false) => format!("{} - {}", self.name, self.role),
            (false, true) => self.name.clone(),
            (true, false) => self.role.clone(),
            (true, true) => String::new(),
        }
    }
}
