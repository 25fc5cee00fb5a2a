//! Store — the in-memory source of truth for activities and competencies.
//!
//! - [`Store`] — plain owned collections, mutated through `&mut self`.
//! - [`SharedStore`] — cloneable handle guarding a `Store` with a
//!   read/write lock for use across threads.
//!
//! Every mutation validates and locates everything it needs before it
//! writes, so a failed call leaves the collections exactly as they were.

pub mod shared;

pub use shared::SharedStore;

use serde::{Deserialize, Serialize};

use crate::error::{PdrError, Result};
use crate::record::{
    Activity, ActivityId, ActivityPatch, Competency, CompetencyId, CompetencyPatch,
};
use crate::validation::check_activity;

/// Owned copy of both collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub activities: Vec<Activity>,
    pub competencies: Vec<Competency>,
}

/// In-memory activity and competency collections.
#[derive(Debug, Clone, Default)]
pub struct Store {
    activities: Vec<Activity>,
    competencies: Vec<Competency>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store over existing collections (e.g. loaded from disk).
    ///
    /// Records are taken as-is; they are not re-validated.
    pub fn with_records(activities: Vec<Activity>, competencies: Vec<Competency>) -> Self {
        Self {
            activities,
            competencies,
        }
    }

    /// Create a store from a snapshot.
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        Self::with_records(snapshot.activities, snapshot.competencies)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn competencies(&self) -> &[Competency] {
        &self.competencies
    }

    pub fn activity(&self, id: &ActivityId) -> Option<&Activity> {
        self.activities.iter().find(|a| &a.id == id)
    }

    pub fn competency(&self, id: &CompetencyId) -> Option<&Competency> {
        self.competencies.iter().find(|c| &c.id == id)
    }

    /// Clone both collections.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            activities: self.activities.clone(),
            competencies: self.competencies.clone(),
        }
    }

    /// Consume the store, returning its collections.
    pub fn into_snapshot(self) -> StoreSnapshot {
        StoreSnapshot {
            activities: self.activities,
            competencies: self.competencies,
        }
    }

    // ── Activity mutations ────────────────────────────────────────────────

    /// Append a new activity after checking its required fields.
    ///
    /// # Errors
    ///
    /// `PdrError::Validation` naming every empty required field, or
    /// `PdrError::DuplicateId` if an activity with the same ID is stored.
    pub fn add_activity(&mut self, activity: Activity) -> Result<&Activity> {
        let validation = check_activity(&activity);
        if !validation.is_valid {
            log::debug!(
                "rejected activity {}: missing {:?}",
                activity.id,
                validation.missing
            );
            return Err(PdrError::Validation {
                missing: validation.missing.iter().map(|f| f.to_string()).collect(),
            });
        }
        if self.activity_index(&activity.id).is_some() {
            return Err(PdrError::DuplicateId(activity.id.0));
        }

        log::info!("added activity {} ({})", activity.id, activity.activity_type);
        self.activities.push(activity);
        Ok(&self.activities[self.activities.len() - 1])
    }

    /// Merge `patch` into the activity with `id`.
    ///
    /// Evidence snapshots of this activity held by competencies are
    /// refreshed with the merged record, so a verification recorded here
    /// shows up in competency progress.
    ///
    /// # Errors
    ///
    /// `PdrError::NotFound` if no activity has `id`.
    pub fn update_activity(&mut self, id: &ActivityId, patch: &ActivityPatch) -> Result<&Activity> {
        let idx = self
            .activity_index(id)
            .ok_or_else(|| PdrError::NotFound(format!("activity {id}")))?;

        let merged = self.activities[idx].merged(patch);

        let mut refreshed = 0usize;
        for competency in &mut self.competencies {
            for evidence in competency.evidence.iter_mut().filter(|e| &e.id == id) {
                *evidence = merged.clone();
                refreshed += 1;
            }
        }

        log::info!(
            "updated activity {id} (status {}, {refreshed} evidence snapshot(s) refreshed)",
            merged.status
        );
        self.activities[idx] = merged;
        Ok(&self.activities[idx])
    }

    /// Remove the activity with `id`. Returns whether anything was removed.
    ///
    /// Removing an absent ID is not an error. Evidence snapshots already
    /// attached to competencies are kept.
    pub fn delete_activity(&mut self, id: &ActivityId) -> bool {
        let before = self.activities.len();
        self.activities.retain(|a| &a.id != id);
        let removed = self.activities.len() != before;
        if removed {
            log::info!("deleted activity {id}");
        } else {
            log::debug!("delete of absent activity {id} ignored");
        }
        removed
    }

    // ── Competency mutations ──────────────────────────────────────────────

    /// Start tracking a new competency.
    ///
    /// # Errors
    ///
    /// `PdrError::DuplicateId` if a competency with the same ID is stored.
    pub fn add_competency(&mut self, competency: Competency) -> Result<&Competency> {
        if self.competency_index(&competency.id).is_some() {
            return Err(PdrError::DuplicateId(competency.id.0));
        }
        log::info!("added competency {} ({})", competency.id, competency.name);
        self.competencies.push(competency);
        Ok(&self.competencies[self.competencies.len() - 1])
    }

    /// Merge `patch` into the competency with `id`.
    ///
    /// # Errors
    ///
    /// `PdrError::NotFound` if no competency has `id`;
    /// `PdrError::LevelTransition` if the patch would lower the level or
    /// skip one.
    pub fn update_competency(
        &mut self,
        id: &CompetencyId,
        patch: &CompetencyPatch,
    ) -> Result<&Competency> {
        let idx = self
            .competency_index(id)
            .ok_or_else(|| PdrError::NotFound(format!("competency {id}")))?;

        let current = self.competencies[idx].level;
        if let Some(to) = patch.level {
            if !current.can_transition_to(to) {
                return Err(PdrError::LevelTransition { from: current, to });
            }
        }

        let merged = self.competencies[idx].merged(patch);
        log::info!(
            "updated competency {id} (level {} -> {}, status {})",
            current,
            merged.level,
            merged.status
        );
        self.competencies[idx] = merged;
        Ok(&self.competencies[idx])
    }

    /// Append `activity` to a competency's evidence.
    ///
    /// Progress and eligibility are not recomputed here; callers derive
    /// them on demand.
    ///
    /// # Errors
    ///
    /// `PdrError::NotFound` if no competency has `competency_id`.
    pub fn add_evidence(
        &mut self,
        competency_id: &CompetencyId,
        activity: Activity,
    ) -> Result<&Competency> {
        let idx = self
            .competency_index(competency_id)
            .ok_or_else(|| PdrError::NotFound(format!("competency {competency_id}")))?;

        log::info!("added evidence {} to competency {competency_id}", activity.id);
        self.competencies[idx].evidence.push(activity);
        Ok(&self.competencies[idx])
    }

    /// Link a stored activity to a stored competency.
    ///
    /// Records the competency on the activity, then appends a snapshot of
    /// the activity to the competency's evidence.
    ///
    /// # Errors
    ///
    /// `PdrError::NotFound` if either ID is unknown.
    pub fn link_evidence(
        &mut self,
        competency_id: &CompetencyId,
        activity_id: &ActivityId,
    ) -> Result<&Competency> {
        let c_idx = self
            .competency_index(competency_id)
            .ok_or_else(|| PdrError::NotFound(format!("competency {competency_id}")))?;
        let a_idx = self
            .activity_index(activity_id)
            .ok_or_else(|| PdrError::NotFound(format!("activity {activity_id}")))?;

        self.activities[a_idx].link_competency(competency_id);
        let snapshot = self.activities[a_idx].clone();

        // Earlier snapshots of the same activity pick up the new link too.
        for competency in &mut self.competencies {
            for evidence in competency.evidence.iter_mut().filter(|e| &e.id == activity_id) {
                *evidence = snapshot.clone();
            }
        }

        log::info!("linked activity {activity_id} as evidence for {competency_id}");
        self.competencies[c_idx].evidence.push(snapshot);
        Ok(&self.competencies[c_idx])
    }

    // ── Internal helpers ──────────────────────────────────────────────────

    fn activity_index(&self, id: &ActivityId) -> Option<usize> {
        self.activities.iter().position(|a| &a.id == id)
    }

    fn competency_index(&self, id: &CompetencyId) -> Option<usize> {
        self.competencies.iter().position(|c| &c.id == id)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
