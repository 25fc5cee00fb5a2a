//! Thread-safe store handle.
//!
//! Writers hold the write lock for the whole of a mutation and readers take
//! the read lock, so a reader always sees the state before or after a
//! mutation and never a half-applied one.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::Result;
use crate::record::{
    Activity, ActivityId, ActivityPatch, Competency, CompetencyId, CompetencyPatch,
};

use super::{Store, StoreSnapshot};

/// Cloneable handle to a [`Store`] behind a read/write lock.
///
/// Mutations return owned copies of the affected record since borrows
/// cannot outlive the lock guard.
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<RwLock<Store>>,
}

impl SharedStore {
    pub fn new(store: Store) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    // A panic inside a mutation happens before the write, so a poisoned
    // lock still guards a consistent store.
    fn read_guard(&self) -> RwLockReadGuard<'_, Store> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, Store> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` against the store under the read lock.
    pub fn read<R>(&self, f: impl FnOnce(&Store) -> R) -> R {
        f(&self.read_guard())
    }

    /// Consistent copy of both collections.
    pub fn snapshot(&self) -> StoreSnapshot {
        self.read_guard().snapshot()
    }

    pub fn activity(&self, id: &ActivityId) -> Option<Activity> {
        self.read_guard().activity(id).cloned()
    }

    pub fn competency(&self, id: &CompetencyId) -> Option<Competency> {
        self.read_guard().competency(id).cloned()
    }

    pub fn add_activity(&self, activity: Activity) -> Result<Activity> {
        self.write_guard().add_activity(activity).cloned()
    }

    pub fn update_activity(&self, id: &ActivityId, patch: &ActivityPatch) -> Result<Activity> {
        self.write_guard().update_activity(id, patch).cloned()
    }

    pub fn delete_activity(&self, id: &ActivityId) -> bool {
        self.write_guard().delete_activity(id)
    }

    pub fn add_competency(&self, competency: Competency) -> Result<Competency> {
        self.write_guard().add_competency(competency).cloned()
    }

    pub fn update_competency(
        &self,
        id: &CompetencyId,
        patch: &CompetencyPatch,
    ) -> Result<Competency> {
        self.write_guard().update_competency(id, patch).cloned()
    }

    pub fn add_evidence(&self, competency_id: &CompetencyId, activity: Activity) -> Result<Competency> {
        self.write_guard()
            .add_evidence(competency_id, activity)
            .cloned()
    }

    pub fn link_evidence(
        &self,
        competency_id: &CompetencyId,
        activity_id: &ActivityId,
    ) -> Result<Competency> {
        self.write_guard()
            .link_evidence(competency_id, activity_id)
            .cloned()
    }
}
