//! Mission Provider - One store per session, reachable through handles
//!
//! The composition root builds a [`MissionProvider`] and passes
//! [`MissionHandle`]s to whatever needs missions. A handle does not keep
//! the session alive: once the provider is dropped, every handle reports
//! [`ContextMisuseError`]. A default-constructed handle was never attached
//! to a provider and fails the same way.
//!
//! The seed is applied lazily, on the first access through any handle.

use std::sync::{Arc, Mutex, MutexGuard, Weak};

use bridge_domain::{Mission, MissionDraft, MissionId, MissionPatch, MissionSummary};
use tracing::debug;

use crate::error::{ContextMisuseError, Result, StoreError};
use crate::store::MissionStore;

struct Session {
    store: MissionStore,
    pending_seed: Option<Vec<Mission>>,
}

/// Owner of the session's mission store
pub struct MissionProvider {
    session: Arc<Mutex<Session>>,
}

impl MissionProvider {
    /// Wrap `store`; `seed` is loaded into it on first access
    pub fn new(store: MissionStore, seed: Vec<Mission>) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session {
                store,
                pending_seed: Some(seed),
            })),
        }
    }

    /// A handle for a consumer inside this provider's scope
    pub fn handle(&self) -> MissionHandle {
        MissionHandle {
            session: Arc::downgrade(&self.session),
        }
    }

    /// The provider can always reach its own store
    pub fn context(&self) -> MissionContext {
        MissionContext {
            session: Arc::clone(&self.session),
        }
    }
}

impl core::fmt::Debug for MissionProvider {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MissionProvider").finish_non_exhaustive()
    }
}

/// A consumer's reference to the provider's store
#[derive(Debug, Clone, Default)]
pub struct MissionHandle {
    session: Weak<Mutex<Session>>,
}

impl MissionHandle {
    /// Reach the store, failing fast if the provider is gone or was never there
    pub fn use_missions(&self) -> std::result::Result<MissionContext, ContextMisuseError> {
        self.session
            .upgrade()
            .map(|session| MissionContext { session })
            .ok_or(ContextMisuseError)
    }

    pub fn is_attached(&self) -> bool {
        self.session.strong_count() > 0
    }
}

/// The store operations, as exposed to consumers
pub struct MissionContext {
    session: Arc<Mutex<Session>>,
}

impl MissionContext {
    pub fn create_mission(&self, draft: MissionDraft) -> Result<Mission> {
        self.lock()?.store.create(draft)
    }

    pub fn update_mission(&self, id: &MissionId, patch: MissionPatch) -> Result<Option<Mission>> {
        self.lock()?.store.update(id, patch)
    }

    pub fn delete_mission(&self, id: &MissionId) -> Result<Option<Mission>> {
        self.lock()?.store.delete(id)
    }

    pub fn get_mission(&self, id: &MissionId) -> Result<Option<Mission>> {
        self.lock()?.store.get(id)
    }

    /// Snapshot of all missions in insertion order
    pub fn missions(&self) -> Result<Vec<Mission>> {
        self.lock()?.store.list()
    }

    pub fn set_active_mission(&self, id: &MissionId) -> Result<Option<Mission>> {
        self.lock()?.store.set_active_mission(id)
    }

    pub fn current_mission(&self) -> Result<Option<Mission>> {
        self.lock()?.store.current_mission()
    }

    pub fn summary(&self) -> Result<MissionSummary> {
        self.lock()?.store.summary()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Session>> {
        let mut session = self.session.lock().map_err(|_| StoreError::LockPoisoned)?;
        // Cleared only once the seed is in, so a failed seed fails every access
        if let Some(seed) = session.pending_seed.clone() {
            debug!("First access to mission store, applying seed");
            session.store.seed(seed)?;
            session.pending_seed = None;
        }
        Ok(session)
    }
}
