//! In-Memory Repository Implementation
//!
//! Missions are kept in a `Vec` so that listing returns them in the order
//! they were inserted. Clones share the same storage.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use bridge_domain::model::mission::{Mission, MissionId};
use bridge_domain::repository::mission_repository::{MissionRepository, RepositoryError};
use tracing::debug;

/// In-memory Mission Repository
///
/// Thread-safe implementation using RwLock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMissionRepository {
    missions: Arc<RwLock<Vec<Mission>>>,
}

impl InMemoryMissionRepository {
    pub fn new() -> Self {
        Self {
            missions: Arc::new(RwLock::new(Vec::new())),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Mission>>, RepositoryError> {
        self.missions
            .read()
            .map_err(|_| RepositoryError::PersistenceError {
                message: "Failed to acquire read lock".to_string(),
            })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Mission>>, RepositoryError> {
        self.missions
            .write()
            .map_err(|_| RepositoryError::PersistenceError {
                message: "Failed to acquire write lock".to_string(),
            })
    }
}

impl MissionRepository for InMemoryMissionRepository {
    fn insert(&mut self, mission: Mission) -> Result<(), RepositoryError> {
        let mut missions = self.write()?;
        if missions.iter().any(|m| m.id() == mission.id()) {
            return Err(RepositoryError::Duplicate {
                id: mission.id().to_string(),
            });
        }
        debug!(mission_id = %mission.id(), "Inserting mission");
        missions.push(mission);
        Ok(())
    }

    fn replace(&mut self, mission: &Mission) -> Result<(), RepositoryError> {
        let mut missions = self.write()?;
        let slot = missions
            .iter_mut()
            .find(|m| m.id() == mission.id())
            .ok_or_else(|| RepositoryError::NotFound {
                id: mission.id().to_string(),
            })?;
        *slot = mission.clone();
        Ok(())
    }

    fn remove(&mut self, id: &MissionId) -> Result<Option<Mission>, RepositoryError> {
        let mut missions = self.write()?;
        let removed = missions
            .iter()
            .position(|m| m.id() == id)
            .map(|pos| missions.remove(pos));
        Ok(removed)
    }

    fn find_by_id(&self, id: &MissionId) -> Result<Option<Mission>, RepositoryError> {
        let missions = self.read()?;
        Ok(missions.iter().find(|m| m.id() == id).cloned())
    }

    fn list_all(&self) -> Result<Vec<Mission>, RepositoryError> {
        Ok(self.read()?.clone())
    }

    fn exists(&self, id: &MissionId) -> Result<bool, RepositoryError> {
        Ok(self.read()?.iter().any(|m| m.id() == id))
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.read()?.len())
    }
}
