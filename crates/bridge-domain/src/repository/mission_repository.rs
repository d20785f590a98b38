//! Mission Repository - Abstract storage for Missions
//!
//! This trait defines what operations the store needs.
//! How they're implemented (memory today) is not our concern here.

use crate::model::mission::{Mission, MissionId, MissionStatus};

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Mission not found
    NotFound { id: String },
    /// A mission with this id is already stored
    Duplicate { id: String },
    /// Failed to persist
    PersistenceError { message: String },
}

impl core::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RepositoryError::NotFound { id } => {
                write!(f, "Mission not found: {}", id)
            }
            RepositoryError::Duplicate { id } => {
                write!(f, "Mission already exists: {}", id)
            }
            RepositoryError::PersistenceError { message } => {
                write!(f, "Persistence error: {}", message)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Mission Repository Trait
///
/// This is a PORT in hexagonal architecture.
/// `list_all` must return missions in insertion order; `replace` keeps a
/// mission's position and `remove` never reorders the survivors.
pub trait MissionRepository {
    /// Append a new mission. Fails with `Duplicate` if the id is taken.
    fn insert(&mut self, mission: Mission) -> Result<(), RepositoryError>;

    /// Overwrite an existing mission in place. Fails with `NotFound`.
    fn replace(&mut self, mission: &Mission) -> Result<(), RepositoryError>;

    /// Remove a mission, returning it if it was stored
    fn remove(&mut self, id: &MissionId) -> Result<Option<Mission>, RepositoryError>;

    /// Find a mission by ID
    fn find_by_id(&self, id: &MissionId) -> Result<Option<Mission>, RepositoryError>;

    /// All missions, in insertion order
    fn list_all(&self) -> Result<Vec<Mission>, RepositoryError>;

    /// Find all missions with a specific status
    fn find_by_status(&self, status: MissionStatus) -> Result<Vec<Mission>, RepositoryError> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|m| m.status() == status)
            .collect())
    }

    /// Check if a mission exists
    fn exists(&self, id: &MissionId) -> Result<bool, RepositoryError> {
        Ok(self.find_by_id(id)?.is_some())
    }

    /// Count all missions
    fn count(&self) -> Result<usize, RepositoryError>;

    /// Count missions by status
    fn count_by_status(&self, status: MissionStatus) -> Result<usize, RepositoryError> {
        Ok(self.find_by_status(status)?.len())
    }
}
