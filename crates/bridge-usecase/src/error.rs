//! Error types for the use case layer

use bridge_domain::RepositoryError;
use thiserror::Error;

/// A consumer reached for the mission store outside of a live provider
///
/// This is fail-fast: the caller has been wired up wrong and there is no
/// store to fall back on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("mission store used outside of a MissionProvider")]
pub struct ContextMisuseError;

/// Errors surfaced by store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    ContextMisuse(#[from] ContextMisuseError),

    #[error("mission store lock poisoned")]
    LockPoisoned,
}

pub type Result<T> = std::result::Result<T, StoreError>;
