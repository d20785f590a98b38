//! Mission identity allocation
//!
//! Ids must never be derived from the current collection size: after a
//! deletion that would hand out an id that is still in use.

use crate::model::mission::MissionId;

/// Allocates mission ids
///
/// Implementations must never return the same id twice over their lifetime.
pub trait MissionIdGenerator {
    fn next_id(&mut self) -> MissionId;
}
