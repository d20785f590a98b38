//! Mission id generators
//!
//! Both generators are independent of how many missions are stored, so
//! deleting a mission can never cause its id to be issued again.

use bridge_domain::{MissionId, MissionIdGenerator};
use uuid::Uuid;

/// `m<n>` with a strictly increasing `n`
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    /// First id issued will be `m<first>`
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl MissionIdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> MissionId {
        let id = MissionId::new(format!("m{}", self.next));
        self.next += 1;
        id
    }
}

/// `m-<uuid v4>`
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl MissionIdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> MissionId {
        MissionId::new(format!("m-{}", Uuid::new_v4()))
    }
}
