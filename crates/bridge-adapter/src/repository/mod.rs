//! Persistence Adapters - Repository implementations
//!
//! These implement the repository traits from bridge-domain.
//! Missions live for one session only, so memory is the only backend.

pub mod in_memory;
