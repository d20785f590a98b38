//! Domain Services - Logic that doesn't belong to a single entity
//!
//! Services operate on multiple values and contain the "verbs" of the domain.

pub mod mission_summary;
pub mod view_router;
