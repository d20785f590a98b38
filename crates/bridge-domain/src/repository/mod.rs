//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define WHAT the store needs from the outside world,
//! but NOT how it's actually provided. That's the adapter's job.
//!
//! ```text
//! Domain Layer            │  Adapter Layer
//! ────────────────────────┼────────────────────────────
//! trait MissionRepository │  InMemoryMissionRepository
//! trait MissionIdGenerator│  SequentialIdGenerator / UuidIdGenerator
//! trait Clock             │  SystemClock
//! ```

pub mod clock;
pub mod id_generator;
pub mod mission_repository;
