//! # Bridge Domain Layer
//!
//! The heart of the bridge console - pure logic with zero external dependencies.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Mission, Task, View value objects             ││
//! │  │  repository/- Ports: storage, id allocation, clock          ││
//! │  │  service/   - ViewRouter, MissionSummary                    ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Golden Rule
//!
//! **This crate has ZERO external dependencies.**
//!
//! Timestamps and ids arrive through ports, so nothing here reads the
//! system clock or a random source.

pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use model::{
    agent::AgentId,
    mission::{
        Mission, MissionDraft, MissionError, MissionId, MissionPatch, MissionStatus, Priority,
        Progress, Task, TaskId, TaskStatus, Timeline, Timestamp,
    },
    view::{Screen, View},
};

pub use repository::{
    clock::Clock,
    id_generator::MissionIdGenerator,
    mission_repository::{MissionRepository, RepositoryError},
};

pub use service::{
    mission_summary::MissionSummary,
    view_router::{Layout, ViewRouter, ViewSelection},
};
