//! # Bridge Adapter Layer
//!
//! Concrete implementations of the domain ports plus the edges of the system.
//!
//! ## Structure
//!
//! - `repository/` - Storage implementations
//! - `clock` / `identity` - Time and id sources
//! - `dto` - serde wire shapes for missions
//! - `config` - Console configuration files

pub mod clock;
pub mod config;
pub mod dto;
pub mod error;
pub mod identity;
pub mod repository;

pub use clock::SystemClock;
pub use config::{BridgeConfig, IdStrategy};
pub use error::{AdapterError, Result};
pub use identity::{SequentialIdGenerator, UuidIdGenerator};
pub use repository::in_memory::InMemoryMissionRepository;
