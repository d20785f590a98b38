//! # Bridge Use Case Layer
//!
//! Application-specific rules over the domain ports:
//!
//! - [`MissionStore`] - create/update/delete/get/list over a repository
//! - [`MissionProvider`] - owns one store per session and hands out
//!   [`MissionHandle`]s to consumers
//! - [`seed`] - the demonstration data a fresh session starts with

pub mod error;
pub mod provider;
pub mod seed;
pub mod store;

pub use bridge_domain;

pub use error::{ContextMisuseError, StoreError};
pub use provider::{MissionContext, MissionHandle, MissionProvider};
pub use store::MissionStore;

#[cfg(test)]
pub(crate) mod testing;
