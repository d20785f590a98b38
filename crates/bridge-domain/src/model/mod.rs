//! Domain Models - The vocabulary of the bridge
//!
//! These types represent the "Ubiquitous Language" of the console.
//! Every name here should match how we talk about the system.

pub mod agent;
pub mod mission;
pub mod view;
