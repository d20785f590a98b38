//! Bridge CLI - the composition root
//!
//! Builds the mission provider and view router from configuration and
//! drives them from the terminal.

pub mod commands;
pub mod interactive;
pub mod render;
