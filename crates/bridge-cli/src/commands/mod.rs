//! CLI Commands

pub mod demo;
pub mod views;

pub use demo::DemoCommand;
pub use views::ViewsCommand;
