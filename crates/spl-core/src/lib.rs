// ABOUTME: Shared types and configuration for split-pane.
// ABOUTME: Defines colors, orientation, and config file handling.

pub mod color;
pub mod config;
pub mod orientation;

pub use color::Color;
pub use config::{Config, ConfigError};
pub use orientation::Orientation;
