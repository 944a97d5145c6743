//! PlanKit Settings Crate
//!
//! Handles application configuration and settings persistence.

pub mod config;
pub mod error;

pub use config::{Config, EditingSettings, PanelSettings, ViewSettings};
pub use error::{SettingsError, SettingsResult};
