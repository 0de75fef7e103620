//! Configuration module for dispatch-reports
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings persistence
//! - Display and transport preferences

pub mod paths;
pub mod settings;

pub use paths::ReportPaths;
pub use settings::{CurrencyFormat, DisplaySettings, Settings};
