//! User settings for dispatch-reports
//!
//! Holds the backend address, transport timeout, planner defaults and the
//! display conventions used by the column catalog.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::paths::ReportPaths;
use crate::error::ReportError;

/// Currency rendering for monetary columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    /// Symbol placed before the amount
    pub symbol: String,
    /// Grouping separator for thousands
    pub thousands_separator: String,
    /// Separator between units and cents
    pub decimal_separator: String,
    /// Number of fractional digits
    pub decimals: u8,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            thousands_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            decimals: 2,
        }
    }
}

/// Display conventions shared by the live table and the exporters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// strftime format for values carrying a time component
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,

    /// strftime format for plain dates
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Shown in place of null or missing values
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Currency rendering
    #[serde(default)]
    pub currency: CurrencyFormat,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            datetime_format: default_datetime_format(),
            date_format: default_date_format(),
            placeholder: default_placeholder(),
            currency: CurrencyFormat::default(),
        }
    }
}

/// User settings for dispatch-reports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base address of the dispatch backend
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Request timeout in seconds; 0 disables the timeout
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Driver used by driver reports when none is selected
    #[serde(default = "default_driver_id")]
    pub default_driver_id: String,

    /// How long informational notices stay visible, in seconds
    #[serde(default = "default_notice_secs")]
    pub notice_duration_secs: u64,

    /// Display conventions
    #[serde(default)]
    pub display: DisplaySettings,

    /// Where exports go when no explicit path is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_driver_id() -> String {
    "1".to_string()
}

fn default_notice_secs() -> u64 {
    3
}

fn default_datetime_format() -> String {
    "%d/%m/%Y %H:%M".to_string()
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

fn default_placeholder() -> String {
    "—".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            default_driver_id: default_driver_id(),
            notice_duration_secs: default_notice_secs(),
            display: DisplaySettings::default(),
            export_dir: None,
        }
    }
}

impl Settings {
    /// Request timeout as a Duration, `None` when disabled
    pub fn request_timeout(&self) -> Option<Duration> {
        match self.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    /// Notice lifetime as a Duration
    pub fn notice_duration(&self) -> Duration {
        Duration::from_secs(self.notice_duration_secs)
    }

    /// Directory exports are written to by default
    pub fn export_dir(&self, paths: &ReportPaths) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| paths.exports_dir())
    }

    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &ReportPaths) -> Result<Self, ReportError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ReportError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ReportError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ReportPaths) -> Result<(), ReportError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ReportError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            ReportError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
