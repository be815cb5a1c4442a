//! Web app configuration
//!
//! The app ships as a static wasm bundle, so settings are baked in at build
//! time from environment variables. Anything missing falls back to a default;
//! anything malformed is logged and replaced by the default as well.

use site_ui::stores::{ImportMode, DEFAULT_TOAST_DURATION_MS};
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_IMPORT_ENDPOINT: &str = "/api/projects/import";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("SITE_IMPORT_ENDPOINT is empty")]
    EmptyImportEndpoint,
    #[error("SITE_TOAST_DURATION_MS must be a positive number of milliseconds, got {0:?}")]
    InvalidToastDuration(String),
    #[error("SITE_IMPORT_MODE must be \"immediate\" or \"staged\", got {0:?}")]
    InvalidImportMode(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Backend endpoint that turns a project URL into a project
    pub import_endpoint: String,
    /// How long toasts stay on screen
    pub toast_duration_ms: u64,
    /// Whether picking a file imports it right away or waits for Import
    pub import_mode: ImportMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            import_endpoint: DEFAULT_IMPORT_ENDPOINT.to_string(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            import_mode: ImportMode::Immediate,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        match Self::from_values(
            option_env!("SITE_IMPORT_ENDPOINT"),
            option_env!("SITE_TOAST_DURATION_MS"),
            option_env!("SITE_IMPORT_MODE"),
        ) {
            Ok(config) => {
                info!(
                    "Config loaded: endpoint={}, mode={:?}",
                    config.import_endpoint, config.import_mode
                );
                config
            }
            Err(e) => {
                warn!("Invalid build configuration, using defaults: {}", e);
                Self::default()
            }
        }
    }

    fn from_values(
        import_endpoint: Option<&str>,
        toast_duration_ms: Option<&str>,
        import_mode: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let import_endpoint = match import_endpoint {
            Some(value) if value.trim().is_empty() => {
                return Err(ConfigError::EmptyImportEndpoint)
            }
            Some(value) => value.trim().to_string(),
            None => defaults.import_endpoint,
        };

        let toast_duration_ms = match toast_duration_ms {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => ms,
                _ => return Err(ConfigError::InvalidToastDuration(value.to_string())),
            },
            None => defaults.toast_duration_ms,
        };

        let import_mode = match import_mode.map(|m| m.trim().to_ascii_lowercase()) {
            None => defaults.import_mode,
            Some(mode) => match mode.as_str() {
                "immediate" => ImportMode::Immediate,
                "staged" => ImportMode::Staged,
                _ => return Err(ConfigError::InvalidImportMode(mode)),
            },
        };

        Ok(Self {
            import_endpoint,
            toast_duration_ms,
            import_mode,
        })
    }
}
