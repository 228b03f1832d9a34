//! Build-time Configuration
//!
//! Values baked in by the bundler environment (`option_env!`).

use log::LevelFilter;

/// API base URL; unset means same-origin relative paths
const API_URL_VAR: Option<&str> = option_env!("LOST_FOUND_API_URL");
/// Log level name (`error`..`trace`)
const LOG_LEVEL_VAR: Option<&str> = option_env!("LOST_FOUND_LOG");

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base: String,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_values(API_URL_VAR, LOG_LEVEL_VAR)
    }

    fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base: api_url
                .map(|url| url.trim().to_string())
                .unwrap_or(defaults.api_base),
            log_level: log_level
                .and_then(|level| level.trim().parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }
}
