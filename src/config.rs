//! Application Configuration
//!
//! Compiled defaults, overridable at build time through environment
//! variables (`APPLY_TRACK_GEOCODE_URL`, `APPLY_TRACK_LOG_LEVEL`).

use log::LevelFilter;

const DEFAULT_GEOCODE_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Local storage key for the profile blob
pub const PROFILE_KEY: &str = "apply-track.profile";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Nominatim-compatible search endpoint
    pub geocode_url: String,
    pub log_level: LevelFilter,
    pub profile_key: String,
    /// How long the "Saved" flash stays visible
    pub saved_flash_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            geocode_url: DEFAULT_GEOCODE_URL.to_string(),
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
            profile_key: PROFILE_KEY.to_string(),
            saved_flash_ms: 1500,
        }
    }
}

impl AppConfig {
    /// Defaults with build-time overrides applied
    pub fn from_env() -> Self {
        Self::with_overrides(
            option_env!("APPLY_TRACK_GEOCODE_URL"),
            option_env!("APPLY_TRACK_LOG_LEVEL"),
        )
    }

    fn with_overrides(geocode_url: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = geocode_url.map(str::trim).filter(|u| !u.is_empty()) {
            config.geocode_url = url.to_string();
        }
        if let Some(level) = log_level.and_then(|l| l.trim().parse::<LevelFilter>().ok()) {
            config.log_level = level;
        }
        config
    }
}
