//! Dashboard settings - persisted user preferences.
//!
//! Settings are loaded from disk at startup. A missing or unreadable file
//! yields defaults; invalid values fall back per field.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use cdesk_paging::{DEFAULT_ITEMS_PER_PAGE, DEFAULT_WINDOW_RADIUS, PageDefaults, SectionKind};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{DashboardError, Result};
use crate::logging::LogFormat;

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Dashboard settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Paging defaults shared by all sections.
    pub paging: PagingSettings,

    /// Loading and timer settings.
    pub loading: LoadingSettings,

    /// Per-section overrides keyed by section key (`users`, `invoices`, ...).
    pub sections: BTreeMap<String, SectionSettings>,

    /// Logging settings.
    pub logging: LoggingSettings,
}

impl DashboardSettings {
    /// Load settings from the default path.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "settings file unreadable, using defaults");
                Self::default()
            }
        }
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DashboardError::settings_save(format!("cannot create config directory: {e}"))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(DashboardError::settings_save)?;
        std::fs::write(path, content).map_err(DashboardError::settings_save)
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "ClinicDesk", "ClinicDesk")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }

    /// Page defaults for a section, honoring overrides.
    ///
    /// A configured size of zero is ignored with a warning.
    pub fn page_defaults(&self, section: SectionKind) -> PageDefaults {
        let size = self
            .section(section)
            .and_then(|s| s.page_size)
            .unwrap_or(self.paging.default_page_size);
        PageDefaults::new(size).unwrap_or_else(|_| {
            warn!(section = %section, size, "invalid page size in settings, using default");
            PageDefaults::default()
        })
    }

    /// Refresh interval for a section, or `None` when refreshing is off.
    pub fn refresh_interval(&self, section: SectionKind) -> Option<Duration> {
        let secs = self
            .section(section)
            .and_then(|s| s.refresh_interval_secs)
            .unwrap_or(self.loading.refresh_interval_secs);
        (secs > 0).then(|| Duration::from_secs(secs))
    }

    /// Delay before an empty section is filled with sample data.
    pub fn fallback_delay(&self) -> Duration {
        Duration::from_millis(self.loading.fallback_delay_ms)
    }

    /// How long a notice stays visible.
    pub fn notice_dismiss_after(&self) -> Duration {
        Duration::from_millis(self.loading.notice_dismiss_ms)
    }

    fn section(&self, section: SectionKind) -> Option<&SectionSettings> {
        self.sections.get(section.key())
    }
}

// =============================================================================
// PAGING
// =============================================================================

/// Paging defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagingSettings {
    /// Page size for sections without an override.
    pub default_page_size: usize,
    /// Sizes offered in the page-size selector.
    pub page_size_options: Vec<usize>,
    /// Pages shown on each side of the current page.
    pub window_radius: usize,
}

impl Default for PagingSettings {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_ITEMS_PER_PAGE,
            page_size_options: vec![5, 10, 25, 50],
            window_radius: DEFAULT_WINDOW_RADIUS,
        }
    }
}

// =============================================================================
// LOADING
// =============================================================================

/// Loading and timer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingSettings {
    /// Directory holding `<section>.json` payloads.
    pub data_dir: PathBuf,
    /// Delay before the sample-data fallback fires.
    pub fallback_delay_ms: u64,
    /// How long notices stay visible.
    pub notice_dismiss_ms: u64,
    /// Refresh period for every section (0 disables).
    pub refresh_interval_secs: u64,
}

impl Default for LoadingSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            fallback_delay_ms: 1500,
            notice_dismiss_ms: 5000,
            refresh_interval_secs: 0,
        }
    }
}

/// Per-section overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionSettings {
    pub page_size: Option<usize>,
    pub refresh_interval_secs: Option<u64>,
}

// =============================================================================
// LOGGING
// =============================================================================

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Level filter: error, warn, info, debug or trace.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
    /// Optional log file; logs go to stderr when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            log_file: None,
        }
    }
}
