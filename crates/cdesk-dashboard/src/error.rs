//! Dashboard error types.

use std::path::PathBuf;

use cdesk_paging::PagingError;
use thiserror::Error;

/// Errors surfaced by the dashboard glue.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DashboardError {
    /// An engine operation failed.
    #[error(transparent)]
    Paging(#[from] PagingError),

    /// The requested page size is not one of the configured options.
    #[error("Page size {size} is not offered (choose one of {options:?})")]
    UnsupportedPageSize { size: usize, options: Vec<usize> },

    /// Settings could not be written.
    #[error("Failed to save settings: {reason}")]
    SettingsSave {
        /// Description of what went wrong.
        reason: String,
    },

    /// The log file could not be opened.
    #[error("Failed to open log file: {path}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A global subscriber was already installed.
    #[error("Failed to initialize logging: {reason}")]
    LoggingInit {
        /// Description of what went wrong.
        reason: String,
    },
}

impl DashboardError {
    /// Create a settings save error from any error source.
    pub fn settings_save(err: impl std::fmt::Display) -> Self {
        Self::SettingsSave {
            reason: err.to_string(),
        }
    }

    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Paging(PagingError::InvalidPageSize { .. }) => {
                Some("Choose a page size of at least 1.")
            }
            Self::Paging(PagingError::InvalidInterval { .. }) => {
                Some("Use a refresh interval of at least one second, or 0 to disable refreshing.")
            }
            Self::Paging(_) => None,
            Self::UnsupportedPageSize { .. } => {
                Some("Pick a size from the page-size selector, or add it to page_size_options.")
            }
            Self::SettingsSave { .. } => {
                Some("Check file permissions for the application config directory.")
            }
            Self::LogFile { .. } => Some("Check that the log directory exists and is writable."),
            Self::LoggingInit { .. } => None,
        }
    }
}

/// Result type alias for dashboard operations.
pub type Result<T> = std::result::Result<T, DashboardError>;
