//! Engine error types.
//!
//! Nothing in the engine is fatal to the application. Registry misuse is a
//! programmer error and is reported loudly; everything else is recoverable
//! and leaves the previous state in place.

use thiserror::Error;

use crate::section::SectionKind;

/// Errors raised by the paging engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PagingError {
    /// The section was never registered (or the identifier does not parse).
    #[error("Unknown section: {section}")]
    UnknownSection {
        /// Identifier that was looked up.
        section: String,
    },

    /// A page size of zero was requested.
    #[error("Invalid page size {size}: must be at least 1")]
    InvalidPageSize {
        /// Rejected size.
        size: usize,
    },

    /// The section has no renderer registered.
    #[error("No renderer registered for section: {section}")]
    NoRenderer {
        /// Section that was rendered.
        section: SectionKind,
    },

    /// A repeating task was scheduled with a zero period.
    #[error("Task '{task}' cannot repeat with a zero interval")]
    InvalidInterval {
        /// Task name.
        task: String,
    },

    /// No tokio runtime is available to run scheduled tasks.
    #[error("Cannot schedule task '{task}': no async runtime is running")]
    SchedulerUnavailable {
        /// Task name.
        task: String,
    },
}

impl PagingError {
    /// Create an unknown-section error.
    pub fn unknown_section(section: impl std::fmt::Display) -> Self {
        Self::UnknownSection {
            section: section.to_string(),
        }
    }

    /// Whether this error indicates misuse of the engine rather than bad input.
    pub fn is_programmer_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownSection { .. } | Self::NoRenderer { .. } | Self::SchedulerUnavailable { .. }
        )
    }
}

/// Errors raised while loading a section's data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LoadError {
    /// The data source could not be reached or returned a failure.
    #[error("Failed to load {section}: {reason}")]
    Unavailable {
        /// Section being loaded.
        section: SectionKind,
        /// Description of what went wrong.
        reason: String,
    },

    /// The payload was neither a collection nor an `{ items }` envelope.
    #[error("Malformed payload: {reason}")]
    Decode {
        /// Description of the decode failure.
        reason: String,
    },
}

impl LoadError {
    /// Create an unavailable error from any error source.
    pub fn unavailable(section: SectionKind, err: impl std::fmt::Display) -> Self {
        Self::Unavailable {
            section,
            reason: err.to_string(),
        }
    }

    /// Create a decode error from any error source.
    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode {
            reason: err.to_string(),
        }
    }

    /// Short message suitable for a user-facing notice.
    pub fn user_message(&self) -> String {
        match self {
            Self::Unavailable { section, .. } => {
                format!("Could not load {}. Showing sample data.", section.label())
            }
            Self::Decode { .. } => {
                "The server returned data in an unexpected format. Showing sample data."
                    .to_string()
            }
        }
    }
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, PagingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_programmer_errors() {
        assert!(PagingError::unknown_section("ghosts").is_programmer_error());
        assert!(!PagingError::InvalidPageSize { size: 0 }.is_programmer_error());
    }

    #[test]
    fn test_user_message_names_section() {
        let err = LoadError::unavailable(SectionKind::Invoices, "timeout");
        assert_eq!(err.to_string(), "Failed to load invoices: timeout");
        assert!(err.user_message().contains("Invoices"));
    }
}
