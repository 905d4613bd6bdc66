//! Configuration error type.

use derive_more::{Display, Error};
use tracing::instrument;

/// Error raised when a game cannot be constructed from its configuration.
///
/// Covers degenerate board sizes, unreadable or malformed config files,
/// and malformed board strings.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Configuration error: {} at {}:{}", message, file, line)]
pub struct ConfigurationError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigurationError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<toml::de::Error> for ConfigurationError {
    #[track_caller]
    fn from(err: toml::de::Error) -> Self {
        Self::new(format!("Failed to parse config: {}", err))
    }
}

impl From<std::io::Error> for ConfigurationError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("Failed to read config file: {}", err))
    }
}
