//! Registry Error Types
//!
//! Errors raised while walking the plugin registry and writing the report.

use thiserror::Error;

/// Result type for registry inspection
pub type InspectResult<T> = Result<T, InspectError>;

/// Error types for registry inspection
#[derive(Error, Debug)]
pub enum InspectError {
    /// The multimedia framework could not be initialised
    #[error("Failed to initialise GStreamer: {message}")]
    Init { message: String },

    /// Writing the report failed
    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),

    /// Serialising the JSON report failed
    #[error("Failed to serialise report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A plugin filter was given but nothing in the registry matched it
    #[error("No plugin matched: {}", .names.join(", "))]
    NoMatchingPlugins { names: Vec<String> },
}

impl InspectError {
    /// Create an initialisation error
    pub fn init<S: Into<String>>(message: S) -> Self {
        Self::Init { message: message.into() }
    }

    /// True when the error is a closed stdout (e.g. output piped into `head`)
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Output(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}
