//! Error types for the selection pipeline.
//!
//! Only launch faults live here: a selector or injector binary that cannot
//! be spawned or communicated with indicates a broken environment the user
//! has to fix. Everything the user can cause interactively (dismissing the
//! picker, returning a malformed line) is not an error and is absorbed by
//! the pipeline.

use std::io;

/// Result type alias for pipeline operations.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;

/// Errors that can occur while driving the external tools.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The selector binary could not be spawned.
    #[error("Failed to launch selector '{command}': {source}")]
    SelectorLaunch {
        command: String,
        #[source]
        source: io::Error,
    },

    /// Talking to a running selector failed (stdin write or wait).
    #[error("Selector '{command}' I/O failed: {source}")]
    SelectorIo {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The injector binary could not be spawned.
    #[error("Failed to launch injector '{command}': {source}")]
    InjectorLaunch {
        command: String,
        #[source]
        source: io::Error,
    },
}

impl PipelineError {
    /// Creates a new `SelectorLaunch` error.
    pub fn selector_launch(command: impl Into<String>, source: io::Error) -> Self {
        Self::SelectorLaunch {
            command: command.into(),
            source,
        }
    }

    /// Creates a new `SelectorIo` error.
    pub fn selector_io(command: impl Into<String>, source: io::Error) -> Self {
        Self::SelectorIo {
            command: command.into(),
            source,
        }
    }

    /// Creates a new `InjectorLaunch` error.
    pub fn injector_launch(command: impl Into<String>, source: io::Error) -> Self {
        Self::InjectorLaunch {
            command: command.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_the_command() {
        let err = PipelineError::selector_launch(
            "rofi",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().contains("rofi"));

        let err = PipelineError::injector_launch(
            "xdotool",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().contains("xdotool"));
    }
}
