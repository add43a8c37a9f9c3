//! Keystroke injector backends.

use std::process::{Command, Stdio};

use crate::error::{PipelineError, PipelineResult};

/// Capability interface for synthesizing keystrokes into the focused
/// window.
pub trait Injector {
    /// Type `text` literally into whichever window holds input focus.
    fn inject(&self, text: &str) -> PipelineResult<()>;
}

/// Injector backed by `xdotool type`, with zero inter-character delay so
/// injection stays responsive.
#[derive(Debug, Clone)]
pub struct XdotoolInjector {
    command: String,
}

impl Default for XdotoolInjector {
    fn default() -> Self {
        Self {
            command: "xdotool".to_string(),
        }
    }
}

impl XdotoolInjector {
    /// Injector invoking `xdotool`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Injector invoking an alternate typing tool that understands
    /// `type --delay 0 <text>`.
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// The injector binary this backend will spawn.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Whether the injector binary resolves on `PATH`.
    pub fn is_available(&self) -> bool {
        which::which(&self.command).is_ok()
    }
}

impl Injector for XdotoolInjector {
    fn inject(&self, text: &str) -> PipelineResult<()> {
        let status = Command::new(&self.command)
            .args(["type", "--delay", "0", text])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| PipelineError::injector_launch(&self.command, source))?;

        // No return value is consumed; a failed injection is logged and
        // otherwise dropped.
        if !status.success() {
            tracing::warn!(status = ?status.code(), "injector exited with failure");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    use super::*;

    #[test]
    fn test_missing_binary_is_a_launch_error() {
        let injector = XdotoolInjector::with_command("/nonexistent/glyphpick-typer");
        assert!(!injector.is_available());

        let err = injector.inject("α").unwrap_err();
        assert!(matches!(err, PipelineError::InjectorLaunch { .. }));
    }

    #[test]
    fn test_failed_injection_is_absorbed() {
        let injector = XdotoolInjector::with_command("false");
        assert!(injector.inject("α").is_ok());
    }

    #[test]
    fn test_text_is_passed_as_the_final_argument() {
        let dir = tempfile::tempdir().unwrap();
        let capture = dir.path().join("typed.txt");
        let script = dir.path().join("typer");
        fs::write(
            &script,
            format!("#!/bin/sh\nprintf '%s' \"$4\" > '{}'\n", capture.display()),
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let injector = XdotoolInjector::with_command(script.display().to_string());
        injector.inject("α").unwrap();

        assert_eq!(fs::read_to_string(&capture).unwrap(), "α");
    }
}
