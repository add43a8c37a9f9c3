//! Interactive selector backends.

use std::io::{self, Write};
use std::process::{Command, Stdio};

use crate::error::{PipelineError, PipelineResult};

/// Capability interface for the interactive fuzzy picker.
///
/// `Ok(None)` means the user dismissed the picker without choosing; that is
/// a normal outcome, not an error.
pub trait Selector {
    /// Present `input` (newline-delimited display lines) and block until the
    /// picker returns a chosen line or is dismissed.
    fn select(&self, input: &str) -> PipelineResult<Option<String>>;
}

/// dmenu-style selector backed by rofi, or any launcher that accepts
/// `-dmenu -i -p <prompt>` and a list on stdin.
#[derive(Debug, Clone)]
pub struct RofiSelector {
    command: String,
    prompt: String,
}

impl Default for RofiSelector {
    fn default() -> Self {
        Self {
            command: "rofi".to_string(),
            prompt: "Symbol".to_string(),
        }
    }
}

impl RofiSelector {
    /// Selector invoking `rofi` with the standard prompt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selector invoking an alternate dmenu-compatible launcher.
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            ..Self::default()
        }
    }

    /// Override the single-line prompt label.
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// The launcher binary this selector will spawn.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Whether the launcher binary resolves on `PATH`.
    pub fn is_available(&self) -> bool {
        which::which(&self.command).is_ok()
    }
}

impl Selector for RofiSelector {
    fn select(&self, input: &str) -> PipelineResult<Option<String>> {
        let mut child = Command::new(&self.command)
            .args(["-dmenu", "-i", "-p", &self.prompt])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| PipelineError::selector_launch(&self.command, source))?;

        if let Some(mut stdin) = child.stdin.take() {
            // A picker that exits before draining the list (or that takes no
            // stdin at all) shows up as a broken pipe here and a failed
            // status below.
            if let Err(source) = stdin.write_all(input.as_bytes()) {
                if source.kind() != io::ErrorKind::BrokenPipe {
                    return Err(PipelineError::selector_io(&self.command, source));
                }
            }
        }

        let output = child
            .wait_with_output()
            .map_err(|source| PipelineError::selector_io(&self.command, source))?;

        if !output.status.success() {
            tracing::debug!(status = ?output.status.code(), "selector exited without a choice");
            return Ok(None);
        }

        let selection = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if selection.is_empty() {
            return Ok(None);
        }
        Ok(Some(selection))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    use super::*;

    fn fake_picker(dir: &Path, body: &str) -> String {
        let path = dir.join("picker");
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path.display().to_string()
    }

    #[test]
    fn test_missing_binary_is_a_launch_error() {
        let selector = RofiSelector::with_command("/nonexistent/glyphpick-picker");
        assert!(!selector.is_available());

        let err = selector.select("a\nb").unwrap_err();
        assert!(matches!(err, PipelineError::SelectorLaunch { .. }));
    }

    #[test]
    fn test_nonzero_exit_is_cancellation() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = fake_picker(dir.path(), "cat >/dev/null\nexit 1");

        let selector = RofiSelector::with_command(cmd);
        assert_eq!(selector.select("a\nb").unwrap(), None);
    }

    #[test]
    fn test_whitespace_only_output_is_cancellation() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = fake_picker(dir.path(), "cat >/dev/null\nprintf '  \\n'");

        let selector = RofiSelector::with_command(cmd);
        assert_eq!(selector.select("a\nb").unwrap(), None);
    }

    #[test]
    fn test_chosen_line_is_returned_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = fake_picker(dir.path(), "cat >/dev/null\nprintf '%s\\n' 'b → β'");

        let selector = RofiSelector::with_command(cmd);
        assert_eq!(selector.select("a\nb").unwrap(), Some("b → β".to_string()));
    }

    #[test]
    fn test_picker_that_ignores_stdin_still_cancels() {
        // `false` exits non-zero without reading the list; the broken pipe
        // must not surface as an error.
        let selector = RofiSelector::with_command("false");
        let input = "x\n".repeat(50_000);
        assert_eq!(selector.select(&input).unwrap(), None);
    }
}
