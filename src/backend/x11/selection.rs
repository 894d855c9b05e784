//! X11 selection access via `xclip`.
//!
//! Owning a selection means answering `SelectionRequest` events for as
//! long as the text should stay pasteable, so writes are handed to
//! `xclip`, which forks and serves the selection after we return.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use crate::backend::BackendError;

/// Targets that mean the owner can hand out plain text.
const TEXT_TARGETS: &[&str] = &["UTF8_STRING", "STRING", "TEXT", "text/plain"];

/// Which X selection buffer to operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// `CLIPBOARD`: explicit copy/paste.
    Clipboard,
    /// `PRIMARY`: the current selection, pasted with middle click.
    Primary,
}

impl Selection {
    fn xclip_name(self) -> &'static str {
        match self {
            Selection::Clipboard => "clipboard",
            Selection::Primary => "primary",
        }
    }
}

/// Invocation settings for the `xclip` binary.
#[derive(Debug, Clone)]
pub struct Xclip {
    program: String,
    display: Option<String>,
}

impl Xclip {
    pub fn new(program: impl Into<String>, display: Option<String>) -> Self {
        Self {
            program: program.into(),
            display,
        }
    }

    fn args(&self, selection: Selection, extra: &[&str]) -> Vec<String> {
        let mut args = Vec::with_capacity(4 + extra.len());
        if let Some(display) = &self.display {
            args.push("-display".to_string());
            args.push(display.clone());
        }
        args.push("-selection".to_string());
        args.push(selection.xclip_name().to_string());
        args.extend(extra.iter().map(|s| s.to_string()));
        args
    }

    fn output(&self, selection: Selection, extra: &[&str]) -> Result<Output, BackendError> {
        Command::new(&self.program)
            .args(self.args(selection, extra))
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| BackendError::Selection(format!("failed to spawn {}: {e}", self.program)))
    }

    /// Whether the selection currently has an owner offering text.
    ///
    /// xclip exits non-zero when nobody owns the selection; that is "no
    /// text", not an error.
    pub fn has_text(&self, selection: Selection) -> Result<bool, BackendError> {
        let output = self.output(selection, &["-o", "-t", "TARGETS"])?;
        if !output.status.success() {
            return Ok(false);
        }
        Ok(targets_include_text(&String::from_utf8_lossy(&output.stdout)))
    }

    pub fn read(&self, selection: Selection) -> Result<String, BackendError> {
        let output = self.output(selection, &["-o"])?;
        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(BackendError::Selection(format!(
                "{} -o exited with status {}",
                self.program, output.status
            )))
        }
    }

    pub fn write(&self, selection: Selection, text: &str) -> Result<(), BackendError> {
        let mut child = Command::new(&self.program)
            .args(self.args(selection, &[]))
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| BackendError::Selection(format!("failed to spawn {}: {e}", self.program)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).map_err(|e| {
                BackendError::Selection(format!("failed to write to {}: {e}", self.program))
            })?;
            // Dropped here so xclip sees EOF and forks into the background.
        }

        let status = child.wait().map_err(|e| {
            BackendError::Selection(format!("failed to wait for {}: {e}", self.program))
        })?;

        if status.success() {
            tracing::debug!(
                selection = selection.xclip_name(),
                bytes = text.len(),
                "selection written"
            );
            Ok(())
        } else {
            Err(BackendError::Selection(format!(
                "{} exited with status {status}",
                self.program
            )))
        }
    }
}

/// Whether an xclip `TARGETS` listing (one atom name per line) offers
/// plain text.
fn targets_include_text(listing: &str) -> bool {
    listing
        .lines()
        .map(str::trim)
        .any(|target| TEXT_TARGETS.contains(&target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_for_clipboard() {
        let x = Xclip::new("xclip", None);
        assert_eq!(
            x.args(Selection::Clipboard, &["-o"]),
            vec!["-selection", "clipboard", "-o"]
        );
    }

    #[test]
    fn args_for_primary_with_display() {
        let x = Xclip::new("xclip", Some(":1".into()));
        assert_eq!(
            x.args(Selection::Primary, &[]),
            vec!["-display", ":1", "-selection", "primary"]
        );
    }

    #[test]
    fn targets_with_utf8_string() {
        let listing = "TIMESTAMP\nTARGETS\nMULTIPLE\nUTF8_STRING\nCOMPOUND_TEXT\n";
        assert!(targets_include_text(listing));
    }

    #[test]
    fn targets_with_mime_text() {
        assert!(targets_include_text("TARGETS\ntext/plain\n"));
    }

    #[test]
    fn targets_image_only() {
        assert!(!targets_include_text("TARGETS\nimage/png\nimage/bmp\n"));
    }

    #[test]
    fn targets_empty() {
        assert!(!targets_include_text(""));
    }

    #[test]
    fn missing_program_is_selection_error() {
        let x = Xclip::new("/nonexistent/xclip", None);
        assert!(matches!(
            x.has_text(Selection::Clipboard),
            Err(BackendError::Selection(_))
        ));
        assert!(matches!(
            x.write(Selection::Primary, "text"),
            Err(BackendError::Selection(_))
        ));
    }
}
