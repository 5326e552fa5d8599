use std::io::Write;
use std::process::{Command, Stdio};

use crate::domain::QuoteError;

pub trait Clipboard: Send + Sync {
    fn set_text(&self, text: &str) -> Result<(), QuoteError>;
}

/// Writes through the platform clipboard command. On Linux the Wayland tool
/// is tried before the X11 one; the last failure is reported when none works.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandClipboard;

#[cfg(target_os = "macos")]
const CLIPBOARD_COMMANDS: &[&[&str]] = &[&["pbcopy"]];

#[cfg(target_os = "windows")]
const CLIPBOARD_COMMANDS: &[&[&str]] = &[&["clip"]];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const CLIPBOARD_COMMANDS: &[&[&str]] = &[&["wl-copy"], &["xclip", "-selection", "clipboard"]];

impl Clipboard for CommandClipboard {
    fn set_text(&self, text: &str) -> Result<(), QuoteError> {
        let mut last_error = None;
        for command in CLIPBOARD_COMMANDS {
            match write_through_command(command, text) {
                Ok(()) => return Ok(()),
                Err(error) => last_error = Some(error),
            }
        }
        Err(last_error
            .unwrap_or_else(|| QuoteError::internal("no clipboard command is configured")))
    }
}

fn write_through_command(command: &[&str], text: &str) -> Result<(), QuoteError> {
    let [program, args @ ..] = command else {
        return Err(QuoteError::internal("clipboard command must not be empty"));
    };

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|err| {
            QuoteError::internal(format!("failed to start clipboard command '{program}': {err}"))
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).map_err(|err| {
            QuoteError::internal(format!("failed to write to clipboard command '{program}': {err}"))
        })?;
    }

    let status = child.wait().map_err(|err| {
        QuoteError::internal(format!("clipboard command '{program}' did not finish: {err}"))
    })?;
    if !status.success() {
        return Err(QuoteError::internal(format!(
            "clipboard command '{program}' exited with {status}"
        )));
    }
    Ok(())
}
