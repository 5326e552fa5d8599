use std::process::{Command, Stdio};

use crate::domain::QuoteError;

pub trait SharePlatform: Send + Sync {
    /// Presents the platform's own share surface when one exists. `Ok(false)`
    /// means the platform has none and callers should take the fallback path.
    fn native_share(&self, title: &str, text: &str, url: &str) -> Result<bool, QuoteError>;

    /// Opens a URL with the platform's default handler.
    fn open_external(&self, url: &str) -> Result<(), QuoteError>;
}

/// Desktop environments have no share sheet equivalent to the web share API;
/// `native_share` always reports unsupported so callers fall back to
/// copy-plus-share-URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopShare;

#[cfg(target_os = "macos")]
const OPEN_COMMAND: &[&str] = &["open"];

#[cfg(target_os = "windows")]
const OPEN_COMMAND: &[&str] = &["cmd", "/C", "start", ""];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const OPEN_COMMAND: &[&str] = &["xdg-open"];

impl SharePlatform for DesktopShare {
    fn native_share(&self, _title: &str, _text: &str, _url: &str) -> Result<bool, QuoteError> {
        Ok(false)
    }

    fn open_external(&self, url: &str) -> Result<(), QuoteError> {
        let [program, args @ ..] = OPEN_COMMAND else {
            return Err(QuoteError::internal("open command must not be empty"));
        };

        Command::new(program)
            .args(args)
            .arg(url)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| {
                QuoteError::internal(format!("failed to open '{url}' with '{program}': {err}"))
            })?;
        Ok(())
    }
}
