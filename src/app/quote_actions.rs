use crate::domain::{QuoteError, QuoteSuccess};
use crate::infra::platform::{Clipboard, SharePlatform};

use super::QuoteRequestController;

pub const SHARE_TITLE: &str = "Inspirational Quote";

const TWEET_INTENT_URL: &str = "https://twitter.com/intent/tweet";

/// How a share request was ultimately delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareDisposition {
    Native,
    CopiedWithShareUrl,
}

pub fn format_share_text(success: &QuoteSuccess) -> String {
    format!("\"{}\" - {}", success.quote, success.author)
}

pub fn build_share_url(text: &str, page_url: &str) -> String {
    format!(
        "{TWEET_INTENT_URL}?text={}&url={}",
        urlencoding::encode(text),
        urlencoding::encode(page_url)
    )
}

/// Copies the formatted current quote to the clipboard. A strict no-op
/// (`Ok(false)`, no clipboard write) when no success result is present.
pub fn copy_current_quote(
    controller: &QuoteRequestController,
    clipboard: &dyn Clipboard,
) -> Result<bool, QuoteError> {
    let Some(success) = controller.current_success() else {
        return Ok(false);
    };

    clipboard.set_text(&format_share_text(success))?;
    Ok(true)
}

/// Shares the current quote through the platform's native surface when one
/// exists; otherwise copies the text and opens the social share URL. A strict
/// no-op (`Ok(None)`) when no success result is present.
pub fn share_current_quote(
    controller: &QuoteRequestController,
    platform: &dyn SharePlatform,
    clipboard: &dyn Clipboard,
    page_url: &str,
) -> Result<Option<ShareDisposition>, QuoteError> {
    let Some(success) = controller.current_success() else {
        return Ok(None);
    };

    let text = format_share_text(success);
    if platform.native_share(SHARE_TITLE, &text, page_url)? {
        return Ok(Some(ShareDisposition::Native));
    }

    clipboard.set_text(&text)?;
    platform.open_external(&build_share_url(&text, page_url))?;
    Ok(Some(ShareDisposition::CopiedWithShareUrl))
}
