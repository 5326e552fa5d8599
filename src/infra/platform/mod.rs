mod clipboard;
mod share;

pub use clipboard::{Clipboard, CommandClipboard};
pub use share::{DesktopShare, SharePlatform};
