//! Clipboard I/O boundary.
//!
//! The monitor only ever talks to the [`Clipboard`] trait; the system-backed
//! implementation lives here so platform support problems stay at one seam.

use crate::shared::error::{AppError, AppResult};
use cli_clipboard::{ClipboardContext, ClipboardProvider};

/// Text-only clipboard access.
///
/// `read` must never block indefinitely: an empty clipboard is `Ok(None)`,
/// an inaccessible one is an error the caller may treat as a skipped tick.
pub trait Clipboard: Send + Sync {
    fn read(&self) -> AppResult<Option<String>>;
    fn write(&self, text: &str) -> AppResult<()>;
    fn clear(&self) -> AppResult<()>;
}

/// OS clipboard backed by `cli-clipboard`.
pub struct SystemClipboard;

impl SystemClipboard {
    /// Probe for platform clipboard support.
    ///
    /// Failure here means the platform has no usable clipboard API and is
    /// fatal at startup; transient read/write failures later are not.
    pub fn new() -> AppResult<Self> {
        ClipboardContext::new().map_err(|e| {
            AppError::Clipboard(format!("Your system does not have clipboard support: {}", e))
        })?;
        Ok(Self)
    }
}

impl Clipboard for SystemClipboard {
    fn read(&self) -> AppResult<Option<String>> {
        match cli_clipboard::get_contents() {
            Ok(text) if text.is_empty() => Ok(None),
            Ok(text) => Ok(Some(text)),
            Err(e) => Err(AppError::Clipboard(format!(
                "Failed to read clipboard: {}",
                e
            ))),
        }
    }

    fn write(&self, text: &str) -> AppResult<()> {
        cli_clipboard::set_contents(text.to_string()).map_err(|e| {
            AppError::Clipboard(format!("Failed to write clipboard: {}", e))
        })
    }

    fn clear(&self) -> AppResult<()> {
        cli_clipboard::set_contents(String::new()).map_err(|e| {
            AppError::Clipboard(format!("Failed to clear clipboard: {}", e))
        })
    }
}
