//! Core monitoring pipeline.
//!
//! The monitor owns the poll loop; everything it needs from the outside
//! world comes in through the `Clipboard`, `Translate` and `UiSink` traits,
//! so front-ends and services stay thin adapters.

pub mod clipboard;
pub mod format;
pub mod monitor;
pub mod sink;
pub mod translator;

pub use clipboard::{Clipboard, SystemClipboard};
pub use monitor::ClipboardMonitor;
pub use sink::{ChannelSink, Slot, UiEvent, UiSink};
pub use translator::{GoogleTranslator, LanguagePair, Translate};
