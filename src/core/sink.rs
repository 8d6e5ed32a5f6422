//! UI sink boundary.
//!
//! The monitor publishes everything it wants displayed through [`UiSink`];
//! front-ends implement it once per toolkit. Delivery must be marshaled to
//! the UI side, which [`ChannelSink`] does by forwarding events over a
//! channel drained on the consumer's own task.

use log::warn;
use serde::Serialize;
use tokio::sync::mpsc;

/// Named UI target that displays either the original or the translated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Source,
    Target,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum UiEvent {
    Content { slot: Slot, text: String },
    Status { text: String },
}

/// Receives display updates from the monitor's worker task.
pub trait UiSink: Send + Sync {
    fn set_content(&self, slot: Slot, text: &str);
    fn set_status(&self, text: &str);
}

/// Sink that forwards events over an unbounded channel.
///
/// Sends never block the worker; a closed receiver (UI already gone) is
/// logged and otherwise ignored.
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<UiEvent>,
}

impl ChannelSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<UiEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn send(&self, event: UiEvent) {
        if self.tx.send(event).is_err() {
            warn!("UI sink receiver dropped, discarding event");
        }
    }
}

impl UiSink for ChannelSink {
    fn set_content(&self, slot: Slot, text: &str) {
        self.send(UiEvent::Content {
            slot,
            text: text.to_string(),
        });
    }

    fn set_status(&self, text: &str) {
        self.send(UiEvent::Status {
            text: text.to_string(),
        });
    }
}
