//! Clipboard monitor that polls for changes and translates new content.
//!
//! One background worker task per running session: read, normalize, compare
//! against the last successfully processed value, translate on change,
//! publish to the UI sink, sleep. The UI side never blocks on any of it.

use crate::core::clipboard::Clipboard;
use crate::core::format::normalize;
use crate::core::sink::{Slot, UiSink};
use crate::core::translator::Translate;
use crate::shared::error::{AppError, AppResult};
use log::{error, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Immediate feedback shown in the target slot while the network call runs.
const TRANSLATING_PLACEHOLDER: &str = "Translating...";

pub struct ClipboardMonitor {
    running: Arc<AtomicBool>,
    delay: Duration,
    clipboard: Arc<dyn Clipboard>,
    translator: Arc<dyn Translate>,
    sink: Arc<dyn UiSink>,
    worker: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl ClipboardMonitor {
    /// Create a new clipboard monitor polling every `delay`.
    pub fn new(
        clipboard: Arc<dyn Clipboard>,
        translator: Arc<dyn Translate>,
        sink: Arc<dyn UiSink>,
        delay: Duration,
    ) -> Self {
        Self {
            running: Arc::new(AtomicBool::new(false)),
            delay,
            clipboard,
            translator,
            sink,
            worker: Arc::new(Mutex::new(None)),
        }
    }

    /// Check if monitoring is running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Start the background poll loop.
    ///
    /// Starting an already-running monitor is an error rather than a silent
    /// restart, so a caller can never end up with duplicate loops.
    pub fn start(&self) -> AppResult<()> {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(AppError::Validation(
                "Clipboard monitor is already running".to_string(),
            ));
        }

        let monitor = self.clone_arc();
        let handle = tokio::spawn(async move {
            info!("Clipboard monitor started");

            let mut last_seen = String::new();
            let mut consecutive_errors = 0u32;

            while monitor.running.load(Ordering::SeqCst) {
                monitor.tick(&mut last_seen, &mut consecutive_errors).await;
                tokio::time::sleep(monitor.delay).await;
            }

            info!("Clipboard monitor stopped");
        });
        *self.worker_slot() = Some(handle);

        Ok(())
    }

    /// Stop the poll loop and wait for the worker to terminate.
    ///
    /// Only flips the flag; an in-flight translation is not interrupted, so
    /// shutdown latency is bounded by one full tick. Stopping an already
    /// stopped monitor is reported, not an error.
    pub async fn stop(&self) {
        if !self.running.swap(false, Ordering::SeqCst) {
            info!("Clipboard monitor had already been stopped");
        }

        let handle = self.worker_slot().take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                warn!("Clipboard monitor worker did not shut down cleanly: {}", e);
            }
        }
    }

    /// One iteration of the poll loop: read, compare, maybe translate.
    async fn tick(&self, last_seen: &mut String, consecutive_errors: &mut u32) {
        let raw = match self.clipboard.read() {
            Ok(content) => {
                *consecutive_errors = 0;
                content
            }
            Err(e) => {
                *consecutive_errors += 1;
                // Only log errors occasionally to avoid spam
                if *consecutive_errors == 1 || *consecutive_errors % 10 == 0 {
                    warn!(
                        "Failed to read clipboard (error #{}): {}",
                        consecutive_errors, e
                    );
                }
                return;
            }
        };

        let Some(raw) = raw else {
            return;
        };

        let content = normalize(&raw);
        if content.is_empty() {
            return;
        }

        // An empty last_seen means this is the first successful read since
        // start(), which always translates.
        if content != *last_seen {
            let old = std::mem::take(last_seen);
            *last_seen = self.translate_and_publish(content, old).await;
        }
    }

    /// Publish the original, translate it, publish the result.
    ///
    /// Returns the value to remember as last seen: the new content on
    /// success, `old` on failure so the identical read on the next tick
    /// retries the translation.
    async fn translate_and_publish(&self, content: String, old: String) -> String {
        self.sink.set_content(Slot::Source, &content);
        self.sink.set_content(Slot::Target, TRANSLATING_PLACEHOLDER);

        match self.translator.translate(&content).await {
            Ok(translated) => {
                self.sink.set_content(Slot::Target, &translated);
                // Write the original back so repeated pastes of the same
                // text do not re-trigger translation.
                if let Err(e) = self.clipboard.write(&content) {
                    warn!("Clipboard write-back failed: {}", e);
                }
                content
            }
            Err(e) => {
                error!("Translation failed: {}", e);
                self.sink
                    .set_content(Slot::Target, &format!("A problem occurred: {}", e));
                old
            }
        }
    }

    fn worker_slot(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        match self.worker.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn!("Worker handle mutex poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }

    /// Get a clone for sharing across tasks.
    fn clone_arc(&self) -> Self {
        Self {
            running: Arc::clone(&self.running),
            delay: self.delay,
            clipboard: Arc::clone(&self.clipboard),
            translator: Arc::clone(&self.translator),
            sink: Arc::clone(&self.sink),
            worker: Arc::clone(&self.worker),
        }
    }
}
