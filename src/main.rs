use lingoclip::core::{
    ChannelSink, Clipboard, ClipboardMonitor, GoogleTranslator, LanguagePair, Slot,
    SystemClipboard, UiEvent, UiSink,
};
use lingoclip::shared::error::{AppError, AppResult};
use lingoclip::shared::settings::AppSettings;
use log::{error, info, warn};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!(
        "Welcome to {} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "Running on: {} {}",
        std::env::consts::OS,
        std::env::consts::ARCH
    );

    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    // A platform without clipboard support is the one condition we cannot
    // fall back from
    let clipboard = Arc::new(SystemClipboard::new()?);
    if let Err(e) = clipboard.clear() {
        warn!("Could not clear the clipboard at startup: {}", e);
    }

    let settings = AppSettings::load().await.unwrap_or_else(|e| {
        warn!("Failed to load settings, using defaults: {}", e);
        AppSettings::default()
    });

    let pair = LanguagePair::new(&settings.language.source, &settings.language.target)
        .unwrap_or_else(|e| {
            warn!("Invalid language configuration ({}), using en -> es", e);
            LanguagePair::new("en", "es").expect("default language pair is valid")
        });
    info!(
        "Translating {} -> {}, polling every {:?}",
        pair.source(),
        pair.target(),
        settings.delay()
    );

    let translator = Arc::new(GoogleTranslator::new(pair));
    let (sink, rx) = ChannelSink::new();
    let sink = Arc::new(sink);
    let ui = spawn_console_ui(rx);

    let monitor = ClipboardMonitor::new(
        Arc::clone(&clipboard) as Arc<dyn Clipboard>,
        translator,
        Arc::clone(&sink) as Arc<dyn UiSink>,
        settings.delay(),
    );

    sink.set_status("Connecting...");
    monitor.start()?;
    sink.set_status("Connected");
    println!("Copy some text to translate it. Press Ctrl+C to exit.");

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| AppError::Io(format!("Failed to wait for shutdown signal: {}", e)))?;
    println!();

    sink.set_status("Disconnecting...");
    monitor.stop().await;
    sink.set_status("Disconnected");

    if let Err(e) = clipboard.clear() {
        warn!("Could not clear the clipboard at shutdown: {}", e);
    }

    // Closing the sender ends the console task
    drop(monitor);
    drop(sink);
    if let Err(e) = ui.await {
        warn!("Console task did not shut down cleanly: {}", e);
    }

    Ok(())
}

/// The one concrete front-end: renders sink events to stdout on its own task.
fn spawn_console_ui(mut rx: UnboundedReceiver<UiEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            match event {
                UiEvent::Content {
                    slot: Slot::Source,
                    text,
                } => {
                    println!("--- original ---");
                    println!("{}", text);
                }
                UiEvent::Content {
                    slot: Slot::Target,
                    text,
                } => {
                    println!("--- translated ---");
                    println!("{}", text);
                }
                UiEvent::Status { text } => println!("State: {}", text),
            }
        }
    })
}
