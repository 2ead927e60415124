use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use app_logging::{app_debug, app_info, app_warn};
use shortener_core::{CopyGeneration, Effect, Msg};
use shortener_store::KeyValueStore;

use super::event::UiEvent;
use super::persistence::persist_session_entries;

/// Writes text to a system clipboard.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Opens a URL with whatever the desktop considers the default handler.
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

pub struct ArboardClipboard {
    inner: arboard::Clipboard,
}

impl ArboardClipboard {
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new().context("failed to open system clipboard")?;
        Ok(Self { inner })
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text.to_owned())
            .context("clipboard rejected text")
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        open::that_detached(url).with_context(|| format!("failed to open {url}"))
    }
}

/// Builds the clipboard on the worker thread that owns it.
pub type ClipboardFactory = Box<dyn FnOnce() -> Result<Box<dyn ClipboardWriter>> + Send>;

pub struct EffectRunner {
    store: Arc<dyn KeyValueStore>,
    opener: Arc<dyn UrlOpener>,
    clipboard_tx: mpsc::Sender<String>,
    event_tx: mpsc::Sender<UiEvent>,
}

impl EffectRunner {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        opener: Arc<dyn UrlOpener>,
        clipboard: ClipboardFactory,
        event_tx: mpsc::Sender<UiEvent>,
    ) -> Self {
        let clipboard_tx = spawn_clipboard_worker(clipboard, event_tx.clone());
        Self {
            store,
            opener,
            clipboard_tx,
            event_tx,
        }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::PersistEntries(entries) => {
                    persist_session_entries(self.store.as_ref(), &entries);
                }
                Effect::WriteClipboard { text } => {
                    app_debug!("WriteClipboard len={}", text.len());
                    if self.clipboard_tx.send(text).is_err() {
                        app_warn!("Clipboard worker is gone; copy dropped");
                    }
                }
                Effect::OpenUrl { url } => {
                    app_info!("OpenUrl {}", url);
                    if let Err(err) = self.opener.open(&url) {
                        app_warn!("{:#}", err);
                    }
                }
                Effect::ScheduleCopiedReset { generation, after } => {
                    self.schedule_copied_reset(generation, after);
                }
            }
        }
    }

    fn schedule_copied_reset(&self, generation: CopyGeneration, after: Duration) {
        let event_tx = self.event_tx.clone();
        thread::spawn(move || {
            thread::sleep(after);
            let _ = event_tx.send(UiEvent::Msg(Msg::CopiedResetElapsed { generation }));
        });
    }
}

/// Clipboard writes run off the main loop; only successes report back.
fn spawn_clipboard_worker(
    factory: ClipboardFactory,
    event_tx: mpsc::Sender<UiEvent>,
) -> mpsc::Sender<String> {
    let (tx, rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        let mut clipboard = match factory() {
            Ok(clipboard) => Some(clipboard),
            Err(err) => {
                app_warn!("Clipboard unavailable: {:#}", err);
                None
            }
        };
        while let Ok(text) = rx.recv() {
            let Some(clipboard) = clipboard.as_mut() else {
                app_warn!("Clipboard unavailable; copy ignored");
                continue;
            };
            match clipboard.write_text(&text) {
                Ok(()) => {
                    if event_tx.send(UiEvent::Msg(Msg::ClipboardWritten(text))).is_err() {
                        break;
                    }
                }
                Err(err) => app_warn!("Copy failed: {:#}", err),
            }
        }
    });
    tx
}
