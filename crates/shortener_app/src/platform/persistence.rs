use app_logging::{app_error, app_warn};
use shortener_core::ShortenedEntry;
use shortener_store::{load_entries, save_entries, KeyValueStore, StoreError};

/// Startup load. Unreadable or malformed data is logged and the session
/// starts empty; the slot is left as is until the next successful shorten.
pub(crate) fn load_session_entries(store: &dyn KeyValueStore) -> Vec<ShortenedEntry> {
    match load_entries(store) {
        Ok(entries) => entries,
        Err(err @ StoreError::Malformed { .. }) => {
            app_warn!("Ignoring persisted entries: {}", err);
            Vec::new()
        }
        Err(err) => {
            app_warn!("Failed to read persisted entries: {}", err);
            Vec::new()
        }
    }
}

pub(crate) fn persist_session_entries(store: &dyn KeyValueStore, entries: &[ShortenedEntry]) {
    if let Err(err) = save_entries(store, entries) {
        app_error!("Failed to persist {} entries: {}", entries.len(), err);
    }
}
