use app_logging::app_info;
use shortener_core::ShortenedEntry;

use crate::{KeyValueStore, StoreError};

/// Slot holding the JSON array of shortened entries.
pub const ENTRIES_KEY: &str = "shortenedURLs";

/// Reads the persisted entry list. An absent slot is an empty list.
pub fn load_entries(store: &dyn KeyValueStore) -> Result<Vec<ShortenedEntry>, StoreError> {
    let Some(raw) = store.get(ENTRIES_KEY)? else {
        return Ok(Vec::new());
    };
    let entries: Vec<ShortenedEntry> =
        serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
            key: ENTRIES_KEY.to_string(),
            source,
        })?;
    app_info!("Loaded {} entries from {:?}", entries.len(), ENTRIES_KEY);
    Ok(entries)
}

/// Serializes the full list and overwrites the slot.
pub fn save_entries(
    store: &dyn KeyValueStore,
    entries: &[ShortenedEntry],
) -> Result<(), StoreError> {
    let content = serde_json::to_string(entries).map_err(StoreError::Serialize)?;
    store.set(ENTRIES_KEY, &content)
}
