//! Shortener store: the durable key-value slot holding the entry list.
mod entries;
mod kv;
mod persist;

pub use entries::{load_entries, save_entries, ENTRIES_KEY};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use persist::{ensure_dir, AtomicFileWriter, StoreError};
