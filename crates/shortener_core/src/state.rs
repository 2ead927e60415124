use crate::view_model::{AppViewModel, EntryRowView};
use crate::{ShortenedEntry, SubmitError};

/// Identifies one copy action so that only its own timer clears the marker.
pub type CopyGeneration = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    entries: Vec<ShortenedEntry>,
    input: String,
    error: Option<SubmitError>,
    copied: Option<String>,
    copy_generation: CopyGeneration,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let entries = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| EntryRowView {
                index: index + 1,
                original: entry.original.clone(),
                shortened: entry.shortened.clone(),
                short_code: entry.short_code.clone(),
                copied: self.copied.as_deref() == Some(entry.shortened.as_str()),
            })
            .collect();

        AppViewModel {
            error: self.error.map(|err| err.to_string()),
            entries,
            copied: self.copied.clone(),
        }
    }

    pub fn entries(&self) -> &[ShortenedEntry] {
        &self.entries
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn error(&self) -> Option<SubmitError> {
        self.error
    }

    pub fn copied(&self) -> Option<&str> {
        self.copied.as_deref()
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, input: String) {
        if self.input != input {
            self.input = input;
            self.dirty = true;
        }
    }

    pub(crate) fn clear_input(&mut self) {
        self.set_input(String::new());
    }

    pub(crate) fn set_error(&mut self, error: Option<SubmitError>) {
        if self.error != error {
            self.error = error;
            self.dirty = true;
        }
    }

    pub(crate) fn contains_original(&self, original: &str) -> bool {
        self.entries.iter().any(|entry| entry.original == original)
    }

    pub(crate) fn push_entry(&mut self, entry: ShortenedEntry) {
        self.entries.push(entry);
        self.dirty = true;
    }

    pub(crate) fn replace_entries(&mut self, entries: Vec<ShortenedEntry>) {
        self.entries = entries;
        self.dirty = true;
    }

    /// Marks `shortened` as copied and returns the generation owning the marker.
    pub(crate) fn mark_copied(&mut self, shortened: String) -> CopyGeneration {
        self.copy_generation += 1;
        self.copied = Some(shortened);
        self.dirty = true;
        self.copy_generation
    }

    /// Clears the marker only if `generation` is the most recent copy.
    pub(crate) fn expire_copied(&mut self, generation: CopyGeneration) -> bool {
        if generation != self.copy_generation || self.copied.is_none() {
            return false;
        }
        self.copied = None;
        self.dirty = true;
        true
    }
}
