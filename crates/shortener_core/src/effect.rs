use std::time::Duration;

use crate::{CopyGeneration, ShortenedEntry};

/// How long the copied marker stays visible after a successful copy.
pub const COPIED_RESET_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Overwrite the persisted entry list with this full list.
    PersistEntries(Vec<ShortenedEntry>),
    WriteClipboard { text: String },
    OpenUrl { url: String },
    /// Deliver `Msg::CopiedResetElapsed { generation }` after `after`.
    ScheduleCopiedReset {
        generation: CopyGeneration,
        after: Duration,
    },
}
