use crate::ShortenedEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input.
    InputChanged(String),
    /// User asked to shorten the current input. The front end stamps the
    /// wall-clock time so the update stays pure.
    ShortenClicked { now_millis: i64 },
    /// User asked to copy a shortened URL to the clipboard.
    CopyClicked(String),
    /// The clipboard accepted the text.
    ClipboardWritten(String),
    /// An auto-clear timer for the copied marker fired.
    CopiedResetElapsed { generation: crate::CopyGeneration },
    /// User asked to open an original URL.
    FollowClicked(String),
    /// Entries read from durable storage at startup.
    EntriesLoaded(Vec<ShortenedEntry>),
}
