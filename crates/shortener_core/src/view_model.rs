#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub error: Option<String>,
    pub entries: Vec<EntryRowView>,
    pub copied: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRowView {
    /// 1-based position in the list, as used by the front end.
    pub index: usize,
    pub original: String,
    pub shortened: String,
    pub short_code: String,
    pub copied: bool,
}

impl EntryRowView {
    pub fn copy_label(&self) -> &'static str {
        if self.copied {
            "Copied!"
        } else {
            "Copy"
        }
    }
}
