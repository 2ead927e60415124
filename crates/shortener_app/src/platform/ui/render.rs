use shortener_core::{AppViewModel, EntryRowView};

pub const TITLE: &str = "URL Shortener";

/// Renders the whole view as terminal lines.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![TITLE.to_string()];

    if let Some(error) = view.error.as_deref().filter(|e| !e.is_empty()) {
        lines.push(format!("  ! {error}"));
    }

    if !view.entries.is_empty() {
        lines.push(String::new());
        lines.push("Shortened URLs".to_string());
        lines.extend(view.entries.iter().flat_map(format_entry));
    }

    lines
}

fn format_entry(entry: &EntryRowView) -> [String; 2] {
    [
        format!("  #{} Original: {}", entry.index, entry.original),
        format!(
            "     Shortened: {}  [{}]",
            entry.shortened,
            entry.copy_label()
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(index: usize, code: &str, copied: bool) -> EntryRowView {
        EntryRowView {
            index,
            original: format!("https://example.com/{index}"),
            shortened: format!("http://short.url/{code}"),
            short_code: code.to_string(),
            copied,
        }
    }

    #[test]
    fn empty_view_is_just_the_title() {
        assert_eq!(render(&AppViewModel::default()), vec![TITLE.to_string()]);
    }

    #[test]
    fn error_line_shown_only_when_present() {
        let view = AppViewModel {
            error: Some("Invalid URL format".to_string()),
            ..AppViewModel::default()
        };
        assert_eq!(
            render(&view),
            vec![TITLE.to_string(), "  ! Invalid URL format".to_string()]
        );
    }

    #[test]
    fn entries_show_copy_state() {
        let view = AppViewModel {
            entries: vec![row(1, "AAAAAB", false), row(2, "AAAAAC", true)],
            copied: Some("http://short.url/AAAAAC".to_string()),
            ..AppViewModel::default()
        };
        assert_eq!(
            render(&view),
            vec![
                TITLE.to_string(),
                String::new(),
                "Shortened URLs".to_string(),
                "  #1 Original: https://example.com/1".to_string(),
                "     Shortened: http://short.url/AAAAAB  [Copy]".to_string(),
                "  #2 Original: https://example.com/2".to_string(),
                "     Shortened: http://short.url/AAAAAC  [Copied!]".to_string(),
            ]
        );
    }
}
