//! Plain-text rendering for the menu driver.

use std::io::{self, Write};

use crate::app::{Notice, ToastLevel};
use crate::document::Document;

/// Numbered menu printed before each prompt. Choice numbers map to
/// [`crate::app::Message`] variants in `app::input`.
pub const MENU: &str = "\
1. Insert Line
2. Delete Line
3. Copy Line
4. Paste Line
5. Save to File
6. Open from File
7. Word Count
8. Display Text
9. Insert Line at Position
10. Move Line
11. Undo
12. Clear Undo Stack
13. Reverse Lines
14. Exit";

/// Write the menu preceded by a blank line.
///
/// # Errors
/// Propagates write failures.
pub fn write_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{MENU}")
}

/// One numbered line per document line, or a placeholder when empty.
pub fn document_lines(document: &Document) -> Vec<String> {
    if document.is_empty() {
        return vec!["(empty document)".to_string()];
    }
    document
        .lines()
        .iter()
        .enumerate()
        .map(|(idx, line)| format!("{}: {line}", idx + 1))
        .collect()
}

pub fn render_notice(notice: &Notice) -> String {
    match notice.level {
        ToastLevel::Info => notice.text.clone(),
        ToastLevel::Warning => format!("Warning: {}", notice.text),
        ToastLevel::Error => format!("Error: {}", notice.text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lines_are_numbered_from_one() {
        let doc = Document::from_lines(["alpha", "beta"]);
        assert_eq!(document_lines(&doc), ["1: alpha", "2: beta"]);
    }

    #[test]
    fn test_document_lines_for_empty_document() {
        assert_eq!(document_lines(&Document::new()), ["(empty document)"]);
    }

    #[test]
    fn test_render_notice_prefixes_by_level() {
        let notice = |level, text: &str| Notice {
            level,
            text: text.to_string(),
        };
        assert_eq!(render_notice(&notice(ToastLevel::Info, "ok")), "ok");
        assert_eq!(
            render_notice(&notice(ToastLevel::Warning, "careful")),
            "Warning: careful"
        );
        assert_eq!(
            render_notice(&notice(ToastLevel::Error, "Line not found.")),
            "Error: Line not found."
        );
    }

    #[test]
    fn test_menu_lists_every_choice() {
        assert!(MENU.starts_with("1. Insert Line"));
        assert!(MENU.ends_with("14. Exit"));
        assert_eq!(MENU.lines().count(), 14);
    }
}
