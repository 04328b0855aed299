use std::path::PathBuf;

use crate::app::{Model, ToastLevel};

/// Every command the driver can issue against the session.
///
/// Positions are 1-based; 0 stands for any out-of-range input below 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Append a line
    Insert(String),
    /// Delete the line at a position
    Delete(usize),
    /// Copy the line at a position into the clipboard
    Copy(usize),
    /// Append the clipboard as a new line
    Paste,
    /// Write the document to a file
    Save(PathBuf),
    /// Replace the document with a file's lines
    Open(PathBuf),
    /// Report the number of words
    WordCount,
    /// List every line with its position
    Display,
    /// Insert a line before a position
    InsertAt(String, usize),
    /// Move a line to a new position
    Move { source: usize, target: usize },
    /// Pop the first line onto the undo stack
    Undo,
    /// Discard the undo stack
    ClearUndo,
    /// Reverse line order
    Reverse,
    /// End the session
    Exit,
}

impl Message {
    /// Short name for the session log.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Insert(_) => "insert",
            Self::Delete(_) => "delete",
            Self::Copy(_) => "copy",
            Self::Paste => "paste",
            Self::Save(_) => "save",
            Self::Open(_) => "open",
            Self::WordCount => "word_count",
            Self::Display => "display",
            Self::InsertAt(..) => "insert_at",
            Self::Move { .. } => "move",
            Self::Undo => "undo",
            Self::ClearUndo => "clear_undo",
            Self::Reverse => "reverse",
            Self::Exit => "exit",
        }
    }
}

/// Apply `msg` to the model and queue the notices that describe the result.
///
/// File access is not done here: `Save` and `Open` are carried out by the
/// app's side-effect step after `update` returns.
pub fn update(mut model: Model, msg: Message) -> Model {
    tracing::debug!(msg = ?msg, "update");

    match msg {
        Message::Insert(text) => {
            let position = model.document.insert_end(text);
            model.notify(ToastLevel::Info, format!("Line inserted at {position}."));
        }
        Message::Delete(position) => match model.document.delete_at(position) {
            Ok(_) => model.notify(ToastLevel::Info, format!("Deleted line {position}.")),
            Err(err) => model.report(err),
        },
        Message::Copy(position) => match model.document.copy_at(position) {
            Ok(_) => model.notify(ToastLevel::Info, format!("Copied line {position}.")),
            Err(err) => model.report(err),
        },
        Message::Paste => match model.document.paste() {
            Ok(position) => model.notify(ToastLevel::Info, format!("Pasted at line {position}.")),
            Err(err) => model.report(err),
        },
        Message::Save(_) | Message::Open(_) => {}
        Message::WordCount => {
            let count = model.document.word_count();
            model.notify(ToastLevel::Info, format!("Word Count: {count}"));
        }
        Message::Display => {
            for line in crate::ui::document_lines(&model.document) {
                model.notify(ToastLevel::Info, line);
            }
        }
        Message::InsertAt(text, position) => match model.document.insert_at(text, position) {
            Ok(()) => model.notify(ToastLevel::Info, format!("Line inserted at {position}.")),
            Err(err) => model.report(err),
        },
        Message::Move { source, target } => match model.document.move_line(source, target) {
            Ok(()) => model.notify(
                ToastLevel::Info,
                format!("Moved line {source} to {target}."),
            ),
            Err(err) => model.report(err),
        },
        Message::Undo => match model.document.pop_front_to_undo() {
            Ok(_) => model.notify(ToastLevel::Info, "Undo successful."),
            Err(err) => model.report(err),
        },
        Message::ClearUndo => {
            let discarded = model.document.clear_undo();
            tracing::debug!(discarded, "undo stack cleared");
            model.notify(ToastLevel::Info, "Undo stack cleared.");
        }
        Message::Reverse => {
            model.document.reverse();
            model.notify(ToastLevel::Info, "Lines reversed.");
        }
        Message::Exit => {
            if model.document.is_dirty() {
                model.notify(ToastLevel::Warning, "Unsaved changes discarded.");
            }
            model.should_quit = true;
        }
    }

    model
}
