use std::path::Path;

use crate::document::{Document, DocumentError};
use crate::storage::{self, StorageError};

/// Severity of a queued notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

/// A line of user-facing output produced by [`crate::app::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: ToastLevel,
    pub text: String,
}

/// The complete editor session state.
#[derive(Debug, Clone, Default)]
pub struct Model {
    pub document: Document,
    pub should_quit: bool,
    notices: Vec<Notice>,
}

impl Model {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            should_quit: false,
            notices: Vec::new(),
        }
    }

    /// Queue a notice for the next render.
    pub fn notify(&mut self, level: ToastLevel, text: impl Into<String>) {
        self.notices.push(Notice {
            level,
            text: text.into(),
        });
    }

    /// Notices queued since the last [`take_notices`](Self::take_notices).
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub(super) fn report(&mut self, err: DocumentError) {
        tracing::debug!(%err, "document operation refused");
        self.notify(ToastLevel::Error, err.to_string());
    }

    /// Replace the document with the file at `path`.
    ///
    /// On failure the current document is left exactly as it was.
    pub(super) fn load_from(&mut self, path: &Path) -> Result<usize, StorageError> {
        let lines = storage::load(path)?;
        let count = lines.len();
        self.document.replace_all(lines);
        self.document.mark_clean();
        Ok(count)
    }

    /// Write the document to `path` and return how many lines were saved.
    pub(super) fn save_to(&mut self, path: &Path) -> Result<usize, StorageError> {
        storage::save(path, &self.document)?;
        self.document.mark_clean();
        Ok(self.document.line_count())
    }
}
