use super::error::{DocumentError, DocumentResult};

/// An ordered sequence of text lines addressed by 1-based position.
///
/// The document owns its lines, the clipboard copy and the undo stack.
/// Positions are never stored; they are derived from the line's index, so
/// every insertion or removal renumbers the lines after it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
    clipboard: Option<String>,
    undo_stack: Vec<String>,
    dirty: bool,
}

impl Document {
    /// Create an empty document.
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            clipboard: None,
            undo_stack: Vec::new(),
            dirty: false,
        }
    }

    /// Create a clean document holding `lines` in order.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::new()
        }
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line at `position`, if there is one.
    pub fn line(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|idx| self.lines.get(idx))
            .map(String::as_str)
    }

    /// All lines in document order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The most recently copied line.
    pub fn clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }

    /// Number of lines held on the undo stack.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Lines on the undo stack, most recently pushed first.
    pub fn undo_lines(&self) -> impl Iterator<Item = &str> {
        self.undo_stack.iter().rev().map(String::as_str)
    }

    /// Whether the line sequence changed since creation or the last
    /// [`mark_clean`](Self::mark_clean).
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the document as clean (e.g., after saving or loading).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Append `text` as the last line and return its position.
    ///
    /// `text` is stored as a single line even if it contains `\n`; such a
    /// line splits into several on the next save and load.
    pub fn insert_end(&mut self, text: impl Into<String>) -> usize {
        self.lines.push(text.into());
        self.dirty = true;
        self.lines.len()
    }

    /// Insert `text` before the line currently at `position`.
    ///
    /// `position` may be one past the last line, which appends. As with
    /// [`Document::insert_end`], an embedded `\n` is kept in one line here but
    /// splits it on the next save and load.
    ///
    /// # Errors
    /// [`DocumentError::InvalidPosition`] if `position` is 0 or greater than
    /// `line_count() + 1`.
    pub fn insert_at(&mut self, text: impl Into<String>, position: usize) -> DocumentResult<()> {
        if position == 0 || position > self.lines.len() + 1 {
            return Err(DocumentError::InvalidPosition);
        }
        self.lines.insert(position - 1, text.into());
        self.dirty = true;
        Ok(())
    }

    /// Remove the line at `position` and return its text.
    ///
    /// # Errors
    /// [`DocumentError::InvalidPosition`] for position 0,
    /// [`DocumentError::LineNotFound`] past the last line.
    pub fn delete_at(&mut self, position: usize) -> DocumentResult<String> {
        let idx = self.index_of(position)?;
        self.dirty = true;
        Ok(self.lines.remove(idx))
    }

    /// Copy the line at `position` into the clipboard, replacing whatever
    /// it held. The document itself is untouched.
    ///
    /// # Errors
    /// Same as [`delete_at`](Self::delete_at).
    pub fn copy_at(&mut self, position: usize) -> DocumentResult<&str> {
        let idx = self.index_of(position)?;
        let copy = self.lines[idx].clone();
        Ok(self.clipboard.insert(copy).as_str())
    }

    /// Append the clipboard content as a new last line and return its
    /// position. The clipboard keeps its content, so pasting repeats.
    ///
    /// # Errors
    /// [`DocumentError::EmptyClipboard`] if nothing was copied yet.
    pub fn paste(&mut self) -> DocumentResult<usize> {
        let text = self
            .clipboard
            .clone()
            .ok_or(DocumentError::EmptyClipboard)?;
        Ok(self.insert_end(text))
    }

    /// Move the line at `source` so it sits before the line found at
    /// `target` once the source has been taken out.
    ///
    /// With the source removed there are `line_count() - 1` lines left, so
    /// `target == line_count()` appends. `["a", "b", "c"]` moved from 1 to 3
    /// becomes `["b", "c", "a"]`.
    ///
    /// # Errors
    /// - [`DocumentError::InvalidPosition`] if either position is 0 or they
    ///   are equal.
    /// - [`DocumentError::SourceNotFound`] if `source` is past the last line.
    /// - [`DocumentError::TargetNotFound`] if `target` is past the append
    ///   position of the shortened sequence.
    ///
    /// The document is unchanged whenever an error is returned.
    pub fn move_line(&mut self, source: usize, target: usize) -> DocumentResult<()> {
        if source == 0 || target == 0 || source == target {
            return Err(DocumentError::InvalidPosition);
        }
        let len = self.lines.len();
        if source > len {
            return Err(DocumentError::SourceNotFound);
        }
        // Shortened sequence has len - 1 lines; its append position is len.
        if target > len {
            return Err(DocumentError::TargetNotFound);
        }
        let line = self.lines.remove(source - 1);
        self.lines.insert(target - 1, line);
        self.dirty = true;
        Ok(())
    }

    /// Count whitespace-separated words across all lines.
    pub fn word_count(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.split_whitespace().count())
            .sum()
    }

    /// Remove the first line and push it onto the undo stack.
    ///
    /// Returns the text that was moved.
    ///
    /// # Errors
    /// [`DocumentError::EmptyDocument`] if there are no lines.
    pub fn pop_front_to_undo(&mut self) -> DocumentResult<&str> {
        if self.lines.is_empty() {
            return Err(DocumentError::EmptyDocument);
        }
        let line = self.lines.remove(0);
        self.dirty = true;
        self.undo_stack.push(line);
        Ok(self.undo_stack.last().map_or("", String::as_str))
    }

    /// Discard every line on the undo stack and return how many there were.
    pub fn clear_undo(&mut self) -> usize {
        let discarded = self.undo_stack.len();
        self.undo_stack.clear();
        discarded
    }

    /// Reverse the line order in place.
    pub fn reverse(&mut self) {
        if self.lines.len() > 1 {
            self.lines.reverse();
            self.dirty = true;
        }
    }

    /// Replace every line with `lines`. Clipboard and undo stack are kept.
    pub fn replace_all<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines = lines.into_iter().map(Into::into).collect();
        self.dirty = true;
    }

    // --- Private helpers ---

    /// Convert a 1-based position of an existing line into a vector index.
    fn index_of(&self, position: usize) -> DocumentResult<usize> {
        if position == 0 {
            return Err(DocumentError::InvalidPosition);
        }
        if position > self.lines.len() {
            return Err(DocumentError::LineNotFound);
        }
        Ok(position - 1)
    }
}
