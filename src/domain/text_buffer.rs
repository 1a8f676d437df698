use serde::{Deserialize, Serialize};

/// Number of snapshots kept for undo.
pub const MAX_HISTORY: usize = 50;

/// Cursor position in a buffer. Both coordinates are 0-based and the column
/// counts Unicode scalar values, not bytes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

impl CursorPosition {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Selection between a fixed anchor and the active end (where the cursor is).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSelection {
    pub anchor: CursorPosition,
    pub active: CursorPosition,
}

impl TextSelection {
    pub fn new(anchor: CursorPosition, active: CursorPosition) -> Self {
        Self { anchor, active }
    }

    /// Returns (start, end) in document order.
    pub fn ordered(&self) -> (CursorPosition, CursorPosition) {
        if self.anchor <= self.active {
            (self.anchor, self.active)
        } else {
            (self.active, self.anchor)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }
}

/// Editable state exchanged with a text area engine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BufferSnapshot {
    pub lines: Vec<String>,
    pub cursor: CursorPosition,
    pub selection: Option<TextSelection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct HistoryEntry {
    lines: Vec<String>,
    cursor: CursorPosition,
}

/// Multi-line text with a cursor, an optional selection and an undo history.
///
/// The buffer always holds at least one (possibly empty) line and the cursor
/// always points inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
    cursor: CursorPosition,
    selection: Option<TextSelection>,
    history: Vec<HistoryEntry>,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            cursor: CursorPosition::default(),
            selection: None,
            history: Vec::new(),
        }
    }
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a buffer holding `text` with the cursor at its end.
    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self {
            lines: split_lines(text),
            ..Default::default()
        };
        buffer.cursor = buffer.end_position();
        buffer
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn cursor(&self) -> CursorPosition {
        self.cursor
    }

    pub fn selection(&self) -> Option<TextSelection> {
        self.selection
    }

    /// Whole content with lines joined by `\n` and no trailing newline.
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    /// Content stripped of surrounding whitespace; this is what gets
    /// translated or spoken.
    pub fn trimmed_text(&self) -> String {
        self.content().trim().to_string()
    }

    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|line| line.trim().is_empty())
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line_len(&self, line: usize) -> usize {
        self.lines.get(line).map_or(0, |l| l.chars().count())
    }

    pub fn end_position(&self) -> CursorPosition {
        let line = self.lines.len().saturating_sub(1);
        CursorPosition::new(line, self.line_len(line))
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn snapshot(&self) -> BufferSnapshot {
        BufferSnapshot {
            lines: self.lines.clone(),
            cursor: self.cursor,
            selection: self.selection,
        }
    }

    /// Moves the cursor, clamping it into the buffer.
    pub fn set_cursor(&mut self, position: CursorPosition) {
        self.cursor = self.clamp(position);
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Selects from `anchor` to `active` and places the cursor on `active`.
    pub fn select(&mut self, anchor: CursorPosition, active: CursorPosition) {
        let anchor = self.clamp(anchor);
        let active = self.clamp(active);
        self.selection = Some(TextSelection::new(anchor, active));
        self.cursor = active;
    }

    /// Text covered by a non-empty selection.
    pub fn selected_text(&self) -> Option<String> {
        let selection = self.selection.filter(|s| !s.is_empty())?;
        let (start, end) = selection.ordered();
        Some(self.text_in_range(start, end))
    }

    /// Inserts `text` at the cursor, replacing a non-empty selection first.
    /// Carriage returns are normalized to `\n`.
    pub fn insert_str(&mut self, text: &str) {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        let selected = self.selection.take().filter(|s| !s.is_empty());
        if text.is_empty() && selected.is_none() {
            return;
        }
        self.checkpoint();
        if let Some(selection) = selected {
            let (start, end) = selection.ordered();
            self.remove_range(start, end);
            self.cursor = start;
        }
        self.cursor = self.insert_at(self.cursor, &text);
    }

    /// Deletes `[start, end)` (positions are ordered and clamped) and leaves
    /// the cursor at the start of the removed range.
    pub fn delete_range(&mut self, start: CursorPosition, end: CursorPosition) {
        let (start, end) = {
            let (a, b) = (self.clamp(start), self.clamp(end));
            if a <= b {
                (a, b)
            } else {
                (b, a)
            }
        };
        self.selection = None;
        if start == end {
            self.cursor = start;
            return;
        }
        self.checkpoint();
        self.remove_range(start, end);
        self.cursor = start;
    }

    /// Deletes the selection if one is active and non-empty.
    pub fn delete_selection(&mut self) -> bool {
        match self.selection.filter(|s| !s.is_empty()) {
            Some(selection) => {
                let (start, end) = selection.ordered();
                self.delete_range(start, end);
                true
            }
            None => false,
        }
    }

    /// Replaces the whole content. The cursor moves to the end and the undo
    /// history is dropped since it no longer describes this text.
    pub fn replace_all(&mut self, text: &str) {
        self.lines = split_lines(text);
        self.selection = None;
        self.history.clear();
        self.cursor = self.end_position();
    }

    /// Adopts the result of an external edit, recording an undo step when the
    /// text changed.
    pub fn apply_snapshot(&mut self, snapshot: BufferSnapshot) {
        let BufferSnapshot {
            mut lines,
            cursor,
            selection,
        } = snapshot;
        if lines.is_empty() {
            lines.push(String::new());
        }
        if lines != self.lines {
            self.checkpoint();
            self.lines = lines;
        }
        self.cursor = self.clamp(cursor);
        self.selection = selection
            .map(|s| TextSelection::new(self.clamp(s.anchor), self.clamp(s.active)))
            .filter(|s| !s.is_empty());
    }

    /// Restores the text and cursor saved before the latest mutation.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(entry) => {
                self.lines = entry.lines;
                self.selection = None;
                self.cursor = self.clamp(entry.cursor);
                true
            }
            None => false,
        }
    }

    fn checkpoint(&mut self) {
        self.history.push(HistoryEntry {
            lines: self.lines.clone(),
            cursor: self.cursor,
        });
        if self.history.len() > MAX_HISTORY {
            self.history.remove(0);
        }
    }

    fn clamp(&self, position: CursorPosition) -> CursorPosition {
        let line = position.line.min(self.lines.len().saturating_sub(1));
        CursorPosition::new(line, position.column.min(self.line_len(line)))
    }

    fn text_in_range(&self, start: CursorPosition, end: CursorPosition) -> String {
        if start.line == end.line {
            let line = &self.lines[start.line];
            return line[byte_index(line, start.column)..byte_index(line, end.column)].to_string();
        }
        let first = &self.lines[start.line];
        let last = &self.lines[end.line];
        let mut text = first[byte_index(first, start.column)..].to_string();
        for line in &self.lines[start.line + 1..end.line] {
            text.push('\n');
            text.push_str(line);
        }
        text.push('\n');
        text.push_str(&last[..byte_index(last, end.column)]);
        text
    }

    fn remove_range(&mut self, start: CursorPosition, end: CursorPosition) {
        let start_byte = byte_index(&self.lines[start.line], start.column);
        let end_byte = byte_index(&self.lines[end.line], end.column);
        if start.line == end.line {
            self.lines[start.line].replace_range(start_byte..end_byte, "");
            return;
        }
        let tail = self.lines[end.line][end_byte..].to_string();
        self.lines[start.line].truncate(start_byte);
        self.lines[start.line].push_str(&tail);
        self.lines.drain(start.line + 1..=end.line);
    }

    fn insert_at(&mut self, position: CursorPosition, text: &str) -> CursorPosition {
        let byte = byte_index(&self.lines[position.line], position.column);
        let tail = self.lines[position.line].split_off(byte);
        let mut pieces = text.split('\n');
        self.lines[position.line].push_str(pieces.next().unwrap_or_default());
        let mut line = position.line;
        for piece in pieces {
            line += 1;
            self.lines.insert(line, piece.to_string());
        }
        let column = self.lines[line].chars().count();
        self.lines[line].push_str(&tail);
        CursorPosition::new(line, column)
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .split('\n')
        .map(str::to_string)
        .collect()
}

/// Byte offset of the `column`-th character, or the line length past the end.
fn byte_index(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map_or(line.len(), |(index, _)| index)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn pos(line: usize, column: usize) -> CursorPosition {
        CursorPosition::new(line, column)
    }

    #[test]
    fn test_empty_buffer_has_one_line() {
        let buffer = TextBuffer::new();
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.content(), "");
        assert_eq!(buffer.cursor(), pos(0, 0));
        assert!(buffer.is_blank());
    }

    #[test]
    fn test_from_text_places_cursor_at_end() {
        let buffer = TextBuffer::from_text("ab\ncdé");
        assert_eq!(buffer.lines(), &["ab".to_string(), "cdé".to_string()]);
        assert_eq!(buffer.cursor(), pos(1, 3));
    }

    #[test]
    fn test_insert_multiline_text() {
        let mut buffer = TextBuffer::from_text("hello");
        buffer.set_cursor(pos(0, 2));
        buffer.insert_str("XX\nYY");
        assert_eq!(buffer.content(), "heXX\nYYllo");
        assert_eq!(buffer.cursor(), pos(1, 2));
    }

    #[test]
    fn test_insert_normalizes_carriage_returns() {
        let mut buffer = TextBuffer::new();
        buffer.insert_str("a\r\nb\rc");
        assert_eq!(buffer.lines().len(), 3);
        assert_eq!(buffer.content(), "a\nb\nc");
    }

    #[test]
    fn test_insert_replaces_selection() {
        let mut buffer = TextBuffer::from_text("hello world");
        buffer.select(pos(0, 0), pos(0, 5));
        buffer.insert_str("bye");
        assert_eq!(buffer.content(), "bye world");
        assert_eq!(buffer.cursor(), pos(0, 3));
        assert_eq!(buffer.selection(), None);
    }

    #[test]
    fn test_delete_range_across_lines() {
        let mut buffer = TextBuffer::from_text("one\ntwo\nthree");
        buffer.delete_range(pos(0, 2), pos(2, 1));
        assert_eq!(buffer.content(), "onhree");
        assert_eq!(buffer.cursor(), pos(0, 2));
    }

    #[test]
    fn test_selected_text_multibyte() {
        let mut buffer = TextBuffer::from_text("привет\nмир");
        buffer.select(pos(1, 3), pos(0, 3));
        assert_eq!(buffer.selected_text().as_deref(), Some("вет\nмир"));
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut buffer = TextBuffer::from_text("ab\nc");
        buffer.set_cursor(pos(10, 10));
        assert_eq!(buffer.cursor(), pos(1, 1));
        buffer.set_cursor(pos(0, 99));
        assert_eq!(buffer.cursor(), pos(0, 2));
    }

    #[test]
    fn test_undo_restores_previous_text_and_cursor() {
        let mut buffer = TextBuffer::from_text("abc");
        buffer.insert_str("d");
        buffer.delete_range(pos(0, 0), pos(0, 2));
        assert_eq!(buffer.content(), "cd");

        assert!(buffer.undo());
        assert_eq!(buffer.content(), "abcd");
        assert!(buffer.undo());
        assert_eq!(buffer.content(), "abc");
        assert_eq!(buffer.cursor(), pos(0, 3));
        assert!(!buffer.undo());
    }

    #[test]
    fn test_history_is_bounded() {
        let mut buffer = TextBuffer::new();
        for _ in 0..(MAX_HISTORY + 10) {
            buffer.insert_str("x");
        }
        assert_eq!(buffer.history_len(), MAX_HISTORY);
    }

    #[test]
    fn test_replace_all_drops_history() {
        let mut buffer = TextBuffer::new();
        buffer.insert_str("typed");
        buffer.replace_all("swapped\ntext");
        assert!(!buffer.can_undo());
        assert_eq!(buffer.cursor(), pos(1, 4));
    }

    #[test]
    fn test_apply_snapshot_records_history_only_on_change() {
        let mut buffer = TextBuffer::from_text("abc");
        let mut moved = buffer.snapshot();
        moved.cursor = pos(0, 1);
        buffer.apply_snapshot(moved);
        assert!(!buffer.can_undo());
        assert_eq!(buffer.cursor(), pos(0, 1));

        let mut edited = buffer.snapshot();
        edited.lines = vec!["aXbc".to_string()];
        edited.cursor = pos(0, 2);
        buffer.apply_snapshot(edited);
        assert!(buffer.can_undo());
        assert_eq!(buffer.content(), "aXbc");
    }
}
