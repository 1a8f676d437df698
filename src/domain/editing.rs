//! Editor-style operations layered on top of [`TextBuffer`].
//!
//! These are the behaviors the plain text area does not provide on its own:
//! line/buffer motions, line-aware and word-aware backspace, select-all and
//! undo. Every operation is a pure function of the buffer and always leaves
//! the cursor inside it.

use serde::{Deserialize, Serialize};

use crate::domain::text_buffer::{CursorPosition, TextBuffer};

/// Character that ends a word for [`EditOp::DeleteWordBackward`].
pub const WORD_BOUNDARY: char = ' ';

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditOp {
    MoveLineStart,
    MoveLineEnd,
    MoveBufferStart,
    MoveBufferEnd,
    DeleteToLineStart,
    DeleteWordBackward,
    SelectAll,
    Undo,
    InsertNewline,
    InsertText(String),
    DeleteSelection,
}

impl EditOp {
    /// Whether the operation may change the text (as opposed to only moving
    /// the cursor or the selection).
    pub fn is_mutation(&self) -> bool {
        !matches!(
            self,
            EditOp::MoveLineStart
                | EditOp::MoveLineEnd
                | EditOp::MoveBufferStart
                | EditOp::MoveBufferEnd
                | EditOp::SelectAll
        )
    }
}

/// Applies `op` to `buffer` and returns the edited buffer.
pub fn apply(mut buffer: TextBuffer, op: &EditOp) -> TextBuffer {
    let cursor = buffer.cursor();
    match op {
        EditOp::MoveLineStart => move_to(&mut buffer, CursorPosition::new(cursor.line, 0)),
        EditOp::MoveLineEnd => {
            let end = buffer.line_len(cursor.line);
            move_to(&mut buffer, CursorPosition::new(cursor.line, end));
        }
        EditOp::MoveBufferStart => move_to(&mut buffer, CursorPosition::default()),
        EditOp::MoveBufferEnd => {
            let end = buffer.end_position();
            move_to(&mut buffer, end);
        }
        EditOp::DeleteToLineStart => delete_to_line_start(&mut buffer),
        EditOp::DeleteWordBackward => delete_word_backward(&mut buffer),
        EditOp::SelectAll => {
            let end = buffer.end_position();
            buffer.select(CursorPosition::default(), end);
        }
        EditOp::Undo => {
            buffer.undo();
        }
        EditOp::InsertNewline => buffer.insert_str("\n"),
        EditOp::InsertText(text) => buffer.insert_str(text),
        EditOp::DeleteSelection => {
            buffer.delete_selection();
        }
    }
    buffer
}

fn move_to(buffer: &mut TextBuffer, position: CursorPosition) {
    buffer.clear_selection();
    buffer.set_cursor(position);
}

fn delete_to_line_start(buffer: &mut TextBuffer) {
    if buffer.delete_selection() {
        return;
    }
    let cursor = buffer.cursor();
    if cursor.column > 0 {
        buffer.delete_range(CursorPosition::new(cursor.line, 0), cursor);
    } else {
        join_with_previous_line(buffer);
    }
}

fn delete_word_backward(buffer: &mut TextBuffer) {
    if buffer.delete_selection() {
        return;
    }
    let cursor = buffer.cursor();
    if cursor.column > 0 {
        let line = &buffer.lines()[cursor.line];
        let start = word_start(line, cursor.column);
        buffer.delete_range(CursorPosition::new(cursor.line, start), cursor);
    } else {
        join_with_previous_line(buffer);
    }
}

/// At column 0 backspace merges the line into the previous one; on the first
/// line it does nothing.
fn join_with_previous_line(buffer: &mut TextBuffer) {
    let cursor = buffer.cursor();
    buffer.clear_selection();
    if cursor.line == 0 {
        return;
    }
    let previous = cursor.line - 1;
    let previous_end = CursorPosition::new(previous, buffer.line_len(previous));
    buffer.delete_range(previous_end, cursor);
}

/// Column where a backward word deletion from `column` starts.
///
/// Spaces directly before the cursor are skipped, then the scan walks back to
/// the next space and stops right after it (or at column 0). Only the space
/// character separates words; digits, punctuation and letters are all treated
/// alike.
pub fn word_start(line: &str, column: usize) -> usize {
    let chars: Vec<char> = line.chars().take(column).collect();
    let mut index = chars.len();
    while index > 0 && chars[index - 1] == WORD_BOUNDARY {
        index -= 1;
    }
    while index > 0 && chars[index - 1] != WORD_BOUNDARY {
        index -= 1;
    }
    index
}
