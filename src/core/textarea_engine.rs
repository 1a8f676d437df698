use crossterm::event::KeyEvent;

use crate::domain::text_buffer::BufferSnapshot;

/// Default key handling of a text area (character insertion, arrows,
/// shift-selection, plain backspace/delete), seen as a pure function.
///
/// Keys the binding layer leaves alone reach the input buffer through this
/// trait, so `update` stays free of widget state.
pub trait TextAreaEngine: Sync {
    fn apply_keys(&self, snapshot: &BufferSnapshot, keys: &[KeyEvent]) -> BufferSnapshot;
}

/// Engine that ignores every key; buffers only change through `EditOp`s.
pub struct NoopTextAreaEngine;

impl TextAreaEngine for NoopTextAreaEngine {
    fn apply_keys(&self, snapshot: &BufferSnapshot, _keys: &[KeyEvent]) -> BufferSnapshot {
        snapshot.clone()
    }
}
