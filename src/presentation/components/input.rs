//! Editable source pane

use ratatui::{prelude::*, widgets::*};

use crate::{core::state::AppState, infrastructure::tui::textarea_engine::TuiTextAreaEngine};

const PLACEHOLDER: &str = "Type text to translate";

/// Renders the input buffer through a tui-textarea hydrated from state.
#[derive(Debug, Default)]
pub struct InputComponent;

impl InputComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let mut textarea =
            TuiTextAreaEngine::restore_textarea_from_snapshot(&state.input.snapshot());

        textarea.set_style(styles.style("input"));
        textarea.set_selection_style(styles.style("selection"));
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(PLACEHOLDER);
        textarea.set_placeholder_style(styles.style("placeholder"));
        if state.is_modal() {
            // Only the focused surface shows a cursor
            textarea.set_cursor_style(Style::default());
        }
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(pane_title(state, &state.languages.pair.source)),
        );

        frame.render_widget(&textarea, area);
    }
}

/// `" french (fr) "`, or just the code when the catalog does not know it
pub fn pane_title(state: &AppState, code: &str) -> String {
    match state.languages.catalog.name_of(code) {
        Some(name) => format!(" {name} ({code}) "),
        None => format!(" {code} "),
    }
}
