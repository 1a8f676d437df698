//! Language prompt popup

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    infrastructure::tui::textarea_engine::TuiTextAreaEngine,
    presentation::widgets::centered_rect,
};

const PROMPT_WIDTH: u16 = 50;
const PROMPT_HEIGHT: u16 = 3;

#[derive(Debug, Default)]
pub struct PromptComponent;

impl PromptComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(prompt) = &state.prompt else {
            return;
        };
        let styles = &state.config.config.styles;
        let popup = centered_rect(area, PROMPT_WIDTH, PROMPT_HEIGHT);

        let mut textarea =
            TuiTextAreaEngine::restore_textarea_from_snapshot(&prompt.input.snapshot());
        textarea.set_style(styles.style("input"));
        textarea.set_cursor_line_style(Style::default());
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", prompt.title()))
                .title_bottom(Line::from(" [Enter] OK  [Esc] Cancel ").right_aligned()),
        );

        frame.render_widget(Clear, popup);
        frame.render_widget(&textarea, popup);
    }
}
