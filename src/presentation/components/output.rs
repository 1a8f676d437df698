//! Read-only translation pane

use ratatui::{prelude::*, widgets::*};

use super::input::pane_title;
use crate::core::state::{Activity, AppState};

#[derive(Debug, Default)]
pub struct OutputComponent;

impl OutputComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let block = Block::default()
            .borders(Borders::ALL)
            .title(pane_title(state, &state.languages.pair.target));

        let paragraph = if state.output.is_empty() && state.activity == Activity::Translating {
            Paragraph::new(state.activity.to_string()).style(styles.style("placeholder"))
        } else {
            Paragraph::new(state.output.text()).style(styles.style("output"))
        };

        frame.render_widget(paragraph.wrap(Wrap { trim: false }).block(block), area);
    }
}
