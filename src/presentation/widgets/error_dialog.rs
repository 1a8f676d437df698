use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::centered_rect;
use crate::core::state::ErrorDialog;

const DIALOG_WIDTH: u16 = 60;
const DIALOG_HEIGHT: u16 = 7;

/// Modal error popup, dismissed with Enter or Esc.
pub struct ErrorDialogWidget<'a> {
    dialog: &'a ErrorDialog,
    style: Style,
}

impl<'a> ErrorDialogWidget<'a> {
    pub fn new(dialog: &'a ErrorDialog, style: Style) -> Self {
        Self { dialog, style }
    }
}

impl<'a> Widget for ErrorDialogWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(area, DIALOG_WIDTH, DIALOG_HEIGHT);
        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.dialog.title))
            .title_bottom(Line::from(" [Enter] OK ").right_aligned())
            .style(self.style);
        Paragraph::new(self.dialog.message.as_str())
            .wrap(Wrap { trim: true })
            .block(block)
            .render(popup, buf);
    }
}
