use ratatui::{prelude::*, widgets::Paragraph};

/// One-row status line: the current message, or the key hints when idle.
#[derive(Debug, Clone)]
pub struct StatusBarWidget<'a> {
    message: Option<&'a str>,
    hints: &'a str,
    message_style: Style,
    hint_style: Style,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(message: Option<&'a str>, hints: &'a str) -> Self {
        Self {
            message,
            hints,
            message_style: Style::default(),
            hint_style: Style::default(),
        }
    }

    pub fn styles(mut self, message_style: Style, hint_style: Style) -> Self {
        self.message_style = message_style;
        self.hint_style = hint_style;
        self
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let paragraph = match self.message {
            Some(message) => Paragraph::new(message).style(self.message_style),
            None => Paragraph::new(self.hints).style(self.hint_style),
        };
        paragraph.render(area, buf);
    }
}
