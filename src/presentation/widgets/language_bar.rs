use ratatui::{prelude::*, widgets::Paragraph};

use crate::core::state::Activity;

/// `[Translate] [Vocalize]  fr <=> ru   Idle`
#[derive(Debug, Clone)]
pub struct LanguageBarWidget<'a> {
    pub source: &'a str,
    pub target: &'a str,
    pub activity: Activity,
    pub button_style: Style,
    pub style: Style,
}

impl<'a> Widget for LanguageBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(16)]).areas(area);

        let line = Line::from(vec![
            Span::styled("[Translate]", self.button_style),
            Span::raw(" "),
            Span::styled("[Vocalize]", self.button_style),
            Span::raw("  "),
            Span::raw(self.source.to_string()).bold(),
            Span::raw(" <=> "),
            Span::raw(self.target.to_string()).bold(),
        ]);
        Paragraph::new(line).style(self.style).render(left, buf);

        Paragraph::new(self.activity.to_string())
            .style(self.style)
            .alignment(Alignment::Right)
            .render(right, buf);
    }
}
