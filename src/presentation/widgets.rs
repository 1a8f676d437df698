//! Stateless widgets shared by the components

use ratatui::layout::{Constraint, Flex, Layout, Rect};

pub mod error_dialog;
pub mod language_bar;
pub mod status_bar;

/// A `width` x `height` rectangle centered in `area`, clamped to it.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    popup
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(area, 40, 6), Rect::new(20, 9, 40, 6));
        assert_eq!(centered_rect(area, 200, 50), area);
    }
}
