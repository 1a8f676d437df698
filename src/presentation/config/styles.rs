use std::{collections::HashMap, ops::Range};

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named styles, e.g. `"input": "#d8dee9 on #3b4252"`.
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl Styles {
    /// Style for `name`, or the default style when it is not configured
    pub fn style(&self, name: &str) -> Style {
        self.get(name).copied().unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;
        let styles = parsed_map
            .into_iter()
            .map(|(name, raw)| (name, parse_style(&raw)))
            .collect();
        Ok(Styles(styles))
    }
}

/// Parses `"[modifiers] [fg] [on bg]"`. Unknown words are skipped.
pub fn parse_style(line: &str) -> Style {
    let lowered = line.to_lowercase();
    let (foreground, background) = match lowered.split_once(" on ") {
        Some((fg, bg)) => (fg, Some(bg)),
        None => match lowered.strip_prefix("on ") {
            Some(bg) => ("", Some(bg)),
            None => (lowered.as_str(), None),
        },
    };

    let mut style = Style::default();
    for word in foreground.split_whitespace() {
        if let Some(modifier) = parse_modifier(word) {
            style = style.add_modifier(modifier);
        } else if let Some(color) = parse_color(word) {
            style = style.fg(color);
        }
    }
    if let Some(color) = background.and_then(|bg| parse_color(bg.trim())) {
        style = style.bg(color);
    }
    style
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    match word {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underlined" | "underline" => Some(Modifier::UNDERLINED),
        "reversed" | "inverse" => Some(Modifier::REVERSED),
        _ => None,
    }
}

fn parse_color(word: &str) -> Option<Color> {
    if let Some(hex) = word.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let channel = |range: Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
        return Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?));
    }
    word.parse::<Color>().ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(
        "#d8dee9 on #3b4252",
        Style::default()
            .fg(Color::Rgb(0xd8, 0xde, 0xe9))
            .bg(Color::Rgb(0x3b, 0x42, 0x52))
    )]
    #[case(
        "bold #2e3440 on #d8dee9",
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Rgb(0x2e, 0x34, 0x40))
            .bg(Color::Rgb(0xd8, 0xde, 0xe9))
    )]
    #[case("reversed", Style::default().add_modifier(Modifier::REVERSED))]
    #[case("red on blue", Style::default().fg(Color::Red).bg(Color::Blue))]
    #[case("on black", Style::default().bg(Color::Black))]
    #[case("", Style::default())]
    fn test_parse_style(#[case] raw: &str, #[case] expected: Style) {
        assert_eq!(parse_style(raw), expected);
    }

    #[test]
    fn test_invalid_hex_is_ignored() {
        assert_eq!(parse_style("#12345 on #zzzzzz"), Style::default());
    }

    #[test]
    fn test_missing_style_falls_back_to_default() {
        let styles: Styles = json5::from_str(r#"{ "error": "bold red" }"#).expect("parses");
        assert_eq!(
            styles.style("error"),
            Style::default().add_modifier(Modifier::BOLD).fg(Color::Red)
        );
        assert_eq!(styles.style("missing"), Style::default());
    }
}
