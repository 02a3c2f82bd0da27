use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
    pub selection_style: Style,
    pub dimmed_style: Style,
    pub error_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("Yellow")
    }
}

impl Theme {
    /// Builds theme around an accent given by name or hex code.
    #[must_use]
    pub fn new(accent_color_str: &str) -> Self {
        Self::from_color(parse_color(accent_color_str))
    }

    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        Self {
            accent,
            selection_style: Style::default()
                .bg(accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            dimmed_style: Style::default().fg(Color::DarkGray),
            error_style: Style::default().fg(Color::Red),
        }
    }

    /// Style of a focused panel border.
    #[must_use]
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(Color::Gray)
        }
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if s.starts_with('#')
        && let Some((r, g, b)) = parse_short_hex(s)
    {
        return Color::Rgb(r, g, b);
    }

    tracing::warn!(color = s, "Unknown accent color, using yellow");
    Color::Yellow
}

/// Parses `#rgb` shorthand, which ratatui does not accept.
fn parse_short_hex(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.trim_start_matches('#');

    if s.len() != 3 || !s.is_ascii() {
        return None;
    }

    let channel = |i: usize| {
        let digit = u8::from_str_radix(&s[i..=i], 16).ok()?;
        Some(digit * 17)
    };

    Some((channel(0)?, channel(1)?, channel(2)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("blue"), Color::Blue);
        assert_eq!(parse_color("#FF0000"), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("Invalid"), Color::Yellow);
    }

    #[test]
    fn test_selection_uses_accent() {
        let theme = Theme::new("Cyan");
        assert_eq!(theme.accent, Color::Cyan);
        assert_eq!(theme.selection_style.bg, Some(Color::Cyan));
    }
}
