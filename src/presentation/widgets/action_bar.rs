//! Row of action buttons for the current search result.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::theme::Theme;

/// Button offered for a search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionButton {
    Save,
    Update,
    Delete,
}

impl ActionButton {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Save => "Save to DB",
            Self::Update => "Update",
            Self::Delete => "Delete",
        }
    }

    /// Alt+key shortcut.
    #[must_use]
    pub const fn shortcut(self) -> char {
        match self {
            Self::Save => 's',
            Self::Update => 'u',
            Self::Delete => 'd',
        }
    }
}

pub struct ActionBar<'a> {
    buttons: &'a [ActionButton],
    selected: usize,
    focused: bool,
    disabled: bool,
    theme: &'a Theme,
}

impl<'a> ActionBar<'a> {
    #[must_use]
    pub const fn new(buttons: &'a [ActionButton], theme: &'a Theme) -> Self {
        Self {
            buttons,
            selected: 0,
            focused: false,
            disabled: false,
            theme,
        }
    }

    #[must_use]
    pub const fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Greys out every button while an operation is in flight.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl Widget for ActionBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.buttons.is_empty() {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused))
            .title(" Actions ");

        let mut spans = Vec::with_capacity(self.buttons.len() * 2);
        for (i, button) in self.buttons.iter().enumerate() {
            let style = if self.disabled {
                self.theme.dimmed_style
            } else if self.focused && i == self.selected {
                self.theme.selection_style
            } else {
                Style::default().fg(Color::White)
            };

            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(format!("[ {} ]", button.label()), style));
        }

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(bar: ActionBar<'_>) -> String {
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        (0..40).map(|x| buf[(x, 1)].symbol().to_string()).collect()
    }

    #[test]
    fn test_buttons_are_listed_in_order() {
        let theme = Theme::default();
        let row = render(ActionBar::new(
            &[ActionButton::Update, ActionButton::Delete],
            &theme,
        ));
        assert!(row.contains("[ Update ]  [ Delete ]"));
    }

    #[test]
    fn test_empty_bar_renders_nothing() {
        let theme = Theme::default();
        let row = render(ActionBar::new(&[], &theme));
        assert!(row.trim().is_empty());
    }
}
