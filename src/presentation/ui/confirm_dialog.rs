use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::alert_popup::dialog_area;
use crate::presentation::theme::Theme;

const TITLE: &str = " Confirm ";

/// Blocking yes/no question.
pub struct ConfirmDialog<'a> {
    message: &'a str,
    theme: &'a Theme,
}

impl<'a> ConfirmDialog<'a> {
    #[must_use]
    pub const fn new(message: &'a str, theme: &'a Theme) -> Self {
        Self { message, theme }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = dialog_area(area, TITLE, self.message, 2);
        if popup_area.area() == 0 {
            return;
        }

        let key_style = Style::default()
            .fg(self.theme.accent)
            .add_modifier(Modifier::BOLD);

        let text = vec![
            Line::from(self.message),
            Line::default(),
            Line::from(vec![
                Span::styled("[y]", key_style),
                Span::raw(" Yes   "),
                Span::styled("[n]", key_style),
                Span::raw(" No"),
            ]),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(TITLE)
            .border_style(Style::default().fg(self.theme.accent));

        Clear.render(popup_area, buf);
        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(popup_area, buf);
    }
}
