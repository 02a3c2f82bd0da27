use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{Alert, AlertLevel};
use crate::presentation::theme::Theme;

const MAX_WIDTH: u16 = 60;
const DISMISS_HINT: &str = "[Enter] OK";

/// Centered modal showing the alert at the front of the queue.
pub struct AlertPopup<'a> {
    alert: &'a Alert,
    pending: usize,
    theme: &'a Theme,
}

impl<'a> AlertPopup<'a> {
    #[must_use]
    pub const fn new(alert: &'a Alert, theme: &'a Theme) -> Self {
        Self {
            alert,
            pending: 0,
            theme,
        }
    }

    /// Number of alerts queued behind this one.
    #[must_use]
    pub const fn pending(mut self, pending: usize) -> Self {
        self.pending = pending;
        self
    }
}

/// Sizes a dialog box for `message` and centers it in `area`.
pub(crate) fn dialog_area(area: Rect, title: &str, message: &str, footer_lines: u16) -> Rect {
    let max_width = MAX_WIDTH.min(area.width.saturating_sub(2)).max(1);
    let width = u16::try_from(message.width().max(title.width()))
        .unwrap_or(u16::MAX)
        .saturating_add(4)
        .max(u16::try_from(DISMISS_HINT.width()).unwrap_or(0) + 4)
        .min(max_width);

    let inner_width = width.saturating_sub(2).max(1);
    let content_width = u16::try_from(message.width()).unwrap_or(u16::MAX);
    let lines = content_width.div_ceil(inner_width).max(1);

    let height = lines
        .saturating_add(footer_lines)
        .saturating_add(2)
        .min(area.height);

    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;

    Rect::new(x, y, width, height)
}

impl Widget for AlertPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} ", self.alert.title);
        let message = self.alert.message.as_str();

        let popup_area = dialog_area(area, &title, message, 2);
        if popup_area.area() == 0 {
            return;
        }

        let color = match self.alert.level {
            AlertLevel::Info => self.theme.accent,
            AlertLevel::Warn => Color::Yellow,
            AlertLevel::Error => Color::Red,
        };

        let mut footer = vec![Span::styled(DISMISS_HINT, self.theme.dimmed_style)];
        if self.pending > 0 {
            footer.push(Span::styled(
                format!("  (+{} more)", self.pending),
                self.theme.dimmed_style,
            ));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(color));

        let text = vec![
            Line::styled(message, Style::default().add_modifier(Modifier::BOLD)),
            Line::default(),
            Line::from(footer),
        ];

        Clear.render(popup_area, buf);
        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(popup_area, buf);
    }
}
