//! Saved cryptocurrencies panel.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Row, StatefulWidget, Table, TableState, Widget, Wrap},
};

use crate::domain::entities::SavedCrypto;
use crate::presentation::theme::Theme;
use crate::presentation::ui::utils::{format_symbol, format_timestamp, format_usd};

/// What the saved-list panel currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum SavedPanel {
    /// First load not answered yet.
    Loading,
    /// Backend returned an empty list.
    Empty,
    Loaded(Vec<SavedCrypto>),
    /// Load failed; holds the resolved error text.
    Failed(String),
}

const HEADERS: [&str; 5] = ["Name", "Symbol", "Price (USD)", "Market Cap", "Last Updated"];

pub struct SavedTable<'a> {
    panel: &'a SavedPanel,
    selected: Option<usize>,
    focused: bool,
    timestamp_format: &'a str,
    theme: &'a Theme,
}

impl<'a> SavedTable<'a> {
    #[must_use]
    pub const fn new(panel: &'a SavedPanel, timestamp_format: &'a str, theme: &'a Theme) -> Self {
        Self {
            panel,
            selected: None,
            focused: false,
            timestamp_format,
            theme,
        }
    }

    #[must_use]
    pub const fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn row(&self, crypto: &SavedCrypto) -> Row<'static> {
        Row::new([
            crypto.name.clone().unwrap_or_else(|| "N/A".to_string()),
            format_symbol(crypto.symbol.as_deref()),
            format_usd(crypto.price_usd),
            format_usd(crypto.market_cap),
            format_timestamp(crypto.last_updated.as_deref(), self.timestamp_format),
        ])
    }
}

impl Widget for SavedTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused))
            .title(" Saved cryptocurrencies ");

        let message = match self.panel {
            SavedPanel::Loading => Some(Line::styled(
                "Loading saved cryptocurrencies...",
                self.theme.dimmed_style,
            )),
            SavedPanel::Empty => Some(Line::from("No saved cryptocurrencies")),
            SavedPanel::Failed(message) => Some(Line::styled(
                format!("Error loading cryptocurrencies: {message}"),
                self.theme.error_style,
            )),
            SavedPanel::Loaded(_) => None,
        };

        if let Some(message) = message {
            Paragraph::new(message)
                .block(block)
                .wrap(Wrap { trim: true })
                .render(area, buf);
            return;
        }

        let SavedPanel::Loaded(cryptos) = self.panel else {
            return;
        };

        let rows: Vec<Row<'static>> = cryptos.iter().map(|c| self.row(c)).collect();
        let header = Row::new(HEADERS).style(
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD),
        );

        let table = Table::new(
            rows,
            [
                Constraint::Fill(2),
                Constraint::Length(8),
                Constraint::Fill(2),
                Constraint::Fill(3),
                Constraint::Fill(3),
            ],
        )
        .header(header)
        .block(block)
        .column_spacing(2)
        .row_highlight_style(if self.focused {
            self.theme.selection_style
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        });

        let mut state = TableState::default().with_selected(self.selected);
        StatefulWidget::render(table, area, buf, &mut state);
    }
}
