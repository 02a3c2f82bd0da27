//! Lookup screen: search input, result panel, action bar and saved list.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use tracing::{debug, info};

use crate::application::dto::{ControllerEvent, CryptoOperation, RequestId};
use crate::application::services::AlertManager;
use crate::application::use_cases::{LoadSavedCryptosUseCase, SearchCryptoUseCase};
use crate::domain::entities::{CryptoId, CryptoSummary};
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::ui::alert_popup::AlertPopup;
use crate::presentation::ui::confirm_dialog::ConfirmDialog;
use crate::presentation::ui::utils::{format_change, format_usd};
use crate::presentation::widgets::{
    ActionBar, ActionButton, SavedPanel, SavedTable, StatusBar, StatusLevel, TextInput,
};

const DELETED_NOTICE: &str = "Cryptocurrency was deleted from database";
const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠸", "⠴"];

/// Panel receiving key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Actions,
    Saved,
}

/// Result panel state for the current search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    Idle,
    Searching {
        crypto_id: CryptoId,
    },
    Found {
        crypto_id: CryptoId,
        summary: CryptoSummary,
    },
    /// Lookup failed; holds the resolved error text.
    Failed {
        message: String,
    },
    /// The shown coin was deleted; the summary stays with a notice.
    Deleted {
        crypto_id: CryptoId,
        summary: CryptoSummary,
    },
}

impl SearchState {
    /// Buttons offered for this state: Save for a new coin, Update and
    /// Delete for a saved one, nothing otherwise.
    #[must_use]
    pub const fn action_buttons(&self) -> &'static [ActionButton] {
        match self {
            Self::Found { summary, .. } if summary.exists_in_db => {
                &[ActionButton::Update, ActionButton::Delete]
            }
            Self::Found { .. } => &[ActionButton::Save],
            _ => &[],
        }
    }
}

/// Work requested by a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupAction {
    None,
    Quit,
    Search(CryptoId),
    Perform(CryptoOperation),
    RefreshSaved,
}

#[derive(Debug, Clone)]
struct PendingConfirmation {
    operation: CryptoOperation,
    message: String,
}

/// View state of the lookup screen.
///
/// Owned by the UI task and changed only by key handling and
/// [`apply_event`](Self::apply_event).
pub struct LookupScreenState {
    input: TextInput,
    focus: Focus,
    search: SearchState,
    saved: SavedPanel,
    saved_selected: Option<usize>,
    selected_button: usize,
    alerts: AlertManager,
    confirmation: Option<PendingConfirmation>,
    pending_operation: Option<CryptoOperation>,
    latest_search: RequestId,
    latest_list: RequestId,
    list_in_flight: Option<RequestId>,
    backend_url: String,
    timestamp_format: String,
    theme: Theme,
    tick: usize,
}

impl LookupScreenState {
    #[must_use]
    pub fn new(
        backend_url: impl Into<String>,
        timestamp_format: impl Into<String>,
        theme: Theme,
    ) -> Self {
        let mut input = TextInput::new("Cryptocurrency ID")
            .placeholder("e.g. bitcoin")
            .accent(theme.accent);
        input.set_focused(true);

        Self {
            input,
            focus: Focus::Input,
            search: SearchState::Idle,
            saved: SavedPanel::Loading,
            saved_selected: None,
            selected_button: 0,
            alerts: AlertManager::new(),
            confirmation: None,
            pending_operation: None,
            latest_search: 0,
            latest_list: 0,
            list_in_flight: None,
            backend_url: backend_url.into(),
            timestamp_format: timestamp_format.into(),
            theme,
            tick: 0,
        }
    }

    #[must_use]
    pub const fn search_state(&self) -> &SearchState {
        &self.search
    }

    #[must_use]
    pub const fn saved_panel(&self) -> &SavedPanel {
        &self.saved
    }

    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    pub const fn alerts(&self) -> &AlertManager {
        &self.alerts
    }

    #[must_use]
    pub fn input_value(&self) -> &str {
        self.input.value()
    }

    /// Returns the question of the open confirmation dialog.
    #[must_use]
    pub fn confirmation_message(&self) -> Option<&str> {
        self.confirmation.as_ref().map(|c| c.message.as_str())
    }

    /// Returns the save/update/delete currently in flight.
    #[must_use]
    pub const fn pending_operation(&self) -> Option<&CryptoOperation> {
        self.pending_operation.as_ref()
    }

    #[must_use]
    pub const fn action_buttons(&self) -> &'static [ActionButton] {
        self.search.action_buttons()
    }

    /// Advances the activity spinner.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Applies a controller event to the view.
    pub fn apply_event(&mut self, event: ControllerEvent) {
        match event {
            ControllerEvent::SearchStarted { request, crypto_id } => {
                if request <= self.latest_search {
                    debug!(request, latest = self.latest_search, "Ignoring stale search start");
                    return;
                }
                self.latest_search = request;
                self.search = SearchState::Searching { crypto_id };
                self.selected_button = 0;
            }
            ControllerEvent::SearchFinished {
                request,
                crypto_id,
                result,
            } => {
                if request != self.latest_search {
                    debug!(
                        request,
                        latest = self.latest_search,
                        crypto_id = %crypto_id,
                        "Dropping superseded search response"
                    );
                    return;
                }
                self.search = match result {
                    Ok(summary) => SearchState::Found { crypto_id, summary },
                    Err(e) => SearchState::Failed {
                        message: e.user_message(SearchCryptoUseCase::FAILURE_FALLBACK),
                    },
                };
                self.selected_button = 0;
            }
            ControllerEvent::SavedListStarted { request } => {
                self.list_in_flight = Some(self.list_in_flight.map_or(request, |r| r.max(request)));
            }
            ControllerEvent::SavedListLoaded { request, result } => {
                if self.list_in_flight.is_some_and(|r| request >= r) {
                    self.list_in_flight = None;
                }
                if request <= self.latest_list {
                    debug!(request, latest = self.latest_list, "Dropping stale saved list");
                    return;
                }
                self.latest_list = request;
                self.saved = match result {
                    Ok(list) if list.is_empty() => SavedPanel::Empty,
                    Ok(list) => SavedPanel::Loaded(list),
                    Err(e) => {
                        SavedPanel::Failed(e.user_message(LoadSavedCryptosUseCase::FAILURE_FALLBACK))
                    }
                };
                self.clamp_saved_selection();
            }
            ControllerEvent::OperationFinished { operation, result } => match result {
                Ok(()) => {
                    self.alerts.info(operation.success_message());
                    if let CryptoOperation::Delete(crypto_id) = &operation {
                        self.mark_deleted(crypto_id);
                    }
                }
                Err(e) => {
                    let message = e.user_message(&operation.failure_fallback());
                    self.alerts.error(format!("Error: {message}"));
                }
            },
            ControllerEvent::OperationSettled { operation } => {
                if self.pending_operation.as_ref() == Some(&operation) {
                    self.pending_operation = None;
                }
            }
        }

        if self.focus == Focus::Actions && self.action_buttons().is_empty() {
            self.set_focus(Focus::Input);
        }
    }

    /// Handles a key press and returns the work it requests.
    pub fn handle_key(&mut self, key: KeyEvent) -> LookupAction {
        if EventHandler::is_quit_event(&key) {
            return LookupAction::Quit;
        }

        if self.alerts.has_alerts() {
            if EventHandler::is_dismiss_event(&key) {
                self.alerts.dismiss();
            }
            return LookupAction::None;
        }

        if self.confirmation.is_some() {
            return self.handle_confirmation_key(&key);
        }

        if let Some(c) = EventHandler::alt_shortcut(&key) {
            return match self.action_buttons().iter().find(|b| b.shortcut() == c) {
                Some(&button) => self.activate(button),
                None => LookupAction::None,
            };
        }

        match key.code {
            KeyCode::Tab => {
                self.cycle_focus(true);
                return LookupAction::None;
            }
            KeyCode::BackTab => {
                self.cycle_focus(false);
                return LookupAction::None;
            }
            _ => {}
        }

        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::Actions => self.handle_actions_key(&key),
            Focus::Saved => self.handle_saved_key(&key),
        }
    }

    fn handle_confirmation_key(&mut self, key: &KeyEvent) -> LookupAction {
        if EventHandler::is_confirm_event(key) {
            if let Some(confirmation) = self.confirmation.take() {
                return self.start_operation(confirmation.operation);
            }
        } else if EventHandler::is_cancel_event(key) {
            self.confirmation = None;
            debug!("Deletion cancelled");
        }
        LookupAction::None
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> LookupAction {
        if EventHandler::is_submit_event(&key) {
            return self.submit_search();
        }

        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.input.input_char(c);
            }
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_start(),
            KeyCode::End => self.input.move_end(),
            KeyCode::Esc => self.input.clear(),
            _ => {}
        }
        LookupAction::None
    }

    fn handle_actions_key(&mut self, key: &KeyEvent) -> LookupAction {
        let count = self.action_buttons().len();
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected_button = self.selected_button.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.selected_button = (self.selected_button + 1).min(count.saturating_sub(1));
            }
            KeyCode::Enter => {
                if let Some(&button) = self.action_buttons().get(self.selected_button) {
                    return self.activate(button);
                }
            }
            _ => {}
        }
        LookupAction::None
    }

    fn handle_saved_key(&mut self, key: &KeyEvent) -> LookupAction {
        let count = match &self.saved {
            SavedPanel::Loaded(list) => list.len(),
            _ => 0,
        };

        match key.code {
            KeyCode::Up | KeyCode::Char('k') if count > 0 => {
                self.saved_selected = Some(self.saved_selected.map_or(0, |i| i.saturating_sub(1)));
            }
            KeyCode::Down | KeyCode::Char('j') if count > 0 => {
                self.saved_selected =
                    Some(self.saved_selected.map_or(0, |i| (i + 1).min(count - 1)));
            }
            KeyCode::Char('r') => return LookupAction::RefreshSaved,
            KeyCode::Enter => return self.search_selected(),
            _ => {}
        }
        LookupAction::None
    }

    fn submit_search(&mut self) -> LookupAction {
        match SearchCryptoUseCase::parse_input(self.input.value()) {
            Ok(crypto_id) => LookupAction::Search(crypto_id),
            Err(e) => {
                self.alerts.warn(e.to_string());
                LookupAction::None
            }
        }
    }

    fn search_selected(&mut self) -> LookupAction {
        let SavedPanel::Loaded(list) = &self.saved else {
            return LookupAction::None;
        };

        let Some(crypto_id) = self
            .saved_selected
            .and_then(|i| list.get(i))
            .and_then(|saved| saved.crypto_id())
        else {
            debug!("Selected saved entry has no id");
            return LookupAction::None;
        };

        self.input.set_value(crypto_id.as_str());
        LookupAction::Search(crypto_id)
    }

    fn activate(&mut self, button: ActionButton) -> LookupAction {
        if let Some(pending) = &self.pending_operation {
            debug!(pending = %pending, button = button.label(), "Operation in flight, ignoring action");
            return LookupAction::None;
        }

        if !self.action_buttons().contains(&button) {
            return LookupAction::None;
        }

        let SearchState::Found { crypto_id, summary } = &self.search else {
            return LookupAction::None;
        };
        let crypto_id = crypto_id.clone();

        match button {
            ActionButton::Save => self.start_operation(CryptoOperation::Save(crypto_id)),
            ActionButton::Update => self.start_operation(CryptoOperation::Update(crypto_id)),
            ActionButton::Delete => {
                self.confirmation = Some(PendingConfirmation {
                    message: format!("Are you sure you want to delete {}?", summary.name),
                    operation: CryptoOperation::Delete(crypto_id),
                });
                LookupAction::None
            }
        }
    }

    fn start_operation(&mut self, operation: CryptoOperation) -> LookupAction {
        if self.pending_operation.is_some() {
            return LookupAction::None;
        }
        info!(operation = %operation, "Submitting operation");
        self.pending_operation = Some(operation.clone());
        LookupAction::Perform(operation)
    }

    fn mark_deleted(&mut self, deleted: &CryptoId) {
        let current = std::mem::replace(&mut self.search, SearchState::Idle);
        self.search = match current {
            SearchState::Found { crypto_id, summary } if &crypto_id == deleted => {
                SearchState::Deleted { crypto_id, summary }
            }
            other => other,
        };
    }

    fn cycle_focus(&mut self, forward: bool) {
        let has_actions = !self.action_buttons().is_empty();
        let next = match (self.focus, forward) {
            (Focus::Input, true) | (Focus::Saved, false) if has_actions => Focus::Actions,
            (Focus::Input, _) | (Focus::Actions, true) => Focus::Saved,
            (Focus::Saved, _) | (Focus::Actions, false) => Focus::Input,
        };
        self.set_focus(next);
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.input.set_focused(focus == Focus::Input);
        if focus == Focus::Saved && self.saved_selected.is_none() {
            self.clamp_saved_selection();
        }
    }

    fn clamp_saved_selection(&mut self) {
        self.saved_selected = match &self.saved {
            SavedPanel::Loaded(list) if !list.is_empty() => {
                Some(self.saved_selected.unwrap_or(0).min(list.len() - 1))
            }
            _ => None,
        };
    }

    fn activity(&self) -> Option<String> {
        if let Some(operation) = &self.pending_operation {
            return Some(format!(
                "{} {}...",
                operation.progress_label(),
                operation.crypto_id()
            ));
        }
        if let SearchState::Searching { crypto_id } = &self.search {
            return Some(format!("Searching {crypto_id}..."));
        }
        self.list_in_flight
            .map(|_| "Loading saved list...".to_string())
    }

    fn key_hints(&self) -> &'static str {
        if self.alerts.has_alerts() {
            return "Enter: dismiss ";
        }
        if self.confirmation.is_some() {
            return "y: confirm  n: cancel ";
        }
        match self.focus {
            Focus::Input => "Enter: search  Tab: focus  Ctrl+Q: quit ",
            Focus::Actions => "←/→: select  Enter: run  Alt+S/U/D ",
            Focus::Saved => "↑/↓: select  Enter: search  r: refresh ",
        }
    }

    fn status_bar(&self) -> StatusBar {
        let bar = StatusBar::new()
            .left(format!(" {}", self.backend_url))
            .right(self.key_hints());

        if let Some(activity) = self.activity() {
            let frame = SPINNER_FRAMES[self.tick % SPINNER_FRAMES.len()];
            return bar
                .center(format!("{frame} {activity}"))
                .level(StatusLevel::Busy);
        }

        if matches!(self.search, SearchState::Failed { .. })
            || matches!(self.saved, SavedPanel::Failed(_))
        {
            bar.level(StatusLevel::Error)
        } else {
            bar.level(StatusLevel::Idle)
        }
    }

    fn result_lines(&self) -> Vec<Line<'_>> {
        match &self.search {
            SearchState::Idle => vec![Line::styled(
                "Type a cryptocurrency ID and press Enter.",
                self.theme.dimmed_style,
            )],
            SearchState::Searching { crypto_id } => vec![Line::styled(
                format!("Searching {crypto_id}..."),
                self.theme.dimmed_style,
            )],
            SearchState::Failed { message } => {
                vec![Line::styled(format!("Error: {message}"), self.theme.error_style)]
            }
            SearchState::Found { summary, .. } => self.summary_lines(summary),
            SearchState::Deleted { summary, .. } => {
                let mut lines = self.summary_lines(summary);
                lines.push(Line::default());
                lines.push(Line::styled(DELETED_NOTICE, self.theme.dimmed_style));
                lines
            }
        }
    }

    fn summary_lines(&self, summary: &CryptoSummary) -> Vec<Line<'static>> {
        vec![
            Line::styled(
                summary.heading(),
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(format!("Price: {}", format_usd(Some(summary.price_usd)))),
            Line::from(format!("Market Cap: {}", format_usd(summary.market_cap))),
            Line::from(format!("24h Volume: {}", format_usd(summary.volume_24h))),
            Line::from(format!(
                "24h Change: {}%",
                format_change(summary.price_change_24h)
            )),
        ]
    }
}

impl Widget for &LookupScreenState {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let buttons = self.action_buttons();
        let actions_height = if buttons.is_empty() { 0 } else { 3 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(9),
                Constraint::Length(actions_height),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(area);

        self.input.render(chunks[0], buf);

        Paragraph::new(self.result_lines())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.border_style(false))
                    .title(" Result "),
            )
            .wrap(Wrap { trim: true })
            .render(chunks[1], buf);

        ActionBar::new(buttons, &self.theme)
            .selected(self.selected_button)
            .focused(self.focus == Focus::Actions)
            .disabled(self.pending_operation.is_some())
            .render(chunks[2], buf);

        SavedTable::new(&self.saved, &self.timestamp_format, &self.theme)
            .selected(self.saved_selected)
            .focused(self.focus == Focus::Saved)
            .render(chunks[3], buf);

        self.status_bar().render(chunks[4], buf);

        if let Some(confirmation) = &self.confirmation {
            ConfirmDialog::new(&confirmation.message, &self.theme).render(area, buf);
        }

        if let Some(alert) = self.alerts.current() {
            AlertPopup::new(alert, &self.theme)
                .pending(self.alerts.len().saturating_sub(1))
                .render(area, buf);
        }
    }
}
