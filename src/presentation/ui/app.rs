//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::application::dto::ControllerEvent;
use crate::application::services::ViewController;
use crate::domain::ports::CryptoApiPort;
use crate::infrastructure::AppConfig;
use crate::presentation::theme::Theme;
use crate::presentation::ui::lookup_screen::{LookupAction, LookupScreenState};

const SPINNER_TICK_RATE: Duration = Duration::from_millis(120);

/// Terminal application owning the lookup screen and its controller.
pub struct App {
    state: LookupScreenState,
    controller: ViewController,
    events_rx: mpsc::UnboundedReceiver<ControllerEvent>,
    running: bool,
}

impl App {
    #[must_use]
    pub fn new(api: Arc<dyn CryptoApiPort>, config: &AppConfig) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        Self {
            state: LookupScreenState::new(
                config.backend.base_url.clone(),
                config.ui.timestamp_format.clone(),
                Theme::new(&config.theme.accent_color),
            ),
            controller: ViewController::new(api, events_tx),
            events_rx,
            running: true,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.start();

        self.run_event_loop(terminal).await?;

        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut spinner_interval = interval(SPINNER_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            tokio::select! {
                Some(event) = self.events_rx.recv() => {
                    self.state.apply_event(event);
                }

                maybe_event = terminal_events.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_terminal_event(event),
                    Some(Err(e)) => warn!(error = %e, "Failed to read terminal event"),
                    None => {
                        debug!("Terminal event stream closed");
                        self.running = false;
                    }
                },

                _ = spinner_interval.tick() => {
                    self.state.tick();
                }
            }

            terminal.draw(|frame| self.render(frame))?;
        }

        Ok(())
    }

    /// Issues the start-up saved list load.
    fn start(&mut self) {
        debug!("Loading saved list on start-up");
        self.dispatch(LookupAction::RefreshSaved);
    }

    fn handle_terminal_event(&mut self, event: Event) {
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
        {
            let action = self.state.handle_key(key);
            self.dispatch(action);
        }
    }

    fn dispatch(&mut self, action: LookupAction) {
        match action {
            LookupAction::None => {}
            LookupAction::Quit => {
                info!("Quit requested");
                self.running = false;
            }
            LookupAction::Search(crypto_id) => {
                tokio::spawn(self.controller.search(crypto_id));
            }
            LookupAction::RefreshSaved => {
                tokio::spawn(self.controller.refresh_saved_list());
            }
            LookupAction::Perform(operation) => {
                let controller = self.controller.clone();
                tokio::spawn(async move { controller.perform(operation).await });
            }
        }
    }

    fn render(&self, frame: &mut Frame) {
        frame.render_widget(&self.state, frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{CryptoId, CryptoSummary};
    use crate::domain::ports::mocks::InMemoryCryptoApi;
    use crate::presentation::ui::lookup_screen::SearchState;
    use crate::presentation::widgets::SavedPanel;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn bitcoin() -> CryptoSummary {
        coin("bitcoin", "Bitcoin", "btc")
    }

    fn coin(id: &str, name: &str, symbol: &str) -> CryptoSummary {
        CryptoSummary {
            id: Some(id.to_string()),
            name: name.to_string(),
            symbol: symbol.to_string(),
            price_usd: 50_000.0,
            market_cap: Some(1_000_000_000.0),
            volume_24h: None,
            price_change_24h: Some(-1.5),
            last_updated: None,
            exists_in_db: false,
        }
    }

    async fn apply_next(app: &mut App, count: usize) {
        for _ in 0..count {
            let event = app.events_rx.recv().await.unwrap();
            app.state.apply_event(event);
        }
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[tokio::test]
    async fn test_initial_render_shows_loading_list() {
        let app = App::new(
            Arc::new(InMemoryCryptoApi::new(Vec::new())),
            &AppConfig::default(),
        );

        let screen = screen(&app);
        assert!(screen.contains("Loading saved cryptocurrencies..."));
        assert!(screen.contains("http://127.0.0.1:8000"));
    }

    #[tokio::test]
    async fn test_search_and_save_through_controller() {
        let api = Arc::new(InMemoryCryptoApi::new(vec![bitcoin()]));
        let mut app = App::new(api.clone(), &AppConfig::default());

        app.dispatch(LookupAction::Search(CryptoId::new("bitcoin").unwrap()));
        apply_next(&mut app, 2).await;

        assert!(screen(&app).contains("Save to DB"));

        let action = app
            .state
            .handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::ALT));
        assert!(matches!(action, LookupAction::Perform(_)));
        app.dispatch(action);

        // finished, list started/loaded, search started/finished, settled
        apply_next(&mut app, 6).await;

        assert!(api.is_saved("bitcoin").await);
        assert!(app.state.pending_operation().is_none());
        assert!(matches!(
            app.state.search_state(),
            SearchState::Found { summary, .. } if summary.exists_in_db
        ));

        app.state
            .handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        let screen = screen(&app);
        assert!(screen.contains("[ Update ]"));
        assert!(screen.contains("[ Delete ]"));
        assert!(!screen.contains("Save to DB"));
    }

    #[tokio::test]
    async fn test_start_loads_saved_list() {
        let mut app = App::new(
            Arc::new(InMemoryCryptoApi::new(Vec::new())),
            &AppConfig::default(),
        );

        app.start();

        let started = app.events_rx.recv().await.unwrap();
        assert!(matches!(started, ControllerEvent::SavedListStarted { request: 1 }));
        app.state.apply_event(started);

        let loaded = app.events_rx.recv().await.unwrap();
        assert!(matches!(
            &loaded,
            ControllerEvent::SavedListLoaded { request: 1, result: Ok(list) } if list.is_empty()
        ));
        app.state.apply_event(loaded);

        assert_eq!(app.state.saved_panel(), &SavedPanel::Empty);
        assert!(screen(&app).contains("No saved cryptocurrencies"));
    }

    #[tokio::test]
    async fn test_search_typed_during_save_stays_shown() {
        let api = Arc::new(InMemoryCryptoApi::new(vec![
            bitcoin(),
            coin("ethereum", "Ethereum", "eth"),
        ]));
        let mut app = App::new(api.clone(), &AppConfig::default());

        app.dispatch(LookupAction::Search(CryptoId::new("bitcoin").unwrap()));
        apply_next(&mut app, 2).await;

        let save = app
            .state
            .handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::ALT));
        app.dispatch(save);

        for c in "ethereum".chars() {
            app.state
                .handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        let search = app
            .state
            .handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(
            search,
            LookupAction::Search(CryptoId::new("ethereum").unwrap())
        );
        app.dispatch(search);

        // newer search: started, finished; save: six events
        apply_next(&mut app, 8).await;

        assert!(api.is_saved("bitcoin").await);
        assert_eq!(app.state.input_value(), "ethereum");
        let SearchState::Found { summary, .. } = app.state.search_state() else {
            panic!("expected found state");
        };
        assert_eq!(summary.name, "Ethereum");
        assert!(app.state.pending_operation().is_none());
    }

    #[tokio::test]
    async fn test_quit_stops_loop() {
        let mut app = App::new(
            Arc::new(InMemoryCryptoApi::new(Vec::new())),
            &AppConfig::default(),
        );

        app.dispatch(LookupAction::Quit);

        assert!(!app.running);
    }
}
