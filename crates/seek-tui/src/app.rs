//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, starts the database load on the local
//! task set, drives the crossterm event stream, and tears everything down
//! cleanly on exit or panic.
//!
//! The screen is the search surface: [`AppState`] answers element lookups
//! for the [`Binder`], and every edit, key press and button activation is
//! routed through [`Binder::dispatch`].

use crate::{
    event::{self, AppEvent},
    theme::Theme,
    widgets::{
        help::HelpPopup,
        query_bar::{QueryBar, QueryBarState},
        results::{ResultsPane, ResultsState},
        search_button::{self, SearchButton},
        status_line::StatusLine,
    },
};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction as LayoutDir, Layout, Position, Rect},
    Frame, Terminal,
};
use seek_core::{
    bind::{Binder, Key, LoadStatus, Surface, UiEvent, BUTTON_ID, RESULTS_ID},
    config::Config,
    debounce::LocalScheduler,
    loader::Fetch,
    store::RecordStore,
};
use std::{
    cell::{Cell, RefCell},
    io,
    rc::Rc,
    time::Duration,
};

const FRAME: Duration = Duration::from_millis(16);

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    QueryBar,
    Results,
    Button,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub focus: Focus,
    /// `None` when the input element is configured away.
    pub query: Option<QueryBarState>,
    pub button: bool,
    pub results: Rc<RefCell<ResultsState>>,
    pub theme: Theme,
    /// Database location shown in the status line.
    pub location: String,
    pub show_help: bool,
    pub quit: bool,
    /// Widget areas from the last draw, for mouse hit-testing.
    query_area: Cell<Rect>,
    button_area: Cell<Rect>,
    results_area: Cell<Rect>,
}

impl AppState {
    #[cfg(test)]
    fn query_value(&self) -> String {
        self.query.as_ref().map(|q| q.query.clone()).unwrap_or_default()
    }

    /// Focus order, skipping elements that are not on screen.
    fn focus_ring(&self) -> Vec<Focus> {
        let mut ring = Vec::with_capacity(3);
        if self.query.is_some() {
            ring.push(Focus::QueryBar);
        }
        ring.push(Focus::Results);
        if self.button {
            ring.push(Focus::Button);
        }
        ring
    }

    fn cycle_focus(&mut self, forward: bool) {
        let ring = self.focus_ring();
        let current = ring.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % ring.len()
        } else {
            (current + ring.len() - 1) % ring.len()
        };
        tracing::debug!(from = ?self.focus, to = ?ring[next], "focus cycle");
        self.focus = ring[next];
    }

    fn hit(&self, column: u16, row: u16) -> Option<Focus> {
        let at = Position::new(column, row);
        if self.query.is_some() && self.query_area.get().contains(at) {
            Some(Focus::QueryBar)
        } else if self.button && self.button_area.get().contains(at) {
            Some(Focus::Button)
        } else if self.results_area.get().contains(at) {
            Some(Focus::Results)
        } else {
            None
        }
    }
}

impl Surface for AppState {
    fn has_element(&self, id: &str) -> bool {
        match id {
            RESULTS_ID => true,
            BUTTON_ID => self.button,
            other => self.query.as_ref().is_some_and(|q| q.id == other),
        }
    }

    fn input_value(&self, id: &str) -> Option<String> {
        self.query
            .as_ref()
            .filter(|q| q.id == id)
            .map(|q| q.query.clone())
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
    binder: Binder<ResultsState>,
}

impl App {
    pub fn new(config: &Config, location: impl Into<String>, theme: Theme) -> Self {
        let query = (!config.ui.input_id.is_empty())
            .then(|| QueryBarState::new(config.ui.input_id.as_str()));
        let focus = if query.is_some() {
            Focus::QueryBar
        } else {
            Focus::Results
        };

        let state = AppState {
            focus,
            query,
            button: config.ui.search_button,
            results: Rc::new(RefCell::new(ResultsState::default())),
            theme,
            location: location.into(),
            show_help: false,
            quit: false,
            query_area: Cell::new(Rect::default()),
            button_area: Cell::new(Rect::default()),
            results_area: Cell::new(Rect::default()),
        };

        let binder = Binder::bind(
            &state,
            RecordStore::new(),
            Rc::clone(&state.results),
            LocalScheduler,
            config.search.debounce(),
        );

        App { state, binder }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    ///
    /// Must be awaited inside a [`tokio::task::LocalSet`].
    pub async fn run<F: Fetch + 'static>(mut self, source: F) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let loading = self.binder.start(source);
        let result = self.event_loop(&mut terminal).await;
        if let Some(task) = loading {
            task.abort();
        }

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    async fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        B::Error: Send + Sync + 'static,
    {
        let mut events = EventStream::new();
        let mut tick = tokio::time::interval(FRAME);

        loop {
            self.draw(terminal)?;

            if self.state.quit {
                break;
            }

            // The tick redraws after debounced searches and the load land.
            tokio::select! {
                maybe = events.next() => match maybe {
                    Some(Ok(raw)) => self.on_terminal_event(raw),
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                },
                _ = tick.tick() => {}
            }
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        B::Error: Send + Sync + 'static,
    {
        let status = self.binder.load_status();
        terminal.draw(|frame| draw(frame, &self.state, status))?;
        Ok(())
    }

    fn on_terminal_event(&mut self, raw: Event) {
        let app_event = match raw {
            Event::Key(key) if key.kind != KeyEventKind::Press => None,
            // Use insert-mode mapping when the query bar is focused
            raw if self.state.focus == Focus::QueryBar => event::to_app_event_insert(raw),
            raw => event::to_app_event(raw),
        };
        if let Some(ev) = app_event {
            tracing::debug!(focus = ?self.state.focus, event = ?ev, "terminal event");
            self.handle(ev);
        }
    }

    fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    s.show_help = false;
                }
                _ => {}
            }
            return;
        }

        match event {
            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            AppEvent::Char('?') if s.focus != Focus::QueryBar => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            AppEvent::Escape if s.focus == Focus::QueryBar => {
                tracing::debug!("focus: QueryBar -> Results");
                s.focus = Focus::Results;
            }
            AppEvent::Escape => s.quit = true,

            AppEvent::FocusNext => s.cycle_focus(true),
            AppEvent::FocusPrev => s.cycle_focus(false),

            AppEvent::Click(column, row) => {
                if let Some(target) = s.hit(column, row) {
                    s.focus = target;
                    if target == Focus::Button {
                        self.binder.dispatch(&self.state, UiEvent::ButtonActivated);
                    }
                }
            }

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => self.dispatch_to_focused(other),
        }
    }

    /// Route an event to the element that owns the current focus.
    fn dispatch_to_focused(&mut self, event: AppEvent) {
        match self.state.focus {
            Focus::QueryBar => {
                let Some(query) = self.state.query.as_mut() else {
                    return;
                };
                let ui_event = if event == AppEvent::Enter {
                    UiEvent::KeyPressed(Key::Enter, query.query.clone())
                } else if query.handle(&event) {
                    UiEvent::InputChanged(query.query.clone())
                } else {
                    UiEvent::KeyPressed(Key::Other, query.query.clone())
                };
                self.binder.dispatch(&self.state, ui_event);
            }
            Focus::Results => match event {
                AppEvent::Enter | AppEvent::Char('o') => self.open_selected(),
                other => self.state.results.borrow_mut().handle(&other),
            },
            Focus::Button => {
                if matches!(event, AppEvent::Enter | AppEvent::Char(' ')) {
                    self.binder.dispatch(&self.state, UiEvent::ButtonActivated);
                }
            }
        }
    }

    fn open_selected(&self) {
        let results = self.state.results.borrow();
        let Some(link) = results.selected_link() else {
            return;
        };
        tracing::info!(href = %link.href, "opening link");
        if let Err(e) = open::that_detached(&link.href) {
            tracing::warn!(href = %link.href, error = %e, "failed to open link");
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState, status: LoadStatus) {
    let area = frame.area();

    // Vertical: 3-line query row | results | 1-line status
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(if state.query.is_some() || state.button { 3 } else { 0 }),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(area);

    let button_width = if state.button { search_button::WIDTH } else { 0 };
    let top = Layout::default()
        .direction(LayoutDir::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Length(button_width)])
        .split(vert[0]);

    state.query_area.set(top[0]);
    state.button_area.set(top[1]);
    state.results_area.set(vert[1]);

    if let Some(query) = &state.query {
        frame.render_widget(
            QueryBar::new(query, state.focus == Focus::QueryBar, &state.theme),
            top[0],
        );
    }
    if state.button {
        frame.render_widget(
            SearchButton::new(state.focus == Focus::Button, &state.theme),
            top[1],
        );
    }

    let results = state.results.borrow();
    frame.render_widget(
        ResultsPane::new(&results, state.focus == Focus::Results, &state.theme),
        vert[1],
    );
    frame.render_widget(
        StatusLine::new(status, &state.location, results.blocks().len(), &state.theme),
        vert[2],
    );

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
        return;
    }

    // Position the terminal cursor when the query bar is focused
    if let (Focus::QueryBar, Some(query)) = (state.focus, &state.query) {
        let qb = QueryBar::new(query, true, &state.theme);
        let (cx, cy) = qb.cursor_position(top[0]);
        frame.set_cursor_position((cx, cy));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
