//! Binder: wires surface events to the debouncer, matcher and renderer.
//!
//! A front end describes itself through [`Surface`]: which element ids exist
//! and what the input currently holds. [`Binder::bind`] looks the elements up
//! once; any missing element simply disables the bindings that need it.
//!
//! | Element id                  | Event                 | Handling              |
//! |-----------------------------|-----------------------|-----------------------|
//! | `searchInput` / `searchBox` | value changed         | debounced search      |
//! | `searchInput` / `searchBox` | key pressed (Enter)   | immediate search      |
//! | `searchButton`              | activated             | immediate search      |
//!
//! Immediate searches are never coalesced with each other or with a pending
//! debounced search; whichever renders last wins.

use crate::{
    debounce::{Debouncer, LocalScheduler, Scheduler},
    loader::{self, Fetch},
    matcher::search,
    render::{render, ResultsView},
    store::RecordStore,
};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

/// Results area element id.
pub const RESULTS_ID: &str = "results";
/// Accepted input element ids, in lookup order.
pub const INPUT_IDS: [&str; 2] = ["searchInput", "searchBox"];
/// Optional search button element id.
pub const BUTTON_ID: &str = "searchButton";

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Element lookup on the hosting front end.
pub trait Surface {
    fn has_element(&self, id: &str) -> bool;

    /// Current value of the input element `id`, if it exists.
    fn input_value(&self, id: &str) -> Option<String>;
}

/// Keys the binder distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

/// Front-end events routed through [`Binder::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The input value changed; carries the new value.
    InputChanged(String),
    /// A key was pressed in the input; carries the value at that moment.
    KeyPressed(Key, String),
    /// The search button was activated.
    ButtonActivated,
}

/// Progress of the one-time startup load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Pending,
    Loaded(usize),
    Failed,
}

pub struct Binder<V: ResultsView + 'static, S: Scheduler = LocalScheduler> {
    store: RecordStore,
    view: Rc<RefCell<V>>,
    input_id: Option<&'static str>,
    button: bool,
    debounced: Option<Debouncer<String, S>>,
    status: Rc<Cell<LoadStatus>>,
    started: Cell<bool>,
}

impl<V: ResultsView + 'static, S: Scheduler> Binder<V, S> {
    /// Look up the surface elements and attach handlers for those present.
    pub fn bind(
        surface: &dyn Surface,
        store: RecordStore,
        view: Rc<RefCell<V>>,
        scheduler: S,
        wait: Duration,
    ) -> Self {
        let input_id = INPUT_IDS.into_iter().find(|id| surface.has_element(id));
        let button = surface.has_element(BUTTON_ID);

        match input_id {
            Some(id) => tracing::debug!(id, "bound input element"),
            None => tracing::debug!("no input element; input bindings skipped"),
        }
        if !button {
            tracing::debug!("no search button; click binding skipped");
        }

        let debounced = input_id.map(|_| {
            let store = store.clone();
            let view = Rc::clone(&view);
            Debouncer::new(scheduler, wait, move |query: String| {
                run_search(&store, &*view, &query)
            })
        });

        Self {
            store,
            view,
            input_id,
            button,
            debounced,
            status: Rc::new(Cell::new(LoadStatus::Pending)),
            started: Cell::new(false),
        }
    }

    /// Kick off the startup load on the current `LocalSet`.
    ///
    /// Only the first call spawns anything; later calls return `None`.
    pub fn start<F: Fetch + 'static>(&self, source: F) -> Option<tokio::task::JoinHandle<()>> {
        if self.started.replace(true) {
            return None;
        }
        let store = self.store.clone();
        let view = Rc::clone(&self.view);
        let status = Rc::clone(&self.status);
        Some(tokio::task::spawn_local(async move {
            let outcome = match loader::load(&source, &store, &*view).await {
                Ok(count) => LoadStatus::Loaded(count),
                Err(_) => LoadStatus::Failed,
            };
            status.set(outcome);
        }))
    }

    /// Route one front-end event.
    pub fn dispatch(&self, surface: &dyn Surface, event: UiEvent) {
        match event {
            UiEvent::InputChanged(value) => {
                if let Some(debounced) = &self.debounced {
                    debounced.call(value);
                }
            }
            UiEvent::KeyPressed(Key::Enter, value) if self.input_id.is_some() => {
                tracing::debug!("enter pressed; searching immediately");
                run_search(&self.store, &*self.view, &value);
            }
            UiEvent::KeyPressed(..) => {}
            UiEvent::ButtonActivated if self.button => {
                let query = self
                    .input_id
                    .and_then(|id| surface.input_value(id))
                    .unwrap_or_default();
                tracing::debug!(query = %query, "search button activated");
                run_search(&self.store, &*self.view, &query);
            }
            UiEvent::ButtonActivated => {}
        }
    }

    /// Search right away with `query`, bypassing the debouncer.
    pub fn search_now(&self, query: &str) {
        run_search(&self.store, &*self.view, query);
    }

    /// The input element id that was found, if any.
    pub fn input_id(&self) -> Option<&'static str> {
        self.input_id
    }

    pub fn has_button(&self) -> bool {
        self.button
    }

    pub fn load_status(&self) -> LoadStatus {
        self.status.get()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }
}

fn run_search<V: ResultsView + ?Sized>(store: &RecordStore, view: &RefCell<V>, query: &str) {
    let records = store.snapshot();
    let outcome = search(&records, query);
    render(&mut *view.borrow_mut(), &outcome);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
