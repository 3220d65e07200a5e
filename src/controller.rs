//! Debounced search pipeline: input → filter → render → count → history.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::debounce::Debouncer;
use crate::error::LoadError;
use crate::prefs::Preferences;
use crate::render::{RenderOutput, Renderer};
use crate::store::{SearchQuery, VerbStore};
use crate::viewport::Viewport;

/// Delays applied by the controller's debouncers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTimings {
    pub input: Duration,
    pub resize: Duration,
    /// Used instead of `resize` when the viewport flips between portrait and
    /// landscape.
    pub orientation: Duration,
}

impl Default for SearchTimings {
    fn default() -> Self {
        Self {
            input: Duration::from_millis(150),
            resize: Duration::from_millis(250),
            orientation: Duration::from_millis(100),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    /// An input is waiting for the quiet period to end.
    Debouncing,
    Filtering,
    /// The last tick produced a new render; becomes `Idle` on the next quiet
    /// tick.
    Rendered,
}

#[derive(Debug, Clone)]
struct PendingResize {
    viewport: Viewport,
    orientation_changed: bool,
}

pub struct SearchController {
    store: VerbStore,
    renderer: Renderer,
    prefs: Preferences,
    viewport: Viewport,
    timings: SearchTimings,
    query: SearchQuery,
    output: RenderOutput,
    match_count: usize,
    phase: SearchPhase,
    load_error: Option<String>,
    input: Debouncer<SearchQuery>,
    resize: Debouncer<PendingResize>,
    focus_requested: bool,
    scroll_reset: bool,
}

impl SearchController {
    /// Build a controller over a loaded store and render the full list.
    pub fn new(
        store: VerbStore,
        prefs: Preferences,
        viewport: Viewport,
        timings: SearchTimings,
    ) -> Self {
        let mut controller = Self {
            store,
            renderer: Renderer::new(),
            prefs,
            viewport,
            timings,
            query: SearchQuery::default(),
            output: RenderOutput::Empty,
            match_count: 0,
            phase: SearchPhase::Idle,
            load_error: None,
            input: Debouncer::new(timings.input),
            resize: Debouncer::new(timings.resize),
            focus_requested: false,
            scroll_reset: false,
        };
        controller.match_count = controller.store.filtered().len();
        controller.rerender();
        controller
    }

    /// Schedule a search for `raw`. Only the last input inside the quiet
    /// period runs.
    pub fn on_input(&mut self, raw: &str, now: Instant) {
        self.input.schedule(SearchQuery::new(raw), now);
        self.phase = SearchPhase::Debouncing;
    }

    /// Run a search immediately, bypassing the debouncer.
    pub fn submit(&mut self, raw: &str) {
        self.input.cancel();
        self.run_search(SearchQuery::new(raw));
    }

    /// Drop any pending search and show the full list again.
    pub fn on_clear(&mut self) {
        self.input.cancel();
        self.query = SearchQuery::default();
        let verbs = self.store.filter(&self.query);
        self.match_count = verbs.len();
        self.rerender();
        self.focus_requested = true;
        self.phase = SearchPhase::Idle;
    }

    /// Schedule a re-render for the new terminal size.
    pub fn on_resize(&mut self, columns: u16, rows: u16, now: Instant) {
        let viewport = self.viewport.resized(columns, rows);
        let orientation_changed = viewport.orientation() != self.viewport.orientation();
        let delay = if orientation_changed {
            self.timings.orientation
        } else {
            self.timings.resize
        };
        self.resize.schedule_after(
            PendingResize {
                viewport,
                orientation_changed,
            },
            now,
            delay,
        );
    }

    /// Switch to the error state; it stays for the rest of the session.
    pub fn on_load_failed(&mut self, error: &LoadError) {
        self.load_error = Some(error.user_message());
        self.match_count = 0;
        self.rerender();
    }

    /// Advance both debouncers. Returns whether the output changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if let Some(pending) = self.resize.poll(now) {
            self.viewport = pending.viewport;
            if pending.orientation_changed {
                self.scroll_reset = true;
            }
            self.rerender();
            changed = true;
        }

        if let Some(query) = self.input.poll(now) {
            self.run_search(query);
            changed = true;
        } else if !changed && self.phase == SearchPhase::Rendered {
            self.phase = SearchPhase::Idle;
        }

        changed
    }

    fn run_search(&mut self, query: SearchQuery) {
        self.phase = SearchPhase::Filtering;
        let verbs = self.store.filter(&query);
        self.query = query;
        self.match_count = verbs.len();
        self.rerender();
        if self.store.record_search(&self.query, self.match_count) {
            self.prefs.set_history(self.store.history());
        }
        debug!(query = %self.query, matches = self.match_count, "search rendered");
        self.phase = SearchPhase::Rendered;
    }

    fn rerender(&mut self) {
        self.output = match &self.load_error {
            Some(message) => self.renderer.render_error(message.clone()),
            None => self.renderer.render(
                self.store.filtered(),
                self.query.as_str(),
                self.viewport.is_narrow(),
            ),
        };
    }

    #[must_use]
    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    #[must_use]
    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    #[must_use]
    pub fn match_count(&self) -> usize {
        self.match_count
    }

    #[must_use]
    pub fn output(&self) -> &RenderOutput {
        &self.output
    }

    #[must_use]
    pub fn narrow(&self) -> bool {
        self.viewport.is_narrow()
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn store(&self) -> &VerbStore {
        &self.store
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.store.full().len()
    }

    #[must_use]
    pub fn has_pending_input(&self) -> bool {
        self.input.is_pending()
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    pub fn preferences_mut(&mut self) -> &mut Preferences {
        &mut self.prefs
    }

    /// Whether the UI should move focus to the search input. Reading clears
    /// the request.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    /// Whether the table should scroll back to the top. Reading clears the
    /// request.
    pub fn take_scroll_reset(&mut self) -> bool {
        std::mem::take(&mut self.scroll_reset)
    }
}
