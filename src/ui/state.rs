use std::time::Instant;

use crate::controller::SearchController;
use crate::theme::{Theme, ThemePreference};

use super::input::SearchInput;
use super::placeholder::PlaceholderRotation;

/// Which widget receives plain key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Table,
}

pub struct App<'a> {
    pub(crate) controller: SearchController,
    pub(crate) search_input: SearchInput<'a>,
    pub(crate) placeholder: PlaceholderRotation,
    pub(crate) theme_preference: ThemePreference,
    pub theme: Theme,
    pub(crate) focus: Focus,
    /// Index of the first visible table row.
    pub(crate) scroll: usize,
    /// Body rows visible in the last drawn table, used for paging.
    pub(crate) page_rows: usize,
    pub(crate) should_quit: bool,
}

impl<'a> App<'a> {
    /// Build the app around a controller. `theme_override` comes from the
    /// command line or configuration and wins over the stored preference.
    pub fn new(
        controller: SearchController,
        initial_query: &str,
        theme_override: Option<ThemePreference>,
        now: Instant,
    ) -> Self {
        let theme_preference =
            theme_override.unwrap_or_else(|| controller.preferences().theme());
        let placeholder = PlaceholderRotation::new(now);
        let mut search_input = SearchInput::new(initial_query);
        search_input.set_placeholder(placeholder.current());

        let focus = if initial_query.is_empty() {
            Focus::Table
        } else {
            Focus::Input
        };
        search_input.set_focused(focus == Focus::Input);

        Self {
            controller,
            search_input,
            placeholder,
            theme_preference,
            theme: theme_preference.theme(),
            focus,
            scroll: 0,
            page_rows: 1,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn controller(&self) -> &SearchController {
        &self.controller
    }

    #[must_use]
    pub fn theme_preference(&self) -> ThemePreference {
        self.theme_preference
    }

    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    #[must_use]
    pub fn query_text(&self) -> &str {
        self.search_input.text()
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Advance timers: debounced searches, resizes, and the placeholder.
    pub fn tick(&mut self, now: Instant) {
        if self.controller.poll(now) {
            self.clamp_scroll();
        }
        if self.controller.take_scroll_reset() {
            self.scroll = 0;
        }
        if self.controller.take_focus_request() {
            self.set_focus(Focus::Input);
        }

        let idle = self.search_input.is_empty() && self.focus != Focus::Input;
        if let Some(hint) = self.placeholder.tick(now, idle) {
            self.search_input.set_placeholder(hint);
        }
    }

    pub(crate) fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.search_input.set_focused(focus == Focus::Input);
    }

    pub(crate) fn toggle_theme(&mut self) {
        self.theme_preference = self.theme_preference.toggled();
        self.theme = self.theme_preference.theme();
        self.controller
            .preferences_mut()
            .set_theme(self.theme_preference);
    }

    pub(crate) fn row_count(&self) -> usize {
        self.controller.output().rows().len()
    }

    pub(crate) fn clamp_scroll(&mut self) {
        let max = self.row_count().saturating_sub(self.page_rows.max(1));
        self.scroll = self.scroll.min(max);
    }
}
