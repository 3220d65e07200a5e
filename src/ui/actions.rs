use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::state::Focus;

impl<'a> App<'a> {
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c' | 'q') if ctrl => self.should_quit = true,
            KeyCode::Char('k') if ctrl => {
                self.set_focus(Focus::Input);
                self.search_input.select_all();
            }
            KeyCode::Char('t') if ctrl => self.toggle_theme(),
            KeyCode::Esc => self.clear_search(),
            KeyCode::Enter => self.set_focus(Focus::Table),
            KeyCode::Up => self.scroll_up(1),
            KeyCode::Down => self.scroll_down(1),
            KeyCode::PageUp => self.scroll_up(self.page_rows),
            KeyCode::PageDown => self.scroll_down(self.page_rows),
            KeyCode::Home if self.focus == Focus::Table => self.scroll = 0,
            _ => self.edit_query(key, now),
        }
    }

    fn edit_query(&mut self, key: KeyEvent, now: Instant) {
        if self.focus == Focus::Table {
            let typing = matches!(key.code, KeyCode::Char(_) | KeyCode::Backspace)
                && !key.modifiers.contains(KeyModifiers::CONTROL);
            if !typing {
                return;
            }
            self.set_focus(Focus::Input);
        }
        if self.search_input.input(key) {
            self.controller.on_input(self.search_input.text(), now);
        }
    }

    fn clear_search(&mut self) {
        self.search_input.clear();
        self.controller.on_clear();
        self.scroll = 0;
        if self.controller.take_focus_request() {
            self.set_focus(Focus::Input);
        }
    }

    fn scroll_up(&mut self, rows: usize) {
        self.scroll = self.scroll.saturating_sub(rows.max(1));
    }

    fn scroll_down(&mut self, rows: usize) {
        self.scroll = self.scroll.saturating_add(rows.max(1));
        self.clamp_scroll();
    }
}
