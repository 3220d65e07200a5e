use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, Input, Key, TextArea};

use crate::theme::Theme;

/// Single-line search field.
pub struct SearchInput<'a> {
    textarea: TextArea<'a>,
    focused: bool,
}

impl<'a> SearchInput<'a> {
    pub fn new(initial: &str) -> Self {
        let mut textarea = TextArea::new(vec![initial.to_string()]);
        textarea.set_cursor_line_style(Style::default());
        textarea.move_cursor(CursorMove::End);
        Self {
            textarea,
            focused: true,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    /// Feed a key press. Returns whether the text changed. Keys that would
    /// start a second line are ignored.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        let input = Input::from(key);
        if inserts_newline(&input) {
            return false;
        }
        let before = self.text().to_string();
        self.textarea.input(input);
        self.text() != before
    }

    pub fn clear(&mut self) {
        self.textarea.select_all();
        self.textarea.cut();
        self.textarea.cancel_selection();
    }

    pub fn select_all(&mut self) {
        self.textarea.select_all();
    }

    pub fn set_placeholder(&mut self, text: &str) {
        self.textarea.set_placeholder_text(text);
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            self.textarea.cancel_selection();
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let cursor = if self.focused {
            theme.prompt.add_modifier(ratatui::style::Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.textarea.set_cursor_style(cursor);
        self.textarea.set_style(theme.base);
        self.textarea.set_placeholder_style(theme.muted);
        frame.render_widget(&self.textarea, area);
    }
}

fn inserts_newline(input: &Input) -> bool {
    match input.key {
        Key::Enter => true,
        Key::Char('m') => input.ctrl && !input.alt,
        Key::Char('\n' | '\r') => !input.ctrl && !input.alt,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use ratatui::crossterm::event::{KeyCode, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_changes_text() {
        let mut input = SearchInput::new("");
        assert!(input.input(key(KeyCode::Char('g'))));
        assert!(input.input(key(KeyCode::Char('o'))));
        assert_eq!(input.text(), "go");
    }

    #[test]
    fn cursor_keys_do_not_report_changes() {
        let mut input = SearchInput::new("went");
        assert!(!input.input(key(KeyCode::Left)));
        assert_eq!(input.text(), "went");
    }

    #[test]
    fn initial_text_is_editable_at_end() {
        let mut input = SearchInput::new("wen");
        input.input(key(KeyCode::Char('t')));
        assert_eq!(input.text(), "went");
    }

    #[test]
    fn newline_keys_keep_a_single_line() {
        let mut input = SearchInput::new("to");
        assert!(!input.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
        assert!(!input.input(key(KeyCode::Enter)));
        assert!(input.input(key(KeyCode::Char('o'))));
        assert_eq!(input.text(), "too");
        assert_eq!(input.textarea.lines().len(), 1);
    }

    #[test]
    fn clear_empties_the_field() {
        let mut input = SearchInput::new("gone");
        input.clear();
        assert!(input.is_empty());
    }
}
