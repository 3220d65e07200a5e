use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::render::table::draw_output;

use super::App;
use super::state::Focus;

const TITLE: &str = "Irregular Verbs";
const SHORTCUTS: &str = "Esc clear · Enter table · Ctrl+K search · Ctrl+T theme · Ctrl+Q quit";

impl<'a> App<'a> {
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::new().style(self.theme.base), area);

        let area = if self.controller.viewport().is_mobile() {
            area
        } else {
            area.inner(Margin {
                vertical: 0,
                horizontal: 1,
            })
        };

        let [title_area, input_area, table_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_title(frame, title_area);
        self.render_input(frame, input_area);

        self.page_rows = usize::from(table_area.height.saturating_sub(1)).max(1);
        self.clamp_scroll();
        draw_output(
            frame,
            table_area,
            self.controller.output(),
            &self.theme,
            self.controller.narrow(),
            self.scroll,
        );

        let footer = Paragraph::new(SHORTCUTS).style(self.theme.muted);
        frame.render_widget(footer, footer_area);
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let title = Line::from(vec![
            Span::styled(TITLE, self.theme.header),
            Span::styled(format!("  {} theme", self.theme_preference), self.theme.muted),
        ]);
        frame.render_widget(Paragraph::new(title), area);
    }

    fn render_input(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focus == Focus::Input {
            self.theme.prompt
        } else {
            self.theme.muted
        };

        let mut status = vec![Span::styled(
            count_label(self.controller.match_count()),
            self.theme.muted,
        )];
        if !self.search_input.is_empty() {
            status.push(Span::styled("  ✕ Esc", self.theme.prompt));
        }

        let block = Block::new()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search ")
            .title_bottom(Line::from(status).alignment(Alignment::Right));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.search_input.render(frame, inner, &self.theme);
    }
}

fn count_label(count: usize) -> String {
    if count == 1 {
        "1 verb".to_string()
    } else {
        format!("{count} verbs")
    }
}

#[cfg(test)]
mod tests {
    use super::count_label;

    #[test]
    fn count_label_pluralises() {
        assert_eq!(count_label(0), "0 verbs");
        assert_eq!(count_label(1), "1 verb");
        assert_eq!(count_label(103), "103 verbs");
    }
}
