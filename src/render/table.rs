use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Cell, Paragraph, Row, Table, TableState, Wrap};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use super::{COLUMN_LABELS, CellView, EMPTY_MESSAGE, RenderOutput, RowView};
use crate::theme::Theme;

const TABLE_COLUMN_SPACING: u16 = 1;
const ELLIPSIS: &str = "…";

/// Paint the render output into `area`. `scroll` is the index of the first
/// visible row.
pub fn draw_output(
    frame: &mut Frame,
    area: Rect,
    output: &RenderOutput,
    theme: &Theme,
    narrow: bool,
    scroll: usize,
) {
    match output {
        RenderOutput::Rows(rows) => draw_rows(frame, area, rows, theme, narrow, scroll),
        RenderOutput::Empty => {
            draw_header(frame, area, theme, narrow);
            let message = Paragraph::new(EMPTY_MESSAGE)
                .style(theme.empty)
                .alignment(Alignment::Center);
            frame.render_widget(message, body_area(area));
        }
        RenderOutput::Error(message) => {
            let error = Paragraph::new(format!("Error: {message}"))
                .style(theme.danger)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(error, area);
        }
    }
}

/// Largest scroll offset that still fills the body with rows.
#[must_use]
pub fn max_scroll(row_count: usize, area_height: u16) -> usize {
    let visible = usize::from(area_height.saturating_sub(1));
    row_count.saturating_sub(visible)
}

/// Equal column widths filling `width` after spacing; leftover cells go to
/// the leading columns.
fn column_widths(width: u16, narrow: bool) -> Vec<u16> {
    let columns = column_count(narrow) as u16;
    let available = width.saturating_sub(TABLE_COLUMN_SPACING * (columns - 1));
    let base = available / columns;
    let extra = available % columns;
    (0..columns)
        .map(|index| base + u16::from(index < extra))
        .collect()
}

fn column_constraints(widths: &[u16]) -> Vec<Constraint> {
    widths.iter().copied().map(Constraint::Length).collect()
}

fn column_count(narrow: bool) -> usize {
    if narrow { 3 } else { 4 }
}

fn header_row(theme: &Theme, narrow: bool) -> Row<'static> {
    Row::new(
        COLUMN_LABELS
            .iter()
            .take(column_count(narrow))
            .map(|label| Cell::from(*label)),
    )
    .style(theme.header_style())
    .height(1)
}

fn draw_header(frame: &mut Frame, area: Rect, theme: &Theme, narrow: bool) {
    let widths = column_widths(area.width, narrow);
    let table = Table::new(Vec::<Row>::new(), column_constraints(&widths))
        .header(header_row(theme, narrow))
        .column_spacing(TABLE_COLUMN_SPACING);
    frame.render_widget(table, area);
}

fn body_area(area: Rect) -> Rect {
    let [_, body] = Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);
    body
}

fn draw_rows(
    frame: &mut Frame,
    area: Rect,
    rows: &[RowView],
    theme: &Theme,
    narrow: bool,
    scroll: usize,
) {
    let widths = column_widths(area.width, narrow);
    let table_rows = rows.iter().enumerate().map(|(index, row)| {
        let cells = row
            .cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| highlight_cell(cell, *width, theme));
        Row::new(cells.collect::<Vec<_>>()).style(theme.row_style(index))
    });

    let table = Table::new(table_rows, column_constraints(&widths))
        .header(header_row(theme, narrow))
        .column_spacing(TABLE_COLUMN_SPACING)
        .style(theme.base);
    let offset = scroll.min(max_scroll(rows.len(), area.height));
    let mut state = TableState::new().with_offset(offset);
    frame.render_stateful_widget(table, area, &mut state);
}

/// Build a table cell with highlighted segments, truncated to `max_width`.
pub(crate) fn highlight_cell(cell: &CellView, max_width: u16, theme: &Theme) -> Cell<'static> {
    let highlight_style = theme.highlight_style();
    let style_for = |highlighted: bool| {
        if highlighted {
            highlight_style
        } else {
            Style::default()
        }
    };

    let max_width = usize::from(max_width);
    let total: usize = cell.segments.iter().map(|segment| segment.text.width()).sum();
    if total <= max_width {
        let spans: Vec<_> = cell
            .segments
            .iter()
            .map(|segment| Span::styled(segment.text.clone(), style_for(segment.highlighted)))
            .collect();
        return Cell::from(Text::from(Line::from(spans)));
    }
    if max_width == 0 {
        return Cell::from("");
    }

    let mut budget = max_width.saturating_sub(ELLIPSIS.width());
    let mut spans = Vec::new();
    for segment in &cell.segments {
        if budget == 0 {
            break;
        }
        let (slice, used) = segment.text.as_str().unicode_truncate(budget);
        if !slice.is_empty() {
            spans.push(Span::styled(slice.to_string(), style_for(segment.highlighted)));
        }
        budget -= used;
        if slice.len() < segment.text.len() {
            break;
        }
    }
    spans.push(Span::raw(ELLIPSIS));
    Cell::from(Text::from(Line::from(spans)))
}
