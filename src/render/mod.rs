//! Projection of verb records into display rows with highlighted matches.
//!
//! The output of [`Renderer::render`] is plain data; [`table`] paints it into a
//! ratatui frame.

pub mod table;

use regex::{Regex, RegexBuilder};
use tracing::warn;

use crate::verbs::{VerbCollection, VerbRecord};

/// Header labels in display order. Narrow layouts use the first three.
pub const COLUMN_LABELS: [&str; 4] = ["Infinitive", "Past Simple", "Past Participle", "Translation"];

pub const EMPTY_MESSAGE: &str = "No verbs found";

/// Compiled size cap for the highlight pattern.
const HIGHLIGHT_SIZE_LIMIT: usize = 1 << 20;

/// A run of cell text that is either a match or ordinary text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellView {
    pub segments: Vec<Segment>,
}

impl CellView {
    /// Unstyled cell text.
    #[must_use]
    pub fn text(&self) -> String {
        self.segments.iter().map(|segment| segment.text.as_str()).collect()
    }

    /// Cell text with each highlighted run wrapped in `open` and `close`.
    #[must_use]
    pub fn marked(&self, open: &str, close: &str) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            if segment.highlighted {
                out.push_str(open);
                out.push_str(&segment.text);
                out.push_str(close);
            } else {
                out.push_str(&segment.text);
            }
        }
        out
    }

    #[must_use]
    pub fn has_highlight(&self) -> bool {
        self.segments.iter().any(|segment| segment.highlighted)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowView {
    pub cells: Vec<CellView>,
}

impl RowView {
    /// Cells joined with ` | `, highlights wrapped in brackets.
    #[must_use]
    pub fn marked_line(&self) -> String {
        self.cells
            .iter()
            .map(|cell| cell.marked("[", "]"))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// What the table area shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RenderOutput {
    Rows(Vec<RowView>),
    /// Nothing matched.
    #[default]
    Empty,
    /// The verb list could not be loaded.
    Error(String),
}

impl RenderOutput {
    #[must_use]
    pub fn rows(&self) -> &[RowView] {
        match self {
            Self::Rows(rows) => rows,
            Self::Empty | Self::Error(_) => &[],
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer;

impl Renderer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// One row per record; three cells when `narrow`, four otherwise.
    #[must_use]
    pub fn render(&self, verbs: &VerbCollection, highlight_term: &str, narrow: bool) -> RenderOutput {
        if verbs.is_empty() {
            return RenderOutput::Empty;
        }
        let pattern = highlight_pattern(highlight_term);
        let rows = verbs
            .iter()
            .map(|record| render_row(record, pattern.as_ref(), narrow))
            .collect();
        RenderOutput::Rows(rows)
    }

    #[must_use]
    pub fn render_error(&self, message: impl Into<String>) -> RenderOutput {
        RenderOutput::Error(message.into())
    }
}

fn render_row(record: &VerbRecord, pattern: Option<&Regex>, narrow: bool) -> RowView {
    let columns = if narrow { 3 } else { 4 };
    let cells = record
        .fields()
        .into_iter()
        .take(columns)
        .map(|field| highlight(field, pattern))
        .collect();
    RowView { cells }
}

/// Case-insensitive pattern matching `term` literally.
fn highlight_pattern(term: &str) -> Option<Regex> {
    compile_highlight(term, HIGHLIGHT_SIZE_LIMIT)
}

/// Case-insensitive literal pattern for `term`. A pattern that fails to
/// compile is logged and the rows render without highlights.
fn compile_highlight(term: &str, size_limit: usize) -> Option<Regex> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }
    match RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .size_limit(size_limit)
        .build()
    {
        Ok(pattern) => Some(pattern),
        Err(err) => {
            warn!(term, error = %err, "highlight pattern rejected; rendering without highlights");
            None
        }
    }
}

fn highlight(text: &str, pattern: Option<&Regex>) -> CellView {
    let Some(pattern) = pattern else {
        return plain(text);
    };

    let mut segments = Vec::new();
    let mut cursor = 0;
    for found in pattern.find_iter(text) {
        if found.start() > cursor {
            segments.push(Segment {
                text: text[cursor..found.start()].to_string(),
                highlighted: false,
            });
        }
        segments.push(Segment {
            text: found.as_str().to_string(),
            highlighted: true,
        });
        cursor = found.end();
    }
    if cursor < text.len() {
        segments.push(Segment {
            text: text[cursor..].to_string(),
            highlighted: false,
        });
    }
    if segments.is_empty() {
        return plain(text);
    }
    CellView { segments }
}

fn plain(text: &str) -> CellView {
    CellView {
        segments: vec![Segment {
            text: text.to_string(),
            highlighted: false,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verbs() -> VerbCollection {
        vec![
            VerbRecord::new("go", "went", "gone", "идти"),
            VerbRecord::new("forgo", "forwent", "forgone", "воздерживаться"),
        ]
        .into()
    }

    #[test]
    fn rejected_pattern_leaves_cells_plain() {
        assert!(compile_highlight("went", 10).is_none());
        let cell = highlight("went", None);
        assert_eq!(cell.marked("[", "]"), "went");
        assert!(compile_highlight("went", HIGHLIGHT_SIZE_LIMIT).is_some());
    }

    #[test]
    fn wide_rows_include_translation() {
        let output = Renderer::new().render(&verbs(), "", false);
        assert_eq!(output.rows().len(), 2);
        assert_eq!(output.rows()[0].cells.len(), 4);
        assert_eq!(output.rows()[0].cells[3].text(), "идти");
    }

    #[test]
    fn narrow_rows_drop_translation() {
        let output = Renderer::new().render(&verbs(), "", true);
        assert!(output.rows().iter().all(|row| row.cells.len() == 3));
    }

    #[test]
    fn every_occurrence_is_highlighted_case_insensitively() {
        let collection: VerbCollection = vec![VerbRecord::new("Go-go", "went", "gone", "идти")].into();
        let output = Renderer::new().render(&collection, "go", false);
        let row = &output.rows()[0];
        assert_eq!(row.cells[0].marked("[", "]"), "[Go]-[go]");
        assert_eq!(row.cells[2].marked("[", "]"), "[go]ne");
        assert!(!row.cells[1].has_highlight());
    }

    #[test]
    fn regex_metacharacters_match_literally() {
        let collection: VerbCollection =
            vec![VerbRecord::new("a.b*", "axbb", "a.b*c", "x")].into();
        let output = Renderer::new().render(&collection, "a.b*", false);
        let row = &output.rows()[0];
        assert_eq!(row.cells[0].marked("<", ">"), "<a.b*>");
        assert_eq!(row.cells[1].marked("<", ">"), "axbb");
        assert_eq!(row.cells[2].marked("<", ">"), "<a.b*>c");
    }

    #[test]
    fn cyrillic_matches_are_highlighted() {
        let output = Renderer::new().render(&verbs(), "ИД", false);
        assert_eq!(output.rows()[0].cells[3].marked("[", "]"), "[ид]ти");
    }

    #[test]
    fn empty_and_error_are_distinct() {
        let renderer = Renderer::new();
        let empty = renderer.render(&VerbCollection::new(), "xyz", false);
        assert_eq!(empty, RenderOutput::Empty);
        let error = renderer.render_error("HTTP error! status: 404");
        assert!(error.is_error());
        assert_ne!(empty, error);
    }

    #[test]
    fn rendering_is_idempotent() {
        let renderer = Renderer::new();
        assert_eq!(
            renderer.render(&verbs(), "go", false),
            renderer.render(&verbs(), "go", false)
        );
    }

    #[test]
    fn marked_line_joins_cells() {
        let output = Renderer::new().render(&verbs(), "went", true);
        assert_eq!(output.rows()[0].marked_line(), "go | [went] | gone");
    }
}
