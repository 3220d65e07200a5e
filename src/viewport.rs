//! Terminal size expressed in layout units, and the layout decisions derived
//! from it.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

/// Default number of layout units one terminal column stands for.
pub const DEFAULT_UNITS_PER_COLUMN: u16 = 8;

/// Below this width the translation column is dropped.
pub const NARROW_BREAKPOINT: u32 = 450;

/// At or below this width the page margins are dropped.
pub const MOBILE_BREAKPOINT: u32 = 768;

static MOBILE_AGENT: LazyLock<Option<Regex>> = LazyLock::new(|| {
    RegexBuilder::new("Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini")
        .case_insensitive(true)
        .build()
        .ok()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    columns: u16,
    rows: u16,
    units_per_column: u16,
    user_agent: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Viewport {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            columns,
            rows,
            units_per_column: DEFAULT_UNITS_PER_COLUMN,
            user_agent: None,
        }
    }

    /// A zero scale is treated as one unit per column.
    #[must_use]
    pub fn with_units_per_column(mut self, units: u16) -> Self {
        self.units_per_column = units.max(1);
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: Option<String>) -> Self {
        self.user_agent = user_agent.filter(|agent| !agent.trim().is_empty());
        self
    }

    /// Same scale and user agent, new terminal size.
    #[must_use]
    pub fn resized(&self, columns: u16, rows: u16) -> Self {
        Self {
            columns,
            rows,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn columns(&self) -> u16 {
        self.columns
    }

    #[must_use]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    #[must_use]
    pub fn units_per_column(&self) -> u16 {
        self.units_per_column
    }

    #[must_use]
    pub fn width_units(&self) -> u32 {
        u32::from(self.columns) * u32::from(self.units_per_column)
    }

    /// Height in the same units as the width. Terminal cells are roughly
    /// twice as tall as they are wide.
    #[must_use]
    pub fn height_units(&self) -> u32 {
        u32::from(self.rows) * u32::from(self.units_per_column) * 2
    }

    #[must_use]
    pub fn is_narrow(&self) -> bool {
        self.width_units() < NARROW_BREAKPOINT
    }

    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.width_units() <= MOBILE_BREAKPOINT || self.user_agent_is_mobile()
    }

    fn user_agent_is_mobile(&self) -> bool {
        match (&self.user_agent, MOBILE_AGENT.as_ref()) {
            (Some(agent), Some(pattern)) => pattern.is_match(agent),
            _ => false,
        }
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        if self.height_units() > self.width_units() {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_is_scaled_to_units() {
        let viewport = Viewport::new(50, 20);
        assert_eq!(viewport.width_units(), 400);
        assert!(viewport.is_narrow());
        assert!(!Viewport::new(100, 20).is_narrow());
    }

    #[test]
    fn custom_scale_changes_breakpoints() {
        let viewport = Viewport::new(50, 20).with_units_per_column(10);
        assert_eq!(viewport.width_units(), 500);
        assert!(!viewport.is_narrow());
        assert_eq!(Viewport::new(50, 20).with_units_per_column(0).units_per_column(), 1);
    }

    #[test]
    fn mobile_by_width_or_agent() {
        assert!(Viewport::new(96, 30).is_mobile());
        assert!(!Viewport::new(97, 30).is_mobile());
        let tablet = Viewport::new(200, 50).with_user_agent(Some("Mozilla/5.0 (iPad)".into()));
        assert!(tablet.is_mobile());
        let desktop = Viewport::new(200, 50).with_user_agent(Some("Mozilla/5.0 (X11)".into()));
        assert!(!desktop.is_mobile());
    }

    #[test]
    fn orientation_follows_aspect() {
        assert_eq!(Viewport::new(120, 40).orientation(), Orientation::Landscape);
        assert_eq!(Viewport::new(40, 60).orientation(), Orientation::Portrait);
        let resized = Viewport::new(120, 40).with_units_per_column(4).resized(40, 60);
        assert_eq!(resized.units_per_column(), 4);
        assert_eq!(resized.orientation(), Orientation::Portrait);
    }
}
