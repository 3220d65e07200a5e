//! Dark and light colour schemes and the persisted theme preference.

mod dark;
mod light;

use std::fmt;
use std::str::FromStr;

use ratatui::style::Style;

pub use dark::DARK;
pub use light::LIGHT;

/// Styles used by the table, the search input, and the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub base: Style,
    pub header: Style,
    pub row: Style,
    pub row_alt: Style,
    pub highlight: Style,
    pub prompt: Style,
    pub muted: Style,
    pub empty: Style,
    pub danger: Style,
}

impl Theme {
    #[must_use]
    pub fn highlight_style(&self) -> Style {
        self.highlight
    }

    #[must_use]
    pub fn header_style(&self) -> Style {
        self.header
    }

    /// Zebra striping for table rows.
    #[must_use]
    pub fn row_style(&self, index: usize) -> Style {
        if index % 2 == 0 { self.row } else { self.row_alt }
    }
}

impl Default for Theme {
    fn default() -> Self {
        DARK
    }
}

/// Colour scheme chosen by the user. Unknown stored values fall back to dark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    /// Parse a stored or configured value, treating anything unrecognised as
    /// the default.
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn theme(self) -> Theme {
        match self {
            Self::Dark => DARK,
            Self::Light => LIGHT,
        }
    }
}

impl FromStr for ThemePreference {
    type Err = UnknownTheme;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(UnknownTheme(value.to_string())),
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme `{0}` (expected `dark` or `light`)")]
pub struct UnknownTheme(String);
