//! Terminal dictionary of English irregular verbs.
//!
//! The search pipeline ([`store`], [`render`], [`controller`]) is independent
//! of the terminal so it can be driven directly; [`ui`] wraps it in a
//! full-screen ratatui application.

pub mod app_dirs;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod history;
pub mod logging;
pub mod prefs;
pub mod render;
pub mod store;
pub mod theme;
pub mod ui;
pub mod verbs;
pub mod viewport;

pub use controller::{SearchController, SearchPhase, SearchTimings};
pub use error::LoadError;
pub use render::{CellView, RenderOutput, Renderer, RowView, Segment};
pub use store::{SearchQuery, VerbStore};
pub use theme::{Theme, ThemePreference};
pub use verbs::{VerbCollection, VerbRecord, VerbSource};
pub use viewport::Viewport;
