//! Full-screen terminal front end: search input, verb table, and keyboard
//! shortcuts around a [`SearchController`](crate::controller::SearchController).

mod actions;
pub mod input;
pub mod placeholder;
mod render;
mod runtime;
mod state;

pub use runtime::run;
pub use state::{App, Focus};
