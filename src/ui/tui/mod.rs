//! Interactive terminal browser
//!
//! Built on ratatui with the crossterm backend. [`App`] holds all state and
//! is driven by key presses and by background results; [`runner::run`] owns
//! the terminal and the loop.

pub mod actions;
pub mod app;
pub mod events;
pub mod runner;
pub mod theme;
mod view;
pub mod widgets;

pub use app::{App, AppEvent, Effect, Focus, ListFooter};
pub use runner::{Executor, run};
pub use theme::Theme;
