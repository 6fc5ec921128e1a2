//! Reusable calculator widgets
//!
//! Widgets are plain ratatui [`Widget`](ratatui::widgets::Widget)s that take
//! the data they draw as arguments and hold no application state.

pub mod display;
pub mod history;
pub mod keypad;
pub mod status_bar;
