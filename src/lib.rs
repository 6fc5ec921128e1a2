//! # Calcui - Terminal Calculator
//!
//! A keyboard- and mouse-driven four-function calculator for the terminal,
//! built with Rust and Ratatui. State changes follow an Elm-like architecture.
//!
//! ## Architecture Overview
//!
//! - **Model** (`core::state`): Application state, including the calculator engine
//! - **Message** (`core::msg`): Events that can change the state
//! - **Update** (`core::update`): Pure function that transforms state
//! - **Command** (`core::cmd`): Side effects (logging, terminal resize, render)
//! - **View** (`presentation`): UI rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use calcui::{
//!     core::msg::calculator::CalculatorMsg, domain::operation::Operation, update, AppState,
//! };
//!
//! let state = AppState::new();
//! let (state, _) = update(CalculatorMsg::InputDigit(7).into(), state);
//! let (state, _) = update(CalculatorMsg::ApplyOperation(Operation::Add).into(), state);
//! let (state, _) = update(CalculatorMsg::InputDigit(3).into(), state);
//! let (state, commands) = update(CalculatorMsg::Compute.into(), state);
//!
//! assert_eq!(state.calculator.display(), "10");
//! assert_eq!(state.calculator.history().latest(), Some("7 + 3 = 10"));
//! assert_eq!(commands.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`domain`] - Arithmetic, number formatting, history
//! - [`core`] - State, messages, update and commands
//! - [`infrastructure`] - Terminal, CLI and configuration
//! - [`integration`] - Runtime and event loop
//! - [`presentation`] - Widgets, components, keybindings and styles
//! - [`utils`] - Logging, panic handling, paths

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState,
    translator::translate_raw_to_domain, update::update,
};
pub use integration::runtime::Runtime;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
