//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - The calculator screen component and its layout
//! - Reusable widgets (display, keypad, history, status line)
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod widgets;
