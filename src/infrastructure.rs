//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation (real terminal and test backend)
//! - CLI argument processing
//! - Layered configuration loading

pub mod cli;
pub mod config;
pub mod tui;
