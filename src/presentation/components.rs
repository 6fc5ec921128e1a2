//! Stateless components
//!
//! Components receive [`AppState`](crate::core::state::AppState) during
//! render and compose widgets into screens.

pub mod calculator;

pub use calculator::{CalculatorComponent, CalculatorLayout};
