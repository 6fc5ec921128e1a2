//! Domain logic
//!
//! This module contains the calculator's business rules that do not depend on
//! application state:
//! - Arithmetic operations
//! - Numeral parsing and formatting
//! - Bounded calculation history
//! - Text fitting utilities

pub mod history;
pub mod numeral;
pub mod operation;
pub mod text;
