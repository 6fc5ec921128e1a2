//! Integration layer
//!
//! Wires the pure core to the terminal:
//! - `Runtime`: message and command queues around `update`
//! - `AppRunner`: the event loop that feeds the runtime and renders frames

pub mod app_runner;
pub mod runtime;
