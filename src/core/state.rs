pub mod calculator;
pub mod system;
pub mod ui;

use crate::infrastructure::config::Config;

pub use calculator::{CalculatorState, Pending};
pub use system::SystemState;
pub use ui::UiState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub calculator: CalculatorState,
    pub ui: UiState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new AppState with config
    pub fn new_with_config(config: Config) -> Self {
        Self {
            config: ConfigState { config },
            ..Default::default()
        }
    }

    /// Display text after applying the configured number format
    pub fn formatted_display(&self) -> String {
        self.calculator
            .formatted_display(&self.config.config.number_format)
    }
}
