use crate::core::{cmd::Cmd, msg::ui::UiMsg};

/// Presentation-only state; never consulted by the calculator engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub show_history: bool,
    /// Last known terminal size (width, height), used for mouse hit-testing
    pub viewport: (u16, u16),
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            show_history: false,
            viewport: (80, 24),
        }
    }
}

impl UiState {
    /// UI-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: UiMsg) -> Vec<Cmd> {
        match msg {
            UiMsg::ToggleHistory => {
                self.show_history = !self.show_history;
                vec![]
            }
        }
    }
}
