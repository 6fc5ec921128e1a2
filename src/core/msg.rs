use serde::{Deserialize, Serialize};

pub mod calculator;
pub mod system;
pub mod ui;

use calculator::CalculatorMsg;
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Calculator operations (delegated to CalculatorState)
    Calculator(CalculatorMsg),

    // UI operations (delegated to UiState)
    Ui(UiMsg),
}

impl From<CalculatorMsg> for Msg {
    fn from(msg: CalculatorMsg) -> Self {
        Msg::Calculator(msg)
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;

    use super::*;
    use crate::domain::operation::Operation;

    #[test]
    fn test_msg_equality() {
        assert_eq!(Msg::System(SystemMsg::Quit), Msg::System(SystemMsg::Quit));
        assert_eq!(
            Msg::Calculator(CalculatorMsg::InputDigit(1)),
            Msg::Calculator(CalculatorMsg::InputDigit(1))
        );
        assert_ne!(
            Msg::Calculator(CalculatorMsg::Clear),
            Msg::Calculator(CalculatorMsg::ClearAll)
        );
    }

    #[test]
    fn test_msg_from_calculator_msg() {
        let msg: Msg = CalculatorMsg::ApplyOperation(Operation::Add).into();
        assert_eq!(msg, Msg::Calculator(CalculatorMsg::ApplyOperation(Operation::Add)));
    }

    #[test]
    fn test_msg_serialization() -> Result<()> {
        let msg = Msg::System(SystemMsg::UpdateStatusMessage("test".to_string()));
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: Msg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);

        Ok(())
    }
}
