use serde::{Deserialize, Serialize};

use crate::domain::operation::Operation;

/// Calculator engine inputs, one per button on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalculatorMsg {
    InputDigit(u8),
    InputDecimal,
    ApplyOperation(Operation),
    Compute,
    Percentage,
    ToggleSign,
    Backspace,
    /// Resets the current calculation, keeping history
    Clear,
    /// Resets the current calculation and history
    ClearAll,
    ClearHistory,
}

impl CalculatorMsg {
    /// Classifies a typed character the way the keypad labels read
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| CalculatorMsg::InputDigit(d as u8)),
            '.' => Some(CalculatorMsg::InputDecimal),
            '=' => Some(CalculatorMsg::Compute),
            '%' => Some(CalculatorMsg::Percentage),
            _ => Operation::from_symbol(c).map(CalculatorMsg::ApplyOperation),
        }
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_from_char() {
        assert_eq!(CalculatorMsg::from_char('7'), Some(CalculatorMsg::InputDigit(7)));
        assert_eq!(CalculatorMsg::from_char('.'), Some(CalculatorMsg::InputDecimal));
        assert_eq!(CalculatorMsg::from_char('='), Some(CalculatorMsg::Compute));
        assert_eq!(CalculatorMsg::from_char('%'), Some(CalculatorMsg::Percentage));
        assert_eq!(
            CalculatorMsg::from_char('/'),
            Some(CalculatorMsg::ApplyOperation(Operation::Divide))
        );
        assert_eq!(CalculatorMsg::from_char('a'), None);
    }

    #[test]
    fn test_calculator_msg_serde() -> Result<()> {
        let msg = CalculatorMsg::ApplyOperation(Operation::Multiply);
        let s = serde_json::to_string(&msg)?;
        let back: CalculatorMsg = serde_json::from_str(&s)?;
        assert_eq!(msg, back);

        Ok(())
    }
}
