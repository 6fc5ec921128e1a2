//! Calculator engine
//!
//! `CalculatorState` is a small input state machine. Every transition takes
//! the current state by value and returns the next one, so callers keep the
//! previous value around if they need it and tests can chain transitions.

use crate::{
    core::{cmd::Cmd, msg::calculator::CalculatorMsg},
    domain::{
        history::History,
        numeral::{format_display, format_number, parse_float, NumberFormat},
        operation::Operation,
    },
};

/// Operand and operator staged for the next computation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Pending {
    #[default]
    Idle,
    Staged { operand: f64, operation: Operation },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    display: String,
    pending: Pending,
    waiting_for_operand: bool,
    history: History,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: String::from("0"),
            pending: Pending::Idle,
            waiting_for_operand: false,
            history: History::new(),
        }
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an arbitrary display text, as if it had just been typed
    pub fn with_display(display: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            ..Self::default()
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn formatted_display(&self, format: &NumberFormat) -> String {
        format_display(&self.display, format)
    }

    pub fn pending(&self) -> Pending {
        self.pending
    }

    pub fn previous_value(&self) -> Option<f64> {
        match self.pending {
            Pending::Idle => None,
            Pending::Staged { operand, .. } => Some(operand),
        }
    }

    pub fn operation(&self) -> Option<Operation> {
        match self.pending {
            Pending::Idle => None,
            Pending::Staged { operation, .. } => Some(operation),
        }
    }

    /// The staged left-hand side, e.g. `"7 +"`
    pub fn pending_expression(&self) -> Option<String> {
        match self.pending {
            Pending::Idle => None,
            Pending::Staged { operand, operation } => Some(format!(
                "{} {}",
                format_number(operand),
                operation.symbol()
            )),
        }
    }

    pub fn is_waiting_for_operand(&self) -> bool {
        self.waiting_for_operand
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn input_digit(mut self, digit: u8) -> Self {
        let Some(d) = char::from_digit(u32::from(digit), 10) else {
            return self;
        };

        if self.waiting_for_operand {
            self.display = d.to_string();
            self.waiting_for_operand = false;
        } else if self.display == "0" {
            self.display = d.to_string();
        } else {
            self.display.push(d);
        }
        self
    }

    /// At most one decimal point per operand
    pub fn input_decimal(mut self) -> Self {
        if self.waiting_for_operand {
            self.display = String::from("0.");
            self.waiting_for_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
        self
    }

    /// Stages `next` after applying any operation already staged.
    ///
    /// `None` is the equals key: the pending computation runs and nothing new
    /// is staged, so the next digit starts an independent calculation.
    pub fn apply_operation(mut self, next: Option<Operation>) -> Self {
        let input = parse_float(&self.display);

        match self.pending {
            Pending::Idle => {
                if let Some(operation) = next {
                    self.pending = Pending::Staged {
                        operand: input,
                        operation,
                    };
                }
            }
            Pending::Staged { operand, operation } => {
                // NaN and zero operands both count as zero on the left-hand side
                let left = if operand.is_nan() || operand == 0.0 {
                    0.0
                } else {
                    operand
                };
                let result = operation.apply(left, input);

                self.history.push_front(format!(
                    "{} {} {} = {}",
                    format_number(left),
                    operation.symbol(),
                    format_number(input),
                    format_number(result)
                ));
                self.display = format_number(result);
                self.pending = match next {
                    Some(operation) => Pending::Staged {
                        operand: result,
                        operation,
                    },
                    None => Pending::Idle,
                };
            }
        }

        self.waiting_for_operand = true;
        self
    }

    pub fn compute(self) -> Self {
        self.apply_operation(None)
    }

    pub fn percentage(mut self) -> Self {
        self.display = format_number(parse_float(&self.display) / 100.0);
        self
    }

    pub fn toggle_sign(mut self) -> Self {
        self.display = format_number(-parse_float(&self.display));
        self
    }

    /// Never leaves an empty display
    pub fn backspace(mut self) -> Self {
        if self.display.chars().count() > 1 {
            self.display.pop();
        } else {
            self.display = String::from("0");
        }
        self
    }

    pub fn clear(self) -> Self {
        Self {
            history: self.history,
            ..Self::default()
        }
    }

    pub fn clear_all(self) -> Self {
        Self::default()
    }

    pub fn clear_history(mut self) -> Self {
        self.history.clear();
        self
    }

    /// Calculator-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: CalculatorMsg) -> Vec<Cmd> {
        let current = std::mem::take(self);
        let completes_calculation = matches!(
            msg,
            CalculatorMsg::ApplyOperation(_) | CalculatorMsg::Compute
        ) && matches!(current.pending, Pending::Staged { .. });

        *self = match msg {
            CalculatorMsg::InputDigit(d) => current.input_digit(d),
            CalculatorMsg::InputDecimal => current.input_decimal(),
            CalculatorMsg::ApplyOperation(op) => current.apply_operation(Some(op)),
            CalculatorMsg::Compute => current.compute(),
            CalculatorMsg::Percentage => current.percentage(),
            CalculatorMsg::ToggleSign => current.toggle_sign(),
            CalculatorMsg::Backspace => current.backspace(),
            CalculatorMsg::Clear => current.clear(),
            CalculatorMsg::ClearAll => current.clear_all(),
            CalculatorMsg::ClearHistory => current.clear_history(),
        };

        match self.history.latest() {
            Some(entry) if completes_calculation => vec![Cmd::LogInfo {
                message: entry.to_string(),
            }],
            _ => vec![],
        }
    }
}
