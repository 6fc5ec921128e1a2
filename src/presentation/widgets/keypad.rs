//! Keypad widget and its geometry
//!
//! The same [`button_areas`] feeds both rendering and mouse hit-testing, so a
//! click always lands on the button that was drawn there.

use std::borrow::Cow;

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Paragraph},
};

use crate::{
    core::msg::{calculator::CalculatorMsg, ui::UiMsg, Msg},
    domain::operation::Operation,
    presentation::config::styles::Styles,
};

pub const KEYPAD_COLUMNS: u16 = 4;

/// A button on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadButton {
    ClearAll,
    Backspace,
    Digit(u8),
    Decimal,
    Operator(Operation),
    ToggleSign,
    Compute,
    Percentage,
    ToggleHistory,
}

/// Button rows as `(button, column span)`, top to bottom
pub const KEYPAD_ROWS: [&[(KeypadButton, u16)]; 6] = [
    &[
        (KeypadButton::ClearAll, 2),
        (KeypadButton::Backspace, 1),
        (KeypadButton::Operator(Operation::Divide), 1),
    ],
    &[
        (KeypadButton::Digit(7), 1),
        (KeypadButton::Digit(8), 1),
        (KeypadButton::Digit(9), 1),
        (KeypadButton::Operator(Operation::Multiply), 1),
    ],
    &[
        (KeypadButton::Digit(4), 1),
        (KeypadButton::Digit(5), 1),
        (KeypadButton::Digit(6), 1),
        (KeypadButton::Operator(Operation::Subtract), 1),
    ],
    &[
        (KeypadButton::Digit(1), 1),
        (KeypadButton::Digit(2), 1),
        (KeypadButton::Digit(3), 1),
        (KeypadButton::Operator(Operation::Add), 1),
    ],
    &[
        (KeypadButton::ToggleSign, 1),
        (KeypadButton::Digit(0), 1),
        (KeypadButton::Decimal, 1),
        (KeypadButton::Compute, 1),
    ],
    &[(KeypadButton::Percentage, 2), (KeypadButton::ToggleHistory, 2)],
];

impl KeypadButton {
    pub fn label(&self) -> Cow<'static, str> {
        match self {
            KeypadButton::ClearAll => Cow::Borrowed("AC"),
            KeypadButton::Backspace => Cow::Borrowed("⌫"),
            KeypadButton::Digit(d) => Cow::Owned(d.to_string()),
            KeypadButton::Decimal => Cow::Borrowed("."),
            KeypadButton::Operator(op) => Cow::Borrowed(op.label()),
            KeypadButton::ToggleSign => Cow::Borrowed("±"),
            KeypadButton::Compute => Cow::Borrowed("="),
            KeypadButton::Percentage => Cow::Borrowed("%"),
            KeypadButton::ToggleHistory => Cow::Borrowed("History"),
        }
    }

    /// Key into the configured [`Styles`]
    pub fn style_key(&self) -> &'static str {
        match self {
            KeypadButton::ClearAll | KeypadButton::Backspace => "clear",
            KeypadButton::Operator(_) | KeypadButton::Percentage => "operator",
            KeypadButton::Compute => "equals",
            KeypadButton::Digit(_)
            | KeypadButton::Decimal
            | KeypadButton::ToggleSign
            | KeypadButton::ToggleHistory => "digit",
        }
    }

    /// The message a press of this button produces
    pub fn msg(&self) -> Msg {
        match *self {
            KeypadButton::ClearAll => CalculatorMsg::ClearAll.into(),
            KeypadButton::Backspace => CalculatorMsg::Backspace.into(),
            KeypadButton::Digit(d) => CalculatorMsg::InputDigit(d).into(),
            KeypadButton::Decimal => CalculatorMsg::InputDecimal.into(),
            KeypadButton::Operator(op) => CalculatorMsg::ApplyOperation(op).into(),
            KeypadButton::ToggleSign => CalculatorMsg::ToggleSign.into(),
            KeypadButton::Compute => CalculatorMsg::Compute.into(),
            KeypadButton::Percentage => CalculatorMsg::Percentage.into(),
            KeypadButton::ToggleHistory => Msg::Ui(UiMsg::ToggleHistory),
        }
    }
}

/// Screen area of every button inside `area`, row-major.
pub fn button_areas(area: Rect) -> Vec<(KeypadButton, Rect)> {
    let rows = Layout::vertical([Constraint::Ratio(1, KEYPAD_ROWS.len() as u32); KEYPAD_ROWS.len()])
        .split(area);
    let mut areas = Vec::with_capacity(22);

    for (row, buttons) in rows.iter().zip(KEYPAD_ROWS) {
        let cells = Layout::horizontal(
            [Constraint::Ratio(1, KEYPAD_COLUMNS as u32); KEYPAD_COLUMNS as usize],
        )
        .split(*row);
        let mut column = 0usize;
        for (button, span) in buttons.iter() {
            let first = cells[column];
            let last = cells[column + *span as usize - 1];
            areas.push((*button, first.union(last)));
            column += *span as usize;
        }
    }

    areas
}

/// The button under `(column, row)`, if any
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<KeypadButton> {
    let position = Position::new(column, row);
    button_areas(area)
        .into_iter()
        .find(|(_, rect)| rect.contains(position))
        .map(|(button, _)| button)
}

pub struct KeypadWidget<'a> {
    styles: &'a Styles,
}

impl<'a> KeypadWidget<'a> {
    pub fn new(styles: &'a Styles) -> Self {
        Self { styles }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (button, rect) in button_areas(area) {
            let style = self.styles.get_or_default(button.style_key());
            let inner = if rect.height >= 3 && rect.width >= 3 {
                let block = Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(style)
                    .style(style);
                let inner = block.inner(rect);
                block.render(rect, buf);
                inner
            } else {
                buf.set_style(rect, style);
                rect
            };

            // Center the label vertically
            let label_area = Rect {
                y: inner.y + inner.height / 2,
                height: inner.height.min(1),
                ..inner
            };
            Paragraph::new(button.label())
                .style(style)
                .alignment(Alignment::Center)
                .render(label_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn labels(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect::<String>()
    }

    #[test]
    fn test_every_row_fills_four_columns() {
        for row in KEYPAD_ROWS {
            assert_eq!(row.iter().map(|(_, span)| span).sum::<u16>(), KEYPAD_COLUMNS);
        }
    }

    #[test]
    fn test_button_areas_cover_keypad() {
        let area = Rect::new(0, 0, 40, 18);
        let areas = button_areas(area);

        assert_eq!(areas.len(), 22);
        assert_eq!(areas[0], (KeypadButton::ClearAll, Rect::new(0, 0, 20, 3)));
        assert_eq!(
            areas[1],
            (KeypadButton::Backspace, Rect::new(20, 0, 10, 3))
        );
        assert_eq!(
            areas[21],
            (KeypadButton::ToggleHistory, Rect::new(20, 15, 20, 3))
        );
    }

    #[rstest]
    #[case(1, 1, Some(KeypadButton::ClearAll))]
    #[case(19, 2, Some(KeypadButton::ClearAll))]
    #[case(35, 1, Some(KeypadButton::Operator(Operation::Divide)))]
    #[case(5, 4, Some(KeypadButton::Digit(7)))]
    #[case(15, 13, Some(KeypadButton::Digit(0)))]
    #[case(35, 13, Some(KeypadButton::Compute))]
    #[case(5, 16, Some(KeypadButton::Percentage))]
    #[case(39, 17, Some(KeypadButton::ToggleHistory))]
    #[case(40, 0, None)]
    #[case(0, 18, None)]
    fn test_hit_test(#[case] x: u16, #[case] y: u16, #[case] expected: Option<KeypadButton>) {
        assert_eq!(hit_test(Rect::new(0, 0, 40, 18), x, y), expected);
    }

    #[test]
    fn test_hit_test_with_offset_area() {
        let area = Rect::new(10, 5, 40, 18);
        assert_eq!(hit_test(area, 9, 5), None);
        assert_eq!(hit_test(area, 10, 5), Some(KeypadButton::ClearAll));
    }

    #[test]
    fn test_button_messages() {
        assert_eq!(
            KeypadButton::Operator(Operation::Multiply).msg(),
            Msg::Calculator(CalculatorMsg::ApplyOperation(Operation::Multiply))
        );
        assert_eq!(
            KeypadButton::ToggleHistory.msg(),
            Msg::Ui(UiMsg::ToggleHistory)
        );
        assert_eq!(KeypadButton::Operator(Operation::Subtract).label(), "−");
        assert_eq!(KeypadButton::Digit(5).label(), "5");
    }

    #[test]
    fn test_render_labels() {
        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&Styles::default()).render(area, &mut buf);

        // One line per row at this height
        let first = labels(&buf, 0);
        assert!(first.contains("AC"));
        assert!(first.contains('÷'));
        assert!(labels(&buf, 4).contains('='));
        assert!(labels(&buf, 5).contains("History"));
    }
}
