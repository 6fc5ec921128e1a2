//! Calculator screen
//!
//! Stateless component composing the title, display, keypad, history panel
//! and status line. [`CalculatorLayout`] is pure so the translator can
//! hit-test mouse clicks against exactly what was drawn.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::{
    core::{
        msg::{calculator::CalculatorMsg, Msg},
        state::AppState,
    },
    domain::{history::HISTORY_CAPACITY, numeral::parse_float},
    presentation::widgets::{
        display::DisplayWidget,
        history::HistoryWidget,
        keypad::{self, KeypadWidget},
        status_bar::StatusBarWidget,
    },
};

pub const TITLE: &str = "Calculator";

/// Widest the calculator grows; the rest of the terminal stays blank
pub const MAX_WIDTH: u16 = 48;

const DISPLAY_HEIGHT: u16 = 4;
/// Border, header and one line per entry
const HISTORY_HEIGHT: u16 = HISTORY_CAPACITY as u16 + 3;

/// Screen areas of the calculator for a given terminal size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorLayout {
    pub title: Rect,
    pub display: Rect,
    pub keypad: Rect,
    pub history: Option<Rect>,
    pub status: Rect,
}

impl CalculatorLayout {
    pub fn new(area: Rect, show_history: bool) -> Self {
        let [_, column, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(area.width.min(MAX_WIDTH)),
            Constraint::Fill(1),
        ])
        .areas(area);

        // The history panel never takes more than half of what the keypad gets
        let free = column.height.saturating_sub(DISPLAY_HEIGHT + 2);
        let history_height = if show_history {
            HISTORY_HEIGHT.min(free / 2)
        } else {
            0
        };

        let [title, display, keypad, history, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(DISPLAY_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(history_height),
            Constraint::Length(1),
        ])
        .areas(column);

        Self {
            title,
            display,
            keypad,
            history: show_history.then_some(history),
            status,
        }
    }

    /// The message a left click at `(column, row)` produces
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Msg> {
        if let Some(button) = keypad::hit_test(self.keypad, column, row) {
            return Some(button.msg());
        }

        let history = self.history?;
        HistoryWidget::clear_button_area(history)
            .contains(Position::new(column, row))
            .then_some(Msg::Calculator(CalculatorMsg::ClearHistory))
    }
}

#[derive(Debug, Clone, Default)]
pub struct CalculatorComponent;

impl CalculatorComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let layout = CalculatorLayout::new(area, state.ui.show_history);
        let styles = &state.config.config.styles;

        frame.render_widget(
            Paragraph::new(TITLE)
                .style(styles.get_or_default("title"))
                .alignment(Alignment::Center),
            layout.title,
        );

        frame.render_widget(
            DisplayWidget::new(
                state.calculator.pending_expression(),
                state.formatted_display(),
            )
            .number(parse_float(state.calculator.display()))
            .value_style(styles.get_or_default("display"))
            .pending_style(styles.get_or_default("pending")),
            layout.display,
        );

        frame.render_widget(KeypadWidget::new(styles), layout.keypad);

        if let Some(history_area) = layout.history {
            frame.render_widget(
                HistoryWidget::new(state.calculator.history())
                    .style(styles.get_or_default("history"))
                    .clear_style(styles.get_or_default("clear")),
                history_area,
            );
        }

        frame.render_widget(
            StatusBarWidget::new(
                state.system.status_message.as_deref(),
                &state.config.config.keybindings,
            )
            .style(styles.get_or_default("status")),
            layout.status,
        );
    }
}
