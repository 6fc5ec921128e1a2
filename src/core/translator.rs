use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::{
    core::{
        msg::{calculator::CalculatorMsg, system::SystemMsg, ui::UiMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::operation::Operation,
    presentation::{components::CalculatorLayout, config::keybindings::Action},
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Mouse(mouse) => translate_mouse_event(mouse, state),

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain messages
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // Get keybindings from config state (flat mapping)
    if let Some(action) = state.config.config.keybindings.get(&vec![key]) {
        return vec![translate_action_to_msg(*action)];
    }

    // Unbound characters are classified directly; SHIFT is ignored
    match key.code {
        KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
            CalculatorMsg::from_char(c).map(Msg::from).into_iter().collect()
        }
        _ => vec![],
    }
}

fn translate_action_to_msg(action: Action) -> Msg {
    match action {
        Action::Digit(digit) => CalculatorMsg::InputDigit(digit).into(),
        Action::Decimal => CalculatorMsg::InputDecimal.into(),
        Action::Add => CalculatorMsg::ApplyOperation(Operation::Add).into(),
        Action::Subtract => CalculatorMsg::ApplyOperation(Operation::Subtract).into(),
        Action::Multiply => CalculatorMsg::ApplyOperation(Operation::Multiply).into(),
        Action::Divide => CalculatorMsg::ApplyOperation(Operation::Divide).into(),
        Action::Compute => CalculatorMsg::Compute.into(),
        Action::Percentage => CalculatorMsg::Percentage.into(),
        Action::ToggleSign => CalculatorMsg::ToggleSign.into(),
        Action::Backspace => CalculatorMsg::Backspace.into(),
        Action::Clear => CalculatorMsg::Clear.into(),
        Action::ClearAll => CalculatorMsg::ClearAll.into(),
        Action::ClearHistory => CalculatorMsg::ClearHistory.into(),
        Action::ToggleHistory => Msg::Ui(UiMsg::ToggleHistory),
        Action::Quit => Msg::System(SystemMsg::Quit),
        Action::Suspend => Msg::System(SystemMsg::Suspend),
    }
}

/// Left clicks press whatever button is drawn under the cursor
fn translate_mouse_event(mouse: MouseEvent, state: &AppState) -> Vec<Msg> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }

    let (width, height) = state.ui.viewport;
    CalculatorLayout::new(Rect::new(0, 0, width, height), state.ui.show_history)
        .hit_test(mouse.column, mouse.row)
        .into_iter()
        .collect()
}
