use crate::core::{
    cmd::Cmd,
    msg::{system::SystemMsg, Msg},
    state::AppState,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            if let SystemMsg::Resize(width, height) = system_msg {
                state.ui.viewport = (width, height);
            }
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Calculator messages (delegated to CalculatorState)
        Msg::Calculator(calculator_msg) => {
            let mut commands = state.calculator.update(calculator_msg);
            // Any input dismisses a stale status message
            if state.system.status_message.take().is_some() {
                commands.push(Cmd::RequestRender);
            }
            (state, commands)
        }

        // UI messages (delegated to UiState)
        Msg::Ui(ui_msg) => {
            let commands = state.ui.update(ui_msg);
            (state, commands)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::msg::{calculator::CalculatorMsg, ui::UiMsg},
        domain::operation::Operation,
    };

    fn run(msgs: Vec<Msg>, state: AppState) -> (AppState, Vec<Cmd>) {
        msgs.into_iter()
            .fold((state, vec![]), |(state, mut all), msg| {
                let (state, cmds) = update(msg, state);
                all.extend(cmds);
                (state, all)
            })
    }

    #[test]
    fn test_update_quit() {
        let (state, cmds) = update(Msg::System(SystemMsg::Quit), AppState::new());
        assert!(state.system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_update_calculator_flow() {
        let (state, cmds) = run(
            vec![
                CalculatorMsg::InputDigit(7).into(),
                CalculatorMsg::ApplyOperation(Operation::Add).into(),
                CalculatorMsg::InputDigit(3).into(),
                CalculatorMsg::Compute.into(),
            ],
            AppState::new(),
        );

        assert_eq!(state.calculator.display(), "10");
        assert_eq!(state.calculator.history().entries(), vec!["7 + 3 = 10"]);
        assert_eq!(
            cmds,
            vec![Cmd::LogInfo {
                message: "7 + 3 = 10".to_string()
            }]
        );
    }

    #[test]
    fn test_calculator_input_clears_status_message() {
        let (state, _) = update(
            Msg::System(SystemMsg::UpdateStatusMessage("History cleared".to_string())),
            AppState::new(),
        );
        assert!(state.system.status_message.is_some());

        let (state, cmds) = update(Msg::Calculator(CalculatorMsg::InputDigit(1)), state);
        assert!(state.system.status_message.is_none());
        assert_eq!(cmds, vec![Cmd::RequestRender]);
    }

    #[test]
    fn test_toggle_history_does_not_touch_calculator() {
        let (before, _) = update(Msg::Calculator(CalculatorMsg::InputDigit(4)), AppState::new());
        let calculator = before.calculator.clone();

        let (after, cmds) = update(Msg::Ui(UiMsg::ToggleHistory), before);
        assert!(after.ui.show_history);
        assert_eq!(after.calculator, calculator);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_resize_generates_tui_command() {
        let (state, cmds) = update(Msg::System(SystemMsg::Resize(100, 40)), AppState::new());
        assert_eq!(state.ui.viewport, (100, 40));
        assert_eq!(cmds.len(), 1);
        assert!(matches!(cmds[0], Cmd::Tui(_)));
    }
}
