//! User keybinding overrides flowing from the config file into translation

use calcui::{
    core::msg::{calculator::CalculatorMsg, system::SystemMsg, ui::UiMsg},
    domain::operation::Operation,
    infrastructure::config::Config,
    translate_raw_to_domain, AppState, Msg, RawMsg,
};
use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

fn key(code: KeyCode, modifiers: KeyModifiers) -> RawMsg {
    RawMsg::Key(KeyEvent::new(code, modifiers))
}

fn user_config(name: &str, contents: &str) -> Result<Config> {
    let dir = std::env::temp_dir().join(format!("calcui-keys-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir)?;
    std::fs::write(dir.join("config.json5"), contents)?;
    let config = Config::load(&dir)?;
    std::fs::remove_dir_all(&dir)?;
    Ok(config)
}

#[test]
fn user_bindings_override_and_extend_defaults() -> Result<()> {
    let config = user_config(
        "override",
        r#"{
            "keybindings": {
                "<x>": "Multiply",
                "<Ctrl-h>": "ToggleHistory",
                "<c>": "ClearAll",
            },
        }"#,
    )?;
    let state = AppState::new_with_config(config);

    assert_eq!(
        translate_raw_to_domain(key(KeyCode::Char('x'), KeyModifiers::NONE), &state),
        vec![CalculatorMsg::ApplyOperation(Operation::Multiply).into()]
    );
    assert_eq!(
        translate_raw_to_domain(key(KeyCode::Char('h'), KeyModifiers::CONTROL), &state),
        vec![Msg::Ui(UiMsg::ToggleHistory)]
    );
    assert_eq!(
        translate_raw_to_domain(key(KeyCode::Char('c'), KeyModifiers::NONE), &state),
        vec![CalculatorMsg::ClearAll.into()]
    );
    // Defaults the user did not touch still apply
    assert_eq!(
        translate_raw_to_domain(key(KeyCode::Char('h'), KeyModifiers::NONE), &state),
        vec![Msg::Ui(UiMsg::ToggleHistory)]
    );
    assert_eq!(
        translate_raw_to_domain(key(KeyCode::Enter, KeyModifiers::NONE), &state),
        vec![CalculatorMsg::Compute.into()]
    );
    Ok(())
}

#[test]
fn ctrl_c_quits_even_when_rebound() -> Result<()> {
    let config = user_config("ctrl-c", r#"{ "keybindings": { "<Ctrl-c>": "Clear" } }"#)?;
    let state = AppState::new_with_config(config);

    assert_eq!(
        translate_raw_to_domain(key(KeyCode::Char('c'), KeyModifiers::CONTROL), &state),
        vec![Msg::System(SystemMsg::Quit)]
    );
    Ok(())
}

#[test]
fn invalid_key_in_user_file_is_an_error() -> Result<()> {
    let dir = std::env::temp_dir().join(format!("calcui-keys-invalid-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir)?;
    std::fs::write(
        dir.join("config.json5"),
        r#"{ "keybindings": { "<not-a-key>": "Quit" } }"#,
    )?;

    assert!(Config::load(&dir).is_err());
    std::fs::remove_dir_all(&dir)?;
    Ok(())
}
