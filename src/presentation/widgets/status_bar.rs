use ratatui::{prelude::*, widgets::Paragraph};

use crate::presentation::config::keybindings::{Action, KeyBindings};

const HELP_ACTIONS: [(Action, &str); 5] = [
    (Action::Clear, "clear"),
    (Action::ClearAll, "all clear"),
    (Action::ToggleHistory, "history"),
    (Action::ToggleSign, "±"),
    (Action::Quit, "quit"),
];

/// Bottom line: the status message when there is one, key help otherwise
pub struct StatusBarWidget<'a> {
    message: Option<&'a str>,
    keybindings: &'a KeyBindings,
    style: Style,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(message: Option<&'a str>, keybindings: &'a KeyBindings) -> Self {
        Self {
            message,
            keybindings,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// `"esc: clear  a: all clear ..."` for the bound actions
    pub fn help_text(&self) -> String {
        HELP_ACTIONS
            .iter()
            .filter_map(|(action, label)| {
                self.keybindings
                    .key_for(*action)
                    .map(|key| format!("{key}: {label}"))
            })
            .collect::<Vec<_>>()
            .join("  ")
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = match self.message {
            Some(message) => message.to_string(),
            None => self.help_text(),
        };
        Paragraph::new(text).style(self.style).render(area, buf);
    }
}
