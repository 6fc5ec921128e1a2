use std::{collections::HashMap, str::FromStr};

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Deserializer};

/// Named styles, e.g. `"operator": "bold white on blue"`
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl Styles {
    /// Style for `key`, or the terminal default
    pub fn get_or_default(&self, key: &str) -> Style {
        self.get(key).copied().unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(key, style)| (key, parse_style(&style)))
            .collect();

        Ok(Styles(styles))
    }
}

/// Parses `"[modifiers] [fg] [on [modifiers] bg]"`.
///
/// Unknown words are ignored rather than rejected.
pub fn parse_style(line: &str) -> Style {
    let lower = line.to_lowercase();
    let (foreground, background) = match lower.split_once(" on ") {
        Some((fg, bg)) => (fg, Some(bg)),
        None => match lower.strip_prefix("on ") {
            Some(bg) => ("", Some(bg)),
            None => (lower.as_str(), None),
        },
    };

    let (fg, fg_modifiers) = process_color_string(foreground);
    let mut style = Style::default().add_modifier(fg_modifiers);
    if let Some(color) = fg {
        style = style.fg(color);
    }

    if let Some(background) = background {
        let (bg, bg_modifiers) = process_color_string(background);
        style = style.add_modifier(bg_modifiers);
        if let Some(color) = bg {
            style = style.bg(color);
        }
    }

    style
}

fn process_color_string(color_str: &str) -> (Option<Color>, Modifier) {
    let mut modifiers = Modifier::empty();
    let mut color_words = Vec::new();

    for word in color_str.split_whitespace() {
        match word {
            "bold" => modifiers |= Modifier::BOLD,
            "dim" => modifiers |= Modifier::DIM,
            "italic" => modifiers |= Modifier::ITALIC,
            "underline" | "underlined" => modifiers |= Modifier::UNDERLINED,
            "inverse" | "reversed" => modifiers |= Modifier::REVERSED,
            other => color_words.push(other.replace("grey", "gray")),
        }
    }

    // "dark gray" and "light blue" are accepted as well as "darkgray"
    let color = if color_words.is_empty() {
        None
    } else {
        Color::from_str(&color_words.concat()).ok()
    };

    (color, modifiers)
}
