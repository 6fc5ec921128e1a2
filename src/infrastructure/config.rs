use std::path::Path;

use config::ConfigError;
use serde::Deserialize;

use crate::{
    domain::numeral::NumberFormat,
    presentation::config::{keybindings::KeyBindings, styles::Styles},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

const CONFIG_FILES: [(&str, config::FileFormat); 5] = [
    ("config.json5", config::FileFormat::Json5),
    ("config.json", config::FileFormat::Json),
    ("config.yaml", config::FileFormat::Yaml),
    ("config.toml", config::FileFormat::Toml),
    ("config.ini", config::FileFormat::Ini),
];

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub styles: Styles,
    #[serde(default)]
    pub number_format: NumberFormat,
}

impl Config {
    /// Loads the user configuration from the platform config directory.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(&utils::get_config_dir())
    }

    /// Builds the configuration from an optional user file in `config_dir`,
    /// filling in whatever it leaves out from the embedded defaults.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let mut builder = config::Config::builder();

        let mut found_config = false;
        for (file, format) in &CONFIG_FILES {
            let path = config_dir.join(file);
            if path.exists() {
                found_config = true;
            }
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // User bindings win; defaults fill the gaps (flat mapping)
        for (keyseq, action) in default_config.keybindings.iter() {
            cfg.keybindings.entry(keyseq.clone()).or_insert(*action);
        }
        for (style_key, style) in default_config.styles.iter() {
            cfg.styles.entry(style_key.clone()).or_insert(*style);
        }

        Ok(cfg)
    }

    /// The configuration compiled into the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use ratatui::style::Color;

    use std::path::PathBuf;

    use super::*;
    use crate::presentation::config::keybindings::Action;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("calcui-config-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    fn key(c: char) -> Vec<KeyEvent> {
        vec![KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)]
    }

    #[test]
    fn test_embedded_config() -> color_eyre::Result<()> {
        let cfg = Config::embedded()?;
        assert_eq!(cfg.keybindings.get(&key('h')), Some(&Action::ToggleHistory));
        assert_eq!(cfg.keybindings.get(&key('7')), Some(&Action::Digit(7)));
        assert_eq!(cfg.keybindings.get(&key('/')), Some(&Action::Divide));
        assert_eq!(
            cfg.keybindings
                .get(&vec![KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)]),
            Some(&Action::Quit)
        );
        assert_eq!(cfg.number_format, NumberFormat::default());
        assert!(cfg.styles.contains_key("equals"));
        Ok(())
    }

    #[test]
    fn test_load_without_user_file_uses_defaults() -> color_eyre::Result<()> {
        let dir = scratch_dir("empty");
        let cfg = Config::load(&dir)?;

        assert_eq!(cfg.keybindings.len(), Config::embedded()?.keybindings.len());
        assert_eq!(cfg.number_format.thousands_separator, ",");
        Ok(())
    }

    #[test]
    fn test_user_file_overrides_defaults() -> color_eyre::Result<()> {
        let dir = scratch_dir("override");
        std::fs::write(
            dir.join("config.json5"),
            r#"{
                "keybindings": { "<h>": "ClearHistory" },
                "styles": { "equals": "bold white on red" },
                "number_format": { "thousands_separator": " " },
            }"#,
        )?;

        let cfg = Config::load(&dir)?;

        assert_eq!(cfg.keybindings.get(&key('h')), Some(&Action::ClearHistory));
        // Untouched defaults survive the merge
        assert_eq!(cfg.keybindings.get(&key('q')), Some(&Action::Quit));
        assert_eq!(cfg.styles.get_or_default("equals").bg, Some(Color::Red));
        assert_eq!(cfg.number_format.thousands_separator, " ");
        assert_eq!(cfg.number_format.max_fraction_digits, 3);

        std::fs::remove_dir_all(&dir)?;
        Ok(())
    }
}
