use std::path::PathBuf;

use config::ConfigError;
use serde::Deserialize;

use crate::{
    presentation::config::{keybindings::KeyBindings, styles::Styles},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

/// User config file names tried in the config directory, in order
const CONFIG_FILES: [(&str, config::FileFormat); 5] = [
    ("config.json5", config::FileFormat::Json5),
    ("config.json", config::FileFormat::Json),
    ("config.yaml", config::FileFormat::Yaml),
    ("config.toml", config::FileFormat::Toml),
    ("config.ini", config::FileFormat::Ini),
];

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub styles: Styles,
}

impl Config {
    /// The embedded defaults alone
    pub fn default_settings() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Defaults layered under the user's config files. Having no user file is
    /// fine; every binding and style the user leaves out keeps its default.
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_dir(utils::get_config_dir(), utils::get_data_dir())
    }

    pub fn from_dir(config_dir: PathBuf, data_dir: PathBuf) -> Result<Self, ConfigError> {
        let default_config = Self::default_settings()?;
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.display().to_string())?
            .set_default("_config_dir", config_dir.display().to_string())?;

        for (file, format) in &CONFIG_FILES {
            let path = config_dir.join(file);
            if path.exists() {
                log::info!("Reading user config {}", path.display());
            }
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        for (key, action) in default_config.keybindings.iter() {
            cfg.keybindings.entry(*key).or_insert(*action);
        }
        for (name, style) in default_config.styles.iter() {
            cfg.styles.entry(name.clone()).or_insert(*style);
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use ratatui::style::{Color, Style};

    use super::*;
    use crate::presentation::config::keybindings::Action;

    #[test]
    fn test_default_settings_bind_enter_policy() {
        let cfg = Config::default_settings().expect("embedded config parses");
        let bound = |code, modifiers| cfg.keybindings.get(&KeyEvent::new(code, modifiers)).copied();

        assert_eq!(bound(KeyCode::Enter, KeyModifiers::NONE), Some(Action::Translate));
        assert_eq!(bound(KeyCode::Enter, KeyModifiers::SHIFT), Some(Action::InsertNewline));
        assert_eq!(bound(KeyCode::Enter, KeyModifiers::CONTROL), Some(Action::Speak));
        assert_eq!(bound(KeyCode::Tab, KeyModifiers::NONE), Some(Action::Swap));
        assert!(cfg.styles.contains_key("input"));
    }

    #[test]
    fn test_missing_user_config_keeps_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = Config::from_dir(dir.path().to_path_buf(), dir.path().to_path_buf())
            .expect("config loads");
        let defaults = Config::default_settings().expect("embedded config parses");

        assert_eq!(cfg.keybindings.len(), defaults.keybindings.len());
        assert_eq!(cfg.config._config_dir, dir.path());
    }

    #[test]
    fn test_user_config_overrides_and_extends() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join("config.json5"),
            r#"{ keybindings: { "<tab>": "Translate", "<ctrl-t>": "Swap" }, styles: { input: "red" } }"#,
        )
        .expect("write");

        let cfg = Config::from_dir(dir.path().to_path_buf(), dir.path().to_path_buf())
            .expect("config loads");

        let get = |code| cfg.keybindings.get(&KeyEvent::new(code, KeyModifiers::NONE)).copied();
        assert_eq!(get(KeyCode::Tab), Some(Action::Translate));
        assert_eq!(
            cfg.keybindings
                .get(&KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL))
                .copied(),
            Some(Action::Swap)
        );
        assert_eq!(get(KeyCode::Enter), Some(Action::Translate));
        assert_eq!(cfg.styles.style("input"), Style::default().fg(Color::Red));
    }
}
