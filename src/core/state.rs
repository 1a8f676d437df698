use std::sync::Arc;

use strum::Display;

pub mod system;

pub use system::{ErrorDialog, SystemState};

use crate::{
    domain::{
        language::{LanguageCatalog, LanguagePair, LanguageSide},
        text_buffer::TextBuffer,
    },
    infrastructure::config::Config,
};

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Editable source text
    pub input: TextBuffer,
    /// Last translation, never edited by the user
    pub output: OutputBuffer,
    pub languages: LanguageState,
    pub activity: Activity,
    /// Open language prompt, if any
    pub prompt: Option<LanguagePrompt>,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

/// What the controller is currently waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Activity {
    #[default]
    Idle,
    #[strum(to_string = "Translating...")]
    Translating,
    #[strum(to_string = "Speaking...")]
    Speaking,
}

impl Activity {
    /// A translate or speak request is in flight
    pub fn is_busy(&self) -> bool {
        !matches!(self, Activity::Idle)
    }
}

/// Read-only mirror of the last translation result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputBuffer {
    text: String,
}

impl OutputBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

#[derive(Debug, Clone, Default)]
pub struct LanguageState {
    pub pair: LanguagePair,
    pub catalog: Arc<LanguageCatalog>,
}

/// Single-line entry for a language name or code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePrompt {
    pub side: LanguageSide,
    pub input: TextBuffer,
}

impl LanguagePrompt {
    pub fn new(side: LanguageSide) -> Self {
        Self {
            side,
            input: TextBuffer::new(),
        }
    }

    pub fn title(&self) -> String {
        format!("Enter the {} language (name or code)", self.side)
    }
}

impl AppState {
    /// Initialize AppState with the persisted pair and the provider catalog
    pub fn new(pair: LanguagePair, catalog: Arc<LanguageCatalog>) -> Self {
        Self {
            languages: LanguageState { pair, catalog },
            ..Default::default()
        }
    }

    /// Initialize AppState with the persisted pair, the catalog and config
    pub fn new_with_config(
        pair: LanguagePair,
        catalog: Arc<LanguageCatalog>,
        config: Config,
    ) -> Self {
        Self {
            config: ConfigState { config },
            ..Self::new(pair, catalog)
        }
    }

    /// True when an overlay (prompt or error dialog) has keyboard focus
    pub fn is_modal(&self) -> bool {
        self.prompt.is_some() || self.system.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert!(state.input.is_blank());
        assert!(state.output.is_empty());
        assert_eq!(state.activity, Activity::Idle);
        assert_eq!(state.languages.pair, LanguagePair::new("fr", "ru"));
        assert!(!state.system.should_quit);
        assert!(!state.is_modal());
    }

    #[test]
    fn test_activity_display_and_busy() {
        assert_eq!(Activity::Idle.to_string(), "Idle");
        assert_eq!(Activity::Translating.to_string(), "Translating...");
        assert!(!Activity::Idle.is_busy());
        assert!(Activity::Speaking.is_busy());
    }

    #[test]
    fn test_output_buffer() {
        let mut output = OutputBuffer::default();
        output.set("Привет");
        assert_eq!(output.text(), "Привет");
        output.clear();
        assert!(output.is_empty());
    }

    #[test]
    fn test_prompt_makes_state_modal() {
        let state = AppState {
            prompt: Some(LanguagePrompt::new(LanguageSide::Target)),
            ..Default::default()
        };
        assert!(state.is_modal());
        assert_eq!(
            state.prompt.as_ref().map(LanguagePrompt::title).as_deref(),
            Some("Enter the target language (name or code)")
        );
    }
}
