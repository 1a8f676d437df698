//! Seams to the external collaborators.
//!
//! The update path never calls these directly; the command executor does, on
//! background tasks, and reports the outcome back as messages.

use async_trait::async_trait;

use crate::domain::{error::TranslatorResult, language::LanguageCatalog};

/// Machine translation provider.
#[async_trait]
pub trait TranslationGateway: Send + Sync {
    /// Display names and codes the provider accepts.
    fn supported_languages(&self) -> LanguageCatalog;

    async fn translate(&self, text: &str, source: &str, target: &str) -> TranslatorResult<String>;
}

/// Text-to-speech provider plus local playback.
#[async_trait]
pub trait SpeechGateway: Send + Sync {
    /// Encoded audio for `text` spoken in `language`.
    async fn synthesize(&self, text: &str, language: &str) -> TranslatorResult<Vec<u8>>;

    /// Plays `audio` and resolves once playback has finished.
    async fn play(&self, audio: Vec<u8>) -> TranslatorResult<()>;
}

pub trait ClipboardGateway: Send + Sync {
    fn get_text(&self) -> TranslatorResult<String>;
    fn set_text(&self, text: &str) -> TranslatorResult<()>;
}
