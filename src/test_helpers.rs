//! In-memory gateways and fixtures for tests.
//!
//! Each fake is cheap to clone and clones share their recorded calls, so a
//! test can hand one copy to the executor and inspect the other.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::{
    core::gateway::{ClipboardGateway, SpeechGateway, TranslationGateway},
    domain::{
        error::{TranslatorError, TranslatorResult},
        language::LanguageCatalog,
    },
};

/// Small catalog with the default pair and English
pub fn sample_catalog() -> LanguageCatalog {
    LanguageCatalog::new([("french", "fr"), ("russian", "ru"), ("english", "en")])
}

/// Translation provider answering every request with the same result
#[derive(Debug, Clone)]
pub struct FakeTranslator {
    reply: Result<String, String>,
    calls: Arc<Mutex<Vec<(String, String, String)>>>,
}

impl FakeTranslator {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            calls: Arc::default(),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            calls: Arc::default(),
        }
    }

    /// `(text, source, target)` of every request so far
    pub fn calls(&self) -> Vec<(String, String, String)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl TranslationGateway for FakeTranslator {
    fn supported_languages(&self) -> LanguageCatalog {
        sample_catalog()
    }

    async fn translate(&self, text: &str, source: &str, target: &str) -> TranslatorResult<String> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((text.to_string(), source.to_string(), target.to_string()));
        }
        self.reply.clone().map_err(TranslatorError::Service)
    }
}

/// Speech provider that records what it was asked to say and play
#[derive(Debug, Clone, Default)]
pub struct FakeSpeech {
    failure: Option<String>,
    spoken: Arc<Mutex<Vec<(String, String)>>>,
    played: Arc<Mutex<usize>>,
}

impl FakeSpeech {
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// `(text, language)` of every synthesis request
    pub fn spoken(&self) -> Vec<(String, String)> {
        self.spoken.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn played(&self) -> usize {
        self.played.lock().map(|p| *p).unwrap_or_default()
    }
}

#[async_trait]
impl SpeechGateway for FakeSpeech {
    async fn synthesize(&self, text: &str, language: &str) -> TranslatorResult<Vec<u8>> {
        if let Ok(mut spoken) = self.spoken.lock() {
            spoken.push((text.to_string(), language.to_string()));
        }
        match &self.failure {
            Some(message) => Err(TranslatorError::Service(message.clone())),
            None => Ok(text.as_bytes().to_vec()),
        }
    }

    async fn play(&self, _audio: Vec<u8>) -> TranslatorResult<()> {
        if let Ok(mut played) = self.played.lock() {
            *played += 1;
        }
        Ok(())
    }
}

/// Process-local clipboard
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    text: Arc<Mutex<Option<String>>>,
}

impl MemoryClipboard {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Arc::new(Mutex::new(Some(text.into()))),
        }
    }

    pub fn text(&self) -> Option<String> {
        self.text.lock().ok().and_then(|t| t.clone())
    }
}

impl ClipboardGateway for MemoryClipboard {
    fn get_text(&self) -> TranslatorResult<String> {
        self.text()
            .ok_or_else(|| TranslatorError::clipboard("clipboard is empty"))
    }

    fn set_text(&self, text: &str) -> TranslatorResult<()> {
        let mut guard = self
            .text
            .lock()
            .map_err(|_| TranslatorError::clipboard("clipboard lock poisoned"))?;
        *guard = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
pub use with_store::test_services;

#[cfg(test)]
mod with_store {
    use std::sync::Arc;

    use tempfile::TempDir;

    use super::*;
    use crate::{
        core::cmd_executor::Services,
        infrastructure::preferences::{LanguageStore, PREFERENCES_FILE},
    };

    /// Services around the given fakes with a preferences file in a fresh
    /// temp dir; keep the `TempDir` alive for the duration of the test.
    pub fn test_services(
        translator: FakeTranslator,
        speech: FakeSpeech,
        clipboard: MemoryClipboard,
    ) -> (Services, TempDir) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = LanguageStore::new(
            dir.path().join(PREFERENCES_FILE),
            Arc::new(sample_catalog()),
        );
        let services = Services {
            translation: Arc::new(translator),
            speech: Arc::new(speech),
            clipboard: Arc::new(clipboard),
            store: Arc::new(store),
        };
        (services, dir)
    }
}
