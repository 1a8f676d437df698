use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures of the translator domain and its gateways.
///
/// Empty input is not an error: translate and speak simply do nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum TranslatorError {
    #[error("The selected language code is invalid or not supported: {0}")]
    InvalidLanguageCode(String),
    #[error("{0}")]
    Service(String),
    #[error("Language preferences are unreadable: {0}")]
    ConfigCorrupt(String),
    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),
}

impl TranslatorError {
    pub fn service(err: impl Display) -> Self {
        Self::Service(err.to_string())
    }

    pub fn clipboard(err: impl Display) -> Self {
        Self::Clipboard(err.to_string())
    }
}

pub type TranslatorResult<T> = Result<T, TranslatorError>;
