use serde::{Deserialize, Serialize};

use crate::domain::error::TranslatorError;

/// Requests to the translation and speech gateways and their outcomes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ServiceMsg {
    TranslateRequested,
    TranslationCompleted(Result<String, TranslatorError>),
    SpeakRequested,
    SpeechCompleted(Result<(), TranslatorError>),
}
