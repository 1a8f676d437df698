use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    core::gateway::TranslationGateway,
    domain::{
        error::{TranslatorError, TranslatorResult},
        language::LanguageCatalog,
    },
    infrastructure::languages::google_catalog,
};

pub const TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";
pub const USER_AGENT: &str = "Mozilla/5.0";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Google Translate over the public `translate_a/single` endpoint.
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new() -> TranslatorResult<Self> {
        Self::with_endpoint(TRANSLATE_URL)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> TranslatorResult<Self> {
        let client = http_client()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

pub(crate) fn http_client() -> TranslatorResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .map_err(TranslatorError::service)
}

#[async_trait]
impl TranslationGateway for GoogleTranslator {
    fn supported_languages(&self) -> LanguageCatalog {
        google_catalog()
    }

    async fn translate(&self, text: &str, source: &str, target: &str) -> TranslatorResult<String> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| TranslatorError::Service(format!("Translation request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslatorError::Service(format!(
                "Translation service returned {status}"
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| {
                TranslatorError::Service(format!("Unreadable translation response: {e}"))
            })?;
        parse_response(&body)
    }
}

/// Joins the translated segments of a `translate_a/single` reply.
///
/// The reply is a nested array whose first element lists one
/// `[translated, original, ...]` entry per sentence.
pub fn parse_response(body: &Value) -> TranslatorResult<String> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslatorError::service("Translation response has no segments"))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        return Err(TranslatorError::service("Translation response is empty"));
    }
    Ok(translated)
}
