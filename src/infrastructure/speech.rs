use std::io::Cursor;

use async_trait::async_trait;
use rodio::{Decoder, OutputStreamBuilder, Sink};

use crate::{
    core::gateway::SpeechGateway,
    domain::error::{TranslatorError, TranslatorResult},
    infrastructure::translation::http_client,
};

pub const TTS_URL: &str = "https://translate.google.com/translate_tts";
/// Longest text the TTS endpoint accepts in one request.
pub const MAX_CHUNK_CHARS: usize = 100;

/// Google text-to-speech with local playback through rodio.
#[derive(Debug, Clone)]
pub struct GoogleSpeech {
    client: reqwest::Client,
    endpoint: String,
}

impl GoogleSpeech {
    pub fn new() -> TranslatorResult<Self> {
        Self::with_endpoint(TTS_URL)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> TranslatorResult<Self> {
        Ok(Self {
            client: http_client()?,
            endpoint: endpoint.into(),
        })
    }

    async fn fetch_chunk(
        &self,
        chunk: &str,
        language: &str,
        index: usize,
        total: usize,
    ) -> TranslatorResult<Vec<u8>> {
        let idx = index.to_string();
        let total = total.to_string();
        let textlen = chunk.chars().count().to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language),
                ("q", chunk),
                ("idx", idx.as_str()),
                ("total", total.as_str()),
                ("textlen", textlen.as_str()),
            ])
            .send()
            .await
            .map_err(|e| TranslatorError::Service(format!("Speech request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslatorError::Service(format!(
                "Speech service returned {status}"
            )));
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TranslatorError::Service(format!("Speech download failed: {e}")))?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl SpeechGateway for GoogleSpeech {
    async fn synthesize(&self, text: &str, language: &str) -> TranslatorResult<Vec<u8>> {
        let chunks = split_into_chunks(text, MAX_CHUNK_CHARS);
        let mut audio = Vec::new();
        for (index, chunk) in chunks.iter().enumerate() {
            let part = self.fetch_chunk(chunk, language, index, chunks.len()).await?;
            audio.extend_from_slice(&part);
        }
        if audio.is_empty() {
            return Err(TranslatorError::service("Speech service returned no audio"));
        }
        Ok(audio)
    }

    async fn play(&self, audio: Vec<u8>) -> TranslatorResult<()> {
        tokio::task::spawn_blocking(move || play_blocking(audio))
            .await
            .map_err(|e| TranslatorError::Service(format!("Playback task failed: {e}")))?
    }
}

/// Decodes the MP3 stream and blocks until the sink has drained.
fn play_blocking(audio: Vec<u8>) -> TranslatorResult<()> {
    let mut stream = OutputStreamBuilder::open_default_stream()
        .map_err(|e| TranslatorError::Service(format!("No audio output: {e}")))?;
    stream.log_on_drop(false);
    let sink = Sink::connect_new(stream.mixer());
    let source = Decoder::new(Cursor::new(audio))
        .map_err(|e| TranslatorError::Service(format!("Undecodable audio: {e}")))?;
    sink.append(source);
    sink.sleep_until_end();
    Ok(())
}

/// Splits `text` into pieces of at most `max_chars` characters, breaking on
/// whitespace where possible. Words longer than `max_chars` are cut.
pub fn split_into_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word = word;
        let mut word_len = word.chars().count();

        while word_len > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let split_at = word
                .char_indices()
                .nth(max_chars)
                .map_or(word.len(), |(i, _)| i);
            chunks.push(word[..split_at].to_string());
            word = &word[split_at..];
            word_len -= max_chars;
        }
        if word.is_empty() {
            continue;
        }

        let needed = if current.is_empty() { word_len } else { current_len + 1 + word_len };
        if needed > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
