//! Translation boundary.
//!
//! Uses the unofficial Google Translate API endpoint (free tier).
//! For production, consider using the official Google Cloud Translation API.

use crate::shared::error::{AppError, AppResult};
use async_trait::async_trait;
use isolang::Language;

/// Fixed source/target language pair, validated at construction time.
///
/// Translating a language to itself is a configuration error, so equal codes
/// are rejected here rather than at the first translate call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    source: String,
    target: String,
}

impl LanguagePair {
    pub fn new(source: &str, target: &str) -> AppResult<Self> {
        let source = source.trim().to_ascii_lowercase();
        let target = target.trim().to_ascii_lowercase();

        if source == target {
            return Err(AppError::Validation(
                "Source and target languages must differ".to_string(),
            ));
        }
        // "auto" asks the service to detect the source language
        if source != "auto" && Language::from_639_1(&source).is_none() {
            return Err(AppError::Validation(format!(
                "Unknown source language code '{}'",
                source
            )));
        }
        if Language::from_639_1(&target).is_none() {
            return Err(AppError::Validation(format!(
                "Unknown target language code '{}'",
                target
            )));
        }

        Ok(Self { source, target })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

/// Capability to translate plain text.
///
/// Calls are expected to block on network latency and must only be made from
/// the monitor's worker task, never the UI side.
#[async_trait]
pub trait Translate: Send + Sync {
    async fn translate(&self, text: &str) -> AppResult<String>;
}

/// Translator backed by the public `translate_a/single` endpoint.
pub struct GoogleTranslator {
    client: reqwest::Client,
    pair: LanguagePair,
}

impl GoogleTranslator {
    pub fn new(pair: LanguagePair) -> Self {
        Self {
            client: reqwest::Client::new(),
            pair,
        }
    }

    pub fn pair(&self) -> &LanguagePair {
        &self.pair
    }
}

#[async_trait]
impl Translate for GoogleTranslator {
    async fn translate(&self, text: &str) -> AppResult<String> {
        let url = format!(
            "https://translate.googleapis.com/translate_a/single?client=gtx&sl={}&tl={}&dt=t&q={}",
            self.pair.source(),
            self.pair.target(),
            urlencoding::encode(text)
        );

        let response = self
            .client
            .get(&url)
            .header("User-Agent", "Mozilla/5.0")
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Translation API request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Network(format!(
                "Translation API error: {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::Network(format!("Failed to parse translation API response: {}", e)))?;

        parse_translation(&json).ok_or_else(|| {
            AppError::Network("Translation API returned no translated segments".to_string())
        })
    }
}

/// Parse the Google Translate response format.
///
/// The response is an array: `[[[translated, original, ...], ...], null, source_lang]`;
/// the translated text is the concatenation of the first element of each segment.
fn parse_translation(json: &serde_json::Value) -> Option<String> {
    let segments = json.get(0)?.as_array()?;
    let mut translated = String::new();
    for segment in segments {
        if let Some(text) = segment.get(0).and_then(|v| v.as_str()) {
            translated.push_str(text);
        }
    }
    if translated.is_empty() {
        None
    } else {
        Some(translated)
    }
}
