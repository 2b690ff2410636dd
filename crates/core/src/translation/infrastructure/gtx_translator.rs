use reqwest::blocking::Client;

use crate::shared::constants::TRANSLATE_URL;
use crate::translation::domain::translator::{TranslationError, Translator};

/// Translator backed by the public `translate_a/single` endpoint.
///
/// The `gtx` client requires no credential. The response is a nested JSON
/// array whose first element lists translated segments; the segments are
/// concatenated into the final text.
pub struct GtxTranslator {
    http: Client,
}

impl GtxTranslator {
    pub fn new() -> Result<Self, reqwest::Error> {
        Ok(Self {
            http: Client::builder().build()?,
        })
    }
}

impl Translator for GtxTranslator {
    fn translate(&self, text: &str, target_language: &str) -> Result<String, TranslationError> {
        let body = self
            .http
            .get(TRANSLATE_URL)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target_language),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.text())
            .map_err(|e| TranslationError::Provider {
                cause: e.to_string(),
            })?;
        parse_translation(&body)
    }
}

fn parse_translation(body: &str) -> Result<String, TranslationError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| TranslationError::Provider {
            cause: format!("unexpected response shape: {e}"),
        })?;

    let segments = value
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or(TranslationError::EmptyResult)?;

    let mut translated = String::new();
    for segment in segments {
        if let Some(piece) = segment.get(0).and_then(|v| v.as_str()) {
            translated.push_str(piece);
        }
    }

    if translated.trim().is_empty() {
        return Err(TranslationError::EmptyResult);
    }
    Ok(translated)
}
