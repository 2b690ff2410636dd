use reqwest::blocking::Client;

use crate::shared::constants::{TRANSLATE_TTS_MAX_CHARS, TRANSLATE_TTS_URL};
use crate::synthesis::domain::audio_result::AudioResult;
use crate::synthesis::domain::backend::SynthesisBackend;
use crate::synthesis::domain::speech_synthesizer::{SpeechSynthesizer, SynthesisError};

/// Basic cloud synthesis through the translate-TTS endpoint.
///
/// The endpoint has no voice identity and no continuous speed scale, only a
/// language code and a slow/normal toggle. It also caps input length, so the
/// text is split into whitespace-aligned chunks and the per-chunk MP3
/// responses are concatenated into one result.
pub struct GttsSynthesizer {
    http: Client,
    language: String,
    slow: bool,
}

impl GttsSynthesizer {
    pub fn new(language: String, slow: bool) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http: Client::builder().build()?,
            language,
            slow,
        })
    }
}

impl SpeechSynthesizer for GttsSynthesizer {
    fn backend(&self) -> SynthesisBackend {
        SynthesisBackend::Gtts
    }

    fn synthesize(&self, text: &str) -> Result<AudioResult, SynthesisError> {
        let chunks = chunk_text(text, TRANSLATE_TTS_MAX_CHARS);
        let speed = if self.slow { "0.3" } else { "1" };
        let total = chunks.len().to_string();
        log::debug!("gtts: {} chunk(s), slow={}", chunks.len(), self.slow);

        let mut bytes = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            let idx_str = idx.to_string();
            let textlen = chunk.chars().count().to_string();
            let query = [
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", self.language.as_str()),
                ("ttsspeed", speed),
                ("total", total.as_str()),
                ("idx", idx_str.as_str()),
                ("textlen", textlen.as_str()),
                ("q", chunk.as_str()),
            ];
            let part = self
                .http
                .get(TRANSLATE_TTS_URL)
                .query(&query)
                .send()
                .and_then(|r| r.error_for_status())
                .and_then(|r| r.bytes())
                .map_err(|e| SynthesisError::Provider {
                    backend: SynthesisBackend::Gtts,
                    cause: format!("chunk {}/{}: {e}", idx + 1, total),
                })?;
            bytes.extend_from_slice(&part);
        }
        Ok(AudioResult::mp3(bytes))
    }
}

/// Split text into chunks of at most `max_chars` characters, breaking on
/// whitespace. A single word longer than the limit is hard-split.
fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    if text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if word_len > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let mut piece = String::new();
            for (i, c) in word.chars().enumerate() {
                if i > 0 && i % max_chars == 0 {
                    chunks.push(std::mem::take(&mut piece));
                }
                piece.push(c);
            }
            if !piece.is_empty() {
                chunks.push(piece);
            }
            continue;
        }

        // +1 for the separating space
        if current_len > 0 && current_len + 1 + word_len > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
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
