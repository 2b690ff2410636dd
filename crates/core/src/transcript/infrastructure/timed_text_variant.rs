use reqwest::blocking::Client;
use serde::Deserialize;

use crate::shared::constants::TIMED_TEXT_FORMAT;
use crate::transcript::domain::timed_entry::TimedEntry;
use crate::transcript::domain::variant::{FetchError, TranscriptOrigin, TranscriptVariant};

/// One caption track backed by the provider's timed-text endpoint.
///
/// Fetches the track in the `json3` wire format and flattens each event's
/// segments into a single [`TimedEntry`].
pub struct TimedTextVariant {
    http: Client,
    language_code: String,
    base_url: String,
    origin: TranscriptOrigin,
}

impl TimedTextVariant {
    pub fn new(
        http: Client,
        language_code: String,
        base_url: String,
        origin: TranscriptOrigin,
    ) -> Self {
        Self {
            http,
            language_code,
            base_url,
            origin,
        }
    }
}

impl TranscriptVariant for TimedTextVariant {
    fn language_code(&self) -> &str {
        &self.language_code
    }

    fn origin(&self) -> TranscriptOrigin {
        self.origin
    }

    fn fetch(&self) -> Result<Vec<TimedEntry>, FetchError> {
        let body = self
            .http
            .get(&self.base_url)
            .query(&[("fmt", TIMED_TEXT_FORMAT)])
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.text())
            .map_err(|e| FetchError::Http {
                language: self.language_code.clone(),
                cause: e.to_string(),
            })?;
        parse_timed_text(&body, &self.language_code)
    }
}

#[derive(Deserialize)]
struct TimedTextBody {
    #[serde(default)]
    events: Vec<TimedTextEvent>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimedTextEvent {
    #[serde(default)]
    t_start_ms: u64,
    #[serde(default)]
    d_duration_ms: u64,
    // Absent on window-styling events, which carry no text.
    segs: Option<Vec<TimedTextSeg>>,
}

#[derive(Deserialize)]
struct TimedTextSeg {
    #[serde(default)]
    utf8: String,
}

fn parse_timed_text(body: &str, language: &str) -> Result<Vec<TimedEntry>, FetchError> {
    let parsed: TimedTextBody =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed {
            language: language.to_string(),
            cause: e.to_string(),
        })?;

    let entries = parsed
        .events
        .into_iter()
        .filter_map(|event| {
            let segs = event.segs?;
            let text: String = segs.into_iter().map(|s| s.utf8).collect();
            Some(TimedEntry::new(
                text,
                event.t_start_ms as f64 / 1000.0,
                event.d_duration_ms as f64 / 1000.0,
            ))
        })
        .collect();
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "wireMagic": "pb3",
        "events": [
            {"tStartMs": 0, "dDurationMs": 2000},
            {"tStartMs": 120, "dDurationMs": 1880, "segs": [{"utf8": "Hello "}, {"utf8": "there"}]},
            {"tStartMs": 2000, "dDurationMs": 1500, "segs": [{"utf8": "\n"}]},
            {"tStartMs": 3500, "dDurationMs": 900, "segs": [{"utf8": "world"}]}
        ]
    }"#;

    #[test]
    fn test_parse_flattens_segments_per_event() {
        let entries = parse_timed_text(SAMPLE, "en").unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].text, "Hello there");
        assert_eq!(entries[0].start, 0.12);
        assert_eq!(entries[2].text, "world");
    }

    #[test]
    fn test_parse_skips_events_without_segments() {
        let entries = parse_timed_text(SAMPLE, "en").unwrap();
        assert!(entries.iter().all(|e| e.start > 0.0));
    }

    #[test]
    fn test_parse_keeps_newline_segments_as_entries() {
        // Normalization drops them later; parsing reports what the provider
        // sent.
        let entries = parse_timed_text(SAMPLE, "en").unwrap();
        assert_eq!(entries[1].text, "\n");
    }

    #[test]
    fn test_parse_no_events_is_empty() {
        let entries = parse_timed_text(r#"{"wireMagic": "pb3"}"#, "en").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_parse_malformed_body_is_an_error() {
        let err = parse_timed_text("<transcript/>", "en").unwrap_err();
        match err {
            FetchError::Malformed { language, .. } => assert_eq!(language, "en"),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }
}
