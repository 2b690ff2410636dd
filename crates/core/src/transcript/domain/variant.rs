use thiserror::Error;

use super::timed_entry::TimedEntry;

/// Who produced a transcript track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TranscriptOrigin {
    ManuallyCreated,
    AutoGenerated,
}

impl std::fmt::Display for TranscriptOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranscriptOrigin::ManuallyCreated => write!(f, "Manual"),
            TranscriptOrigin::AutoGenerated => write!(f, "Auto-generated"),
        }
    }
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("timed-text request for the {language} track failed: {cause}")]
    Http { language: String, cause: String },
    #[error("timed-text payload for the {language} track was not understood: {cause}")]
    Malformed { language: String, cause: String },
    #[error("the {language} track contained no text")]
    EmptyTrack { language: String },
}

/// Domain interface for one available transcript track.
///
/// Variants are immutable once enumerated; `fetch` performs the blocking
/// timed-text retrieval for this track.
pub trait TranscriptVariant: Send {
    fn language_code(&self) -> &str;
    fn origin(&self) -> TranscriptOrigin;
    fn fetch(&self) -> Result<Vec<TimedEntry>, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_display_matches_listing_labels() {
        assert_eq!(TranscriptOrigin::ManuallyCreated.to_string(), "Manual");
        assert_eq!(TranscriptOrigin::AutoGenerated.to_string(), "Auto-generated");
    }
}
