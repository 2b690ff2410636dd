use thiserror::Error;

use super::audio_result::AudioResult;
use super::backend::SynthesisBackend;

#[derive(Error, Debug)]
pub enum SynthesisError {
    /// Asked for a backend this build does not know. A programming or input
    /// error, not a provider failure.
    #[error("unknown synthesis backend: {name}")]
    UnsupportedBackend { name: String },
    /// The backend needs an API credential and none is configured. Raised
    /// before any provider call so it is distinguishable from a provider-side
    /// failure.
    #[error("{backend} requires an API credential but none is configured")]
    MissingCredential { backend: SynthesisBackend },
    #[error("invalid parameter for {backend}: {detail}")]
    InvalidParameter {
        backend: SynthesisBackend,
        detail: String,
    },
    #[error("{backend}: no text to synthesize")]
    EmptyText { backend: SynthesisBackend },
    #[error("{backend} synthesis failed: {cause}")]
    Provider {
        backend: SynthesisBackend,
        cause: String,
    },
}

/// Domain interface for text-to-speech synthesis.
///
/// A successful call returns complete audio; partial or garbled output is
/// never surfaced. Implementations that receive chunked provider responses
/// concatenate them before returning.
pub trait SpeechSynthesizer: Send {
    fn backend(&self) -> SynthesisBackend;
    fn synthesize(&self, text: &str) -> Result<AudioResult, SynthesisError>;
}

impl std::fmt::Debug for dyn SpeechSynthesizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechSynthesizer")
            .field("backend", &self.backend())
            .finish()
    }
}
