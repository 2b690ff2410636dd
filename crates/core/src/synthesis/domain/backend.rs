use std::str::FromStr;

use super::speech_synthesizer::SynthesisError;

/// The three synthesis strategies. Each has its own parameter surface; see
/// [`super::request::BackendParams`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SynthesisBackend {
    /// Local espeak engine, rendered through a transient file.
    Espeak,
    /// Translate-TTS cloud endpoint; language plus a binary slow toggle.
    Gtts,
    /// ElevenLabs neural synthesis; needs a provisioned API credential.
    ElevenLabs,
}

impl std::fmt::Display for SynthesisBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SynthesisBackend::Espeak => "espeak",
            SynthesisBackend::Gtts => "gtts",
            SynthesisBackend::ElevenLabs => "elevenlabs",
        };
        write!(f, "{name}")
    }
}

impl FromStr for SynthesisBackend {
    type Err = SynthesisError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "espeak" => Ok(SynthesisBackend::Espeak),
            "gtts" => Ok(SynthesisBackend::Gtts),
            "elevenlabs" => Ok(SynthesisBackend::ElevenLabs),
            other => Err(SynthesisError::UnsupportedBackend {
                name: other.to_string(),
            }),
        }
    }
}
