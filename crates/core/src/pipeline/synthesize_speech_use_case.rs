use crate::synthesis::domain::audio_result::AudioResult;
use crate::synthesis::domain::speech_synthesizer::{SpeechSynthesizer, SynthesisError};

/// Converts text into one complete audio result through the configured
/// backend. Input and output are both checked here so every backend shares
/// the same all-or-nothing contract: empty input never reaches a provider,
/// and empty provider output is a failure, not silent audio.
pub struct SynthesizeSpeechUseCase {
    synthesizer: Box<dyn SpeechSynthesizer>,
}

impl SynthesizeSpeechUseCase {
    pub fn new(synthesizer: Box<dyn SpeechSynthesizer>) -> Self {
        Self { synthesizer }
    }

    pub fn run(&self, text: &str) -> Result<AudioResult, SynthesisError> {
        if text.trim().is_empty() {
            return Err(SynthesisError::EmptyText {
                backend: self.synthesizer.backend(),
            });
        }

        let audio = self.synthesizer.synthesize(text)?;
        if audio.bytes.is_empty() {
            return Err(SynthesisError::Provider {
                backend: self.synthesizer.backend(),
                cause: "provider returned no audio data".to_string(),
            });
        }
        Ok(audio)
    }
}
