use super::backend::SynthesisBackend;

/// Neural speed scale bounds (continuous, 1.0 = normal).
pub const NEURAL_SPEED_MIN: f32 = 0.5;
pub const NEURAL_SPEED_MAX: f32 = 2.0;

/// Backend-specific synthesis parameters, keyed by backend identity.
///
/// The three surfaces are deliberately incompatible: the local engine has a
/// voice index and a words-per-minute rate, the basic cloud backend only
/// knows a language and a binary slow toggle, and the neural backend takes a
/// named voice with continuous speed and a dB-like volume gain. Each adapter
/// validates only the parameters it recognizes.
#[derive(Clone, Debug, PartialEq)]
pub enum BackendParams {
    Espeak {
        /// Index into the engine's enumerated voice list.
        voice_index: usize,
        /// Speaking rate in words per minute.
        rate_wpm: u32,
        /// Volume, 0.0-1.0.
        volume: f32,
    },
    Gtts {
        language: String,
        /// Halves the speaking speed; there is no finer-grained control.
        slow: bool,
    },
    ElevenLabs {
        voice_id: String,
        /// Speed scale, [`NEURAL_SPEED_MIN`]..=[`NEURAL_SPEED_MAX`].
        speed: f32,
        /// Volume gain in dB; positive is louder.
        volume_db: f32,
    },
}

impl BackendParams {
    pub fn backend(&self) -> SynthesisBackend {
        match self {
            BackendParams::Espeak { .. } => SynthesisBackend::Espeak,
            BackendParams::Gtts { .. } => SynthesisBackend::Gtts,
            BackendParams::ElevenLabs { .. } => SynthesisBackend::ElevenLabs,
        }
    }
}

/// One synthesis call: the text plus the parameters of the chosen backend.
/// Constructed per conversion, never reused.
#[derive(Clone, Debug, PartialEq)]
pub struct SynthesisRequest {
    pub text: String,
    pub params: BackendParams,
}

impl SynthesisRequest {
    pub fn new(text: impl Into<String>, params: BackendParams) -> Self {
        Self {
            text: text.into(),
            params,
        }
    }

    pub fn backend(&self) -> SynthesisBackend {
        self.params.backend()
    }
}
