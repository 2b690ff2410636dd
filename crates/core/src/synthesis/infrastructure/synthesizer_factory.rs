use crate::synthesis::domain::backend::SynthesisBackend;
use crate::synthesis::domain::request::{BackendParams, NEURAL_SPEED_MAX, NEURAL_SPEED_MIN};
use crate::synthesis::domain::speech_synthesizer::{SpeechSynthesizer, SynthesisError};

use super::eleven_labs_synthesizer::ElevenLabsSynthesizer;
use super::espeak_synthesizer::EspeakSynthesizer;
use super::gtts_synthesizer::GttsSynthesizer;

/// Build the synthesizer for the requested backend.
///
/// Parameter and configuration problems are rejected here, before any
/// provider is contacted: out-of-range values are `InvalidParameter` and a
/// neural request without a credential is `MissingCredential`. Logs which
/// backend is dispatched.
pub fn create_synthesizer(
    params: BackendParams,
    credential: Option<&str>,
) -> Result<Box<dyn SpeechSynthesizer>, SynthesisError> {
    match params {
        BackendParams::Espeak {
            voice_index,
            rate_wpm,
            volume,
        } => {
            if !(0.0..=1.0).contains(&volume) {
                return Err(SynthesisError::InvalidParameter {
                    backend: SynthesisBackend::Espeak,
                    detail: format!("volume {volume} outside 0.0-1.0"),
                });
            }
            log::info!("Using espeak backend (voice {voice_index}, {rate_wpm} wpm)");
            Ok(Box::new(EspeakSynthesizer::new(voice_index, rate_wpm, volume)))
        }
        BackendParams::Gtts { language, slow } => {
            log::info!("Using gtts backend (language {language}, slow={slow})");
            let synthesizer =
                GttsSynthesizer::new(language, slow).map_err(|e| SynthesisError::Provider {
                    backend: SynthesisBackend::Gtts,
                    cause: format!("http client init failed: {e}"),
                })?;
            Ok(Box::new(synthesizer))
        }
        BackendParams::ElevenLabs {
            voice_id,
            speed,
            volume_db,
        } => {
            if !(NEURAL_SPEED_MIN..=NEURAL_SPEED_MAX).contains(&speed) {
                return Err(SynthesisError::InvalidParameter {
                    backend: SynthesisBackend::ElevenLabs,
                    detail: format!(
                        "speed {speed} outside {NEURAL_SPEED_MIN}-{NEURAL_SPEED_MAX}"
                    ),
                });
            }
            let api_key = credential.ok_or(SynthesisError::MissingCredential {
                backend: SynthesisBackend::ElevenLabs,
            })?;
            log::info!("Using elevenlabs backend (voice {voice_id}, speed {speed})");
            let synthesizer =
                ElevenLabsSynthesizer::new(api_key.to_string(), voice_id, speed, volume_db)
                    .map_err(|e| SynthesisError::Provider {
                        backend: SynthesisBackend::ElevenLabs,
                        cause: format!("http client init failed: {e}"),
                    })?;
            Ok(Box::new(synthesizer))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neural_params() -> BackendParams {
        BackendParams::ElevenLabs {
            voice_id: "21m00Tcm4TlvDq8ikWAM".to_string(),
            speed: 1.0,
            volume_db: 0.0,
        }
    }

    #[test]
    fn test_espeak_params_build_espeak_backend() {
        let synthesizer = create_synthesizer(
            BackendParams::Espeak {
                voice_index: 0,
                rate_wpm: 200,
                volume: 0.8,
            },
            None,
        )
        .unwrap();
        assert_eq!(synthesizer.backend(), SynthesisBackend::Espeak);
    }

    #[test]
    fn test_gtts_params_build_gtts_backend() {
        let synthesizer = create_synthesizer(
            BackendParams::Gtts {
                language: "en".to_string(),
                slow: true,
            },
            None,
        )
        .unwrap();
        assert_eq!(synthesizer.backend(), SynthesisBackend::Gtts);
    }

    #[test]
    fn test_neural_without_credential_is_missing_credential() {
        let err = create_synthesizer(neural_params(), None).unwrap_err();
        match err {
            SynthesisError::MissingCredential { backend } => {
                assert_eq!(backend, SynthesisBackend::ElevenLabs);
            }
            other => panic!("expected MissingCredential, got {other:?}"),
        }
    }

    #[test]
    fn test_neural_with_credential_builds() {
        let synthesizer = create_synthesizer(neural_params(), Some("key")).unwrap();
        assert_eq!(synthesizer.backend(), SynthesisBackend::ElevenLabs);
    }

    #[test]
    fn test_neural_speed_out_of_range_is_invalid_parameter() {
        let params = BackendParams::ElevenLabs {
            voice_id: "v".to_string(),
            speed: 3.0,
            volume_db: 0.0,
        };
        let err = create_synthesizer(params, Some("key")).unwrap_err();
        assert!(matches!(err, SynthesisError::InvalidParameter { .. }));
    }

    #[test]
    fn test_espeak_volume_out_of_range_is_invalid_parameter() {
        let params = BackendParams::Espeak {
            voice_index: 0,
            rate_wpm: 200,
            volume: 1.5,
        };
        let err = create_synthesizer(params, None).unwrap_err();
        assert!(matches!(err, SynthesisError::InvalidParameter { .. }));
    }
}
