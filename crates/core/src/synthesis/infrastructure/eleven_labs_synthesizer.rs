use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::shared::constants::{ELEVEN_LABS_API_URL, ELEVEN_LABS_MODEL};
use crate::synthesis::domain::audio_result::AudioResult;
use crate::synthesis::domain::backend::SynthesisBackend;
use crate::synthesis::domain::speech_synthesizer::{SpeechSynthesizer, SynthesisError};

/// A voice available to the authenticated account.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NeuralVoice {
    pub voice_id: String,
    pub name: String,
}

/// Neural cloud synthesis through the ElevenLabs API.
///
/// Requires a provisioned API key; the factory refuses to construct this
/// adapter without one, so a missing credential never reaches the provider.
pub struct ElevenLabsSynthesizer {
    http: Client,
    api_key: String,
    voice_id: String,
    speed: f32,
    volume_db: f32,
}

impl ElevenLabsSynthesizer {
    pub fn new(
        api_key: String,
        voice_id: String,
        speed: f32,
        volume_db: f32,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http: Client::builder().build()?,
            api_key,
            voice_id,
            speed,
            volume_db,
        })
    }

    /// List the voices available to this account.
    pub fn voices(&self) -> Result<Vec<NeuralVoice>, SynthesisError> {
        let listing: VoiceListing = self
            .http
            .get(format!("{ELEVEN_LABS_API_URL}/voices"))
            .header("xi-api-key", &self.api_key)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json())
            .map_err(|e| SynthesisError::Provider {
                backend: SynthesisBackend::ElevenLabs,
                cause: format!("voice listing failed: {e}"),
            })?;
        Ok(listing.voices)
    }
}

impl SpeechSynthesizer for ElevenLabsSynthesizer {
    fn backend(&self) -> SynthesisBackend {
        SynthesisBackend::ElevenLabs
    }

    fn synthesize(&self, text: &str) -> Result<AudioResult, SynthesisError> {
        let body = SynthesisBody {
            text,
            model_id: ELEVEN_LABS_MODEL,
            voice_settings: VoiceSettings {
                speed: self.speed,
                volume_gain_db: self.volume_db,
            },
        };

        let response = self
            .http
            .post(format!(
                "{ELEVEN_LABS_API_URL}/text-to-speech/{}",
                self.voice_id
            ))
            .header("xi-api-key", &self.api_key)
            .json(&body)
            .send()
            .map_err(|e| SynthesisError::Provider {
                backend: SynthesisBackend::ElevenLabs,
                cause: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().unwrap_or_default();
            return Err(SynthesisError::Provider {
                backend: SynthesisBackend::ElevenLabs,
                cause: format!("HTTP {status}: {detail}"),
            });
        }

        let bytes = response
            .bytes()
            .map_err(|e| SynthesisError::Provider {
                backend: SynthesisBackend::ElevenLabs,
                cause: e.to_string(),
            })?
            .to_vec();
        Ok(AudioResult::mp3(bytes))
    }
}

#[derive(Serialize)]
struct SynthesisBody<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Serialize)]
struct VoiceSettings {
    speed: f32,
    volume_gain_db: f32,
}

#[derive(Deserialize)]
struct VoiceListing {
    #[serde(default)]
    voices: Vec<NeuralVoice>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_listing_deserializes() {
        let body = r#"{"voices":[
            {"voice_id":"21m00Tcm4TlvDq8ikWAM","name":"Rachel","category":"premade"},
            {"voice_id":"AZnzlk1XvdvUeBnXmlld","name":"Domi","category":"premade"}
        ]}"#;
        let listing: VoiceListing = serde_json::from_str(body).unwrap();
        assert_eq!(listing.voices.len(), 2);
        assert_eq!(listing.voices[0].name, "Rachel");
    }

    #[test]
    fn test_synthesis_body_carries_speed_and_gain() {
        let body = SynthesisBody {
            text: "hello",
            model_id: ELEVEN_LABS_MODEL,
            voice_settings: VoiceSettings {
                speed: 1.5,
                volume_gain_db: -3.0,
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model_id"], "eleven_multilingual_v2");
        assert_eq!(json["voice_settings"]["speed"], 1.5);
        assert_eq!(json["voice_settings"]["volume_gain_db"], -3.0);
    }
}
