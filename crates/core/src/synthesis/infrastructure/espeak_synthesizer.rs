use std::fs;
use std::path::Path;
use std::process::Command;

use crate::shared::constants::{ESPEAK_BINARY, ESPEAK_MAX_AMPLITUDE};
use crate::synthesis::domain::audio_result::AudioResult;
use crate::synthesis::domain::backend::SynthesisBackend;
use crate::synthesis::domain::speech_synthesizer::{SpeechSynthesizer, SynthesisError};

/// A voice the local engine can speak with, as reported by `--voices`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EspeakVoice {
    pub language: String,
    pub name: String,
}

/// Local synthesis through the espeak engine binary.
///
/// The engine only renders to a file, so synthesis goes through a transient
/// temp file that is read back and removed. Voice selection is by index into
/// the engine's own voice listing.
pub struct EspeakSynthesizer {
    binary: String,
    voice_index: usize,
    rate_wpm: u32,
    volume: f32,
}

impl EspeakSynthesizer {
    pub fn new(voice_index: usize, rate_wpm: u32, volume: f32) -> Self {
        Self::with_binary(ESPEAK_BINARY, voice_index, rate_wpm, volume)
    }

    /// Use a specific engine binary (e.g. plain `espeak`, or a test double)
    /// instead of the default from `PATH`.
    pub fn with_binary(binary: &str, voice_index: usize, rate_wpm: u32, volume: f32) -> Self {
        Self {
            binary: binary.to_string(),
            voice_index,
            rate_wpm,
            volume,
        }
    }

    /// Enumerate the engine's voices by parsing `--voices` output.
    pub fn list_voices(&self) -> Result<Vec<EspeakVoice>, SynthesisError> {
        let output = Command::new(&self.binary)
            .arg("--voices")
            .output()
            .map_err(|e| SynthesisError::Provider {
                backend: SynthesisBackend::Espeak,
                cause: format!("failed to run {}: {e}", self.binary),
            })?;
        if !output.status.success() {
            return Err(SynthesisError::Provider {
                backend: SynthesisBackend::Espeak,
                cause: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(parse_voices(&String::from_utf8_lossy(&output.stdout)))
    }

    fn resolve_voice(&self) -> Result<EspeakVoice, SynthesisError> {
        let voices = self.list_voices()?;
        voices
            .get(self.voice_index)
            .cloned()
            .ok_or_else(|| SynthesisError::InvalidParameter {
                backend: SynthesisBackend::Espeak,
                detail: format!(
                    "voice index {} out of range (engine has {} voices)",
                    self.voice_index,
                    voices.len()
                ),
            })
    }
}

impl SpeechSynthesizer for EspeakSynthesizer {
    fn backend(&self) -> SynthesisBackend {
        SynthesisBackend::Espeak
    }

    fn synthesize(&self, text: &str) -> Result<AudioResult, SynthesisError> {
        let voice = self.resolve_voice()?;
        let amplitude = (self.volume * ESPEAK_MAX_AMPLITUDE as f32).round() as u32;

        let bytes = render_via_temp_file(|path| {
            let output = Command::new(&self.binary)
                .arg("-v")
                .arg(&voice.language)
                .arg("-s")
                .arg(self.rate_wpm.to_string())
                .arg("-a")
                .arg(amplitude.to_string())
                .arg("-w")
                .arg(path)
                .arg(text)
                .output()
                .map_err(|e| SynthesisError::Provider {
                    backend: SynthesisBackend::Espeak,
                    cause: format!("failed to run {}: {e}", self.binary),
                })?;
            if !output.status.success() {
                return Err(SynthesisError::Provider {
                    backend: SynthesisBackend::Espeak,
                    cause: String::from_utf8_lossy(&output.stderr).trim().to_string(),
                });
            }
            Ok(())
        })?;
        Ok(AudioResult::mp3(bytes))
    }
}

/// Render into a transient file and read the bytes back.
///
/// The backing file belongs to a `NamedTempFile`, so it is unlinked when the
/// guard drops on every exit path, render failures included. Deletion is by
/// path, so an engine that recreates the file in place is still cleaned up.
fn render_via_temp_file<F>(render: F) -> Result<Vec<u8>, SynthesisError>
where
    F: FnOnce(&Path) -> Result<(), SynthesisError>,
{
    let file = tempfile::Builder::new()
        .prefix("tubevox-")
        .suffix(".mp3")
        .tempfile()
        .map_err(|e| SynthesisError::Provider {
            backend: SynthesisBackend::Espeak,
            cause: format!("could not create transient audio file: {e}"),
        })?;

    render(file.path())?;

    fs::read(file.path()).map_err(|e| SynthesisError::Provider {
        backend: SynthesisBackend::Espeak,
        cause: format!("could not read rendered audio: {e}"),
    })
}

fn parse_voices(listing: &str) -> Vec<EspeakVoice> {
    listing
        .lines()
        .skip(1) // column header
        .filter_map(|line| {
            let cols: Vec<&str> = line.split_whitespace().collect();
            if cols.len() < 4 {
                return None;
            }
            Some(EspeakVoice {
                language: cols[1].to_string(),
                name: cols[3].to_string(),
            })
        })
        .collect()
}
