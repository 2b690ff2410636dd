use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use tubevox_core::pipeline::resolve_transcript_use_case::ResolveTranscriptUseCase;
use tubevox_core::pipeline::synthesize_speech_use_case::SynthesizeSpeechUseCase;
use tubevox_core::shared::constants::ELEVEN_LABS_KEY_ENV;
use tubevox_core::shared::video_id::extract_video_id;
use tubevox_core::synthesis::domain::backend::SynthesisBackend;
use tubevox_core::synthesis::domain::request::{BackendParams, SynthesisRequest};
use tubevox_core::synthesis::infrastructure::eleven_labs_synthesizer::ElevenLabsSynthesizer;
use tubevox_core::synthesis::infrastructure::espeak_synthesizer::EspeakSynthesizer;
use tubevox_core::synthesis::infrastructure::synthesizer_factory::create_synthesizer;
use tubevox_core::transcript::domain::transcript_source::TranscriptSource;
use tubevox_core::transcript::infrastructure::watch_page_client::WatchPageClient;
use tubevox_core::translation::infrastructure::gtx_translator::GtxTranslator;

/// Video transcript resolution and text-to-speech.
#[derive(Parser)]
#[command(name = "tubevox")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a video's transcript, translating into the target language.
    Transcript {
        /// Video URL or bare video id.
        url: String,

        /// Target language code (e.g. en, hi).
        #[arg(long, default_value = "en")]
        language: String,

        /// Write the transcript to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List the transcript tracks available for a video.
    List {
        /// Video URL or bare video id.
        url: String,
    },

    /// Convert text to speech with the chosen backend.
    Speak {
        /// Text to convert.
        text: String,

        /// Synthesis backend: espeak, gtts, or elevenlabs.
        #[arg(long, default_value = "gtts")]
        backend: String,

        /// Output audio file.
        #[arg(long, default_value = "speech.mp3")]
        output: PathBuf,

        /// espeak: voice index (see `tubevox voices`).
        #[arg(long, default_value = "0")]
        voice_index: usize,

        /// espeak: speaking rate in words per minute.
        #[arg(long, default_value = "200")]
        rate: u32,

        /// espeak: volume, 0.0-1.0.
        #[arg(long, default_value = "1.0")]
        volume: f32,

        /// gtts: language code.
        #[arg(long, default_value = "en")]
        language: String,

        /// gtts: speak at half speed.
        #[arg(long)]
        slow: bool,

        /// elevenlabs: voice id (see `tubevox voices --backend elevenlabs`).
        #[arg(long)]
        voice_id: Option<String>,

        /// elevenlabs: speed scale, 0.5-2.0.
        #[arg(long, default_value = "1.0")]
        speed: f32,

        /// elevenlabs: volume gain in dB.
        #[arg(long, default_value = "0.0")]
        volume_db: f32,
    },

    /// List the voices of a backend (espeak or elevenlabs).
    Voices {
        #[arg(long, default_value = "espeak")]
        backend: String,
    },
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    match Cli::parse().command {
        Command::Transcript {
            url,
            language,
            output,
        } => run_transcript(&url, &language, output.as_deref()),
        Command::List { url } => run_list(&url),
        Command::Speak {
            text,
            backend,
            output,
            voice_index,
            rate,
            volume,
            language,
            slow,
            voice_id,
            speed,
            volume_db,
        } => {
            let params = build_params(
                &backend,
                voice_index,
                rate,
                volume,
                language,
                slow,
                voice_id,
                speed,
                volume_db,
            )?;
            run_speak(text, params, &output)
        }
        Command::Voices { backend } => run_voices(&backend),
    }
}

fn run_transcript(
    url: &str,
    language: &str,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let video_id = extract_video_id(url);
    let source = WatchPageClient::new()?;
    let translator = GtxTranslator::new()?;
    let use_case = ResolveTranscriptUseCase::new(Box::new(source), Box::new(translator));

    let resolved = use_case.run(video_id, language)?;
    let text = resolved.annotated_text();
    match output {
        Some(path) => {
            fs::write(path, &text)?;
            log::info!("Wrote transcript to {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn run_list(url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let video_id = extract_video_id(url);
    let source = WatchPageClient::new()?;
    let variants = source.list_variants(video_id)?;

    if variants.is_empty() {
        println!("No transcripts available");
        return Ok(());
    }
    for variant in variants.iter() {
        println!("- {} ({})", variant.language_code(), variant.origin());
    }
    Ok(())
}

fn run_speak(
    text: String,
    params: BackendParams,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = SynthesisRequest::new(text, params);
    let credential = env::var(ELEVEN_LABS_KEY_ENV).ok();

    let synthesizer = create_synthesizer(request.params.clone(), credential.as_deref())?;
    let audio = SynthesizeSpeechUseCase::new(synthesizer).run(&request.text)?;

    fs::write(output, &audio.bytes)?;
    println!(
        "Wrote {} bytes of {} audio to {}",
        audio.bytes.len(),
        audio.mime_type,
        output.display()
    );
    Ok(())
}

fn run_voices(backend: &str) -> Result<(), Box<dyn std::error::Error>> {
    match backend.parse::<SynthesisBackend>()? {
        SynthesisBackend::Espeak => {
            let engine = EspeakSynthesizer::new(0, 200, 1.0);
            for (index, voice) in engine.list_voices()?.iter().enumerate() {
                println!("{index:3}  {:10}  {}", voice.language, voice.name);
            }
        }
        SynthesisBackend::ElevenLabs => {
            let api_key = env::var(ELEVEN_LABS_KEY_ENV)
                .map_err(|_| format!("{ELEVEN_LABS_KEY_ENV} is not set"))?;
            // The voice id plays no part in listing.
            let synthesizer = ElevenLabsSynthesizer::new(api_key, String::new(), 1.0, 0.0)?;
            for voice in synthesizer.voices()? {
                println!("{}  {}", voice.voice_id, voice.name);
            }
        }
        SynthesisBackend::Gtts => {
            return Err("the gtts backend has no selectable voices".into());
        }
    }
    Ok(())
}

fn build_params(
    backend: &str,
    voice_index: usize,
    rate: u32,
    volume: f32,
    language: String,
    slow: bool,
    voice_id: Option<String>,
    speed: f32,
    volume_db: f32,
) -> Result<BackendParams, Box<dyn std::error::Error>> {
    let params = match backend.parse::<SynthesisBackend>()? {
        SynthesisBackend::Espeak => BackendParams::Espeak {
            voice_index,
            rate_wpm: rate,
            volume,
        },
        SynthesisBackend::Gtts => BackendParams::Gtts { language, slow },
        SynthesisBackend::ElevenLabs => BackendParams::ElevenLabs {
            voice_id: voice_id.ok_or("--voice-id is required for the elevenlabs backend")?,
            speed,
            volume_db,
        },
    };
    Ok(params)
}
