pub mod resolve_transcript_use_case;
pub mod synthesize_speech_use_case;
