pub mod eleven_labs_synthesizer;
pub mod espeak_synthesizer;
pub mod gtts_synthesizer;
pub mod synthesizer_factory;
