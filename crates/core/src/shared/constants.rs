//! Provider endpoints and tuning constants.

/// Watch page used to enumerate available caption tracks.
pub const WATCH_PAGE_URL: &str = "https://www.youtube.com/watch";

/// Timed-text wire format requested when fetching a caption track.
pub const TIMED_TEXT_FORMAT: &str = "json3";

/// Public translation endpoint (the `gtx` client needs no credential).
pub const TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";

/// Translate-TTS endpoint serving MP3 for short text fragments.
pub const TRANSLATE_TTS_URL: &str = "https://translate.google.com/translate_tts";

/// The translate-TTS endpoint rejects long inputs; text is chunked to this
/// many characters on whitespace boundaries before fetching.
pub const TRANSLATE_TTS_MAX_CHARS: usize = 100;

/// ElevenLabs API root.
pub const ELEVEN_LABS_API_URL: &str = "https://api.elevenlabs.io/v1";

/// Multilingual model used for neural synthesis.
pub const ELEVEN_LABS_MODEL: &str = "eleven_multilingual_v2";

/// Environment variable the CLI reads the ElevenLabs credential from.
pub const ELEVEN_LABS_KEY_ENV: &str = "ELEVEN_LABS_API_KEY";

/// Default local synthesis binary; overridable per engine instance.
pub const ESPEAK_BINARY: &str = "espeak-ng";

/// espeak amplitude ceiling; engine volume 0.0-1.0 maps onto 0..=200.
pub const ESPEAK_MAX_AMPLITUDE: u32 = 200;

/// Browser user agent sent on watch-page and timed-text requests. Some
/// providers serve a degraded page to unknown clients.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/120.0.0.0 Safari/537.36";

/// Cookie that skips the consent interstitial on watch-page requests.
pub const CONSENT_COOKIE: &str = "CONSENT=YES+cb";
