/// One timed caption fragment as delivered by the transcript provider.
///
/// `start` and `duration` are part of the provider contract but play no role
/// in normalization; only `text` survives into the resolved transcript.
#[derive(Clone, Debug, PartialEq)]
pub struct TimedEntry {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

impl TimedEntry {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }
}
