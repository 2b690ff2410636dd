use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslationError {
    /// The provider answered, but with no usable text. Downstream consumers
    /// cannot tell "no content" from a provider glitch, so this is a failure,
    /// never an empty success.
    #[error("translation provider returned an empty result")]
    EmptyResult,
    #[error("translation request failed: {cause}")]
    Provider { cause: String },
}

/// Domain interface for translating text into a target language.
pub trait Translator: Send {
    fn translate(&self, text: &str, target_language: &str) -> Result<String, TranslationError>;
}
