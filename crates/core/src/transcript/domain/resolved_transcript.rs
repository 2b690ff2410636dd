/// The outcome of transcript resolution: one text blob plus provenance.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedTranscript {
    pub text: String,
    pub source_language: String,
    pub target_language: String,
    pub was_translated: bool,
}

impl ResolvedTranscript {
    /// The transcript text, prefixed with a human-readable provenance note
    /// when the track had to be translated.
    pub fn annotated_text(&self) -> String {
        if self.was_translated {
            format!(
                "Original transcript in {}\nTranslated to {}:\n\n{}",
                self.source_language, self.target_language, self.text
            )
        } else {
            self.text.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotated_text_untranslated_is_bare() {
        let resolved = ResolvedTranscript {
            text: "hello".to_string(),
            source_language: "en".to_string(),
            target_language: "en".to_string(),
            was_translated: false,
        };
        assert_eq!(resolved.annotated_text(), "hello");
    }

    #[test]
    fn test_annotated_text_translated_carries_provenance() {
        let resolved = ResolvedTranscript {
            text: "hallo".to_string(),
            source_language: "en".to_string(),
            target_language: "de".to_string(),
            was_translated: true,
        };
        assert_eq!(
            resolved.annotated_text(),
            "Original transcript in en\nTranslated to de:\n\nhallo"
        );
    }
}
