use thiserror::Error;

use crate::transcript::domain::normalize::normalize_entries;
use crate::transcript::domain::resolved_transcript::ResolvedTranscript;
use crate::transcript::domain::selection::select_variant;
use crate::transcript::domain::transcript_source::{EnumerationError, TranscriptSource};
use crate::transcript::domain::variant::FetchError;
use crate::translation::domain::translator::{TranslationError, Translator};

#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error(transparent)]
    Enumeration(#[from] EnumerationError),
    #[error("no transcript available for video {video_id}")]
    NoTranscriptAvailable { video_id: String },
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Translation(#[from] TranslationError),
}

/// Resolves a transcript for one video: enumerate the available tracks,
/// pick the best one by the fixed fallback order, normalize its entries, and
/// translate when the track language is not the requested one.
pub struct ResolveTranscriptUseCase {
    source: Box<dyn TranscriptSource>,
    translator: Box<dyn Translator>,
}

impl ResolveTranscriptUseCase {
    pub fn new(source: Box<dyn TranscriptSource>, translator: Box<dyn Translator>) -> Self {
        Self { source, translator }
    }

    pub fn run(
        &self,
        video_id: &str,
        target_language: &str,
    ) -> Result<ResolvedTranscript, ResolutionError> {
        let variants = self.source.list_variants(video_id)?;
        let (rule, variant) = select_variant(&variants, target_language).ok_or_else(|| {
            ResolutionError::NoTranscriptAvailable {
                video_id: video_id.to_string(),
            }
        })?;
        log::info!(
            "video {video_id}: selected {} track in {} via {rule}",
            variant.origin(),
            variant.language_code()
        );

        let entries = variant.fetch()?;
        let text = normalize_entries(&entries);
        // A track that exists but normalizes to nothing is a fetch-stage
        // failure, never an empty success.
        if text.is_empty() {
            return Err(FetchError::EmptyTrack {
                language: variant.language_code().to_string(),
            }
            .into());
        }

        let source_language = variant.language_code().to_string();
        if source_language != target_language {
            log::info!("translating transcript from {source_language} to {target_language}");
            let translated = self.translator.translate(&text, target_language)?;
            return Ok(ResolvedTranscript {
                text: translated,
                source_language,
                target_language: target_language.to_string(),
                was_translated: true,
            });
        }

        Ok(ResolvedTranscript {
            text,
            source_language,
            target_language: target_language.to_string(),
            was_translated: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::domain::timed_entry::TimedEntry;
    use crate::transcript::domain::variant::{TranscriptOrigin, TranscriptVariant};
    use crate::transcript::domain::variant_list::VariantList;
    use std::sync::{Arc, Mutex};

    // ─── Stubs ───

    #[derive(Clone)]
    struct TrackSpec {
        language: &'static str,
        fragments: Vec<&'static str>,
        fail_fetch: bool,
    }

    fn track(language: &'static str, fragments: &[&'static str]) -> TrackSpec {
        TrackSpec {
            language,
            fragments: fragments.to_vec(),
            fail_fetch: false,
        }
    }

    struct StubVariant {
        spec: TrackSpec,
        origin: TranscriptOrigin,
    }

    impl TranscriptVariant for StubVariant {
        fn language_code(&self) -> &str {
            self.spec.language
        }

        fn origin(&self) -> TranscriptOrigin {
            self.origin
        }

        fn fetch(&self) -> Result<Vec<TimedEntry>, FetchError> {
            if self.spec.fail_fetch {
                return Err(FetchError::Http {
                    language: self.spec.language.to_string(),
                    cause: "connection reset".to_string(),
                });
            }
            Ok(self
                .spec
                .fragments
                .iter()
                .enumerate()
                .map(|(i, text)| TimedEntry::new(*text, i as f64, 1.0))
                .collect())
        }
    }

    struct StubSource {
        manual: Vec<TrackSpec>,
        generated: Vec<TrackSpec>,
    }

    impl TranscriptSource for StubSource {
        fn list_variants(&self, _: &str) -> Result<VariantList, EnumerationError> {
            let boxed = |specs: &[TrackSpec], origin| {
                specs
                    .iter()
                    .cloned()
                    .map(|spec| {
                        Box::new(StubVariant { spec, origin }) as Box<dyn TranscriptVariant>
                    })
                    .collect()
            };
            Ok(VariantList::new(
                boxed(&self.manual, TranscriptOrigin::ManuallyCreated),
                boxed(&self.generated, TranscriptOrigin::AutoGenerated),
            ))
        }
    }

    struct FailingSource;

    impl TranscriptSource for FailingSource {
        fn list_variants(&self, video_id: &str) -> Result<VariantList, EnumerationError> {
            Err(EnumerationError::Http {
                video_id: video_id.to_string(),
                cause: "video not found".to_string(),
            })
        }
    }

    struct RecordingTranslator {
        calls: Arc<Mutex<Vec<(String, String)>>>,
        fail: bool,
    }

    impl Translator for RecordingTranslator {
        fn translate(&self, text: &str, target_language: &str) -> Result<String, TranslationError> {
            self.calls
                .lock()
                .unwrap()
                .push((text.to_string(), target_language.to_string()));
            if self.fail {
                return Err(TranslationError::EmptyResult);
            }
            Ok(format!("<{target_language}>{text}"))
        }
    }

    fn use_case(
        source: StubSource,
        fail_translation: bool,
    ) -> (ResolveTranscriptUseCase, Arc<Mutex<Vec<(String, String)>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let translator = RecordingTranslator {
            calls: calls.clone(),
            fail: fail_translation,
        };
        (
            ResolveTranscriptUseCase::new(Box::new(source), Box::new(translator)),
            calls,
        )
    }

    // ─── Selection and translation policy ───

    #[test]
    fn test_exact_manual_match_skips_translation() {
        let source = StubSource {
            manual: vec![track("de", &["Hallo"]), track("en", &["Hello", "", "world"])],
            generated: vec![track("en", &["auto"])],
        };
        let (uc, calls) = use_case(source, false);

        let resolved = uc.run("vid1", "en").unwrap();
        assert_eq!(resolved.text, "Helloworld");
        assert_eq!(resolved.source_language, "en");
        assert!(!resolved.was_translated);
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_mismatched_manual_selects_first_and_translates() {
        let source = StubSource {
            manual: vec![track("de", &["Hallo"]), track("fr", &["Salut"])],
            generated: vec![],
        };
        let (uc, calls) = use_case(source, false);

        let resolved = uc.run("vid1", "en").unwrap();
        assert_eq!(resolved.text, "<en>Hallo");
        assert_eq!(resolved.source_language, "de");
        assert_eq!(resolved.target_language, "en");
        assert!(resolved.was_translated);
        assert_eq!(
            *calls.lock().unwrap(),
            vec![("Hallo".to_string(), "en".to_string())]
        );
    }

    #[test]
    fn test_no_manual_falls_back_to_first_generated() {
        let source = StubSource {
            manual: vec![],
            generated: vec![track("en", &["generated text"]), track("hi", &["x"])],
        };
        let (uc, calls) = use_case(source, false);

        let resolved = uc.run("vid1", "en").unwrap();
        assert_eq!(resolved.text, "generated text");
        assert!(!resolved.was_translated);
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_zero_variants_is_no_transcript_available() {
        let source = StubSource {
            manual: vec![],
            generated: vec![],
        };
        let (uc, _) = use_case(source, false);

        let err = uc.run("vid1", "en").unwrap_err();
        match err {
            ResolutionError::NoTranscriptAvailable { video_id } => assert_eq!(video_id, "vid1"),
            other => panic!("expected NoTranscriptAvailable, got {other:?}"),
        }
    }

    // ─── Failure propagation ───

    #[test]
    fn test_enumeration_failure_propagates() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let uc = ResolveTranscriptUseCase::new(
            Box::new(FailingSource),
            Box::new(RecordingTranslator {
                calls: calls.clone(),
                fail: false,
            }),
        );
        let err = uc.run("vid1", "en").unwrap_err();
        assert!(matches!(err, ResolutionError::Enumeration(_)));
    }

    #[test]
    fn test_fetch_failure_propagates() {
        let mut spec = track("en", &["x"]);
        spec.fail_fetch = true;
        let source = StubSource {
            manual: vec![spec],
            generated: vec![],
        };
        let (uc, _) = use_case(source, false);

        let err = uc.run("vid1", "en").unwrap_err();
        assert!(matches!(err, ResolutionError::Fetch(FetchError::Http { .. })));
    }

    #[test]
    fn test_translation_failure_surfaces_error_not_original_text() {
        let source = StubSource {
            manual: vec![track("de", &["Hallo"])],
            generated: vec![],
        };
        let (uc, _) = use_case(source, true);

        let err = uc.run("vid1", "en").unwrap_err();
        assert!(matches!(
            err,
            ResolutionError::Translation(TranslationError::EmptyResult)
        ));
    }

    #[test]
    fn test_track_with_no_text_is_a_fetch_failure() {
        let source = StubSource {
            manual: vec![track("en", &["", "   "])],
            generated: vec![],
        };
        let (uc, _) = use_case(source, false);

        let err = uc.run("vid1", "en").unwrap_err();
        match err {
            ResolutionError::Fetch(FetchError::EmptyTrack { language }) => {
                assert_eq!(language, "en");
            }
            other => panic!("expected EmptyTrack, got {other:?}"),
        }
    }
}
