use std::sync::Arc;
use tracing::info;

use crate::error::Result;
use crate::segment::split_sentences;
use super::pairs;
use super::SentenceTranslator;

/// Hub language every otherwise-unsupported pair is chained through.
pub const PIVOT_LANGUAGE: &str = "en";

/// How a translation request will be served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationStrategy {
    /// Source and target match; the text passes through untouched.
    Identity,
    /// One side has no bilingual model; use the many-to-many model.
    Multilingual,
    /// A dedicated bilingual model covers the pair.
    DirectPair,
    /// Chain src->en and en->tgt through bilingual models.
    PivotViaEnglish,
}

impl TranslationStrategy {
    /// Pick the strategy for a language pair.
    ///
    /// The multilingual check runs before the capability table: a language
    /// served only by the many-to-many model must never reach a bilingual
    /// backend, even if the table were to match.
    pub fn select(src: &str, tgt: &str) -> Self {
        if src == tgt {
            Self::Identity
        } else if pairs::multilingual_only(src) || pairs::multilingual_only(tgt) {
            Self::Multilingual
        } else if pairs::supports_direct(src, tgt) {
            Self::DirectPair
        } else {
            Self::PivotViaEnglish
        }
    }
}

/// Routes translation requests to the cheapest available backend path.
///
/// All strategies work sentence-by-sentence and re-join with a single space:
/// segment-level translation bounds context size for the underlying models
/// and caps the blast radius of a bad generation to one sentence.
pub struct TranslationRouter {
    direct: Arc<dyn SentenceTranslator>,
    multilingual: Arc<dyn SentenceTranslator>,
}

impl TranslationRouter {
    pub fn new(
        direct: Arc<dyn SentenceTranslator>,
        multilingual: Arc<dyn SentenceTranslator>,
    ) -> Self {
        Self {
            direct,
            multilingual,
        }
    }

    /// Translate text from `src` to `tgt`, selecting a backend path.
    ///
    /// Any backend failure propagates and fails the whole request; there is
    /// no retry and no partial output.
    pub async fn translate(&self, text: &str, src: &str, tgt: &str) -> Result<String> {
        let strategy = TranslationStrategy::select(src, tgt);

        if strategy == TranslationStrategy::Identity {
            return Ok(text.to_string());
        }

        info!("Routing {} -> {} via {:?}", src, tgt, strategy);

        match strategy {
            TranslationStrategy::Identity => unreachable!(),
            TranslationStrategy::Multilingual => {
                self.translate_each(&self.multilingual, text, src, tgt).await
            }
            TranslationStrategy::DirectPair => {
                self.translate_each(&self.direct, text, src, tgt).await
            }
            TranslationStrategy::PivotViaEnglish => self.translate_via_pivot(text, src, tgt).await,
        }
    }

    /// Run one backend over every sentence and re-join with spaces.
    async fn translate_each(
        &self,
        backend: &Arc<dyn SentenceTranslator>,
        text: &str,
        src: &str,
        tgt: &str,
    ) -> Result<String> {
        let mut outputs = Vec::new();
        for sentence in split_sentences(text) {
            outputs.push(backend.translate_sentence(&sentence, src, tgt).await?);
        }
        Ok(outputs.join(" "))
    }

    /// Chain two bilingual hops through English.
    async fn translate_via_pivot(&self, text: &str, src: &str, tgt: &str) -> Result<String> {
        // First hop: into English, unless the source already is English.
        let mid_text = if src != PIVOT_LANGUAGE {
            self.translate_each(&self.direct, text, src, PIVOT_LANGUAGE)
                .await?
        } else {
            text.to_string()
        };

        // Translated sentence boundaries can differ from the source ones, so
        // the intermediate text is re-segmented before the second hop.
        let mut outputs = Vec::new();
        for sentence in split_sentences(&mid_text) {
            if tgt == PIVOT_LANGUAGE {
                outputs.push(sentence);
            } else {
                outputs.push(
                    self.direct
                        .translate_sentence(&sentence, PIVOT_LANGUAGE, tgt)
                        .await?,
                );
            }
        }
        Ok(outputs.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::super::MockSentenceTranslator;
    use super::*;
    use crate::error::VoiceBridgeError;

    fn unused_backend() -> Arc<dyn SentenceTranslator> {
        let mut mock = MockSentenceTranslator::new();
        mock.expect_translate_sentence().times(0);
        Arc::new(mock)
    }

    #[test]
    fn test_strategy_selection() {
        assert_eq!(
            TranslationStrategy::select("fr", "fr"),
            TranslationStrategy::Identity
        );
        assert_eq!(
            TranslationStrategy::select("pa", "en"),
            TranslationStrategy::Multilingual
        );
        assert_eq!(
            TranslationStrategy::select("en", "pa"),
            TranslationStrategy::Multilingual
        );
        assert_eq!(
            TranslationStrategy::select("en", "fr"),
            TranslationStrategy::DirectPair
        );
        assert_eq!(
            TranslationStrategy::select("zh", "en"),
            TranslationStrategy::DirectPair
        );
        assert_eq!(
            TranslationStrategy::select("fr", "zh"),
            TranslationStrategy::PivotViaEnglish
        );
        assert_eq!(
            TranslationStrategy::select("en", "ja"),
            TranslationStrategy::PivotViaEnglish
        );
    }

    #[tokio::test]
    async fn test_identity_returns_input_with_zero_backend_calls() {
        let router = TranslationRouter::new(unused_backend(), unused_backend());

        let result = router.translate("Bonjour. Ça va?", "fr", "fr").await.unwrap();
        assert_eq!(result, "Bonjour. Ça va?");
    }

    #[tokio::test]
    async fn test_direct_pair_translates_per_sentence() {
        let mut direct = MockSentenceTranslator::new();
        direct
            .expect_translate_sentence()
            .times(2)
            .withf(|_, src, tgt| src == "en" && tgt == "fr")
            .returning(|s, _, _| Ok(format!("fr({})", s)));

        let router = TranslationRouter::new(Arc::new(direct), unused_backend());

        let result = router
            .translate("Hello world! How are you?", "en", "fr")
            .await
            .unwrap();
        assert_eq!(result, "fr(Hello world!) fr(How are you?)");
    }

    #[tokio::test]
    async fn test_multilingual_takes_priority_over_direct() {
        let mut multilingual = MockSentenceTranslator::new();
        multilingual
            .expect_translate_sentence()
            .times(1)
            .withf(|s, src, tgt| s == "Hello." && src == "pa" && tgt == "en")
            .returning(|_, _, _| Ok("translated".to_string()));

        let router = TranslationRouter::new(unused_backend(), Arc::new(multilingual));

        let result = router.translate("Hello.", "pa", "en").await.unwrap();
        assert_eq!(result, "translated");
    }

    #[tokio::test]
    async fn test_pivot_runs_two_passes_through_english() {
        let mut direct = MockSentenceTranslator::new();
        direct
            .expect_translate_sentence()
            .times(1)
            .withf(|s, src, tgt| s == "Bonjour le monde." && src == "fr" && tgt == "en")
            .returning(|_, _, _| Ok("Hello world.".to_string()));
        direct
            .expect_translate_sentence()
            .times(1)
            .withf(|s, src, tgt| s == "Hello world." && src == "en" && tgt == "zh")
            .returning(|_, _, _| Ok("你好世界。".to_string()));

        let router = TranslationRouter::new(Arc::new(direct), unused_backend());

        let result = router.translate("Bonjour le monde.", "fr", "zh").await.unwrap();
        assert_eq!(result, "你好世界。");
    }

    #[tokio::test]
    async fn test_pivot_resegments_intermediate_text() {
        // One source sentence comes back from the first hop as two English
        // sentences; the second hop must see both.
        let mut direct = MockSentenceTranslator::new();
        direct
            .expect_translate_sentence()
            .times(1)
            .withf(|_, src, tgt| src == "fr" && tgt == "en")
            .returning(|_, _, _| Ok("First part. Second part.".to_string()));
        direct
            .expect_translate_sentence()
            .times(2)
            .withf(|_, src, tgt| src == "en" && tgt == "zh")
            .returning(|s, _, _| Ok(format!("zh({})", s)));

        let router = TranslationRouter::new(Arc::new(direct), unused_backend());

        let result = router.translate("Une phrase.", "fr", "zh").await.unwrap();
        assert_eq!(result, "zh(First part.) zh(Second part.)");
    }

    #[tokio::test]
    async fn test_pivot_from_english_skips_first_hop() {
        let mut direct = MockSentenceTranslator::new();
        direct
            .expect_translate_sentence()
            .times(1)
            .withf(|s, src, tgt| s == "Hello." && src == "en" && tgt == "ja")
            .returning(|_, _, _| Ok("こんにちは。".to_string()));

        let router = TranslationRouter::new(Arc::new(direct), unused_backend());

        let result = router.translate("Hello.", "en", "ja").await.unwrap();
        assert_eq!(result, "こんにちは。");
    }

    #[tokio::test]
    async fn test_pivot_to_english_passes_second_leg_through() {
        let mut direct = MockSentenceTranslator::new();
        direct
            .expect_translate_sentence()
            .times(1)
            .withf(|s, src, tgt| s == "Guten Tag." && src == "de" && tgt == "en")
            .returning(|_, _, _| Ok("Good day.".to_string()));

        let router = TranslationRouter::new(Arc::new(direct), unused_backend());

        // de -> en has no direct pair, so it pivots; the second leg is a
        // passthrough because the target is the pivot language itself.
        let result = router.translate("Guten Tag.", "de", "en").await.unwrap();
        assert_eq!(result, "Good day.");
    }

    #[tokio::test]
    async fn test_backend_failure_fails_the_whole_request() {
        let mut direct = MockSentenceTranslator::new();
        direct
            .expect_translate_sentence()
            .returning(|_, _, _| Err(VoiceBridgeError::Translation("model unavailable".to_string())));

        let router = TranslationRouter::new(Arc::new(direct), unused_backend());

        let result = router.translate("Hello.", "en", "fr").await;
        assert!(matches!(result, Err(VoiceBridgeError::Translation(_))));
    }
}
