use async_trait::async_trait;
use serde_json::json;

use crate::config::TranslateConfig;
use crate::error::Result;
use super::common::InferenceClient;
use super::SentenceTranslator;

/// Direct-pair backend using Helsinki-NLP opus-mt bilingual models.
///
/// Each language direction maps to its own hosted model; the model identifier
/// is derived from the pair, so this backend must only ever be handed
/// directions the capability table approves.
pub struct MarianTranslator {
    client: InferenceClient,
}

impl MarianTranslator {
    pub fn new(config: &TranslateConfig, api_token: Option<String>) -> Self {
        Self {
            client: InferenceClient::new(config, api_token),
        }
    }

    fn model_id(src: &str, tgt: &str) -> String {
        format!("Helsinki-NLP/opus-mt-{}-{}", src, tgt)
    }
}

#[async_trait]
impl SentenceTranslator for MarianTranslator {
    async fn translate_sentence(&self, sentence: &str, src: &str, tgt: &str) -> Result<String> {
        let body = json!({ "inputs": sentence });
        self.client
            .request_translation(&Self::model_id(src, tgt), &body)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_id_follows_opus_mt_naming() {
        assert_eq!(
            MarianTranslator::model_id("en", "fr"),
            "Helsinki-NLP/opus-mt-en-fr"
        );
        assert_eq!(
            MarianTranslator::model_id("zh", "en"),
            "Helsinki-NLP/opus-mt-zh-en"
        );
    }
}
