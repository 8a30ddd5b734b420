use async_trait::async_trait;
use serde_json::json;

use crate::config::TranslateConfig;
use crate::error::Result;
use super::common::InferenceClient;
use super::SentenceTranslator;

/// Multilingual backend using a single many-to-many model (M2M100).
///
/// The model takes an explicit source-language tag and a forced
/// target-language decoding constraint, so one hosted model covers every
/// direction, including languages with no bilingual pair.
pub struct M2mTranslator {
    client: InferenceClient,
    model_id: String,
}

impl M2mTranslator {
    pub fn new(config: &TranslateConfig, api_token: Option<String>) -> Self {
        Self {
            client: InferenceClient::new(config, api_token),
            model_id: config.multilingual_model.clone(),
        }
    }
}

#[async_trait]
impl SentenceTranslator for M2mTranslator {
    async fn translate_sentence(&self, sentence: &str, src: &str, tgt: &str) -> Result<String> {
        let body = json!({
            "inputs": sentence,
            "parameters": {
                "src_lang": src,
                "tgt_lang": tgt,
            }
        });
        self.client.request_translation(&self.model_id, &body).await
    }
}
