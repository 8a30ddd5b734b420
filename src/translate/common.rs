use std::time::Duration;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::TranslateConfig;
use crate::error::{Result, VoiceBridgeError};

/// One generated translation in a hosted-inference response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationOutput {
    pub translation_text: String,
}

/// Shared HTTP plumbing for hosted translation models.
pub struct InferenceClient {
    client: Client,
    endpoint: String,
    api_token: Option<String>,
}

impl InferenceClient {
    pub fn new(config: &TranslateConfig, api_token: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("HTTP client creation should not fail");

        Self {
            client,
            endpoint: config.endpoint.clone(),
            api_token,
        }
    }

    /// POST a translation request to a hosted model and return the first
    /// generated translation.
    pub async fn request_translation(
        &self,
        model_id: &str,
        body: &serde_json::Value,
    ) -> Result<String> {
        let url = format!("{}/{}", self.endpoint, model_id);

        debug!("Sending translation request to: {}", url);

        let mut request = self.client.post(&url).json(body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| VoiceBridgeError::Translation(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(VoiceBridgeError::Translation(format!(
                "Inference API error {}: {}",
                status, error_text
            )));
        }

        let outputs: Vec<TranslationOutput> = response
            .json()
            .await
            .map_err(|e| VoiceBridgeError::Translation(format!("Failed to parse response: {}", e)))?;

        let translated = outputs
            .into_iter()
            .next()
            .map(|o| o.translation_text.trim().to_string())
            .unwrap_or_default();

        if translated.is_empty() {
            return Err(VoiceBridgeError::Translation(
                "Empty translation received".to_string(),
            ));
        }

        Ok(translated)
    }
}
