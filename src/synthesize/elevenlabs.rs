use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::debug;

use crate::config::SynthesisConfig;
use crate::error::{Result, VoiceBridgeError};
use super::Synthesizer;

/// ElevenLabs text-to-speech client.
pub struct ElevenLabsSynthesizer {
    client: Client,
    config: SynthesisConfig,
    api_key: String,
}

impl ElevenLabsSynthesizer {
    pub fn new(config: SynthesisConfig, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("HTTP client creation should not fail");

        Self {
            client,
            config,
            api_key,
        }
    }
}

#[async_trait]
impl Synthesizer for ElevenLabsSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>> {
        let url = format!(
            "{}/v1/text-to-speech/{}",
            self.config.endpoint, self.config.voice_id
        );

        debug!("Sending synthesis request to: {}", url);

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .query(&[("output_format", self.config.output_format.as_str())])
            .json(&json!({
                "text": text,
                "model_id": self.config.model_id,
            }))
            .send()
            .await
            .map_err(|e| VoiceBridgeError::Synthesis(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(VoiceBridgeError::Synthesis(format!(
                "ElevenLabs API error {}: {}",
                status, error_text
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| VoiceBridgeError::Synthesis(format!("Failed to read audio body: {}", e)))?;

        Ok(bytes.to_vec())
    }
}
