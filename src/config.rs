use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::error::{Result, VoiceBridgeError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub transcriber: TranscriberConfig,
    pub translate: TranslateConfig,
    pub synthesis: SynthesisConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Env file holding API credentials, loaded at startup
    pub env_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriberConfig {
    /// Path to the whisper command-line binary
    pub binary_path: String,
    /// Whisper model to transcribe with
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    /// Base URL of the hosted-inference endpoint serving translation models
    pub endpoint: String,
    /// Multilingual many-to-many model for languages with no bilingual pair
    pub multilingual_model: String,
    /// Request timeout in seconds for a single sentence translation
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Base URL of the ElevenLabs API
    pub endpoint: String,
    /// Voice used for all synthesized output
    pub voice_id: String,
    /// TTS model identifier
    pub model_id: String,
    /// Compressed audio output format
    pub output_format: String,
    /// Request timeout in seconds for one synthesis call
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
                env_file: "API.env".to_string(),
            },
            transcriber: TranscriberConfig {
                binary_path: "whisper".to_string(),
                model: "base".to_string(),
            },
            translate: TranslateConfig {
                endpoint: "https://api-inference.huggingface.co/models".to_string(),
                multilingual_model: "facebook/m2m100_418M".to_string(),
                timeout_secs: 120,
            },
            synthesis: SynthesisConfig {
                endpoint: "https://api.elevenlabs.io".to_string(),
                voice_id: "JBFqnCBsd6RMkjVDRZzb".to_string(),
                model_id: "eleven_multilingual_v2".to_string(),
                output_format: "mp3_44100_128".to_string(),
                timeout_secs: 120,
            },
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| VoiceBridgeError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| VoiceBridgeError::Config(format!("Failed to parse config file: {}", e)))
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VoiceBridgeError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| VoiceBridgeError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }
}

/// API credentials resolved from the environment after the env file is loaded.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// ElevenLabs API key, required for synthesis
    pub elevenlabs_api_key: String,
    /// Bearer token for the hosted-inference endpoint, if it requires one
    pub inference_api_token: Option<String>,
}

impl Credentials {
    /// Read credentials from the process environment. A missing ElevenLabs
    /// key is a fatal configuration error.
    pub fn from_env() -> Result<Self> {
        let elevenlabs_api_key = std::env::var("ELEVENLABS_API_KEY")
            .map_err(|_| VoiceBridgeError::Config("ELEVENLABS_API_KEY missing".to_string()))?;

        let inference_api_token = std::env::var("HF_API_TOKEN").ok();

        Ok(Self {
            elevenlabs_api_key,
            inference_api_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.server.port, 8000);
        assert_eq!(parsed.synthesis.model_id, "eleven_multilingual_v2");
        assert_eq!(parsed.translate.multilingual_model, "facebook/m2m100_418M");
    }

    #[test]
    fn test_from_file_rejects_missing_file() {
        let result = Config::from_file("does-not-exist.toml");
        assert!(matches!(result, Err(VoiceBridgeError::Config(_))));
    }
}
