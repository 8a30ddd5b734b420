use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::Command;
use tracing::debug;

use crate::config::TranscriberConfig;
use crate::error::{Result, VoiceBridgeError};
use super::Transcriber;

/// JSON output written by the whisper command-line tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhisperOutput {
    pub text: String,
    #[serde(default)]
    pub language: Option<String>,
}

/// Transcriber that shells out to the whisper command-line tool.
pub struct WhisperCliTranscriber {
    config: TranscriberConfig,
}

impl WhisperCliTranscriber {
    pub fn new(config: TranscriberConfig) -> Self {
        Self { config }
    }

    /// Check the whisper binary is reachable before serving requests.
    pub fn check_availability(&self) -> Result<()> {
        let output = Command::new(&self.config.binary_path)
            .arg("--help")
            .output()
            .map_err(|e| {
                VoiceBridgeError::Transcriber(format!("whisper command not found: {}", e))
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(VoiceBridgeError::Transcriber(format!(
                "whisper not available: {}",
                stderr
            )))
        }
    }
}

#[async_trait]
impl Transcriber for WhisperCliTranscriber {
    async fn transcribe(&self, audio_path: &Path) -> Result<String> {
        debug!(
            "Transcribing {} with model {}",
            audio_path.display(),
            self.config.model
        );

        // whisper writes its result files into an output directory; use a
        // scoped one so nothing is left behind.
        let temp_dir = tempfile::tempdir().map_err(|e| {
            VoiceBridgeError::Transcriber(format!("Failed to create temp directory: {}", e))
        })?;
        let output_dir = temp_dir.path();

        let output = Command::new(&self.config.binary_path)
            .arg(audio_path)
            .arg("--model")
            .arg(&self.config.model)
            .arg("--output_dir")
            .arg(output_dir)
            .arg("--output_format")
            .arg("json")
            .output()
            .map_err(|e| VoiceBridgeError::Transcriber(format!("Failed to run whisper: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(VoiceBridgeError::Transcriber(format!(
                "whisper failed: {}",
                stderr
            )));
        }

        // The result lands at <input stem>.json in the output directory.
        let stem = audio_path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| VoiceBridgeError::Transcriber("Invalid audio path".to_string()))?;
        let json_path = output_dir.join(format!("{}.json", stem));

        let content = std::fs::read_to_string(&json_path).map_err(|e| {
            VoiceBridgeError::Transcriber(format!(
                "Failed to read whisper output {}: {}",
                json_path.display(),
                e
            ))
        })?;

        let parsed: WhisperOutput = serde_json::from_str(&content).map_err(|e| {
            VoiceBridgeError::Transcriber(format!("Failed to parse whisper output: {}", e))
        })?;

        Ok(parsed.text)
    }
}
