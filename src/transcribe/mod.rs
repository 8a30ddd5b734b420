// Transcription collaborator
//
// Speech-to-text is an external capability; the pipeline only consumes this
// seam. The shipped implementation shells out to the whisper command-line
// tool, but anything that turns an audio file into text fits behind it.

pub mod whisper_cli;

use async_trait::async_trait;
use std::path::Path;

pub use whisper_cli::WhisperCliTranscriber;

use crate::error::Result;

/// Speech-to-text collaborator.
///
/// Implementations must be safe for concurrent invocation from multiple
/// simultaneous requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe the audio file at `audio_path` and return the raw
    /// transcript text. An empty or whitespace-only result means no speech
    /// was detected.
    async fn transcribe(&self, audio_path: &Path) -> Result<String>;
}
