// Synthesis collaborator
//
// Text-to-speech is an external capability consumed over HTTP. The shipped
// implementation talks to the ElevenLabs API with a fixed voice, model, and
// output format.

pub mod elevenlabs;

use async_trait::async_trait;

pub use elevenlabs::ElevenLabsSynthesizer;

use crate::error::Result;

/// Text-to-speech collaborator.
///
/// Returns compressed audio bytes ready to ship as a response body.
/// Implementations must be safe for concurrent invocation from multiple
/// simultaneous requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Synthesizer: Send + Sync {
    /// Synthesize speech for `text` using the configured voice.
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>>;
}
