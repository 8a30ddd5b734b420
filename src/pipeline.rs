use std::io::Write;
use std::sync::Arc;
use tracing::info;

use crate::error::Result;
use crate::synthesize::Synthesizer;
use crate::transcribe::Transcriber;
use crate::translate::TranslationRouter;

/// Result of one end-to-end pipeline run.
#[derive(Debug)]
pub enum PipelineOutcome {
    /// Synthesized speech plus the texts it was derived from.
    Audio {
        audio: Vec<u8>,
        transcript: String,
        translation: String,
    },
    /// The clip contained no recognizable speech.
    NoSpeech,
}

/// Sequences transcription, translation routing, and synthesis for a single
/// request. Owns the temp-file lifecycle for the uploaded audio.
pub struct Pipeline {
    transcriber: Arc<dyn Transcriber>,
    router: TranslationRouter,
    synthesizer: Arc<dyn Synthesizer>,
}

impl Pipeline {
    pub fn new(
        transcriber: Arc<dyn Transcriber>,
        router: TranslationRouter,
        synthesizer: Arc<dyn Synthesizer>,
    ) -> Self {
        Self {
            transcriber,
            router,
            synthesizer,
        }
    }

    /// Run the full pipeline for one uploaded clip.
    ///
    /// The upload lives in a named temp file for the duration of the call;
    /// the guard removes it on every exit path, including errors.
    pub async fn run(&self, audio: &[u8], src_lang: &str, tgt_lang: &str) -> Result<PipelineOutcome> {
        let mut tmp = tempfile::Builder::new()
            .prefix("voicebridge-")
            .suffix(".webm")
            .tempfile()?;
        tmp.write_all(audio)?;
        tmp.flush()?;

        let transcript = self.transcriber.transcribe(tmp.path()).await?;
        let transcript = transcript.trim().to_string();

        if transcript.is_empty() {
            return Ok(PipelineOutcome::NoSpeech);
        }

        info!("Transcribed: {}", transcript);

        let translation = self.router.translate(&transcript, src_lang, tgt_lang).await?;

        info!("Translation: {}", translation);

        let audio = self.synthesizer.synthesize(&translation).await?;

        Ok(PipelineOutcome::Audio {
            audio,
            transcript,
            translation,
        })
    }
}
