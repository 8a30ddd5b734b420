//! VoiceBridge - Speech-to-Speech Translation Service
//!
//! A Rust implementation of a speech-to-speech translation pipeline: uploaded
//! audio is transcribed with whisper, translated through hosted Marian/M2M100
//! models, and re-voiced through the ElevenLabs text-to-speech API.

pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod segment;
pub mod server;
pub mod synthesize;
pub mod transcribe;
pub mod translate;
