//! VoiceBridge - Speech-to-Speech Translation Service
//!
//! This is the main entry point for the VoiceBridge server, which turns an
//! uploaded audio clip in one language into synthesized speech in another
//! using whisper, hosted translation models, and the ElevenLabs API.

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tracing_appender::{non_blocking, rolling};

use voicebridge::cli::Args;
use voicebridge::config::{Config, Credentials};
use voicebridge::pipeline::Pipeline;
use voicebridge::server::{create_router, AppState};
use voicebridge::synthesize::ElevenLabsSynthesizer;
use voicebridge::transcribe::WhisperCliTranscriber;
use voicebridge::translate::{M2mTranslator, MarianTranslator, TranslationRouter};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Setup logging to both console and file
    setup_logging(args.verbose)?;

    // Load configuration
    let mut config = match &args.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => {
            // Try to load config.toml from current directory first
            if std::path::Path::new("config.toml").exists() {
                info!("Found config.toml in current directory, loading...");
                Config::from_file("config.toml")?
            } else {
                Config::default()
            }
        }
    };

    if let Some(port) = args.port {
        config.server.port = port;
    }

    // Credentials live in an env file; a missing synthesis key is fatal.
    if dotenvy::from_filename(&config.server.env_file).is_err() {
        warn!(
            "Env file {} not found, reading credentials from process environment",
            config.server.env_file
        );
    }
    let credentials = Credentials::from_env()?;

    let transcriber = WhisperCliTranscriber::new(config.transcriber.clone());
    if let Err(e) = transcriber.check_availability() {
        warn!("Whisper availability check failed: {}", e);
    }

    let direct = Arc::new(MarianTranslator::new(
        &config.translate,
        credentials.inference_api_token.clone(),
    ));
    let multilingual = Arc::new(M2mTranslator::new(
        &config.translate,
        credentials.inference_api_token.clone(),
    ));
    let router = TranslationRouter::new(direct, multilingual);

    let synthesizer = ElevenLabsSynthesizer::new(
        config.synthesis.clone(),
        credentials.elevenlabs_api_key.clone(),
    );

    let pipeline = Arc::new(Pipeline::new(
        Arc::new(transcriber),
        router,
        Arc::new(synthesizer),
    ));

    let app = create_router(AppState { pipeline });

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let app_dir = std::env::current_dir()?.join(".voicebridge");
    let log_dir = app_dir.join("log");
    std::fs::create_dir_all(&log_dir)?;

    // Set up file appender with daily rotation
    let file_appender = rolling::daily(&log_dir, "voicebridge.log");
    let (non_blocking_file, _guard) = non_blocking(file_appender);
    // Keep the guard alive for the duration of the program
    std::mem::forget(_guard);

    // Determine log level
    let log_level = if verbose { Level::DEBUG } else { Level::INFO };

    // Create console layer
    let console_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_file(true)
        .with_line_number(true);

    // Create file layer
    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_target(false)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false); // No ANSI colors in file

    // Setup layered subscriber
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(console_layer)
        .with(file_layer);

    // Initialize the subscriber
    subscriber.try_init()?;

    Ok(())
}
