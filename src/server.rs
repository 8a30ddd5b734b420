use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::{header, HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::pipeline::{Pipeline, PipelineOutcome};

/// Characters escaped in the text side-channel headers: everything except
/// unreserved characters and `/`.
const HEADER_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

const X_ORIGINAL_TEXT: HeaderName = HeaderName::from_static("x-original-text");
const X_TRANSLATED_TEXT: HeaderName = HeaderName::from_static("x-translated-text");

/// Uploads larger than this are rejected by the extractor.
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/translate-tts", post(translate_tts_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
        }),
    )
}

#[tracing::instrument(skip(state, multipart))]
async fn translate_tts_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Response {
    let mut file: Option<Vec<u8>> = None;
    let mut src_lang: Option<String> = None;
    let mut tgt_lang: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart");
                return bad_request(format!("Failed to read multipart: {}", e));
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => match field.bytes().await {
                Ok(data) => file = Some(data.to_vec()),
                Err(e) => return bad_request(format!("Failed to read file: {}", e)),
            },
            "src_lang" => match field.text().await {
                Ok(text) => src_lang = Some(text),
                Err(e) => return bad_request(format!("Failed to read src_lang: {}", e)),
            },
            "tgt_lang" => match field.text().await {
                Ok(text) => tgt_lang = Some(text),
                Err(e) => return bad_request(format!("Failed to read tgt_lang: {}", e)),
            },
            _ => {}
        }
    }

    let (Some(file), Some(src_lang), Some(tgt_lang)) = (file, src_lang, tgt_lang) else {
        tracing::warn!("Request missing required multipart fields");
        return bad_request("Fields file, src_lang, and tgt_lang are required".to_string());
    };

    tracing::debug!(
        bytes = file.len(),
        src_lang = %src_lang,
        tgt_lang = %tgt_lang,
        "Processing translate-tts request"
    );

    match state.pipeline.run(&file, &src_lang, &tgt_lang).await {
        Ok(PipelineOutcome::NoSpeech) => (
            StatusCode::OK,
            Json(ErrorResponse {
                error: "No speech detected".to_string(),
            }),
        )
            .into_response(),
        Ok(PipelineOutcome::Audio {
            audio,
            transcript,
            translation,
        }) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "audio/mpeg".to_string()),
                (X_ORIGINAL_TEXT, encode_header(&transcript)),
                (X_TRANSLATED_TEXT, encode_header(&translation)),
            ],
            audio,
        )
            .into_response(),
        Err(e) => {
            // Opaque to the caller; details go to the server log only.
            tracing::error!(error = %e, "Pipeline failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn bad_request(error: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
}

/// Percent-encode transcript text so it survives transport in a header.
fn encode_header(value: &str) -> String {
    utf8_percent_encode(value, HEADER_ENCODE_SET).to_string()
}
