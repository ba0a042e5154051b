#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod client;
mod error;
pub mod feeds;
mod normalize;
mod prompt;
mod service;
mod types;

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

pub use client::CompletionClient;
pub use error::CompletionError;
pub use normalize::normalize;
pub use service::{FALLBACK_SCRIPT, ScriptService};
pub use types::{ScriptKind, ScriptRequest, ScriptResponse, SpeechRequest, SpeechResponse, TrackInfo};

use feeds::{NewsItem, WeatherReport};

/// Build the script service from configuration
pub fn build_service(config: &airadio_config::Config) -> Arc<ScriptService> {
    Arc::new(ScriptService::new(CompletionClient::new(&config.completion)))
}

/// Create the endpoint router for the script pipeline
pub fn endpoint_router() -> Router<Arc<ScriptService>> {
    Router::new()
        .route("/api/generate-script", post(generate_script))
        .route("/api/text-to-speech", post(text_to_speech))
        .route("/api/weather", get(weather))
        .route("/api/news", get(news))
}

/// Handle script generation requests
async fn generate_script(
    State(service): State<Arc<ScriptService>>,
    Json(request): Json<ScriptRequest>,
) -> Json<ScriptResponse> {
    tracing::info!(kind = ?request.kind, "generating script");

    let script = service.generate(&request).await;

    Json(ScriptResponse { script })
}

/// Handle text-to-speech requests (synthesis stub)
async fn text_to_speech(Json(request): Json<SpeechRequest>) -> Json<SpeechResponse> {
    tracing::info!(
        voice_id = %request.voice_id,
        emotion = %request.emotion,
        text_len = request.text.len(),
        "converting text to speech"
    );

    Json(SpeechResponse {
        audio_data: "mock_audio_data".to_owned(),
        duration: 3.5,
    })
}

/// Envelope for `GET /api/weather`
#[derive(Serialize)]
struct WeatherEnvelope {
    weather: WeatherReport,
}

/// Handle weather requests
async fn weather() -> Json<WeatherEnvelope> {
    Json(WeatherEnvelope {
        weather: feeds::current_weather(),
    })
}

/// Envelope for `GET /api/news`
#[derive(Serialize)]
struct NewsEnvelope {
    news: Vec<NewsItem>,
}

/// Handle news requests
async fn news() -> Json<NewsEnvelope> {
    Json(NewsEnvelope {
        news: feeds::latest_news(),
    })
}
