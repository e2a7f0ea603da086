use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::llm_client::Provider;
use crate::state::AppState;

/// GET /api/health
/// Reports service version and which providers have an API key.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "OK",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "cv-tailor-api",
        "geminiConfigured": state.llm.is_configured(Provider::Gemini),
        "openaiConfigured": state.llm.is_configured(Provider::OpenAi)
    }))
}
