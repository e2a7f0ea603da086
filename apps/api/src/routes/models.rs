use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::info;

use crate::llm_client::Provider;
use crate::state::AppState;

/// Gemini model names checked by the availability endpoint.
pub const CANDIDATE_MODELS: &[&str] = &[
    "gemini-pro",
    "gemini-1.5-pro",
    "gemini-1.5-flash",
    "gemini-1.5-flash-latest",
    "gemini-2.0-flash-exp",
    "gemini-2.5-flash",
    "gemini-2.5-flash-exp",
];

/// GET /api/test-models
/// Debug endpoint: looks up each candidate model with the configured Gemini key.
/// Always answers 200; per-model failures are reported inline.
pub async fn test_models_handler(State(state): State<AppState>) -> Json<Value> {
    let Some(gemini) = state.llm.get(Provider::Gemini) else {
        return Json(json!({ "error": "No API key configured" }));
    };

    let mut models = BTreeMap::new();
    for &model in CANDIDATE_MODELS {
        let availability = match gemini.model_status(model).await {
            Ok(200) => "Available".to_string(),
            Ok(status) => format!("Error: {status}"),
            Err(e) => format!("Error: {e}"),
        };
        models.insert(model, availability);
    }
    info!("Checked {} Gemini models", models.len());

    Json(json!({
        "message": "Model availability test",
        "models": models
    }))
}
