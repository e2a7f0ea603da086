//! Axum route handlers for the Tailoring API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::Provider;
use crate::scoring::{score, MatchResult};
use crate::state::AppState;
use crate::tailoring::prompts::build_tailor_prompt;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailorRequest {
    #[serde(default)]
    pub cv_text: String,
    #[serde(default)]
    pub job_description: String,
    /// Defaults to Gemini when absent or null.
    #[serde(default)]
    pub provider: Option<Provider>,
}

#[derive(Debug, Serialize)]
pub struct TailorResponse {
    #[serde(rename = "tailoredCV")]
    pub tailored_cv: String,
    pub provider: Provider,
    pub model: String,
    #[serde(rename = "match")]
    pub match_result: MatchResult,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScoreRequest {
    #[serde(default)]
    pub cv_text: String,
    #[serde(default)]
    pub job_description: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/tailor-cv
///
/// Sends the CV and JD to the selected provider with the fixed tailoring prompt,
/// then scores the returned text against the JD.
pub async fn handle_tailor_cv(
    State(state): State<AppState>,
    payload: Result<Json<TailorRequest>, JsonRejection>,
) -> Result<Json<TailorResponse>, AppError> {
    let Json(request) = payload.map_err(reject_body)?;

    if request.cv_text.trim().is_empty() || request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Missing required fields: cvText and jobDescription".to_string(),
        ));
    }

    let provider = request.provider.unwrap_or_default();
    let backend = state
        .llm
        .get(provider)
        .cloned()
        .ok_or(AppError::ProviderNotConfigured(provider))?;

    let span = info_span!(
        "tailor_cv",
        request_id = %Uuid::new_v4(),
        provider = %provider,
        model = backend.model()
    );

    async move {
        info!(
            cv_chars = request.cv_text.chars().count(),
            jd_chars = request.job_description.chars().count(),
            "Tailoring CV"
        );

        let prompt = build_tailor_prompt(&request.cv_text, &request.job_description);
        let tailored_cv = backend.generate(&prompt).await?;

        let match_result = score(&tailored_cv, &request.job_description);
        info!(
            score = match_result.score,
            matched = match_result.keywords.len(),
            "CV tailored"
        );

        Ok::<_, AppError>(Json(TailorResponse {
            tailored_cv,
            provider,
            model: backend.model().to_string(),
            match_result,
        }))
    }
    .instrument(span)
    .await
}

/// POST /api/match-score
///
/// Scores arbitrary CV text against a JD without calling an LLM.
/// Empty inputs are valid and score 0.
pub async fn handle_match_score(
    payload: Result<Json<MatchScoreRequest>, JsonRejection>,
) -> Result<Json<MatchResult>, AppError> {
    let Json(request) = payload.map_err(reject_body)?;
    Ok(Json(score(&request.cv_text, &request.job_description)))
}

fn reject_body(rejection: JsonRejection) -> AppError {
    AppError::Validation(rejection.body_text())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
