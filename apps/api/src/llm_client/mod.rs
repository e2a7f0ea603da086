//! LLM Client — the single point of entry for all text-generation calls.
//!
//! ARCHITECTURAL RULE: No other module may call Gemini or OpenAI directly.
//! Handlers reach a provider through `LlmProviders`, which holds one
//! `Arc<dyn LlmProvider>` per configured backend.
//!
//! One attempt per call. Failures are surfaced to the caller as-is.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;

pub mod gemini;
pub mod openai;

pub use gemini::GeminiClient;
pub use openai::OpenAiClient;

/// Sampling temperature shared by both providers.
pub const TEMPERATURE: f32 = 0.7;
/// Output cap shared by both providers.
pub const MAX_OUTPUT_TOKENS: u32 = 2048;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Supported LLM backends. Serialized as `"gemini"` / `"openai"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Gemini,
    OpenAi,
}

impl Provider {
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Gemini => "gemini",
            Provider::OpenAi => "openai",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{provider} API error (status {status}): {message}")]
    Api {
        provider: Provider,
        status: u16,
        message: String,
    },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unexpected response format from {provider}: {detail}")]
    UnexpectedResponse { provider: Provider, detail: String },

    #[error("{0} returned empty content")]
    EmptyContent(Provider),

    #[error("{provider} does not support {operation}")]
    Unsupported {
        provider: Provider,
        operation: &'static str,
    },
}

impl LlmError {
    /// Message safe to hand back to the form. Upstream API errors pass through verbatim.
    pub fn user_message(&self) -> String {
        match self {
            LlmError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// A text-generation backend. Implement this to add a provider without
/// touching the handlers.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    fn provider(&self) -> Provider;

    /// Model identifier used for `generate`.
    fn model(&self) -> &str;

    /// Sends `prompt` as a single user turn and returns the model's text.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;

    /// Looks up `model` on the provider and returns the HTTP status of the lookup.
    /// Only Gemini exposes this; other backends report `Unsupported`.
    async fn model_status(&self, _model: &str) -> Result<u16, LlmError> {
        Err(LlmError::Unsupported {
            provider: self.provider(),
            operation: "model lookup",
        })
    }
}

/// The configured providers. A provider without an API key is absent.
#[derive(Clone, Default)]
pub struct LlmProviders {
    gemini: Option<Arc<dyn LlmProvider>>,
    openai: Option<Arc<dyn LlmProvider>>,
}

impl LlmProviders {
    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        let mut providers = Self::default();

        if let Some(key) = &config.gemini_api_key {
            providers = providers.with(Arc::new(GeminiClient::new(
                key.clone(),
                config.gemini_model.clone(),
                config.gemini_api_base.clone(),
            )?));
        }
        if let Some(key) = &config.openai_api_key {
            providers = providers.with(Arc::new(OpenAiClient::new(
                key.clone(),
                config.openai_model.clone(),
                config.openai_api_base.clone(),
            )?));
        }

        Ok(providers)
    }

    /// Registers `backend` under its own `Provider`, replacing any previous one.
    pub fn with(mut self, backend: Arc<dyn LlmProvider>) -> Self {
        match backend.provider() {
            Provider::Gemini => self.gemini = Some(backend),
            Provider::OpenAi => self.openai = Some(backend),
        }
        self
    }

    pub fn get(&self, provider: Provider) -> Option<&Arc<dyn LlmProvider>> {
        match provider {
            Provider::Gemini => self.gemini.as_ref(),
            Provider::OpenAi => self.openai.as_ref(),
        }
    }

    pub fn is_configured(&self, provider: Provider) -> bool {
        self.get(provider).is_some()
    }
}

/// Builds the shared reqwest client with the request timeout applied.
fn http_client() -> Result<Client, LlmError> {
    Ok(Client::builder().timeout(REQUEST_TIMEOUT).build()?)
}

/// Reads a provider response, mapping non-2xx statuses to `LlmError::Api`.
async fn read_json<T: DeserializeOwned>(
    provider: Provider,
    response: reqwest::Response,
) -> Result<T, LlmError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        warn!("{provider} API returned {status}");
        return Err(api_error(provider, status.as_u16(), &body));
    }

    debug!("{provider} API response: {body}");
    serde_json::from_str(&body).map_err(LlmError::Parse)
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Both providers wrap failures as `{"error": {"message": ...}}`.
fn api_error(provider: Provider, status: u16, body: &str) -> LlmError {
    let message = match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if body.trim().is_empty() => format!("{provider} API call failed"),
        Err(_) => body.to_string(),
    };
    LlmError::Api {
        provider,
        status,
        message,
    }
}

/// Rejects whitespace-only generations.
fn non_empty(provider: Provider, text: String) -> Result<String, LlmError> {
    if text.trim().is_empty() {
        Err(LlmError::EmptyContent(provider))
    } else {
        Ok(text)
    }
}
