use crate::config::Config;
use crate::llm_client::LlmProviders;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; every tailoring call is independent.
#[derive(Clone)]
pub struct AppState {
    /// Configured LLM backends, keyed by provider.
    pub llm: LlmProviders,
    pub config: Config,
}
