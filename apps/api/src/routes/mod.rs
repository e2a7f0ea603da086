pub mod health;
pub mod models;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::state::AppState;
use crate::tailoring::handlers;

/// Largest accepted request body (CV + JD as JSON).
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    let router = Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/test-models", get(models::test_models_handler))
        .route("/api/tailor-cv", post(handlers::handle_tailor_cv))
        .route("/api/match-score", post(handlers::handle_match_score))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state);

    // Form UI; ServeDir maps `/` to index.html.
    match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    }
}
