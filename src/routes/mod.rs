//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the word-checker endpoints under a single Axum router with
//! permissive CORS (workshop clients call from arbitrary origins) and
//! per-request tracing.

pub mod words;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(words::welcome))
        .route("/check-word", post(words::check_word))
        .route("/words", get(words::list_words))
        .route("/submissions", get(words::list_submissions))
        .route("/stats", get(words::stats))
        .route("/add-word", post(words::add_word))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
