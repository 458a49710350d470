mod config;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env();
    let state = state::AppState::default();
    let word_count = state.book.read().await.accepted.len();

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .expect("failed to bind");

    tracing::info!(host = %config.host, port = config.port, word_count, "wordcheck listening");
    axum::serve(listener, app).await.expect("server failed");
}
