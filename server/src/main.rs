#![recursion_limit = "256"]

mod config;
mod llm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid server config");

    // Initialize LLM client (non-fatal: the concierge answers with its fallback line).
    let llm: Option<Arc<dyn llm::LlmChat>> = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), max_tokens = client.max_tokens(), "LLM client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured; concierge will use its fallback reply");
            None
        }
    };

    let state = state::AppState::new(llm);

    let app = routes::leptos_app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .expect("failed to bind");

    tracing::info!(addr = %config.bind_addr(), "strange-stay listening");
    axum::serve(listener, app).await.expect("server failed");
}
