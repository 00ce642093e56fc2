mod config;
mod enhancement;
mod errors;
mod llm_client;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::enhancement::coordinator::Enhancer;
use crate::enhancement::fallback::FallbackEngine;
use crate::errors::panic_response;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid RUST_LOG filter: {}", config.log_filter))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Enhancer v{}", env!("CARGO_PKG_VERSION"));

    // Rule tables are compiled once and shared read-only by every request
    let engine = FallbackEngine::new()?;
    let mut enhancer = Enhancer::new(
        engine,
        config.max_text_length,
        config.enabled_tones.clone(),
    );

    match config.openai_api_key.clone() {
        Some(api_key) if config.remote_enabled() => {
            let llm = LlmClient::new(
                api_key,
                &config.llm_base_url,
                config.llm_model.clone(),
                config.llm_timeout,
            )?;
            info!(
                "Remote enhancement enabled (model: {}, timeout: {}s)",
                config.llm_model,
                config.llm_timeout.as_secs()
            );
            enhancer = enhancer.with_remote(Arc::new(llm), config.llm_timeout);
        }
        _ => warn!("OPENAI_API_KEY not set, serving rule-based enhancement only"),
    }

    info!(
        "Enabled tones: {}",
        config
            .enabled_tones
            .iter()
            .map(|t| t.id())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let state = AppState {
        enhancer: Arc::new(enhancer),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
