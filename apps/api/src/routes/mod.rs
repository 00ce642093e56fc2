pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::enhancement::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Enhancement
        .route("/enhance", post(handlers::handle_enhance))
        .route("/demo-enhance", post(handlers::handle_demo_enhance))
        .route("/generate-resume", post(handlers::handle_generate_resume))
        // Static catalog
        .route("/api/tones", get(handlers::handle_tones))
        .route("/api/examples", get(handlers::handle_examples))
        .fallback(not_found)
        .with_state(state)
}
