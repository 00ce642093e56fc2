use std::sync::Arc;

use crate::config::Config;
use crate::enhancement::coordinator::Enhancer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Coordinator plus the read-only engine tables, built once at startup.
    pub enhancer: Arc<Enhancer>,
    pub config: Config,
}
