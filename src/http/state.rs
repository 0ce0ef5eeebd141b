//! Application state for the HTTP server.

use std::sync::Arc;

use crate::assets::Assets;
use crate::config::AppConfig;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Assets loaded once at startup; immutable afterwards.
    pub assets: Arc<Assets>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(assets: Arc<Assets>, config: Arc<AppConfig>) -> Self {
        Self { assets, config }
    }
}
