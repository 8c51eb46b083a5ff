use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::{ApiKey, TextModel};
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Remote model. Default: `GeminiClient`; tests swap in a scripted fake.
    pub llm: Arc<dyn TextModel>,
    pub sessions: SessionStore,
    pub config: Config,
}

impl AppState {
    /// Process-wide fallback key from `GEMINI_API_KEY`, if any.
    pub fn default_credential(&self) -> Option<ApiKey> {
        self.config.gemini_api_key.clone()
    }
}
