use std::sync::Arc;

use crate::llm_client::CompletionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Upstream completion provider. `LlmClient` in production.
    pub llm: Arc<dyn CompletionProvider>,
}
