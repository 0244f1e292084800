//! Application state and configuration.

use mockembed_engine::Embedder;
use std::sync::Arc;

/// Model name reported when a request does not name one.
pub const DEFAULT_MODEL: &str = "mock-embedding";

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared embedding backend.
    pub engine: Arc<dyn Embedder>,
    /// Server configuration.
    pub config: ServerConfig,
}

/// Server configuration parameters.
#[derive(Clone)]
pub struct ServerConfig {
    /// Model name echoed in responses when the request omits `model`.
    pub default_model: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            default_model: DEFAULT_MODEL.to_string(),
        }
    }
}
