//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::EngineConfig;
use crate::services::priority::NarrowbandClassifier;

/// Shared application state passed to all handlers.
///
/// Immutable after startup; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<EngineConfig>,
    pub classifier: Arc<NarrowbandClassifier>,
}

impl AppState {
    /// Create a new application state from the loaded configuration.
    pub fn new(config: EngineConfig) -> Self {
        let classifier = Arc::new(config.classifier());
        Self {
            config: Arc::new(config),
            classifier,
        }
    }
}
