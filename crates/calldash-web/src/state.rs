//! Application state management

use crate::api_client::ApiClient;
use crate::backend::CallBackend;
use crate::controller::DashboardController;
use calldash_core::Config;
use std::sync::Arc;

/// Application state shared by every handler
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Dashboard state and actions
    pub controller: DashboardController,
}

impl AppState {
    /// Create state talking to the configured call backend over HTTP
    pub fn new(config: Config) -> Self {
        let api_client = ApiClient::new(config.backend.base_url.clone());
        Self::with_backend(config, Arc::new(api_client))
    }

    /// Create state with an explicit backend
    pub fn with_backend(config: Config, backend: Arc<dyn CallBackend>) -> Self {
        let controller = DashboardController::new(backend);
        Self { config, controller }
    }
}
