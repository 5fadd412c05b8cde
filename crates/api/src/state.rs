use std::sync::Arc;

use signcoach_gemini::VisionGateway;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The gateway is
/// the only cross-request resource and it is stateless, so no locking is
/// needed anywhere.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Vision-language inference gateway, injected at construction so
    /// tests can substitute a mock.
    pub gateway: Arc<dyn VisionGateway>,
}
