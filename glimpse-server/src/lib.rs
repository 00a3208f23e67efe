mod config;
mod error;
mod relay;
mod signaling;

pub use config::Config;
pub use error::RelayError;
pub use relay::*;
pub use signaling::*;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

/// Shared handles the WebSocket route operates on.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<Relay>,
    pub signaling: SignalingService,
}

impl AppState {
    pub fn new() -> Self {
        let signaling = SignalingService::new();
        let relay = Arc::new(Relay::new(Arc::new(signaling.clone())));

        Self { relay, signaling }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the full HTTP surface: WebSocket signaling at `/ws`, a liveness
/// probe at `/healthz`, and the endpoint application bundle from
/// `assets_dir` for everything else.
pub fn router(state: AppState, assets_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ws", get(ws_handler))
        .route("/healthz", get(healthz))
        .fallback_service(ServeDir::new(assets_dir))
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
