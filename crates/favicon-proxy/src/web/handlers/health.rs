//! Health check HTTP handler.

use axum::Json;
use serde_json::json;

/// Liveness check; if we can respond, we're alive. The service holds no
/// database or other stateful dependency worth probing.
pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": "favicon-proxy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
