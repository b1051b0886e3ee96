//! Index page handler.

use axum::{Json, extract::State};
use serde_json::json;

use crate::web::AppState;

/// Service banner describing the available endpoints.
pub async fn index(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "service": "favicon-proxy",
        "version": env!("CARGO_PKG_VERSION"),
        "sources": state.config.resolver.sources,
        "endpoints": {
            "icon": "/api/icon?url=<urlencoded target application URL>",
            "health": "/health",
        },
    }))
}
