//! The icon proxy endpoint.

use axum::{
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{debug, error};

use crate::models::icon::ICON_SOURCE_HEADER;
use crate::utils::domain::domain_for_url;
use crate::web::AppState;

/// Resolved icons are immutable for a day from the browser's point of view;
/// re-resolution happens server-side on the next cold request.
const CACHE_CONTROL_VALUE: &str = "public, max-age=86400, immutable";

#[derive(Debug, Deserialize)]
pub struct IconQuery {
    pub url: Option<String>,
}

/// `GET /api/icon?url=<target application URL>`
///
/// Streams the first icon the resolver can vouch for, tagging the winning
/// source in a response header so callers can tell a real icon from the
/// placeholder without inspecting bytes.
pub async fn resolve_icon(
    State(state): State<AppState>,
    Query(params): Query<IconQuery>,
) -> Response {
    let Some(target_url) = params.url else {
        return (StatusCode::BAD_REQUEST, "URL parameter is required").into_response();
    };

    let domain = match domain_for_url(&target_url) {
        Ok(domain) => domain,
        Err(e) => {
            debug!("Rejected icon request: {}", e);
            return (StatusCode::BAD_REQUEST, "Invalid URL parameter").into_response();
        }
    };

    match state.resolver.resolve(&domain).await {
        Ok(icon) => {
            let mut headers = HeaderMap::new();
            headers.insert(
                header::CONTENT_TYPE,
                icon.content_type
                    .parse()
                    .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream")),
            );
            headers.insert(
                header::CACHE_CONTROL,
                HeaderValue::from_static(CACHE_CONTROL_VALUE),
            );
            headers.insert(
                ICON_SOURCE_HEADER,
                HeaderValue::from_str(icon.source.as_str())
                    .unwrap_or_else(|_| HeaderValue::from_static("placeholder")),
            );
            (headers, icon.bytes).into_response()
        }
        Err(e) => {
            error!("Icon resolution failed terminally for {}: {}", domain, e);
            (StatusCode::NOT_FOUND, "No icon could be resolved").into_response()
        }
    }
}
