//! Shared fixtures: in-process stand-ins for the external favicon providers.

// each integration test crate uses its own subset of these helpers
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::{
    Router,
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};

use favicon_proxy::resolver::{HttpIconSource, IconResolver, IconSource, PlaceholderProvider, ValidationPolicy};

/// One scripted provider: always answers with the configured status, content
/// type, and body size, while counting hits and recording requested domains.
pub struct SourceFixture {
    pub hits: AtomicUsize,
    pub requested_domains: std::sync::Mutex<Vec<String>>,
    status: StatusCode,
    content_type: Option<&'static str>,
    body_len: usize,
    delay: Option<Duration>,
}

impl SourceFixture {
    pub fn ok_png(body_len: usize) -> Arc<Self> {
        Self::build(StatusCode::OK, Some("image/png"), body_len, None)
    }

    pub fn status(status: StatusCode) -> Arc<Self> {
        Self::build(status, None, 0, None)
    }

    pub fn ok_with(content_type: &'static str, body_len: usize) -> Arc<Self> {
        Self::build(StatusCode::OK, Some(content_type), body_len, None)
    }

    pub fn slow_png(body_len: usize, delay: Duration) -> Arc<Self> {
        Self::build(StatusCode::OK, Some("image/png"), body_len, Some(delay))
    }

    fn build(
        status: StatusCode,
        content_type: Option<&'static str>,
        body_len: usize,
        delay: Option<Duration>,
    ) -> Arc<Self> {
        Arc::new(Self {
            hits: AtomicUsize::new(0),
            requested_domains: std::sync::Mutex::new(Vec::new()),
            status,
            content_type,
            body_len,
            delay,
        })
    }

    pub fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// A body that passes magic-number sniffing as PNG, padded to size.
    fn body(&self) -> Vec<u8> {
        let mut body = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        body.resize(self.body_len.max(8), 0);
        body.truncate(self.body_len);
        body
    }
}

async fn serve_icon(
    State(fixture): State<Arc<SourceFixture>>,
    Path(domain): Path<String>,
) -> Response {
    fixture.hits.fetch_add(1, Ordering::SeqCst);
    fixture.requested_domains.lock().unwrap().push(domain);

    if let Some(delay) = fixture.delay {
        tokio::time::sleep(delay).await;
    }

    if !fixture.status.is_success() {
        return fixture.status.into_response();
    }

    let mut response = (fixture.status, fixture.body()).into_response();
    if let Some(content_type) = fixture.content_type {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    } else {
        response.headers_mut().remove(header::CONTENT_TYPE);
    }
    response
}

/// Serve a fixture on an ephemeral port; returns a `{domain}` URL template
/// pointing at it, suitable for `HttpIconSource::new`.
pub async fn spawn_provider(fixture: Arc<SourceFixture>) -> String {
    let router = Router::new()
        .route("/icon/{domain}", get(serve_icon))
        .with_state(fixture);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind provider listener");
    let addr = listener.local_addr().expect("provider local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("provider serve");
    });

    format!("http://{addr}/icon/{{domain}}")
}

/// Build a resolver whose chain points at the given local providers.
pub async fn resolver_for(
    providers: &[(&str, &Arc<SourceFixture>)],
    min_icon_bytes: u64,
    placeholder: PlaceholderProvider,
) -> IconResolver {
    let client = reqwest::Client::new();
    let mut sources: Vec<Arc<dyn IconSource>> = Vec::new();
    for (name, fixture) in providers {
        let template = spawn_provider(Arc::clone(fixture)).await;
        sources.push(Arc::new(HttpIconSource::new(
            name.to_string(),
            template,
            client.clone(),
            Duration::from_secs(30),
        )));
    }
    IconResolver::new(sources, ValidationPolicy::new(min_icon_bytes), placeholder)
}
