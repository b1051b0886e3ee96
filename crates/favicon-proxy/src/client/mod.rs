//! Dock-side icon fetching and caching.
//!
//! This is the consumer half of the icon contract: decide whether to call the
//! proxy at all, convert what comes back into a self-contained data URI, and
//! never let a placeholder result poison the durable cache. The caller always
//! receives something displayable; transport and storage failures degrade to
//! the placeholder image rather than surfacing.

use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use keyed_store::KeyValueStore;
use reqwest::Client;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::assets::StaticAssets;
use crate::errors::ClientError;
use crate::models::{AppShortcut, icon::ICON_SOURCE_HEADER};

/// Cache key prefix; the rest of the key is the shortcut's target URL.
const CACHE_KEY_PREFIX: &str = "icon-cache-";

/// Transparent 1x1 GIF, the last-resort display value if even the embedded
/// placeholder asset is unavailable.
const FALLBACK_PIXEL: &str = "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

/// What an icon request produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconOutcome {
    /// A displayable image reference (data URI or stored value)
    Icon(String),
    /// The requesting surface went away before resolution finished; nothing
    /// was displayed and nothing was cached
    Cancelled,
}

/// Client-side icon cache over an injected key-value store.
pub struct IconCacheClient {
    http: Client,
    proxy_base_url: String,
    store: Arc<dyn KeyValueStore>,
    placeholder: String,
}

impl IconCacheClient {
    pub fn new<U: Into<String>>(http: Client, proxy_base_url: U, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            http,
            proxy_base_url: proxy_base_url.into(),
            store,
            placeholder: placeholder_data_uri(),
        }
    }

    /// Produce a displayable icon for `shortcut`.
    ///
    /// Resolution order: inline uploaded icon, then the cache, then the proxy
    /// endpoint. Cancelling `cancel` while the proxy call is in flight
    /// discards the result without touching the cache or handing a value
    /// back — the unmounted surface must observe nothing.
    pub async fn icon_for(&self, shortcut: &AppShortcut, cancel: &CancellationToken) -> IconOutcome {
        let key = cache_key(&shortcut.url);

        // Inline icons are authoritative, not resolved; always cacheable.
        if shortcut.has_inline_icon() {
            let inline = shortcut.icon_url.clone().unwrap_or_default();
            if let Err(e) = self.store.set(&key, &inline).await {
                warn!("Could not cache inline icon for {}: {}", shortcut.name, e);
            }
            return IconOutcome::Icon(inline);
        }

        match self.store.get(&key).await {
            Ok(Some(cached)) => {
                debug!("Icon cache hit for {}", shortcut.url);
                return IconOutcome::Icon(cached);
            }
            Ok(None) => {}
            Err(e) => {
                // a broken store read is a miss, not a failure
                warn!("Icon cache read failed for {}: {}", shortcut.url, e);
            }
        }

        if cancel.is_cancelled() {
            return IconOutcome::Cancelled;
        }

        let fetched = tokio::select! {
            _ = cancel.cancelled() => {
                debug!("Icon fetch for {} cancelled by unmount", shortcut.url);
                return IconOutcome::Cancelled;
            }
            result = self.fetch_via_proxy(&shortcut.url) => result,
        };

        match fetched {
            Ok(FetchedIcon { data_uri, is_placeholder }) => {
                // Never persist a placeholder: a cached placeholder would stop
                // every future visit from retrying the real sources.
                if !is_placeholder {
                    if let Err(e) = self.store.set(&key, &data_uri).await {
                        warn!("Could not cache icon for {}: {}", shortcut.url, e);
                    }
                }
                IconOutcome::Icon(data_uri)
            }
            Err(e) => {
                warn!("Icon fetch failed for {}: {}", shortcut.url, e);
                IconOutcome::Icon(self.placeholder.clone())
            }
        }
    }

    async fn fetch_via_proxy(&self, target_url: &str) -> Result<FetchedIcon, ClientError> {
        let endpoint = format!(
            "{}/api/icon?url={}",
            self.proxy_base_url.trim_end_matches('/'),
            urlencoding::encode(target_url)
        );

        let response = self.http.get(&endpoint).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Status {
                status: response.status().as_u16(),
            });
        }

        let is_placeholder = response
            .headers()
            .get(ICON_SOURCE_HEADER)
            .and_then(|value| value.to_str().ok())
            == Some("placeholder");

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("image/png")
            .to_string();

        let bytes = response.bytes().await?;
        let data_uri = format!("data:{content_type};base64,{}", STANDARD.encode(&bytes));

        Ok(FetchedIcon {
            data_uri,
            is_placeholder,
        })
    }
}

struct FetchedIcon {
    data_uri: String,
    is_placeholder: bool,
}

/// Cache key for a shortcut's target URL.
pub fn cache_key(target_url: &str) -> String {
    format!("{CACHE_KEY_PREFIX}{target_url}")
}

/// The embedded placeholder as a data URI, for display when the proxy itself
/// is unreachable.
fn placeholder_data_uri() -> String {
    match StaticAssets::placeholder() {
        Some(file) => format!("data:image/png;base64,{}", STANDARD.encode(&file.data)),
        None => FALLBACK_PIXEL.to_string(),
    }
}
