//! Terminal placeholder fallback.

use std::time::Duration;

use bytes::Bytes;
use reqwest::Client;
use tracing::debug;

use crate::assets::StaticAssets;
use crate::errors::ResolveError;
use crate::models::{ResolvedIcon, SourceTag};

/// Where the placeholder image comes from once every real source has failed.
pub enum PlaceholderProvider {
    /// The PNG compiled into the binary; cannot fail at runtime
    Embedded,
    /// A fixed remote image, e.g. a placehold.co URL
    Remote {
        client: Client,
        url: String,
        timeout: Duration,
    },
}

impl PlaceholderProvider {
    pub fn remote<U: Into<String>>(client: Client, url: U, timeout: Duration) -> Self {
        Self::Remote {
            client,
            url: url.into(),
            timeout,
        }
    }

    /// Produce the placeholder icon, tagged as such.
    pub async fn fetch(&self) -> Result<ResolvedIcon, ResolveError> {
        match self {
            Self::Embedded => {
                let file = StaticAssets::placeholder().ok_or_else(|| {
                    ResolveError::PlaceholderUnavailable {
                        reason: "embedded placeholder asset missing".to_string(),
                    }
                })?;
                Ok(ResolvedIcon {
                    bytes: Bytes::copy_from_slice(&file.data),
                    content_type: "image/png".to_string(),
                    source: SourceTag::Placeholder,
                })
            }
            Self::Remote {
                client,
                url,
                timeout,
            } => {
                debug!("Fetching remote placeholder: {}", url);
                let response = client
                    .get(url)
                    .timeout(*timeout)
                    .send()
                    .await
                    .map_err(|e| ResolveError::PlaceholderUnavailable {
                        reason: e.to_string(),
                    })?;

                if !response.status().is_success() {
                    return Err(ResolveError::PlaceholderUnavailable {
                        reason: format!("HTTP {} from {}", response.status(), url),
                    });
                }

                let content_type = response
                    .headers()
                    .get(reqwest::header::CONTENT_TYPE)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("image/png")
                    .to_string();

                let bytes = response.bytes().await.map_err(|e| {
                    ResolveError::PlaceholderUnavailable {
                        reason: e.to_string(),
                    }
                })?;

                Ok(ResolvedIcon {
                    bytes,
                    content_type,
                    source: SourceTag::Placeholder,
                })
            }
        }
    }
}
