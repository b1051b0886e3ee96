//! Icon source abstraction and the HTTP-backed implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::trace;

use crate::errors::SourceError;
use crate::models::RawIcon;

/// One external favicon provider in the fallback chain.
///
/// Implementations fetch only; validation of the returned bytes is the
/// resolver's job, so a source cannot quietly loosen the rules applied to it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IconSource: Send + Sync {
    /// Stable name, used as the response source tag and in configuration
    fn name(&self) -> &str;

    /// Fetch the icon for `domain`, failing on any non-success response.
    async fn fetch(&self, domain: &str) -> Result<RawIcon, SourceError>;
}

/// A provider reached with a plain GET on a templated URL.
///
/// The template carries a `{domain}` marker that is substituted (URL-encoded)
/// per request, which is exactly as much "API client" as any of the public
/// favicon services need.
pub struct HttpIconSource {
    name: String,
    url_template: String,
    client: Client,
    timeout: Duration,
}

impl HttpIconSource {
    pub fn new<N: Into<String>, T: Into<String>>(
        name: N,
        url_template: T,
        client: Client,
        timeout: Duration,
    ) -> Self {
        Self {
            name: name.into(),
            url_template: url_template.into(),
            client,
            timeout,
        }
    }

    /// The icon.horse lookup service (higher quality, first in the default chain)
    pub fn icon_horse(client: Client, timeout: Duration) -> Self {
        Self::new(
            "icon-horse",
            "https://icon.horse/icon/{domain}",
            client,
            timeout,
        )
    }

    /// Google's s2 favicon service (broad coverage fallback)
    pub fn google_favicons(client: Client, timeout: Duration) -> Self {
        Self::new(
            "google-favicons",
            "https://www.google.com/s2/favicons?domain={domain}&sz=128",
            client,
            timeout,
        )
    }

    fn icon_url(&self, domain: &str) -> String {
        self.url_template
            .replace("{domain}", &urlencoding::encode(domain))
    }
}

#[async_trait]
impl IconSource for HttpIconSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self, domain: &str) -> Result<RawIcon, SourceError> {
        let url = self.icon_url(domain);
        trace!("Fetching icon from {}: {}", self.name, url);

        let response = self.client.get(&url).timeout(self.timeout).send().await?;

        if !response.status().is_success() {
            return Err(SourceError::Status {
                status: response.status().as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let bytes = response.bytes().await?;

        Ok(RawIcon {
            bytes,
            content_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_and_encodes_the_domain() {
        let source = HttpIconSource::new(
            "test",
            "https://icons.test/lookup/{domain}",
            Client::new(),
            Duration::from_secs(1),
        );
        assert_eq!(
            source.icon_url("example.com"),
            "https://icons.test/lookup/example.com"
        );
        // IDN hosts come in already punycoded from url parsing, but encoding
        // must still neutralize anything that would break the path
        assert_eq!(
            source.icon_url("a/b"),
            "https://icons.test/lookup/a%2Fb"
        );
    }

    #[test]
    fn stock_sources_use_the_expected_endpoints() {
        let client = Client::new();
        let horse = HttpIconSource::icon_horse(client.clone(), Duration::from_secs(1));
        assert_eq!(horse.name(), "icon-horse");
        assert_eq!(
            horse.icon_url("example.com"),
            "https://icon.horse/icon/example.com"
        );

        let google = HttpIconSource::google_favicons(client, Duration::from_secs(1));
        assert_eq!(google.name(), "google-favicons");
        assert_eq!(
            google.icon_url("example.com"),
            "https://www.google.com/s2/favicons?domain=example.com&sz=128"
        );
    }
}
