//! Ordered-fallback icon resolution.
//!
//! The resolver walks a priority-ordered list of [`IconSource`]s, validates
//! each answer, and returns the first one that holds up. Source failures are
//! absorbed and logged; only a failing placeholder fetch is terminal. The
//! chain is strictly sequential on purpose: firing all providers at once
//! would burn quota on services whose answer is discarded whenever an earlier
//! source succeeds.

use std::sync::Arc;

use reqwest::Client;
use tracing::{debug, warn};

use crate::config::ResolverConfig;
use crate::errors::{AppError, ResolveError};
use crate::models::{ResolvedIcon, SourceTag};

pub mod placeholder;
pub mod source;
pub mod validation;

pub use placeholder::PlaceholderProvider;
pub use source::{HttpIconSource, IconSource};
pub use validation::ValidationPolicy;

/// Stateless resolution engine; safe to share across requests.
pub struct IconResolver {
    sources: Vec<Arc<dyn IconSource>>,
    validation: ValidationPolicy,
    placeholder: PlaceholderProvider,
}

impl std::fmt::Debug for IconResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconResolver")
            .field(
                "sources",
                &self.sources.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .field("validation", &self.validation)
            .finish()
    }
}

impl IconResolver {
    pub fn new(
        sources: Vec<Arc<dyn IconSource>>,
        validation: ValidationPolicy,
        placeholder: PlaceholderProvider,
    ) -> Self {
        Self {
            sources,
            validation,
            placeholder,
        }
    }

    /// Build a resolver from configuration and a shared HTTP client.
    ///
    /// Unknown source names are a startup error rather than a silent skip.
    pub fn from_config(config: &ResolverConfig, client: Client) -> Result<Self, AppError> {
        let mut sources: Vec<Arc<dyn IconSource>> = Vec::with_capacity(config.sources.len());
        for name in &config.sources {
            let source: Arc<dyn IconSource> = match name.as_str() {
                "icon-horse" => {
                    Arc::new(HttpIconSource::icon_horse(client.clone(), config.source_timeout))
                }
                "google-favicons" => Arc::new(HttpIconSource::google_favicons(
                    client.clone(),
                    config.source_timeout,
                )),
                other => {
                    return Err(AppError::configuration(format!(
                        "unknown icon source '{other}' (expected one of: icon-horse, google-favicons)"
                    )));
                }
            };
            sources.push(source);
        }

        let placeholder = match &config.placeholder_url {
            Some(url) => PlaceholderProvider::remote(client, url, config.source_timeout),
            None => PlaceholderProvider::Embedded,
        };

        Ok(Self::new(
            sources,
            ValidationPolicy::new(config.min_icon_bytes),
            placeholder,
        ))
    }

    /// Resolve an icon for `domain`.
    ///
    /// Tries every source in priority order, then the placeholder. The only
    /// error this returns is [`ResolveError::PlaceholderUnavailable`]; every
    /// earlier failure downgrades to the next link in the chain.
    pub async fn resolve(&self, domain: &str) -> Result<ResolvedIcon, ResolveError> {
        for source in &self.sources {
            match source.fetch(domain).await {
                Ok(raw) => match self.validation.check(&raw) {
                    Ok(content_type) => {
                        debug!(
                            "Resolved icon for {} via {} ({} bytes, {})",
                            domain,
                            source.name(),
                            raw.bytes.len(),
                            content_type
                        );
                        return Ok(ResolvedIcon {
                            bytes: raw.bytes,
                            content_type,
                            source: SourceTag::Source(source.name().to_string()),
                        });
                    }
                    Err(e) => {
                        debug!("Icon from {} for {} rejected: {}", source.name(), domain, e);
                    }
                },
                Err(e) => {
                    debug!("Icon source {} failed for {}: {}", source.name(), domain, e);
                }
            }
        }

        warn!("All icon sources failed for {}, serving placeholder", domain);
        self.placeholder.fetch().await
    }
}

#[cfg(test)]
mod tests {
    use super::source::MockIconSource;
    use super::*;
    use crate::errors::SourceError;
    use crate::models::RawIcon;
    use bytes::Bytes;

    fn png_icon(len: usize) -> RawIcon {
        RawIcon {
            bytes: Bytes::from(vec![1u8; len]),
            content_type: Some("image/png".to_string()),
        }
    }

    fn mock_source(name: &'static str) -> MockIconSource {
        let mut source = MockIconSource::new();
        source.expect_name().return_const(name.to_string());
        source
    }

    fn resolver(sources: Vec<Arc<dyn IconSource>>) -> IconResolver {
        IconResolver::new(sources, ValidationPolicy::new(100), PlaceholderProvider::Embedded)
    }

    #[tokio::test]
    async fn first_valid_source_wins_and_later_sources_are_not_called() {
        let mut first = mock_source("alpha");
        first
            .expect_fetch()
            .times(1)
            .returning(|_| Ok(png_icon(3000)));

        let mut second = mock_source("beta");
        second.expect_fetch().times(0);

        let resolver = resolver(vec![Arc::new(first), Arc::new(second)]);
        let icon = resolver.resolve("example.com").await.unwrap();

        assert_eq!(icon.source, SourceTag::Source("alpha".to_string()));
        assert_eq!(icon.content_type, "image/png");
        assert_eq!(icon.bytes.len(), 3000);
    }

    #[tokio::test]
    async fn undersized_response_advances_the_chain() {
        // the "1x1 pixel behind HTTP 200" regression case
        let mut first = mock_source("alpha");
        first
            .expect_fetch()
            .times(1)
            .returning(|_| Ok(png_icon(40)));

        let mut second = mock_source("beta");
        second
            .expect_fetch()
            .times(1)
            .returning(|_| Ok(png_icon(3000)));

        let resolver = resolver(vec![Arc::new(first), Arc::new(second)]);
        let icon = resolver.resolve("example.com").await.unwrap();

        assert_eq!(icon.source, SourceTag::Source("beta".to_string()));
    }

    #[tokio::test]
    async fn source_errors_advance_the_chain() {
        let mut first = mock_source("alpha");
        first
            .expect_fetch()
            .times(1)
            .returning(|_| Err(SourceError::Status { status: 404 }));

        let mut second = mock_source("beta");
        second
            .expect_fetch()
            .times(1)
            .returning(|_| Ok(png_icon(500)));

        let resolver = resolver(vec![Arc::new(first), Arc::new(second)]);
        let icon = resolver.resolve("brokensite.test").await.unwrap();

        assert_eq!(icon.source, SourceTag::Source("beta".to_string()));
    }

    #[tokio::test]
    async fn exhausted_chain_falls_back_to_placeholder() {
        let mut first = mock_source("alpha");
        first
            .expect_fetch()
            .times(1)
            .returning(|_| Err(SourceError::Status { status: 404 }));

        let mut second = mock_source("beta");
        second
            .expect_fetch()
            .times(1)
            .returning(|_| Ok(png_icon(40)));

        let resolver = resolver(vec![Arc::new(first), Arc::new(second)]);
        let icon = resolver.resolve("brokensite.test").await.unwrap();

        assert!(icon.source.is_placeholder());
        assert_eq!(icon.content_type, "image/png");
        assert!(!icon.bytes.is_empty());
    }

    #[tokio::test]
    async fn empty_source_list_still_serves_placeholder() {
        let resolver = resolver(Vec::new());
        let icon = resolver.resolve("example.com").await.unwrap();
        assert!(icon.source.is_placeholder());
    }

    #[test]
    fn from_config_rejects_unknown_source_names() {
        let config = ResolverConfig {
            sources: vec!["icon-horse".to_string(), "duckduckgo".to_string()],
            ..ResolverConfig::default()
        };
        let err = IconResolver::from_config(&config, Client::new()).unwrap_err();
        assert!(matches!(err, AppError::Configuration { .. }));
    }

    #[test]
    fn from_config_builds_sources_in_configured_order() {
        let config = ResolverConfig::default();
        let resolver = IconResolver::from_config(&config, Client::new()).unwrap();
        let names: Vec<&str> = resolver.sources.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["icon-horse", "google-favicons"]);
    }
}
