//! Target URL to lookup domain derivation.

use url::Url;

use crate::errors::{AppError, AppResult};

/// Derive the provider lookup domain from a target application URL.
///
/// The URL must parse as absolute and carry a hostname; a single leading
/// `www.` label is stripped so that `https://www.example.com` and
/// `https://example.com` resolve identically.
pub fn domain_for_url(target_url: &str) -> AppResult<String> {
    let parsed = Url::parse(target_url)
        .map_err(|e| AppError::validation(format!("invalid target URL '{target_url}': {e}")))?;

    let host = parsed
        .host_str()
        .ok_or_else(|| AppError::validation(format!("target URL '{target_url}' has no host")))?;

    let domain = host.strip_prefix("www.").unwrap_or(host);
    if domain.is_empty() {
        return Err(AppError::validation(format!(
            "target URL '{target_url}' has an empty host"
        )));
    }

    Ok(domain.to_string())
}
