//! Error type definitions for the favicon proxy.

use thiserror::Error;

/// Top-level application error type
///
/// Covers the failures that can reach the edges of the application: request
/// validation, startup configuration, and wiring. Failures of individual icon
/// sources never appear here; they are absorbed inside the resolver chain.
#[derive(Error, Debug)]
pub enum AppError {
    /// Input validation errors (unparseable or host-less target URLs)
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Configuration errors (unknown source names, bad listen address)
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Failures of a single icon source attempt
///
/// These are recovered locally by advancing to the next source in the chain
/// and are logged rather than surfaced.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The provider answered with a non-success status
    #[error("HTTP {status} from provider")]
    Status { status: u16 },

    /// Transport-level failure, including per-attempt timeouts
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Terminal resolver failures
///
/// Source exhaustion alone is not terminal — the placeholder absorbs it. Only
/// a failing placeholder fetch ends resolution with an error.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Placeholder unavailable: {reason}")]
    PlaceholderUnavailable { reason: String },
}

/// Client-side cache/fetch failures
///
/// All of these degrade to a placeholder display; none reach the caller as an
/// error value.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Could not reach the proxy endpoint (or read its body)
    #[error("Proxy request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The proxy endpoint answered with a non-success status
    #[error("Proxy returned HTTP {status}")]
    Status { status: u16 },
}

/// Convenience methods for creating common error types
impl AppError {
    /// Create a validation error with a custom message
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
