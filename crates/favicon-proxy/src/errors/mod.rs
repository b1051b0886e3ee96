//! Centralized error handling for the favicon proxy.
//!
//! The error surface is layered the same way the application is: the resolver
//! and client layers have their own error enums whose failures are mostly
//! absorbed at the boundary closest to the call, and only structurally
//! impossible requests (bad input) or total resolution failure propagate up to
//! the HTTP layer as error statuses.

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;
