/// Configuration default values
///
/// This module contains all the default values for configuration options,
/// making them easily changeable in one central location.
// Web server defaults
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8070;
pub const DEFAULT_REQUEST_TIMEOUT: &str = "30s";

// Resolver defaults
//
// The byte threshold guards against providers that answer HTTP 200 with a
// near-empty "no icon found" pixel; 100 bytes is the smallest real favicon
// size observed in practice.
pub const DEFAULT_MIN_ICON_BYTES: u64 = 100;
pub const DEFAULT_SOURCE_TIMEOUT: &str = "10s";
pub const DEFAULT_USER_AGENT: &str = concat!("favicon-proxy/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_SOURCES: &[&str] = &["icon-horse", "google-favicons"];
