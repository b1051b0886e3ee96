//! Icon payload types.

use bytes::Bytes;

/// Name of the response header carrying the winning source tag.
pub const ICON_SOURCE_HEADER: &str = "x-icon-source";

/// An unvalidated provider response: raw bytes plus whatever content type the
/// provider declared, if any.
#[derive(Debug, Clone)]
pub struct RawIcon {
    pub bytes: Bytes,
    pub content_type: Option<String>,
}

/// A validated resolution result, ready to be streamed to the caller.
///
/// Created per request and consumed once by the HTTP response writer; nothing
/// server-side retains it.
#[derive(Debug, Clone)]
pub struct ResolvedIcon {
    pub bytes: Bytes,
    pub content_type: String,
    pub source: SourceTag,
}

/// Which source produced a result.
///
/// The tag travels as a response header so the client can tell a real icon
/// from a placeholder without inspecting bytes, which is what decides cache
/// eligibility on the client side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceTag {
    /// A configured icon source, identified by its name
    Source(String),
    /// The terminal fallback image
    Placeholder,
}

impl SourceTag {
    pub fn as_str(&self) -> &str {
        match self {
            SourceTag::Source(name) => name,
            SourceTag::Placeholder => "placeholder",
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, SourceTag::Placeholder)
    }
}

impl std::fmt::Display for SourceTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
