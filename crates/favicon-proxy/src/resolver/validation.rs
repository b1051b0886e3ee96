//! Response validation for icon source attempts.

use thiserror::Error;

use crate::models::RawIcon;

/// When a provider declares no content type, assume PNG unless the bytes
/// prove otherwise.
const FALLBACK_CONTENT_TYPE: &str = "image/png";

/// Why a provider response was rejected
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("content type '{content_type}' is not an image")]
    NotAnImage { content_type: String },

    #[error("body of {len} bytes is at or below the {min} byte threshold")]
    TooSmall { len: u64, min: u64 },
}

/// Named validation rules applied to every provider response.
///
/// Several providers answer HTTP 200 with a 1x1 "no icon found" pixel instead
/// of an error status; the byte threshold is what keeps those out of the
/// fallback chain's win condition.
#[derive(Debug, Clone)]
pub struct ValidationPolicy {
    /// Bodies must be strictly larger than this to pass
    pub min_icon_bytes: u64,
}

impl ValidationPolicy {
    pub fn new(min_icon_bytes: u64) -> Self {
        Self { min_icon_bytes }
    }

    /// Check a raw provider response.
    ///
    /// Returns the effective content type to serve on success: the declared
    /// header when present, the sniffed type when the header is missing but
    /// the bytes carry a known image signature, or `image/png` when neither
    /// settles it.
    pub fn check(&self, icon: &RawIcon) -> Result<String, ValidationError> {
        let content_type = match icon.content_type.as_deref() {
            Some(declared) => {
                if !declared.starts_with("image/") {
                    return Err(ValidationError::NotAnImage {
                        content_type: declared.to_string(),
                    });
                }
                declared.to_string()
            }
            None => match infer::get(&icon.bytes) {
                Some(kind) if kind.mime_type().starts_with("image/") => {
                    kind.mime_type().to_string()
                }
                Some(kind) => {
                    return Err(ValidationError::NotAnImage {
                        content_type: kind.mime_type().to_string(),
                    });
                }
                None => FALLBACK_CONTENT_TYPE.to_string(),
            },
        };

        let len = icon.bytes.len() as u64;
        if len <= self.min_icon_bytes {
            return Err(ValidationError::TooSmall {
                len,
                min: self.min_icon_bytes,
            });
        }

        Ok(content_type)
    }
}
