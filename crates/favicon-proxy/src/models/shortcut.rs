//! The slice of a dock app record that icon resolution cares about.

use serde::{Deserialize, Serialize};

/// An application shortcut as stored by the dock UI.
///
/// Only the fields the icon path touches are modeled here; the rest of the
/// record (category, ordering, favorite flag) belongs to the dock layer and
/// never crosses into this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppShortcut {
    /// Display name, used for logging only
    pub name: String,
    /// Target URL; doubles as the cache key for the resolved icon
    pub url: String,
    /// Optional user-provided icon, a `data:` URI when uploaded inline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl AppShortcut {
    pub fn new<N: Into<String>, U: Into<String>>(name: N, url: U) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            icon_url: None,
        }
    }

    /// Whether the shortcut carries a self-contained uploaded icon.
    pub fn has_inline_icon(&self) -> bool {
        self.icon_url
            .as_deref()
            .is_some_and(|icon| icon.starts_with("data:"))
    }
}
