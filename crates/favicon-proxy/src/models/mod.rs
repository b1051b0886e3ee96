//! Data models shared across the resolver, web, and client layers.

pub mod icon;
pub mod shortcut;

pub use icon::{RawIcon, ResolvedIcon, SourceTag};
pub use shortcut::AppShortcut;
