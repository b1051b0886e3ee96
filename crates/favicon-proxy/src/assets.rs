use rust_embed::RustEmbed;

/// Embedded static assets (currently just the fallback icon)
#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct StaticAssets;

impl StaticAssets {
    /// The built-in placeholder image served when every icon source fails.
    pub fn placeholder() -> Option<rust_embed::EmbeddedFile> {
        Self::get("placeholder.png")
    }
}
