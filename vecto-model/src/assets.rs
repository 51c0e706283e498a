//! Asset path resolution for catalog images and menu icons

/// Default public asset directory.
pub const DEFAULT_ASSET_BASE: &str = "/assets";

/// Placeholder used when a record carries no image file name.
pub const PLACEHOLDER_IMAGE: &str = "videos/placeholder.svg";

/// Resolves bare file names from the catalog into servable paths.
///
/// `prefix` is prepended to every path (deployments served from a
/// sub-directory), `base` is the asset directory under that prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResolver {
    prefix: String,
    base: String,
}

impl Default for AssetResolver {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_BASE)
    }
}

impl AssetResolver {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            prefix: String::new(),
            base: trim_trailing_slash(base.into()),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = trim_trailing_slash(prefix.into());
        self
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Path for a catalog image. Empty names resolve to the placeholder.
    pub fn image_path(&self, filename: &str) -> String {
        let filename = filename.trim();
        if filename.is_empty() {
            return self.join(PLACEHOLDER_IMAGE);
        }
        self.join(filename.trim_start_matches('/'))
    }

    /// Path for a menu icon.
    pub fn icon_path(&self, filename: &str) -> String {
        self.join(&format!("icons/{}", filename.trim_start_matches('/')))
    }

    pub fn placeholder(&self) -> String {
        self.join(PLACEHOLDER_IMAGE)
    }

    fn join(&self, relative: &str) -> String {
        format!("{}{}/{}", self.prefix, self.base, relative)
    }
}

fn trim_trailing_slash(mut value: String) -> String {
    while value.len() > 1 && value.ends_with('/') {
        value.pop();
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_image_names_under_base() {
        let assets = AssetResolver::default();
        assert_eq!(
            assets.image_path("https_specials-1.png"),
            "/assets/https_specials-1.png"
        );
    }

    #[test]
    fn empty_name_uses_placeholder() {
        let assets = AssetResolver::new("/static/");
        assert_eq!(assets.image_path("  "), "/static/videos/placeholder.svg");
    }

    #[test]
    fn prefix_applies_to_icons_and_images() {
        let assets = AssetResolver::default().with_prefix("/vecto-tv/");
        assert_eq!(assets.icon_path("Search.png"), "/vecto-tv/assets/icons/Search.png");
        assert_eq!(assets.placeholder(), "/vecto-tv/assets/videos/placeholder.svg");
    }
}
