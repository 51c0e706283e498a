use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::loader::ConfigLoadError;

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub catalog: FileCatalogConfig,
    #[serde(default)]
    pub carousel: FileCarouselConfig,
    #[serde(default)]
    pub recency: FileRecencyConfig,
    #[serde(default)]
    pub featured: FileFeaturedConfig,
    #[serde(default)]
    pub menu: FileMenuConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCatalogConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_base: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCarouselConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_items: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_advance_ms: Option<u64>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileRecencyConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_dir: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileFeaturedConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoplay_delay_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_delay_ms: Option<u64>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileMenuConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_active: Option<String>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub catalog_source: Option<String>,
    pub catalog_max_items: Option<usize>,
    pub asset_base: Option<String>,
    pub visible_items: Option<usize>,
    pub viewport_width: Option<u32>,
    pub auto_advance_ms: Option<u64>,
    pub recent_minutes: Option<u32>,
    pub session_dir: Option<PathBuf>,
    pub autoplay_delay_ms: Option<u64>,
    pub load_delay_ms: Option<u64>,
    pub menu_active: Option<String>,
}

impl EnvConfig {
    pub fn gather() -> Result<Self, ConfigLoadError> {
        Self::gather_with(|name| std::env::var(name).ok())
    }

    /// Gather from an arbitrary variable lookup. Numeric variables that do
    /// not parse are rejected.
    pub fn gather_with<F>(lookup: F) -> Result<Self, ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        Ok(Self {
            config_path: text("VECTO_CONFIG").map(PathBuf::from),
            catalog_source: text("VECTO_CATALOG_SOURCE"),
            catalog_max_items: parse_var(&lookup, "VECTO_CATALOG_MAX_ITEMS")?,
            asset_base: text("VECTO_ASSET_BASE"),
            visible_items: parse_var(&lookup, "VECTO_VISIBLE_ITEMS")?,
            viewport_width: parse_var(&lookup, "VECTO_VIEWPORT_WIDTH")?,
            auto_advance_ms: parse_var(&lookup, "VECTO_AUTO_ADVANCE_MS")?,
            recent_minutes: parse_var(&lookup, "VECTO_RECENT_MINUTES")?,
            session_dir: text("VECTO_SESSION_DIR").map(PathBuf::from),
            autoplay_delay_ms: parse_var(&lookup, "VECTO_AUTOPLAY_DELAY_MS")?,
            load_delay_ms: parse_var(&lookup, "VECTO_LOAD_DELAY_MS")?,
            menu_active: text("VECTO_MENU_ACTIVE"),
        })
    }
}

fn parse_var<F, T>(lookup: &F, name: &str) -> Result<Option<T>, ConfigLoadError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| ConfigLoadError::InvalidEnv {
            name: name.to_string(),
            value: raw,
        })
}
