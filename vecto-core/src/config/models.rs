use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogSource, MAX_TRENDING};
use crate::featured::FeaturedDelays;

/// Fully resolved browser configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BrowseConfig {
    pub catalog: CatalogConfig,
    pub carousel: CarouselConfig,
    pub recency: RecencyConfig,
    pub featured: FeaturedConfig,
    pub menu: MenuConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// File path or http(s) URL of the catalog document
    pub source: String,
    pub max_items: usize,
    pub asset_base: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: "data.json".to_string(),
            max_items: MAX_TRENDING,
            asset_base: vecto_model::DEFAULT_ASSET_BASE.to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn source(&self) -> CatalogSource {
        match self.source.parse() {
            Ok(source) => source,
            Err(never) => match never {},
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselConfig {
    pub visible_items: usize,
    /// Window width used by headless hosts, in pixels
    pub viewport_width: u32,
    pub auto_advance_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            visible_items: crate::shelf::DEFAULT_VISIBLE_ITEMS,
            viewport_width: 1280,
            auto_advance_ms: 3000,
        }
    }
}

impl CarouselConfig {
    pub fn auto_advance(&self) -> Duration {
        Duration::from_millis(self.auto_advance_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecencyConfig {
    pub threshold_minutes: u32,
    /// Root for per-session storage directories. `None` means the OS temp
    /// directory.
    pub session_dir: Option<PathBuf>,
}

impl Default for RecencyConfig {
    fn default() -> Self {
        Self {
            threshold_minutes: crate::recency::DEFAULT_RECENT_MINUTES,
            session_dir: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedConfig {
    pub autoplay_delay_ms: u64,
    pub load_delay_ms: u64,
}

impl Default for FeaturedConfig {
    fn default() -> Self {
        Self {
            autoplay_delay_ms: 2000,
            load_delay_ms: 1000,
        }
    }
}

impl FeaturedConfig {
    pub fn delays(&self) -> FeaturedDelays {
        FeaturedDelays {
            autoplay: Duration::from_millis(self.autoplay_delay_ms),
            load: Duration::from_millis(self.load_delay_ms),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    pub initial_active: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            initial_active: "home".to_string(),
        }
    }
}

/// Values supplied on the command line. Applied last.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub catalog_source: Option<String>,
    pub visible_items: Option<usize>,
    pub viewport_width: Option<u32>,
    pub session_dir: Option<PathBuf>,
}
