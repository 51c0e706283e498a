//! Layered configuration: defaults, TOML file, `VECTO_*` environment, then
//! command-line overrides.

pub mod loader;
pub mod models;
pub mod sources;

pub use loader::{ConfigLoad, ConfigLoadError, ConfigLoader, ConfigLoaderOptions};
pub use models::{
    BrowseConfig, CarouselConfig, CatalogConfig, ConfigOverrides, FeaturedConfig, MenuConfig,
    RecencyConfig,
};
