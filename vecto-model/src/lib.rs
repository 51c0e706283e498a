//! Core data model definitions shared across Vecto crates.
#![allow(missing_docs)]

pub mod assets;
pub mod catalog;
pub mod duration;
pub mod error;
pub mod ids;
pub mod menu;
pub mod prelude;
pub mod video;

pub use ::chrono;

// Intentionally curated re-exports for downstream consumers.
pub use assets::{AssetResolver, DEFAULT_ASSET_BASE, PLACEHOLDER_IMAGE};
pub use catalog::{Catalog, RawCatalog, RawFeatured, RawVideo, fallback_catalog};
pub use duration::format_duration;
pub use error::{ModelError, Result as ModelResult};
pub use ids::VideoId;
pub use menu::{
    MenuItem, ProfileInfo, default_bottom_menu_items, default_menu_items,
    default_profile,
};
pub use video::{Video, parse_timestamp};
