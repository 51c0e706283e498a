//! Presentation focused snapshot of the model surface.
//! Prefer importing from this module when wiring views or engines.

pub use super::assets::AssetResolver;
pub use super::catalog::{Catalog, fallback_catalog};
pub use super::ids::VideoId;
pub use super::menu::{MenuItem, ProfileInfo};
pub use super::video::Video;
