//! Trending-row carousel
//!
//! Index arithmetic, drag/touch tracking, keyboard bindings and scroll
//! reconciliation for a horizontally scrolling row of cards. The engine
//! talks to the rendered track only through [`ScrollTrack`], so it runs the
//! same in a browser binding, a native toolkit, or the headless player.

pub mod engine;
pub mod gesture;
pub mod keys;
pub mod layout;
pub mod track;

pub use engine::{Carousel, CarouselState};
pub use gesture::{DRAG_SPEED, DragTracker, TouchTrace};
pub use keys::{KeyOutcome, NavKey, UnboundKey};
pub use layout::{Breakpoint, ITEM_GAP, item_stride};
pub use track::{HeadlessTrack, ScrollTrack};
