//! # Vecto Core
//!
//! State engines for the Vecto media browser: a hero panel, a sidebar menu
//! and a horizontally scrolling "trending" row, driven by a static catalog.
//!
//! ## Overview
//!
//! - **Carousel**: index, wraparound navigation, drag and touch gestures,
//!   keyboard bindings and scroll reconciliation over a [`carousel::ScrollTrack`]
//! - **Recency**: a capped, session-scoped view history and the display
//!   ordering derived from it
//! - **Featured video**: autoplay reveal and simulated load latency with
//!   cancellable timers
//! - **Catalog**: one-shot document fetch with a built-in fallback data set
//!
//! Engines never block and never spawn work of their own except through a
//! [`schedule::Scheduler`], whose messages the host feeds back into the
//! owning controller's `update` method.
//!
//! ## Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use vecto_core::{
//!     carousel::{Carousel, HeadlessTrack, NavKey},
//!     clock::SystemClock,
//!     recency::{MemorySessionStore, RecencyEngine},
//! };
//!
//! let mut carousel = Carousel::new(10, 4, HeadlessTrack::new(1280.0));
//! carousel.on_key(NavKey::End);
//! assert_eq!(carousel.current_index(), 6);
//!
//! let mut recency = RecencyEngine::load(
//!     Box::new(MemorySessionStore::new()),
//!     Arc::new(SystemClock),
//! );
//! recency.record_view(&"42".into());
//! assert!(recency.is_recent(&"42".into()));
//! ```

#![allow(missing_docs)]

/// Carousel navigation and gesture state
pub mod carousel;

/// Catalog document loading and trending selection
pub mod catalog;

/// Time sources
pub mod clock;

/// Layered configuration loading
pub mod config;

/// Error types and error handling utilities
pub mod error;

/// Featured video playback controller
pub mod featured;

/// Sidebar menu state
pub mod menu;

/// Session-scoped view history and display ordering
pub mod recency;

/// Cancellable deferred messages
pub mod schedule;

/// Trending row composition
pub mod shelf;

pub use error::{BrowseError, Result};
pub use vecto_model as model;
