//! Headless terminal front end for the Vecto media browser.
//!
//! Reads line commands from stdin, applies them to the carousel, recency,
//! featured-video and menu engines, and prints the resulting screen state.

pub mod app;
pub mod command;

pub use app::{App, Channels, Outcome};
pub use command::Command;
