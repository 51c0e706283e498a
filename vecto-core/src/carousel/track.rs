//! The scrollable track the carousel drives.
//!
//! The engine never owns layout; it reads and writes scroll offsets through a
//! [`ScrollTrack`]. Browsers, native toolkits and the headless player each
//! provide their own implementation.

use super::layout::{ITEM_GAP, item_stride};

pub trait ScrollTrack {
    /// Current native horizontal scroll offset.
    fn scroll_left(&self) -> f32;

    /// Jump to an offset immediately (drag tracking).
    fn set_scroll_left(&mut self, offset: f32);

    /// Animate to an offset. Implementations may complete instantly.
    fn smooth_scroll_to(&mut self, offset: f32);

    /// Left edge of the track relative to the page, used to turn page
    /// coordinates into track-local ones.
    fn offset_left(&self) -> f32;

    /// Visible width of the track.
    fn client_width(&self) -> f32;

    /// Width of the whole viewport, read at call time for breakpoint lookup.
    fn window_width(&self) -> f32;
}

/// In-memory track: smooth scrolls land instantly and offsets are clamped
/// to `[0, max_scroll]` like a native scroll container.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessTrack {
    pub scroll_left: f32,
    pub offset_left: f32,
    pub client_width: f32,
    pub window_width: f32,
    pub max_scroll: f32,
    /// Target of the most recent smooth scroll
    pub last_smooth_target: Option<f32>,
    pub smooth_scroll_count: usize,
}

impl HeadlessTrack {
    pub fn new(window_width: f32) -> Self {
        Self {
            scroll_left: 0.0,
            offset_left: 0.0,
            client_width: window_width,
            window_width,
            max_scroll: f32::INFINITY,
            last_smooth_target: None,
            smooth_scroll_count: 0,
        }
    }

    pub fn with_offset_left(mut self, offset_left: f32) -> Self {
        self.offset_left = offset_left;
        self
    }

    pub fn with_client_width(mut self, client_width: f32) -> Self {
        self.client_width = client_width;
        self
    }

    /// Derive `max_scroll` from the content width of `total_items` cards.
    pub fn fit_content(&mut self, total_items: usize) {
        let content = if total_items == 0 {
            0.0
        } else {
            total_items as f32 * item_stride(self.window_width) - ITEM_GAP
        };
        self.max_scroll = (content - self.client_width).max(0.0);
        self.scroll_left = self.scroll_left.min(self.max_scroll);
    }

    /// Resize the viewport, as a window resize would.
    pub fn resize(&mut self, window_width: f32, client_width: f32) {
        self.window_width = window_width;
        self.client_width = client_width;
    }

    fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_scroll.max(0.0))
    }
}

impl ScrollTrack for HeadlessTrack {
    fn scroll_left(&self) -> f32 {
        self.scroll_left
    }

    fn set_scroll_left(&mut self, offset: f32) {
        if offset.is_finite() {
            self.scroll_left = self.clamp(offset);
        }
    }

    fn smooth_scroll_to(&mut self, offset: f32) {
        if !offset.is_finite() {
            return;
        }
        self.last_smooth_target = Some(offset);
        self.smooth_scroll_count += 1;
        self.scroll_left = self.clamp(offset);
    }

    fn offset_left(&self) -> f32 {
        self.offset_left
    }

    fn client_width(&self) -> f32 {
        self.client_width
    }

    fn window_width(&self) -> f32 {
        self.window_width
    }
}
