//! Drag tracking for pointer and touch gestures.
//!
//! A drag captures the pointer position and the track's scroll offset at
//! start; every move maps the pointer travel onto the anchor at twice the
//! pointer speed.

use std::time::{Duration, Instant};

/// Scroll distance per pixel of pointer travel.
pub const DRAG_SPEED: f32 = 2.0;

/// A touch shorter than this may be a tap.
pub const TAP_MAX_DURATION: Duration = Duration::from_millis(300);

/// A touch whose drag delta stays under this many pixels may be a tap.
pub const TAP_MAX_DISTANCE: f32 = 10.0;

/// Tracks an in-flight drag.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragTracker {
    pub is_dragging: bool,
    /// Pointer position relative to the track origin when the drag started
    pub drag_start_offset: f32,
    /// Track scroll offset when the drag started
    pub scroll_anchor: f32,
}

impl DragTracker {
    pub fn start(&mut self, pointer_offset: f32, scroll_anchor: f32) {
        self.is_dragging = true;
        self.drag_start_offset = pointer_offset;
        self.scroll_anchor = scroll_anchor;
    }

    /// Scroll delta for a pointer at `pointer_offset`, or `None` outside a drag.
    pub fn delta(&self, pointer_offset: f32) -> Option<f32> {
        self.is_dragging
            .then(|| (pointer_offset - self.drag_start_offset) * DRAG_SPEED)
    }

    /// Scroll offset the track should adopt for a pointer at `pointer_offset`.
    pub fn target_scroll(&self, pointer_offset: f32) -> Option<f32> {
        self.delta(pointer_offset)
            .map(|delta| self.scroll_anchor - delta)
    }

    pub fn end(&mut self) {
        self.is_dragging = false;
    }
}

/// Timing and travel of the current touch, for tap detection.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TouchTrace {
    started_at: Option<Instant>,
    distance: f32,
}

impl TouchTrace {
    pub fn begin(&mut self, at: Instant) {
        self.started_at = Some(at);
        self.distance = 0.0;
    }

    /// Keep the largest drag delta seen since `begin`.
    pub fn record(&mut self, delta: f32) {
        self.distance = self.distance.max(delta.abs());
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// True when the last touch was short and barely moved.
    pub fn is_tap(&self, now: Instant) -> bool {
        match self.started_at {
            Some(started) => {
                now.saturating_duration_since(started) < TAP_MAX_DURATION
                    && self.distance < TAP_MAX_DISTANCE
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_tracker_produces_no_delta() {
        let tracker = DragTracker::default();
        assert_eq!(tracker.delta(40.0), None);
        assert_eq!(tracker.target_scroll(40.0), None);
    }

    #[test]
    fn drag_maps_travel_at_double_speed() {
        let mut tracker = DragTracker::default();
        tracker.start(100.0, 0.0);
        assert_eq!(tracker.delta(40.0), Some(-120.0));
        assert_eq!(tracker.target_scroll(40.0), Some(120.0));
        assert_eq!(tracker.target_scroll(130.0), Some(-60.0));
    }

    #[test]
    fn end_keeps_captured_offsets() {
        let mut tracker = DragTracker::default();
        tracker.start(10.0, 300.0);
        tracker.end();
        assert!(!tracker.is_dragging);
        assert_eq!(tracker.scroll_anchor, 300.0);
    }

    #[test]
    fn tap_requires_short_and_still_touch() {
        let t0 = Instant::now();
        let mut trace = TouchTrace::default();
        assert!(!trace.is_tap(t0));

        trace.begin(t0);
        trace.record(-4.0);
        assert!(trace.is_tap(t0 + Duration::from_millis(120)));
        assert!(!trace.is_tap(t0 + Duration::from_millis(300)));

        trace.record(12.0);
        assert!(!trace.is_tap(t0 + Duration::from_millis(50)));
    }

    #[test]
    fn swiping_back_to_start_is_not_a_tap() {
        let t0 = Instant::now();
        let mut trace = TouchTrace::default();
        trace.begin(t0);
        trace.record(-40.0);
        trace.record(2.0);
        assert_eq!(trace.distance(), 40.0);
        assert!(!trace.is_tap(t0 + Duration::from_millis(100)));

        trace.begin(t0);
        assert_eq!(trace.distance(), 0.0);
    }
}
