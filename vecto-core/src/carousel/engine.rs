//! Carousel: index and gesture state over a horizontally scrolling track

use std::ops::Range;
use std::time::Instant;

use tracing::debug;

use super::gesture::{DragTracker, TouchTrace};
use super::keys::{KeyOutcome, NavKey};
use super::layout::item_stride;
use super::track::ScrollTrack;

/// Navigation state for one carousel instance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CarouselState {
    /// Index of the leftmost visible item
    pub current_index: usize,
    pub is_dragging: bool,
    /// Pointer position relative to the track origin at drag start
    pub drag_start_offset: f32,
    /// Track scroll offset captured at drag start
    pub scroll_anchor: f32,
    /// Whether the host should run its advance timer
    pub is_auto_scrolling: bool,
}

/// Window over `total_items` items of which `visible_items` fit at once.
///
/// Navigation wraps: stepping past either bound re-enters at the opposite
/// one. Capability queries ([`Carousel::can_step_left`],
/// [`Carousel::can_step_right`]) still report the bounds so hosts can dim
/// their chevrons. When every item fits, all navigation and gesture handling
/// is a no-op.
#[derive(Debug)]
pub struct Carousel<T: ScrollTrack> {
    total_items: usize,
    visible_items: usize,
    current_index: usize,
    drag: DragTracker,
    touch: TouchTrace,
    is_auto_scrolling: bool,
    track: T,
}

impl<T: ScrollTrack> Carousel<T> {
    pub fn new(total_items: usize, visible_items: usize, track: T) -> Self {
        Self {
            total_items,
            visible_items,
            current_index: 0,
            drag: DragTracker::default(),
            touch: TouchTrace::default(),
            is_auto_scrolling: false,
            track,
        }
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            current_index: self.current_index,
            is_dragging: self.drag.is_dragging,
            drag_start_offset: self.drag.drag_start_offset,
            scroll_anchor: self.drag.scroll_anchor,
            is_auto_scrolling: self.is_auto_scrolling,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn visible_items(&self) -> usize {
        self.visible_items
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    pub fn is_auto_scrolling(&self) -> bool {
        self.is_auto_scrolling
    }

    pub fn track(&self) -> &T {
        &self.track
    }

    pub fn track_mut(&mut self) -> &mut T {
        &mut self.track
    }

    #[inline]
    pub fn max_index(&self) -> usize {
        self.total_items.saturating_sub(self.visible_items)
    }

    #[inline]
    pub fn needs_scrolling(&self) -> bool {
        self.total_items > self.visible_items
    }

    pub fn can_step_left(&self) -> bool {
        self.needs_scrolling() && self.current_index > 0
    }

    pub fn can_step_right(&self) -> bool {
        self.needs_scrolling() && self.current_index < self.max_index()
    }

    /// Items currently in view.
    pub fn visible_range(&self) -> Range<usize> {
        if !self.needs_scrolling() {
            return 0..self.total_items;
        }
        let end = (self.current_index + self.visible_items).min(self.total_items);
        self.current_index..end
    }

    /// Resolve an arbitrary index with the wraparound rule.
    fn wrap(&self, index: isize) -> usize {
        let max = self.max_index();
        if index < 0 {
            max
        } else if index as usize > max {
            0
        } else {
            index as usize
        }
    }

    /// Pixel offset of the item at `index` for the current viewport.
    pub fn offset_for_index(&self, index: usize) -> f32 {
        index as f32 * item_stride(self.track.window_width())
    }

    pub fn set_index(&mut self, index: isize) {
        if !self.needs_scrolling() {
            return;
        }
        self.current_index = self.wrap(index);
    }

    /// Wrap `index`, smooth-scroll the track there and commit it.
    pub fn scroll_to_index(&mut self, index: isize) {
        if !self.needs_scrolling() {
            return;
        }
        let target = self.wrap(index);
        let offset = self.offset_for_index(target);
        debug!(requested = index, index = target, offset, "carousel scroll");
        self.track.smooth_scroll_to(offset);
        self.current_index = target;
    }

    /// Scroll so that `item_index` sits in the middle of the track.
    pub fn scroll_to_center_item(&mut self, item_index: usize) {
        if !self.needs_scrolling() {
            return;
        }
        let stride = item_stride(self.track.window_width());
        let center_offset = self.track.client_width() / 2.0 - stride / 2.0;
        let offset = (item_index as f32 * stride - center_offset).max(0.0);
        self.track.smooth_scroll_to(offset);
        self.set_index(item_index as isize);
    }

    pub fn step_left(&mut self) {
        self.scroll_to_index(self.current_index as isize - 1);
    }

    pub fn step_right(&mut self) {
        self.scroll_to_index(self.current_index as isize + 1);
    }

    pub fn jump_to_start(&mut self) {
        self.scroll_to_index(0);
    }

    pub fn jump_to_end(&mut self) {
        self.scroll_to_index(self.max_index() as isize);
    }

    pub fn on_key(&mut self, key: NavKey) -> KeyOutcome {
        if !self.needs_scrolling() {
            return KeyOutcome::Ignored;
        }
        match key {
            NavKey::ArrowLeft => self.step_left(),
            NavKey::ArrowRight => self.step_right(),
            NavKey::Home => self.jump_to_start(),
            NavKey::End => self.jump_to_end(),
        }
        KeyOutcome::Handled
    }

    /// Key handler taking a DOM key name; unbound keys pass through.
    pub fn on_key_name(&mut self, name: &str) -> KeyOutcome {
        match NavKey::from_key_name(name) {
            Some(key) => self.on_key(key),
            None => KeyOutcome::Ignored,
        }
    }

    fn track_local(&self, page_x: f32) -> f32 {
        page_x - self.track.offset_left()
    }

    pub fn pointer_down(&mut self, page_x: f32) {
        if !self.needs_scrolling() {
            return;
        }
        let start = self.track_local(page_x);
        let anchor = self.track.scroll_left();
        self.drag.start(start, anchor);
    }

    /// Drag the track. The index is left alone until the host reports the
    /// resulting scroll through [`Carousel::on_scroll`].
    pub fn pointer_move(&mut self, page_x: f32) -> Option<f32> {
        if !self.needs_scrolling() {
            return None;
        }
        let offset = self.drag.target_scroll(self.track_local(page_x))?;
        self.track.set_scroll_left(offset);
        Some(offset)
    }

    pub fn pointer_up(&mut self) {
        self.drag.end();
    }

    pub fn pointer_leave(&mut self) {
        self.drag.end();
    }

    pub fn touch_start(&mut self, page_x: f32, at: Instant) {
        if !self.needs_scrolling() {
            return;
        }
        self.touch.begin(at);
        self.pointer_down(page_x);
    }

    pub fn touch_move(&mut self, page_x: f32) -> Option<f32> {
        if !self.needs_scrolling() {
            return None;
        }
        let delta = self.drag.delta(self.track_local(page_x))?;
        self.touch.record(delta);
        self.pointer_move(page_x)
    }

    pub fn touch_end(&mut self) {
        self.drag.end();
    }

    /// Whether the last touch should count as a tap rather than a drag.
    pub fn is_touch_tap(&self, now: Instant) -> bool {
        self.touch.is_tap(now)
    }

    /// Reconcile the index with the track's native scroll offset.
    pub fn on_scroll(&mut self) {
        if !self.needs_scrolling() {
            return;
        }
        let stride = item_stride(self.track.window_width());
        let nearest = (self.track.scroll_left() / stride).round();
        let index = if nearest <= 0.0 {
            0
        } else {
            (nearest as usize).min(self.max_index())
        };
        if index != self.current_index {
            debug!(from = self.current_index, to = index, "carousel index reconciled");
            self.current_index = index;
        }
    }

    pub fn start_auto_scroll(&mut self) {
        if !self.needs_scrolling() {
            return;
        }
        self.is_auto_scrolling = true;
    }

    pub fn stop_auto_scroll(&mut self) {
        self.is_auto_scrolling = false;
    }

    /// Update the item count, pulling the index back inside the new bounds.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.clamp_to_bounds();
    }

    pub fn set_visible_items(&mut self, visible_items: usize) {
        self.visible_items = visible_items;
        self.clamp_to_bounds();
    }

    fn clamp_to_bounds(&mut self) {
        let max = self.max_index();
        if self.current_index > max {
            self.current_index = max;
        }
        if !self.needs_scrolling() {
            self.drag.end();
            self.is_auto_scrolling = false;
        }
    }

    /// Number of page indicators.
    pub fn page_count(&self) -> usize {
        if self.visible_items == 0 {
            return 0;
        }
        self.total_items.div_ceil(self.visible_items)
    }

    /// Indicator page containing the current index.
    pub fn active_page(&self) -> usize {
        self.current_index
            .checked_div(self.visible_items)
            .unwrap_or_default()
    }

    pub fn jump_to_page(&mut self, page: usize) {
        let index = page.saturating_mul(self.visible_items);
        self.scroll_to_index(isize::try_from(index).unwrap_or(isize::MAX));
    }

    /// Progress through the row in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        let span = self.total_items.saturating_sub(self.visible_items).max(1);
        (self.current_index as f32 / span as f32).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::track::HeadlessTrack;
    use std::time::Duration;

    fn carousel(total: usize, visible: usize) -> Carousel<HeadlessTrack> {
        Carousel::new(total, visible, HeadlessTrack::new(1920.0))
    }

    #[test]
    fn set_index_wraps_both_ways() {
        let mut c = carousel(10, 4);
        c.set_index(7);
        assert_eq!(c.current_index(), 0);
        c.set_index(-1);
        assert_eq!(c.current_index(), 6);
        c.set_index(3);
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn scroll_to_index_positions_track_by_stride() {
        let mut c = carousel(10, 4);
        c.scroll_to_index(3);
        assert_eq!(c.current_index(), 3);
        assert_eq!(c.track().last_smooth_target, Some(648.0));

        c.track_mut().resize(700.0, 700.0);
        c.scroll_to_index(2);
        assert_eq!(c.track().last_smooth_target, Some(332.0));
    }

    #[test]
    fn step_right_from_max_wraps_to_start() {
        let mut c = carousel(10, 4);
        c.jump_to_end();
        assert_eq!(c.current_index(), 6);
        assert!(!c.can_step_right());
        c.step_right();
        assert_eq!(c.current_index(), 0);
        assert!(!c.can_step_left());
        c.step_left();
        assert_eq!(c.current_index(), 6);
    }

    #[test]
    fn nothing_moves_when_everything_fits() {
        let mut c = carousel(4, 8);
        assert!(!c.needs_scrolling());
        c.step_right();
        c.jump_to_end();
        c.set_index(3);
        c.pointer_down(10.0);
        assert_eq!(c.pointer_move(200.0), None);
        c.start_auto_scroll();
        assert_eq!(c.on_key(NavKey::End), KeyOutcome::Ignored);
        assert_eq!(c.current_index(), 0);
        assert!(!c.is_dragging());
        assert!(!c.is_auto_scrolling());
        assert_eq!(c.track().smooth_scroll_count, 0);
        assert_eq!(c.visible_range(), 0..4);
    }

    #[test]
    fn drag_uses_track_local_coordinates() {
        let mut c = Carousel::new(
            20,
            4,
            HeadlessTrack::new(1920.0).with_offset_left(50.0),
        );
        c.track_mut().set_scroll_left(400.0);
        c.pointer_down(150.0);
        let state = c.state();
        assert!(state.is_dragging);
        assert_eq!(state.drag_start_offset, 100.0);
        assert_eq!(state.scroll_anchor, 400.0);

        assert_eq!(c.pointer_move(90.0), Some(520.0));
        assert_eq!(c.track().scroll_left, 520.0);
        assert_eq!(c.current_index(), 0);

        c.pointer_leave();
        assert!(!c.is_dragging());
        assert_eq!(c.pointer_move(10.0), None);
    }

    #[test]
    fn move_without_start_is_ignored() {
        let mut c = carousel(20, 4);
        assert_eq!(c.pointer_move(300.0), None);
        assert_eq!(c.touch_move(300.0), None);
        c.pointer_up();
        assert_eq!(c.track().scroll_left, 0.0);
    }

    #[test]
    fn on_scroll_rounds_and_clamps() {
        let mut c = carousel(10, 4);
        c.track_mut().set_scroll_left(216.0 * 2.4);
        c.on_scroll();
        assert_eq!(c.current_index(), 2);
        c.track_mut().set_scroll_left(216.0 * 2.6);
        c.on_scroll();
        assert_eq!(c.current_index(), 3);
        c.track_mut().set_scroll_left(216.0 * 30.0);
        c.on_scroll();
        assert_eq!(c.current_index(), 6);
    }

    #[test]
    fn shrinking_total_clamps_index() {
        let mut c = carousel(20, 4);
        c.scroll_to_index(15);
        c.set_total_items(10);
        assert_eq!(c.current_index(), 6);
        c.set_total_items(3);
        assert_eq!(c.current_index(), 0);
        assert!(!c.needs_scrolling());
    }

    #[test]
    fn touch_tap_detection() {
        let t0 = Instant::now();
        let mut c = carousel(20, 4);
        c.touch_start(100.0, t0);
        c.touch_move(102.0);
        c.touch_end();
        assert!(c.is_touch_tap(t0 + Duration::from_millis(100)));

        c.touch_start(100.0, t0);
        c.touch_move(80.0);
        c.touch_end();
        assert!(!c.is_touch_tap(t0 + Duration::from_millis(100)));
    }

    #[test]
    fn center_item_offsets_by_half_the_track() {
        let mut c = Carousel::new(
            20,
            4,
            HeadlessTrack::new(1920.0).with_client_width(1080.0),
        );
        c.scroll_to_center_item(10);
        // 10 * 216 - (540 - 108)
        assert_eq!(c.track().last_smooth_target, Some(1728.0));
        assert_eq!(c.current_index(), 10);

        c.scroll_to_center_item(1);
        assert_eq!(c.track().last_smooth_target, Some(0.0));
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn pages_and_progress() {
        let mut c = carousel(18, 8);
        assert_eq!(c.page_count(), 3);
        assert_eq!(c.active_page(), 0);
        c.jump_to_page(1);
        assert_eq!(c.current_index(), 8);
        assert_eq!(c.active_page(), 1);
        assert_eq!(c.progress(), 0.8);
        c.jump_to_page(2);
        // 16 exceeds max index 10 and wraps
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.progress(), 0.0);
    }

    #[test]
    fn visible_range_tracks_index() {
        let mut c = carousel(10, 4);
        c.scroll_to_index(5);
        assert_eq!(c.visible_range(), 5..9);
    }
}
