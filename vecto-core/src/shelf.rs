//! Trending row: recency ordering feeding a carousel.

use std::time::Duration;

use tracing::{debug, info};
use vecto_model::{Video, VideoId};

use crate::carousel::{Carousel, ScrollTrack};
use crate::recency::RecencyEngine;
use crate::schedule::{Scheduler, TaskHandle};

/// Items the row shows at once unless configured otherwise.
pub const DEFAULT_VISIBLE_ITEMS: usize = 8;
pub const DEFAULT_AUTO_ADVANCE: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShelfMessage {
    AutoAdvance,
}

/// The trending row.
///
/// Owns the raw item list and keeps a display ordering derived from the view
/// history. The carousel always spans the ordered list.
#[derive(Debug)]
pub struct TrendingShelf<T: ScrollTrack> {
    videos: Vec<Video>,
    ordered: Vec<Video>,
    recency: RecencyEngine,
    carousel: Carousel<T>,
    selected: Option<VideoId>,
    hovered: Option<VideoId>,
    auto_advance: Option<TaskHandle>,
}

impl<T: ScrollTrack> TrendingShelf<T> {
    pub fn new(videos: Vec<Video>, recency: RecencyEngine, visible_items: usize, track: T) -> Self {
        let ordered = ordered_clone(&recency, &videos);
        let carousel = Carousel::new(ordered.len(), visible_items, track);
        Self {
            videos,
            ordered,
            recency,
            carousel,
            selected: None,
            hovered: None,
            auto_advance: None,
        }
    }

    /// Items in display order.
    pub fn videos(&self) -> &[Video] {
        &self.ordered
    }

    /// Items in display order that are currently in view.
    pub fn visible(&self) -> &[Video] {
        &self.ordered[self.carousel.visible_range()]
    }

    pub fn carousel(&self) -> &Carousel<T> {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel<T> {
        &mut self.carousel
    }

    pub fn recency(&self) -> &RecencyEngine {
        &self.recency
    }

    pub fn selected(&self) -> Option<&VideoId> {
        self.selected.as_ref()
    }

    pub fn hovered(&self) -> Option<&VideoId> {
        self.hovered.as_ref()
    }

    pub fn is_selected(&self, id: &VideoId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    pub fn is_recent(&self, id: &VideoId) -> bool {
        self.recency.is_recent(id)
    }

    pub fn set_videos(&mut self, videos: Vec<Video>) {
        self.videos = videos;
        self.reorder();
        if !self.carousel.is_auto_scrolling() {
            self.cancel_auto_advance();
        }
    }

    /// Select `id`, record the view and bring it toward the middle of the
    /// row. Returns the clicked item, or `None` for an unknown id.
    pub fn click(&mut self, id: &VideoId) -> Option<Video> {
        let video = self.videos.iter().find(|video| &video.id == id)?.clone();
        self.selected = Some(id.clone());
        self.recency.record_view(id);
        self.reorder();

        if let Some(position) = self.ordered.iter().position(|video| &video.id == id) {
            let half = self.carousel.visible_items() / 2;
            let target = position.saturating_sub(half);
            self.carousel.scroll_to_index(target as isize);
        }
        info!(id = %id, title = %video.title, "trending item selected");
        Some(video)
    }

    pub fn hover(&mut self, id: Option<VideoId>) {
        self.hovered = id;
    }

    pub fn step_left(&mut self) {
        self.carousel.step_left();
    }

    pub fn step_right(&mut self) {
        self.carousel.step_right();
    }

    pub fn jump_to_page(&mut self, page: usize) {
        self.carousel.jump_to_page(page);
    }

    pub fn page_count(&self) -> usize {
        self.carousel.page_count()
    }

    pub fn active_page(&self) -> usize {
        self.carousel.active_page()
    }

    /// Forget the view history and fall back to creation order.
    pub fn reset_history(&mut self) {
        self.recency.reset();
        self.reorder();
    }

    /// Turn on auto-advance and attach the repeating tick. Does nothing when
    /// every item already fits.
    pub fn start_auto_scroll(&mut self, scheduler: &Scheduler<ShelfMessage>, period: Duration) {
        self.carousel.start_auto_scroll();
        if !self.carousel.is_auto_scrolling() {
            return;
        }
        self.cancel_auto_advance();
        self.auto_advance = Some(scheduler.every(period, ShelfMessage::AutoAdvance));
        debug!(period_ms = period.as_millis() as u64, "auto-advance started");
    }

    pub fn stop_auto_scroll(&mut self) {
        self.carousel.stop_auto_scroll();
        self.cancel_auto_advance();
    }

    pub fn update(&mut self, message: ShelfMessage) {
        match message {
            ShelfMessage::AutoAdvance => {
                if self.carousel.is_auto_scrolling() {
                    self.carousel.step_right();
                }
            }
        }
    }

    fn cancel_auto_advance(&mut self) {
        if let Some(mut handle) = self.auto_advance.take() {
            handle.cancel();
            debug!("auto-advance stopped");
        }
    }

    fn reorder(&mut self) {
        self.ordered = ordered_clone(&self.recency, &self.videos);
        self.carousel.set_total_items(self.ordered.len());
    }
}

fn ordered_clone(recency: &RecencyEngine, videos: &[Video]) -> Vec<Video> {
    recency
        .order_for_display(videos)
        .into_iter()
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{DateTime, TimeDelta};

    use super::*;
    use crate::carousel::HeadlessTrack;
    use crate::clock::ManualClock;
    use crate::recency::MemorySessionStore;

    fn video(id: &str, day: i64) -> Video {
        Video::new(id, id, DateTime::UNIX_EPOCH + TimeDelta::days(day))
    }

    fn shelf(count: usize, visible: usize) -> TrendingShelf<HeadlessTrack> {
        let videos = (0..count).map(|i| video(&i.to_string(), i as i64)).collect();
        let recency = RecencyEngine::load(
            Box::new(MemorySessionStore::new()),
            Arc::new(ManualClock::default()),
        );
        TrendingShelf::new(videos, recency, visible, HeadlessTrack::new(1280.0))
    }

    fn ids(shelf: &TrendingShelf<HeadlessTrack>) -> Vec<&str> {
        shelf.videos().iter().map(|video| video.id.as_str()).collect()
    }

    #[test]
    fn initial_order_is_newest_first() {
        let shelf = shelf(4, 2);
        assert_eq!(ids(&shelf), ["3", "2", "1", "0"]);
    }

    #[test]
    fn click_moves_item_to_front_and_records() {
        let mut shelf = shelf(10, 4);
        let clicked = shelf.click(&VideoId::from("2")).unwrap();
        assert_eq!(clicked.id.as_str(), "2");
        assert_eq!(ids(&shelf)[0], "2");
        assert!(shelf.is_selected(&VideoId::from("2")));
        assert!(shelf.is_recent(&VideoId::from("2")));
        assert_eq!(shelf.carousel().current_index(), 0);
    }

    #[test]
    fn unknown_click_changes_nothing() {
        let mut shelf = shelf(5, 2);
        assert!(shelf.click(&VideoId::from("nope")).is_none());
        assert!(shelf.selected().is_none());
        assert!(shelf.recency().viewed_ids().is_empty());
    }

    #[test]
    fn shrinking_the_list_clamps_the_carousel() {
        let mut shelf = shelf(10, 4);
        shelf.carousel_mut().jump_to_end();
        assert_eq!(shelf.carousel().current_index(), 6);

        shelf.set_videos((0..6).map(|i| video(&i.to_string(), i)).collect());
        assert_eq!(shelf.carousel().current_index(), 2);
        assert_eq!(shelf.visible().len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn auto_advance_ticks_step_right() {
        let (scheduler, mut rx) = Scheduler::channel();
        let mut shelf = shelf(10, 4);
        shelf.start_auto_scroll(&scheduler, Duration::from_secs(3));
        assert!(shelf.carousel().is_auto_scrolling());

        let message = rx.recv().await.unwrap();
        shelf.update(message);
        assert_eq!(shelf.carousel().current_index(), 1);

        shelf.stop_auto_scroll();
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn auto_advance_needs_overflow() {
        let (scheduler, mut rx) = Scheduler::channel();
        let mut shelf = shelf(3, 4);
        shelf.start_auto_scroll(&scheduler, Duration::from_secs(1));
        assert!(!shelf.carousel().is_auto_scrolling());
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn reset_history_restores_creation_order() {
        let mut shelf = shelf(3, 1);
        shelf.click(&VideoId::from("0"));
        assert_eq!(ids(&shelf), ["0", "2", "1"]);
        shelf.reset_history();
        assert_eq!(ids(&shelf), ["2", "1", "0"]);
    }
}
