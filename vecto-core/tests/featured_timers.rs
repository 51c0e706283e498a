use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta};
use tokio::time::Instant;
use vecto_core::carousel::HeadlessTrack;
use vecto_core::clock::ManualClock;
use vecto_core::featured::{FeaturedDelays, FeaturedMessage, FeaturedVideo};
use vecto_core::recency::{MemorySessionStore, RecencyEngine};
use vecto_core::schedule::Scheduler;
use vecto_core::shelf::{ShelfMessage, TrendingShelf};
use vecto_model::{Video, VideoId};

fn trending() -> Vec<Video> {
    (0..12)
        .map(|i| {
            Video::new(
                i.to_string(),
                format!("Title {i}"),
                DateTime::UNIX_EPOCH + TimeDelta::days(i),
            )
            .with_video_url(format!("https://media.example.test/{i}.mp4"))
        })
        .collect()
}

#[tokio::test(start_paused = true)]
async fn clicking_a_card_features_it_and_reveals_later() {
    let (featured_tx, mut featured_rx) = Scheduler::channel();
    let mut featured = FeaturedVideo::new(featured_tx, FeaturedDelays::default());

    let recency = RecencyEngine::load(
        Box::new(MemorySessionStore::new()),
        Arc::new(ManualClock::default()),
    );
    let mut shelf = TrendingShelf::new(trending(), recency, 4, HeadlessTrack::new(1280.0));

    let started = Instant::now();
    let clicked = shelf.click(&VideoId::from("3")).unwrap();
    featured.select(clicked);
    assert_eq!(shelf.videos()[0].id.as_str(), "3");

    let message = featured_rx.recv().await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(2000));
    featured.update(message);
    assert!(featured.is_playing_background());
    assert_eq!(featured.video().map(|v| v.id.as_str()), Some("3"));
}

#[tokio::test(start_paused = true)]
async fn quick_reselection_only_reveals_latest() {
    let (scheduler, mut rx) = Scheduler::channel();
    let mut featured = FeaturedVideo::new(scheduler, FeaturedDelays::default());
    let videos = trending();

    for video in videos.iter().take(5).cloned() {
        featured.select(video);
        tokio::time::sleep(Duration::from_millis(500)).await;
    }

    let message = rx.recv().await.unwrap();
    assert_eq!(message, FeaturedMessage::AutoplayReveal { generation: 5 });
    featured.update(message);
    assert_eq!(featured.video().map(|v| v.id.as_str()), Some("4"));

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn load_delay_precedes_playback() {
    let (scheduler, mut rx) = Scheduler::channel();
    let delays = FeaturedDelays {
        autoplay: Duration::from_secs(60),
        load: Duration::from_millis(1000),
    };
    let mut featured = FeaturedVideo::new(scheduler, delays);
    featured.select(trending().remove(0));

    let started = Instant::now();
    featured.play();
    assert!(featured.playback().is_loading);

    let message = rx.recv().await.unwrap();
    assert_eq!(message, FeaturedMessage::LoadFinished { generation: 1 });
    assert!(started.elapsed() >= Duration::from_millis(1000));
    assert!(started.elapsed() < Duration::from_secs(60));

    featured.update(message);
    assert!(featured.playback().is_playing);
    assert!(!featured.playback().is_loading);
}

#[tokio::test(start_paused = true)]
async fn auto_advance_wraps_and_stops_on_drop() {
    let (scheduler, mut rx) = Scheduler::channel();
    let recency = RecencyEngine::load(
        Box::new(MemorySessionStore::new()),
        Arc::new(ManualClock::default()),
    );
    let mut shelf = TrendingShelf::new(trending(), recency, 10, HeadlessTrack::new(1280.0));
    shelf.start_auto_scroll(&scheduler, Duration::from_secs(3));

    let mut seen = Vec::new();
    for _ in 0..3 {
        let message = rx.recv().await.unwrap();
        assert_eq!(message, ShelfMessage::AutoAdvance);
        shelf.update(message);
        seen.push(shelf.carousel().current_index());
    }
    assert_eq!(seen, [1, 2, 0]);

    drop(shelf);
    tokio::time::sleep(Duration::from_secs(30)).await;
    assert!(rx.try_recv().is_err());
}
