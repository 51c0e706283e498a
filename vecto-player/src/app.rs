//! Headless presentation layer: owns the engines and turns commands and
//! timer messages into state changes plus printable lines.

use std::fmt::Write as _;
use std::time::{Duration, Instant};

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, warn};
use vecto_core::carousel::{HeadlessTrack, KeyOutcome, ScrollTrack};
use vecto_core::catalog::select_trending;
use vecto_core::config::BrowseConfig;
use vecto_core::featured::{FeaturedMessage, FeaturedVideo};
use vecto_core::menu::MenuState;
use vecto_core::recency::RecencyEngine;
use vecto_core::schedule::Scheduler;
use vecto_core::shelf::{ShelfMessage, TrendingShelf};
use vecto_model::prelude::{AssetResolver, Catalog, MenuItem, ProfileInfo, VideoId};
use vecto_model::{default_bottom_menu_items, default_menu_items, default_profile};

use crate::command::{Command, HELP};

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(Vec<String>),
    Quit,
}

/// Receivers for the deferred messages the app schedules.
#[derive(Debug)]
pub struct Channels {
    pub featured: UnboundedReceiver<FeaturedMessage>,
    pub shelf: UnboundedReceiver<ShelfMessage>,
}

#[derive(Debug)]
pub struct App {
    shelf: TrendingShelf<HeadlessTrack>,
    featured: FeaturedVideo,
    menu: MenuState,
    menu_items: Vec<MenuItem>,
    bottom_items: Vec<MenuItem>,
    profile: ProfileInfo,
    shelf_scheduler: Scheduler<ShelfMessage>,
    auto_advance: Duration,
    viewport_width: f32,
    recent_minutes: u32,
}

impl App {
    /// Build the screen from a loaded catalog. Must run inside a tokio
    /// runtime because selecting the featured video schedules its reveal.
    pub fn new(
        config: &BrowseConfig,
        catalog: Catalog,
        recency: RecencyEngine,
        assets: &AssetResolver,
    ) -> (Self, Channels) {
        let (featured_scheduler, featured_rx) = Scheduler::channel();
        let (shelf_scheduler, shelf_rx) = Scheduler::channel();

        let viewport_width = config.carousel.viewport_width as f32;
        let trending = select_trending(catalog.trending, config.catalog.max_items);
        let total = trending.len();

        let mut track = HeadlessTrack::new(viewport_width);
        track.fit_content(total);
        let shelf = TrendingShelf::new(trending, recency, config.carousel.visible_items, track);

        let mut featured = FeaturedVideo::new(featured_scheduler, config.featured.delays());
        featured.select(catalog.featured);

        let app = Self {
            shelf,
            featured,
            menu: MenuState::new(config.menu.initial_active.clone()),
            menu_items: default_menu_items(assets),
            bottom_items: default_bottom_menu_items(assets),
            profile: default_profile(assets),
            shelf_scheduler,
            auto_advance: config.carousel.auto_advance(),
            viewport_width,
            recent_minutes: config.recency.threshold_minutes,
        };
        let channels = Channels {
            featured: featured_rx,
            shelf: shelf_rx,
        };
        (app, channels)
    }

    pub fn shelf(&self) -> &TrendingShelf<HeadlessTrack> {
        &self.shelf
    }

    pub fn featured(&self) -> &FeaturedVideo {
        &self.featured
    }

    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    /// Parse and apply one input line.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        if line.trim().is_empty() {
            return Outcome::Continue(Vec::new());
        }
        match line.parse::<Command>() {
            Ok(command) => self.handle(command),
            Err(err) => Outcome::Continue(vec![err.to_string()]),
        }
    }

    pub fn handle(&mut self, command: Command) -> Outcome {
        debug!(?command, "command");
        let mut out = Vec::new();
        match command {
            Command::List => out.push(self.render()),
            Command::Left => {
                self.shelf.step_left();
                out.push(self.position_line());
            }
            Command::Right => {
                self.shelf.step_right();
                out.push(self.position_line());
            }
            Command::Home => {
                self.shelf.carousel_mut().jump_to_start();
                out.push(self.position_line());
            }
            Command::End => {
                self.shelf.carousel_mut().jump_to_end();
                out.push(self.position_line());
            }
            Command::Key(name) => {
                match self.shelf.carousel_mut().on_key_name(&name) {
                    KeyOutcome::Handled => out.push(self.position_line()),
                    KeyOutcome::Ignored => out.push(format!("key {name} ignored")),
                }
            }
            Command::Goto(index) => {
                self.shelf.carousel_mut().scroll_to_index(index);
                out.push(self.position_line());
            }
            Command::Page(page) => {
                self.shelf.jump_to_page(page);
                out.push(self.position_line());
            }
            Command::Click(id) => self.click(&VideoId::new(id), &mut out),
            Command::Hover(id) => {
                self.shelf.hover(id.map(VideoId::new));
            }
            Command::Drag { from, to } => {
                let carousel = self.shelf.carousel_mut();
                carousel.pointer_down(from);
                let offset = carousel.pointer_move(to);
                carousel.pointer_up();
                // The native scroll event follows the drag.
                carousel.on_scroll();
                match offset {
                    Some(offset) => out.push(format!("dragged to {offset:.0}px")),
                    None => out.push("nothing to drag".to_string()),
                }
                out.push(self.position_line());
            }
            Command::Swipe { from, to } => {
                let carousel = self.shelf.carousel_mut();
                carousel.touch_start(from, Instant::now());
                carousel.touch_move(to);
                carousel.touch_end();
                let tap = carousel.is_touch_tap(Instant::now());
                carousel.on_scroll();
                out.push(if tap { "tap" } else { "swipe" }.to_string());
                out.push(self.position_line());
            }
            Command::Scroll(px) => {
                let carousel = self.shelf.carousel_mut();
                carousel.track_mut().set_scroll_left(px);
                carousel.on_scroll();
                out.push(self.position_line());
            }
            Command::Play => {
                self.featured.play();
                if self.featured.playback().is_loading {
                    out.push("loading...".to_string());
                }
            }
            Command::Pause => {
                self.featured.pause();
                out.push("paused".to_string());
            }
            Command::Mute => {
                self.featured.toggle_mute();
                let muted = self.featured.playback().is_muted;
                out.push(if muted { "muted" } else { "unmuted" }.to_string());
            }
            Command::Auto(true) => {
                self.shelf
                    .start_auto_scroll(&self.shelf_scheduler, self.auto_advance);
                if self.shelf.carousel().is_auto_scrolling() {
                    out.push(format!(
                        "auto-advance every {}ms",
                        self.auto_advance.as_millis()
                    ));
                } else {
                    out.push("every item fits; auto-advance unavailable".to_string());
                }
            }
            Command::Auto(false) => {
                self.shelf.stop_auto_scroll();
                out.push("auto-advance off".to_string());
            }
            Command::Menu(id) => self.activate_menu(&id, &mut out),
            Command::Reset => {
                self.shelf.reset_history();
                out.push("view history cleared".to_string());
            }
            Command::Help => out.push(HELP.to_string()),
            Command::Quit => return Outcome::Quit,
        }
        Outcome::Continue(out)
    }

    fn click(&mut self, id: &VideoId, out: &mut Vec<String>) {
        let Some(video) = self.shelf.click(id) else {
            out.push(format!("no trending item with id {id}"));
            return;
        };
        out.push(format!("featured: {}", video.title));
        self.featured.select(video);
        out.push(self.position_line());
    }

    fn activate_menu(&mut self, id: &str, out: &mut Vec<String>) {
        let item = self
            .menu_items
            .iter()
            .chain(self.bottom_items.iter())
            .find(|item| item.id == id);
        match item {
            Some(item) => {
                self.menu.handle_item_click(item, self.viewport_width);
                out.push(format!("menu: {}", item.label));
            }
            None => {
                warn!(id, "unknown menu item");
                out.push(format!("no menu item with id {id}"));
            }
        }
    }

    /// Apply a deferred featured-video message.
    pub fn on_featured(&mut self, message: FeaturedMessage) -> Option<String> {
        let was_background = self.featured.is_playing_background();
        let was_playing = self.featured.playback().is_playing;
        self.featured.update(message);

        if !was_background && self.featured.is_playing_background() {
            return self
                .featured
                .video()
                .map(|video| format!("now playing in background: {}", video.title));
        }
        if !was_playing && self.featured.playback().is_playing {
            return Some("playing".to_string());
        }
        None
    }

    /// Apply a deferred shelf message.
    pub fn on_shelf(&mut self, message: ShelfMessage) -> Option<String> {
        let before = self.shelf.carousel().current_index();
        self.shelf.update(message);
        (self.shelf.carousel().current_index() != before).then(|| self.position_line())
    }

    fn position_line(&self) -> String {
        let carousel = self.shelf.carousel();
        let range = carousel.visible_range();
        format!(
            "index {} of {} | showing {}..{} | page {}/{} | {:.0}%{}{}",
            carousel.current_index(),
            carousel.max_index(),
            range.start,
            range.end,
            carousel.active_page() + 1,
            carousel.page_count().max(1),
            carousel.progress() * 100.0,
            if carousel.can_step_left() { " <" } else { "" },
            if carousel.can_step_right() { " >" } else { "" },
        )
    }

    /// Full screen dump.
    pub fn render(&self) -> String {
        let mut screen = String::new();

        let menu: Vec<String> = self
            .menu_items
            .iter()
            .map(|item| {
                if self.menu.is_active(item) {
                    format!("[{}]", item.label)
                } else {
                    item.label.clone()
                }
            })
            .collect();
        let _ = writeln!(
            screen,
            "menu{}: {} | {}",
            if self.menu.is_expanded { " (expanded)" } else { "" },
            menu.join("  "),
            self.profile.name
        );

        if let Some(video) = self.featured.video() {
            let playback = self.featured.playback();
            let state = if playback.is_loading {
                "loading"
            } else if playback.is_playing {
                "playing"
            } else if self.featured.is_playing_background() {
                "background"
            } else {
                "idle"
            };
            let _ = writeln!(
                screen,
                "featured: {} | {} {} {} {} | {}{}",
                video.title,
                video.category,
                video.release_year,
                video.mpa_rating,
                video.duration,
                state,
                if playback.is_muted { ", muted" } else { "" },
            );
        }

        let _ = writeln!(screen, "trending: {}", self.position_line());
        let visible = self.shelf.carousel().visible_range();
        let recency = self.shelf.recency();
        for (index, video) in self.shelf.videos().iter().enumerate() {
            let in_view = if visible.contains(&index) { '>' } else { ' ' };
            let selected = if self.shelf.is_selected(&video.id) { '*' } else { ' ' };
            let recent = if recency.is_recently_viewed(&video.id, self.recent_minutes) {
                'r'
            } else {
                ' '
            };
            let _ = writeln!(
                screen,
                "  {in_view}{selected}{recent} {:>3}  {:<6} {} ({})",
                index, video.id, video.title, video.duration
            );
        }
        screen.trim_end().to_string()
    }
}
