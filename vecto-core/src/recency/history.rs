//! Session view history
//!
//! Keeps the ids of recently opened videos, most recent first, together with
//! the time each one was last opened. History is capped, deduplicated and
//! written back to the session store after every change.
//!
//! Storage is best effort. Missing or malformed stored data means an empty
//! history; a failed write switches the engine to memory-only for the rest
//! of the session. Neither case surfaces to the caller.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use vecto_core::clock::ManualClock;
//! use vecto_core::recency::{MemorySessionStore, RecencyEngine};
//! use vecto_model::VideoId;
//!
//! let clock = Arc::new(ManualClock::default());
//! let mut history = RecencyEngine::load(Box::new(MemorySessionStore::new()), clock);
//!
//! history.record_view(&VideoId::from("42"));
//! assert_eq!(history.viewed_ids()[0].as_str(), "42");
//! assert!(history.is_recently_viewed(&VideoId::from("42"), 30));
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};
use vecto_model::{Video, VideoId};

use super::order::order_for_display;
use super::storage::{
    LAST_VIEWED_TIME_KEY, SessionStore, StorageError, VIEWED_VIDEOS_KEY,
};
use crate::clock::Clock;

/// Maximum number of ids kept in the history.
pub const HISTORY_LIMIT: usize = 20;

/// Default window for [`RecencyEngine::is_recently_viewed`], in minutes.
pub const DEFAULT_RECENT_MINUTES: u32 = 30;

/// Plain history data as persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecencyState {
    /// Most recently viewed first, unique, at most [`HISTORY_LIMIT`] long
    pub viewed_ids: Vec<VideoId>,
    /// Epoch milliseconds of the last view. Entries outlive eviction from
    /// `viewed_ids`.
    pub last_viewed_at: HashMap<VideoId, i64>,
}

impl RecencyState {
    /// Decode the two stored values. `None` values mean "never written".
    pub fn decode(
        viewed: Option<&str>,
        last_viewed: Option<&str>,
    ) -> Result<Self, StorageError> {
        let viewed_ids: Vec<VideoId> = match viewed {
            Some(raw) => serde_json::from_str(raw)?,
            None => Vec::new(),
        };
        let last_viewed_at: HashMap<VideoId, i64> = match last_viewed {
            Some(raw) => serde_json::from_str(raw)?,
            None => HashMap::new(),
        };
        let mut state = Self {
            viewed_ids,
            last_viewed_at,
        };
        state.normalize();
        Ok(state)
    }

    /// Restore the list invariants on data that came from outside:
    /// no unrepresentable timestamps, no duplicates, no untimed ids, capped
    /// length.
    fn normalize(&mut self) {
        self.last_viewed_at
            .retain(|_, millis| DateTime::from_timestamp_millis(*millis).is_some());
        let mut seen = HashSet::new();
        let timestamps = &self.last_viewed_at;
        self.viewed_ids
            .retain(|id| timestamps.contains_key(id) && seen.insert(id.clone()));
        self.viewed_ids.truncate(HISTORY_LIMIT);
    }

    fn encode(&self) -> Result<(String, String), StorageError> {
        Ok((
            serde_json::to_string(&self.viewed_ids)?,
            serde_json::to_string(&self.last_viewed_at)?,
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Persistence {
    Active,
    /// A write failed; history stays in memory from here on.
    Degraded,
}

/// View history for one browsing session.
#[derive(Debug)]
pub struct RecencyEngine {
    state: RecencyState,
    store: Box<dyn SessionStore>,
    clock: Arc<dyn Clock>,
    persistence: Persistence,
}

impl RecencyEngine {
    /// Build from whatever the store holds. Never fails.
    pub fn load(store: Box<dyn SessionStore>, clock: Arc<dyn Clock>) -> Self {
        let state = match Self::read_state(store.as_ref()) {
            Ok(state) => {
                debug!(entries = state.viewed_ids.len(), "view history restored");
                state
            }
            Err(err) => {
                warn!(error = %err, "ignoring unreadable view history");
                RecencyState::default()
            }
        };
        Self {
            state,
            store,
            clock,
            persistence: Persistence::Active,
        }
    }

    fn read_state(store: &dyn SessionStore) -> Result<RecencyState, StorageError> {
        let viewed = store.get(VIEWED_VIDEOS_KEY)?;
        let last_viewed = store.get(LAST_VIEWED_TIME_KEY)?;
        RecencyState::decode(viewed.as_deref(), last_viewed.as_deref())
    }

    pub fn state(&self) -> &RecencyState {
        &self.state
    }

    pub fn viewed_ids(&self) -> &[VideoId] {
        &self.state.viewed_ids
    }

    pub fn last_viewed_at(&self, id: &VideoId) -> Option<DateTime<Utc>> {
        self.state
            .last_viewed_at
            .get(id)
            .and_then(|millis| DateTime::from_timestamp_millis(*millis))
    }

    /// False once a write has failed this session.
    pub fn is_persistent(&self) -> bool {
        self.persistence == Persistence::Active
    }

    /// Move `id` to the front of the history and stamp it with the current
    /// time.
    pub fn record_view(&mut self, id: &VideoId) {
        let now = self.clock.now_millis();
        self.state.viewed_ids.retain(|existing| existing != id);
        self.state.viewed_ids.insert(0, id.clone());
        self.state.viewed_ids.truncate(HISTORY_LIMIT);
        self.state.last_viewed_at.insert(id.clone(), now);
        debug!(id = %id, history = self.state.viewed_ids.len(), "view recorded");
        self.persist();
    }

    /// True when `id` was viewed less than `threshold_minutes` ago.
    pub fn is_recently_viewed(&self, id: &VideoId, threshold_minutes: u32) -> bool {
        let Some(last) = self.state.last_viewed_at.get(id) else {
            return false;
        };
        let threshold_ms = i64::from(threshold_minutes) * 60_000;
        self.clock
            .now_millis()
            .checked_sub(*last)
            .is_some_and(|elapsed| elapsed < threshold_ms)
    }

    /// [`RecencyEngine::is_recently_viewed`] with the default window.
    pub fn is_recent(&self, id: &VideoId) -> bool {
        self.is_recently_viewed(id, DEFAULT_RECENT_MINUTES)
    }

    /// Viewed items first in history order, then the rest newest first.
    pub fn order_for_display<'a>(&self, items: &'a [Video]) -> Vec<&'a Video> {
        order_for_display(items, &self.state.viewed_ids)
    }

    /// Occurrences of `id` in the history. Always 0 or 1.
    pub fn view_count(&self, id: &VideoId) -> usize {
        self.state
            .viewed_ids
            .iter()
            .filter(|existing| *existing == id)
            .count()
    }

    /// Forget everything, in memory and in the store.
    pub fn reset(&mut self) {
        self.state = RecencyState::default();
        if self.persistence == Persistence::Degraded {
            return;
        }
        for key in [VIEWED_VIDEOS_KEY, LAST_VIEWED_TIME_KEY] {
            if let Err(err) = self.store.remove(key) {
                self.degrade(&err);
                return;
            }
        }
    }

    fn persist(&mut self) {
        if self.persistence == Persistence::Degraded {
            return;
        }
        let result = self.state.encode().and_then(|(viewed, last_viewed)| {
            self.store.set(VIEWED_VIDEOS_KEY, &viewed)?;
            self.store.set(LAST_VIEWED_TIME_KEY, &last_viewed)
        });
        if let Err(err) = result {
            self.degrade(&err);
        }
    }

    fn degrade(&mut self, err: &StorageError) {
        warn!(error = %err, "session storage failed; keeping view history in memory");
        self.persistence = Persistence::Degraded;
    }
}
