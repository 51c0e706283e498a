//! Session view history and the display order derived from it.

pub mod history;
pub mod order;
pub mod storage;

pub use history::{DEFAULT_RECENT_MINUTES, HISTORY_LIMIT, RecencyEngine, RecencyState};
pub use order::{order_for_display, sort_newest_first};
pub use storage::{
    FileSessionStore, LAST_VIEWED_TIME_KEY, MemorySessionStore, SessionStore,
    StorageError, VIEWED_VIDEOS_KEY,
};
