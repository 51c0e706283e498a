use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::{ModelError, Result};
use crate::ids::VideoId;

/// A displayable media record.
///
/// Videos are produced by the catalog loader and never mutated afterwards;
/// engines hold references or clones, they do not own the catalog.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Video {
    pub id: VideoId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub release_year: String,
    pub mpa_rating: String,
    /// Human readable runtime, e.g. `1h 40m`
    pub duration: String,
    /// Resolved cover image path
    pub cover_image: String,
    /// Resolved title/logo image path
    pub logo_image: String,
    /// Playable media reference, when the record has one
    pub video_url: Option<String>,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Video {
    /// Minimal record used by fixtures and tests. Image paths are left empty
    /// and the update time mirrors the creation time.
    pub fn new(
        id: impl Into<VideoId>,
        title: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category: String::new(),
            release_year: String::new(),
            mpa_rating: String::new(),
            duration: String::from("0m"),
            cover_image: String::new(),
            logo_image: String::new(),
            video_url: None,
            is_featured: false,
            created_at,
            updated_at: created_at,
        }
    }

    pub fn with_video_url(mut self, url: impl Into<String>) -> Self {
        self.video_url = Some(url.into());
        self
    }

    pub fn is_playable(&self) -> bool {
        self.video_url.as_deref().is_some_and(|url| !url.is_empty())
    }
}

/// Parse a catalog timestamp.
///
/// Catalog documents carry local timestamps without an offset
/// (`2021-10-24T12:16:50.894556`); those are interpreted as UTC. Full RFC 3339
/// strings are accepted as well.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| naive.and_utc())
        .map_err(|_| ModelError::InvalidTimestamp(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_offsetless_catalog_timestamps_as_utc() {
        let ts = parse_timestamp("2021-10-24T12:16:50.894556").unwrap();
        assert_eq!(ts.year(), 2021);
        assert_eq!(ts.month(), 10);
        assert_eq!(ts.hour(), 12);
        assert_eq!(ts.nanosecond(), 894_556_000);
    }

    #[test]
    fn parses_rfc3339() {
        let ts = parse_timestamp("2021-10-24T12:16:50+02:00").unwrap();
        assert_eq!(ts.hour(), 10);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_timestamp("yesterday"),
            Err(ModelError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn playable_requires_non_empty_url() {
        let video = Video::new("1", "Title", DateTime::UNIX_EPOCH);
        assert!(!video.is_playable());
        assert!(!video.clone().with_video_url("").is_playable());
        assert!(video.with_video_url("https://example.test/a.mp4").is_playable());
    }
}
