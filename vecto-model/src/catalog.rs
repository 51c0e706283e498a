//! Catalog document shapes and their conversion into [`Video`] records.

use chrono::{DateTime, Utc};

use crate::assets::AssetResolver;
use crate::duration::format_duration;
use crate::video::{Video, parse_timestamp};

/// Materialised catalog: the hero video plus the trending row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    pub featured: Video,
    pub trending: Vec<Video>,
}

/// A trending entry as stored in the static JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct RawVideo {
    pub id: String,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cover_image: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub title_image: String,
    pub date: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub release_year: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mpa_rating: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub video_url: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

/// The featured entry. Same shape as [`RawVideo`] minus the media URL.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct RawFeatured {
    pub id: String,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cover_image: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub title_image: String,
    pub date: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub release_year: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mpa_rating: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

/// Top level of the static catalog document.
///
/// The trending key is spelled `TendingNow` in published documents and is
/// kept that way on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawCatalog {
    #[cfg_attr(feature = "serde", serde(rename = "Featured"))]
    pub featured: RawFeatured,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "TendingNow", alias = "TrendingNow", default)
    )]
    pub trending: Vec<RawVideo>,
}

impl RawVideo {
    pub fn into_video(self, assets: &AssetResolver) -> Video {
        let created_at = timestamp_or_epoch(&self.date);
        Video {
            id: self.id.into(),
            title: self.title,
            description: self.description,
            category: self.category,
            release_year: self.release_year,
            mpa_rating: self.mpa_rating,
            duration: format_duration(&self.duration),
            cover_image: assets.image_path(&self.cover_image),
            logo_image: assets.image_path(&self.title_image),
            video_url: self.video_url,
            is_featured: false,
            created_at,
            updated_at: created_at,
        }
    }
}

impl RawFeatured {
    pub fn into_video(self, assets: &AssetResolver) -> Video {
        let created_at = timestamp_or_epoch(&self.date);
        Video {
            id: self.id.into(),
            title: self.title,
            description: self.description,
            category: self.category,
            release_year: self.release_year,
            mpa_rating: self.mpa_rating,
            duration: format_duration(&self.duration),
            cover_image: assets.image_path(&self.cover_image),
            logo_image: assets.image_path(&self.title_image),
            video_url: None,
            is_featured: true,
            created_at,
            updated_at: created_at,
        }
    }
}

impl RawCatalog {
    pub fn into_catalog(self, assets: &AssetResolver) -> Catalog {
        Catalog {
            featured: self.featured.into_video(assets),
            trending: self
                .trending
                .into_iter()
                .map(|raw| raw.into_video(assets))
                .collect(),
        }
    }

    /// Dates that failed to parse, in document order.
    pub fn invalid_dates(&self) -> Vec<(&str, &str)> {
        std::iter::once((self.featured.id.as_str(), self.featured.date.as_str()))
            .chain(
                self.trending
                    .iter()
                    .map(|raw| (raw.id.as_str(), raw.date.as_str())),
            )
            .filter(|(_, date)| parse_timestamp(date).is_err())
            .collect()
    }
}

fn timestamp_or_epoch(raw: &str) -> DateTime<Utc> {
    parse_timestamp(raw).unwrap_or(DateTime::UNIX_EPOCH)
}

const FALLBACK_VIDEO_URL: &str =
    "https://sample-videos.com/video123/mp4/720/big_buck_bunny_720p_1mb.mp4";

/// Fixed data set substituted when the catalog document cannot be loaded.
pub fn fallback_catalog(assets: &AssetResolver) -> Catalog {
    let placeholder = assets.placeholder();
    let entry = |id: &str,
                 title: &str,
                 category: &str,
                 duration: &str,
                 date: &str| {
        let created_at = timestamp_or_epoch(date);
        Video {
            id: id.into(),
            title: title.to_string(),
            description: String::from("Info About it"),
            category: category.to_string(),
            release_year: String::from("2021"),
            mpa_rating: String::from("18+"),
            duration: duration.to_string(),
            cover_image: placeholder.clone(),
            logo_image: placeholder.clone(),
            video_url: Some(FALLBACK_VIDEO_URL.to_string()),
            is_featured: false,
            created_at,
            updated_at: created_at,
        }
    };

    let mut featured = entry(
        "1",
        "The Irishman",
        "Movie",
        "1h 40m",
        "2021-10-24T12:16:50.894556",
    );
    featured.video_url = None;
    featured.is_featured = true;

    let trending = vec![
        entry("1", "Title 1", "Movie", "33m", "2021-10-24T12:16:50.894556"),
        entry("2", "Title 2", "TV Show", "38m", "2021-10-12T12:16:50.894556"),
        entry("3", "Title 3", "Movie", "1h 40m", "2021-10-11T12:16:50.894556"),
        entry("4", "Title 4", "Movie", "1h 7m", "2021-10-10T12:16:50.894556"),
        entry("5", "Title 5", "TV Show", "1h 28m", "2021-10-15T12:16:50.894556"),
    ];

    Catalog { featured, trending }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: &str, date: &str) -> RawVideo {
        RawVideo {
            id: id.to_string(),
            title: format!("Title {id}"),
            cover_image: String::from("https_specials-1.png"),
            title_image: String::new(),
            date: date.to_string(),
            release_year: String::from("2021"),
            mpa_rating: String::from("18+"),
            category: String::from("Movie"),
            duration: String::from("6000"),
            video_url: None,
            description: String::new(),
        }
    }

    #[test]
    fn raw_video_conversion_formats_and_resolves() {
        let assets = AssetResolver::default();
        let video = raw("7", "2021-10-24T12:16:50.894556").into_video(&assets);
        assert_eq!(video.id.as_str(), "7");
        assert_eq!(video.duration, "1h 40m");
        assert_eq!(video.cover_image, "/assets/https_specials-1.png");
        assert_eq!(video.logo_image, "/assets/videos/placeholder.svg");
        assert!(!video.is_featured);
    }

    #[test]
    fn unparsable_date_falls_back_to_epoch() {
        let assets = AssetResolver::default();
        let video = raw("8", "not a date").into_video(&assets);
        assert_eq!(video.created_at, DateTime::UNIX_EPOCH);
    }

    #[test]
    fn fallback_has_featured_and_five_trending() {
        let catalog = fallback_catalog(&AssetResolver::default());
        assert_eq!(catalog.featured.title, "The Irishman");
        assert!(catalog.featured.is_featured);
        assert_eq!(catalog.trending.len(), 5);
        assert!(catalog.trending.iter().all(Video::is_playable));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_published_document_shape() {
        let doc = r#"{
            "Featured": {
                "Id": "1", "Title": "The Irishman", "CoverImage": "FeaturedCoverImage.png",
                "TitleImage": "FeaturedTitleImage.png", "Date": "2021-10-24T12:16:50.894556",
                "ReleaseYear": "2021", "MpaRating": "18+", "Category": "Movie",
                "Duration": "6000", "Description": "Info"
            },
            "TendingNow": [
                { "Id": "2", "Title": "Two", "CoverImage": "https_specials-2.png",
                  "TitleImage": "", "Date": "2021-10-12T12:16:50.894556",
                  "ReleaseYear": "2021", "MpaRating": "18+", "Category": "TV Show",
                  "Duration": "2280", "VideoUrl": "https://example.test/two.mp4",
                  "Description": "Info" }
            ]
        }"#;
        let raw: RawCatalog = serde_json::from_str(doc).unwrap();
        assert!(raw.invalid_dates().is_empty());
        let catalog = raw.into_catalog(&AssetResolver::default());
        assert_eq!(catalog.trending.len(), 1);
        assert_eq!(catalog.trending[0].duration, "38m");
        assert!(catalog.trending[0].is_playable());
    }
}
