//! Catalog loading
//!
//! The catalog is a single static JSON document read once at start-up,
//! either from disk or over HTTP. Any failure is reported to the caller;
//! [`CatalogLoader::load_or_fallback`] swaps in the built-in data set instead.

use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use tracing::{info, warn};
use url::Url;
use vecto_model::{AssetResolver, Catalog, RawCatalog, Video, fallback_catalog};

use crate::recency::sort_newest_first;

/// Hard cap on the trending row.
pub const MAX_TRENDING: usize = 50;

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog request to {url} returned HTTP {status}")]
    Status {
        url: Url,
        status: reqwest::StatusCode,
    },

    #[error("catalog document is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the catalog document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Url(Url),
}

impl FromStr for CatalogSource {
    type Err = Infallible;

    /// `http://` and `https://` strings that parse as URLs are remote;
    /// everything else is a file path.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if (trimmed.starts_with("http://") || trimmed.starts_with("https://"))
            && let Ok(url) = Url::parse(trimmed)
        {
            return Ok(Self::Url(url));
        }
        Ok(Self::File(PathBuf::from(trimmed)))
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CatalogLoader {
    source: CatalogSource,
    assets: AssetResolver,
    http_client: reqwest::Client,
}

impl CatalogLoader {
    pub fn new(source: CatalogSource, assets: AssetResolver) -> Result<Self, CatalogError> {
        let http_client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self {
            source,
            assets,
            http_client,
        })
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    pub fn assets(&self) -> &AssetResolver {
        &self.assets
    }

    /// Fetch and decode the document without transforming it.
    pub async fn fetch_raw(&self) -> Result<RawCatalog, CatalogError> {
        let bytes = match &self.source {
            CatalogSource::File(path) => {
                tokio::fs::read(path).await.map_err(|source| CatalogError::Io {
                    path: path.clone(),
                    source,
                })?
            }
            CatalogSource::Url(url) => {
                let response = self.http_client.get(url.clone()).send().await?;
                if !response.status().is_success() {
                    return Err(CatalogError::Status {
                        url: url.clone(),
                        status: response.status(),
                    });
                }
                response.bytes().await?.to_vec()
            }
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn load(&self) -> Result<Catalog, CatalogError> {
        let raw = self.fetch_raw().await?;
        for (id, date) in raw.invalid_dates() {
            warn!(id, date, "unparsable catalog date; using the epoch");
        }
        let catalog = raw.into_catalog(&self.assets);
        info!(
            source = %self.source,
            trending = catalog.trending.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// [`CatalogLoader::load`], substituting the built-in data set on any
    /// failure. The boolean is true when the fallback was used.
    pub async fn load_or_fallback(&self) -> (Catalog, bool) {
        match self.load().await {
            Ok(catalog) => (catalog, false),
            Err(err) => {
                warn!(source = %self.source, error = %err, "catalog unavailable; using fallback data");
                (fallback_catalog(&self.assets), true)
            }
        }
    }
}

/// Newest first, at most `min(max, MAX_TRENDING)` items.
pub fn select_trending(mut videos: Vec<Video>, max: usize) -> Vec<Video> {
    sort_newest_first(&mut videos);
    videos.truncate(max.min(MAX_TRENDING));
    videos
}
