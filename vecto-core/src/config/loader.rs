use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info};

use super::{
    models::{
        BrowseConfig, CarouselConfig, CatalogConfig, ConfigOverrides, FeaturedConfig,
        MenuConfig, RecencyConfig,
    },
    sources::{EnvConfig, FileConfig},
};
use crate::catalog::MAX_TRENDING;

const DEFAULT_CONFIG_LOCATIONS: [&str; 2] = ["vecto.toml", "config/vecto.toml"];

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

/// Result of a successful load, with where the values came from.
#[derive(Debug)]
pub struct ConfigLoad {
    pub config: BrowseConfig,
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.options.overrides = overrides;
        self
    }

    /// Load `.env`, then resolve against the process environment.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                dotenvy::Error::Io(_) => Ok(false),
                _ => Err(err),
            })?,
        };

        let mut load = self.load_with(|name| std::env::var(name).ok())?;
        load.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Resolve using `lookup` for environment variables. Does not read `.env`.
    pub fn load_with<F>(&self, lookup: F) -> Result<ConfigLoad, ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = EnvConfig::gather_with(lookup)?;
        let (file, config_path) = self.load_file_config(&env)?;
        let config = self.compose_config(file.unwrap_or_default(), env)?;

        match &config_path {
            Some(path) => info!(path = %path.display(), "configuration loaded"),
            None => debug!("no configuration file; using defaults and environment"),
        }

        Ok(ConfigLoad {
            config,
            config_path,
            env_file_loaded: false,
        })
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let (path, explicit) = if let Some(path) = &self.options.config_path {
            (path.clone(), true)
        } else if let Some(path) = &env.config_path {
            (path.clone(), true)
        } else {
            match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .map(PathBuf::from)
                .find(|candidate| candidate.exists())
            {
                Some(path) => (path, false),
                None => return Ok((None, None)),
            }
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            return Ok((None, None));
        }

        let file = read_file_config(&path)?;
        Ok((Some(file), Some(path)))
    }

    fn compose_config(
        &self,
        file: FileConfig,
        env: EnvConfig,
    ) -> Result<BrowseConfig, ConfigLoadError> {
        let overrides = &self.options.overrides;
        let defaults = BrowseConfig::default();

        let catalog = CatalogConfig {
            source: overrides
                .catalog_source
                .clone()
                .or(env.catalog_source)
                .or(file.catalog.source)
                .unwrap_or(defaults.catalog.source),
            max_items: env
                .catalog_max_items
                .or(file.catalog.max_items)
                .unwrap_or(defaults.catalog.max_items)
                .min(MAX_TRENDING),
            asset_base: env
                .asset_base
                .or(file.catalog.asset_base)
                .unwrap_or(defaults.catalog.asset_base),
        };

        let carousel = CarouselConfig {
            visible_items: overrides
                .visible_items
                .or(env.visible_items)
                .or(file.carousel.visible_items)
                .unwrap_or(defaults.carousel.visible_items),
            viewport_width: overrides
                .viewport_width
                .or(env.viewport_width)
                .or(file.carousel.viewport_width)
                .unwrap_or(defaults.carousel.viewport_width),
            auto_advance_ms: env
                .auto_advance_ms
                .or(file.carousel.auto_advance_ms)
                .unwrap_or(defaults.carousel.auto_advance_ms),
        };
        if carousel.visible_items == 0 {
            return Err(ConfigLoadError::InvalidValue {
                field: "carousel.visible_items",
                reason: "must be at least 1".to_string(),
            });
        }
        if carousel.auto_advance_ms == 0 {
            return Err(ConfigLoadError::InvalidValue {
                field: "carousel.auto_advance_ms",
                reason: "must be greater than zero".to_string(),
            });
        }

        let recency = RecencyConfig {
            threshold_minutes: env
                .recent_minutes
                .or(file.recency.threshold_minutes)
                .unwrap_or(defaults.recency.threshold_minutes),
            session_dir: overrides
                .session_dir
                .clone()
                .or(env.session_dir)
                .or(file.recency.session_dir),
        };

        let featured = FeaturedConfig {
            autoplay_delay_ms: env
                .autoplay_delay_ms
                .or(file.featured.autoplay_delay_ms)
                .unwrap_or(defaults.featured.autoplay_delay_ms),
            load_delay_ms: env
                .load_delay_ms
                .or(file.featured.load_delay_ms)
                .unwrap_or(defaults.featured.load_delay_ms),
        };

        let menu = MenuConfig {
            initial_active: env
                .menu_active
                .or(file.menu.initial_active)
                .unwrap_or(defaults.menu.initial_active),
        };

        Ok(BrowseConfig {
            catalog,
            carousel,
            recency,
            featured,
            menu,
        })
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let contents = fs::read_to_string(path).map_err(|err| ConfigLoadError::Io {
        path: path.to_path_buf(),
        source: err,
    })?;
    toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source: err,
    })
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file {path} does not exist")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("environment variable {name} has invalid value '{value}'")]
    InvalidEnv { name: String, value: String },
    #[error("invalid {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}
