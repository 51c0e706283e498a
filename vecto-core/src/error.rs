use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigLoadError;
use crate::recency::StorageError;

#[derive(Error, Debug)]
pub enum BrowseError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigLoadError),

    #[error("Model error: {0}")]
    Model(#[from] vecto_model::ModelError),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

pub type Result<T> = std::result::Result<T, BrowseError>;
