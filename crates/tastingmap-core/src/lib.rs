pub mod app_config;
pub mod catalog;
pub mod config;
pub mod venue;

pub use app_config::{AppConfig, Environment};
pub use catalog::{load_catalog, Catalog, CatalogFile, RegionCount};
pub use config::{load_app_config, load_app_config_from_env};
pub use venue::{parse_coordinate, BeverageType, Coordinate, Venue};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read catalog file {path}: {source}")]
    CatalogFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file: {0}")]
    CatalogFileParse(#[source] serde_yaml::Error),

    #[error("catalog validation failed: {0}")]
    Validation(String),
}
