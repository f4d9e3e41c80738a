pub mod app_config;
mod beer;
mod color;
pub mod config;
mod list;
pub mod ratings;
mod style;

use thiserror::Error;

pub use app_config::{AppConfig, Environment, WineyVibeSettings};
pub use beer::{Beer, UNKNOWN_BREWERY};
pub use color::BeerColor;
pub use config::{load_app_config, load_app_config_from_env};
pub use list::{BeerList, BeerListStore, DEFAULT_LISTS, LISTS_STORAGE_KEY};
pub use ratings::{Rating, RatingStats, RatingStore, RATINGS_STORAGE_KEY};
pub use style::BeerStyle;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("rating must be between 1 and 5 stars, got {0}")]
    InvalidRating(u8),

    #[error("failed to access ratings file {path}: {source}")]
    RatingsIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("ratings file {path} is not valid JSON: {source}")]
    RatingsParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no beer list named '{0}'")]
    UnknownList(String),

    #[error("failed to access beer lists file {path}: {source}")]
    ListsIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("beer lists file {path} is not valid JSON: {source}")]
    ListsParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
