//! Shared domain types for the veille competitor-news monitor.
//!
//! Defines the [`ArticleRecord`] flowing through the pipeline, the fixed
//! [`Tone`] vocabulary, the brand catalog loader, and the env-driven
//! application configuration.

use thiserror::Error;

pub mod article;
pub mod brands;
pub mod config;
pub mod normalize;

pub use article::{ArticleRecord, Language, Tone, ToneFilter};
pub use brands::{load_brands, BrandConfig, BrandsFile};
pub use config::{brands_path_from_env, load_app_config, load_app_config_from_env, AppConfig};
pub use normalize::{parse_published_at, summarize};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read brands file {path}: {source}")]
    BrandsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse brands file: {0}")]
    BrandsFileParse(#[from] serde_yaml::Error),

    #[error("brands file validation failed: {0}")]
    Validation(String),
}
