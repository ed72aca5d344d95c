//! Application configuration from environment variables.

use std::path::PathBuf;

use crate::ConfigError;

const DEFAULT_BRANDS_PATH: &str = "./config/brands.yaml";

/// Runtime configuration for the monitor.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Newsdata.io API key.
    pub newsdata_api_key: String,
    /// Mediastack access key.
    pub mediastack_api_key: String,
    /// Remote text-classification endpoint. When unset the offline lexicon
    /// classifier is used instead.
    pub sentiment_url: Option<String>,
    /// Path to the brand catalog YAML.
    pub brands_path: PathBuf,
    /// Per-request timeout for provider calls.
    pub request_timeout_secs: u64,
    /// User agent sent on all outbound HTTP requests.
    pub user_agent: String,
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Resolve the brand catalog path from the environment alone.
///
/// Catalog-only commands use this instead of [`load_app_config`]: reading
/// the catalog requires no provider API keys, so none are demanded.
#[must_use]
pub fn brands_path_from_env() -> PathBuf {
    brands_path(|key| std::env::var(key))
}

fn brands_path<F>(lookup: F) -> PathBuf
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    PathBuf::from(
        lookup("VEILLE_BRANDS_PATH").unwrap_or_else(|_| DEFAULT_BRANDS_PATH.to_string()),
    )
}

/// Build application configuration using the provided env-var lookup function.
///
/// The parsing/validation logic is decoupled from the actual environment so it
/// can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var`
/// needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let newsdata_api_key = require("VEILLE_NEWSDATA_API_KEY")?;
    let mediastack_api_key = require("VEILLE_MEDIASTACK_API_KEY")?;
    let sentiment_url = lookup("VEILLE_SENTIMENT_URL").ok();
    let brands_path = PathBuf::from(or_default("VEILLE_BRANDS_PATH", DEFAULT_BRANDS_PATH));
    let request_timeout_secs = parse_u64("VEILLE_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("VEILLE_USER_AGENT", "veille/0.1 (brand-monitoring)");

    Ok(AppConfig {
        newsdata_api_key,
        mediastack_api_key,
        sentiment_url,
        brands_path,
        request_timeout_secs,
        user_agent,
    })
}
