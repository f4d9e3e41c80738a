use std::env::VarError;
use std::path::PathBuf;
use std::str::FromStr;

use crate::app_config::{AppConfig, Environment, WineyVibeSettings};
use crate::ConfigError;

/// Reads `.env` (if present) into the process, then builds the configuration
/// from `BARLIE_*` variables.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for a variable that is set but cannot
/// be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Builds the configuration from the current process environment only; no
/// `.env` file is read.
///
/// # Errors
///
/// See [`load_app_config`].
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Parses `raw` as `T`, naming `var` in the error.
fn parse_value<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("'{raw}': {e}"),
        })
}

/// Rejects zero for values that size a page, a timeout or a quota window.
fn positive<T>(var: &str, value: T) -> Result<T, ConfigError>
where
    T: Default + PartialEq,
{
    if value == T::default() {
        return Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(value)
}

/// Pure configuration builder over an arbitrary variable lookup, so tests can
/// feed a `HashMap` instead of mutating the process environment.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let var_or = |var: &str, default: &str| lookup(var).unwrap_or_else(|_| default.to_owned());
    let number_u32 = |var: &str, default: &str| parse_value::<u32>(var, &var_or(var, default));
    let number_u64 = |var: &str, default: &str| parse_value::<u64>(var, &var_or(var, default));

    let env = parse_environment(&var_or("BARLIE_ENV", "development"));
    let log_level = var_or("BARLIE_LOG_LEVEL", "info");
    let data_dir = PathBuf::from(var_or("BARLIE_DATA_DIR", "./data"));

    let page_size = positive("BARLIE_PAGE_SIZE", number_u32("BARLIE_PAGE_SIZE", "25")?)?;
    let request_timeout_secs = positive(
        "BARLIE_REQUEST_TIMEOUT_SECS",
        number_u64("BARLIE_REQUEST_TIMEOUT_SECS", "30")?,
    )?;
    let user_agent = var_or("BARLIE_USER_AGENT", "barlie/0.1 (beer-discovery)");

    let punk_base_url = var_or("BARLIE_PUNK_BASE_URL", "https://api.punkapi.com/v2");
    let punk_max_requests = number_u32("BARLIE_PUNK_MAX_REQUESTS", "3600")?;
    let punk_window_secs = positive(
        "BARLIE_PUNK_WINDOW_SECS",
        number_u64("BARLIE_PUNK_WINDOW_SECS", "3600")?,
    )?;

    let wineyvibe = match lookup("BARLIE_WINEYVIBE_BASE_URL") {
        Ok(base_url) if !base_url.trim().is_empty() => Some(WineyVibeSettings {
            base_url,
            api_key: lookup("BARLIE_WINEYVIBE_API_KEY").ok(),
            beers_path: var_or("BARLIE_WINEYVIBE_BEERS_PATH", "/beers"),
            details_path: var_or("BARLIE_WINEYVIBE_DETAILS_PATH", "/beers/{id}"),
            search_path: var_or("BARLIE_WINEYVIBE_SEARCH_PATH", "/search"),
            max_requests: number_u32("BARLIE_WINEYVIBE_MAX_REQUESTS", "1000")?,
            window_secs: positive(
                "BARLIE_WINEYVIBE_WINDOW_SECS",
                number_u64("BARLIE_WINEYVIBE_WINDOW_SECS", "3600")?,
            )?,
        }),
        _ => None,
    };

    if let Some(settings) = &wineyvibe {
        if !settings.details_path.contains("{id}") {
            return Err(ConfigError::InvalidEnvVar {
                var: "BARLIE_WINEYVIBE_DETAILS_PATH".to_string(),
                reason: "must contain an {id} placeholder".to_string(),
            });
        }
    }

    Ok(AppConfig {
        env,
        log_level,
        data_dir,
        page_size,
        request_timeout_secs,
        user_agent,
        punk_base_url,
        punk_max_requests,
        punk_window_secs,
        wineyvibe,
    })
}

/// Maps `BARLIE_ENV`, ignoring case. Anything unrecognized is development.
fn parse_environment(value: &str) -> Environment {
    match value.trim().to_ascii_lowercase().as_str() {
        "production" | "prod" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
