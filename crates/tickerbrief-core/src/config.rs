use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every setting has a default, so an empty environment yields a valid config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let log_level = or_default("TICKERBRIEF_LOG_LEVEL", "info");
    let user_agent = or_default("TICKERBRIEF_USER_AGENT", "news-collector/1.0");
    let request_timeout_secs = parse_u64("TICKERBRIEF_REQUEST_TIMEOUT_SECS", "20")?;
    let max_retries = parse_u32("TICKERBRIEF_MAX_RETRIES", "2")?;
    let retry_backoff_base_ms = parse_u64("TICKERBRIEF_RETRY_BACKOFF_BASE_MS", "500")?;
    let max_concurrent_feeds = parse_usize("TICKERBRIEF_MAX_CONCURRENT_FEEDS", "4")?;
    let db_max_connections = parse_u32("TICKERBRIEF_DB_MAX_CONNECTIONS", "4")?;

    if max_concurrent_feeds == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "TICKERBRIEF_MAX_CONCURRENT_FEEDS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    if db_max_connections == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "TICKERBRIEF_DB_MAX_CONNECTIONS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(AppConfig {
        log_level,
        user_agent,
        request_timeout_secs,
        max_retries,
        retry_backoff_base_ms,
        max_concurrent_feeds,
        db_max_connections,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
