//! Load settings from process env (after `.env`) or from any key lookup.

use crate::config::types::*;
use crate::error::ConfigError;
use std::str::FromStr;

/// Read settings from the process environment. Loads `.env` first when present.
pub fn load_from_env() -> Result<Settings, ConfigError> {
    dotenvy::dotenv().ok();
    load_with(|key| std::env::var(key).ok())
}

/// Build settings from a lookup function, so callers and tests need not touch the real env.
pub fn load_with<F>(lookup: F) -> Result<Settings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
    let backend = Backend::from_url(&url)?;

    Ok(Settings {
        host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.into()),
        port: parse_or("PORT", get("PORT"), DEFAULT_PORT)?,
        database: DatabaseSettings {
            url,
            backend,
            max_connections: parse_or(
                "DB_MAX_CONNECTIONS",
                get("DB_MAX_CONNECTIONS"),
                DEFAULT_MAX_CONNECTIONS,
            )?,
        },
        favorites_user_id: parse_or(
            "FAVORITES_USER_ID",
            get("FAVORITES_USER_ID"),
            DEFAULT_FAVORITES_USER_ID,
        )?,
    })
}

fn parse_or<T: FromStr>(
    var: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue { var, value }),
    }
}
