//! Load config: defaults, then optional JSON file, then environment overrides.

use crate::config::types::AppConfig;
use crate::config::validate;
use crate::error::ConfigError;
use std::path::Path;
use std::str::FromStr;

pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "config/config.json";

/// Load from `CONFIG_PATH` (or `config/config.json` if present) and the process environment, then validate.
pub fn load() -> Result<AppConfig, ConfigError> {
    let env = |key: &str| std::env::var(key).ok();
    let mut config = match env(CONFIG_PATH_ENV) {
        Some(path) => from_file(&path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => from_file(DEFAULT_CONFIG_PATH)?,
        None => AppConfig::default(),
    };
    apply_env(&mut config, env)?;
    validate(&config)?;
    Ok(config)
}

pub fn from_file(path: &str) -> Result<AppConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;
    from_json_str(&text)
}

pub fn from_json_str(text: &str) -> Result<AppConfig, ConfigError> {
    Ok(serde_json::from_str(text)?)
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("{} has invalid value '{}'", key, value)))
}

/// Apply overrides from `lookup` (the process environment in [`load`]).
pub fn apply_env<F>(config: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let db = &mut config.db;
    if let Some(v) = lookup("DATABASE_URL") {
        db.url = Some(v);
    }
    if let Some(v) = lookup("DB_HOST") {
        db.host = v;
    }
    if let Some(v) = lookup("DB_PORT") {
        db.port = parse("DB_PORT", &v)?;
    }
    if let Some(v) = lookup("DB_USER") {
        db.user = v;
    }
    if let Some(v) = lookup("DB_PASSWORD") {
        db.password = v;
    }
    if let Some(v) = lookup("DB_NAME") {
        db.dbname = v;
    }
    if let Some(v) = lookup("DB_SSLMODE") {
        db.sslmode = v;
    }
    if let Some(v) = lookup("DB_MAX_CONNECTIONS") {
        db.max_connections = parse("DB_MAX_CONNECTIONS", &v)?;
    }

    let server = &mut config.server;
    if let Some(v) = lookup("SERVER_HOST") {
        server.host = v;
    }
    if let Some(v) = lookup("SERVER_PORT") {
        server.port = parse("SERVER_PORT", &v)?;
    }
    if let Some(v) = lookup("REQUEST_TIMEOUT_SECS") {
        server.request_timeout_secs = parse("REQUEST_TIMEOUT_SECS", &v)?;
    }
    if let Some(v) = lookup("HEALTH_TIMEOUT_SECS") {
        server.health_timeout_secs = parse("HEALTH_TIMEOUT_SECS", &v)?;
    }
    Ok(())
}
