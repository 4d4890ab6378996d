//! Validate loaded config before opening the pool.

use crate::config::types::AppConfig;
use crate::error::ConfigError;

const SSL_MODES: &[&str] = &["disable", "allow", "prefer", "require", "verify-ca", "verify-full"];

pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let db = &config.db;
    if db.url.is_none() {
        if db.host.trim().is_empty() {
            return Err(ConfigError::Invalid("db.host must not be empty".into()));
        }
        if db.port == 0 {
            return Err(ConfigError::Invalid("db.port must not be 0".into()));
        }
        if db.dbname.trim().is_empty() {
            return Err(ConfigError::Invalid("db.dbname must not be empty".into()));
        }
        if !SSL_MODES.contains(&db.sslmode.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "db.sslmode '{}' must be one of {}",
                db.sslmode,
                SSL_MODES.join(", ")
            )));
        }
    }
    if db.max_connections == 0 {
        return Err(ConfigError::Invalid("db.max_connections must be at least 1".into()));
    }
    if db.min_connections > db.max_connections {
        return Err(ConfigError::Invalid(
            "db.min_connections must not exceed db.max_connections".into(),
        ));
    }
    if db.acquire_timeout_secs == 0 {
        return Err(ConfigError::Invalid("db.acquire_timeout_secs must be positive".into()));
    }

    let server = &config.server;
    if server.port == 0 {
        return Err(ConfigError::Invalid("server.port must not be 0".into()));
    }
    if server.request_timeout_secs == 0 || server.health_timeout_secs == 0 {
        return Err(ConfigError::Invalid("server timeouts must be positive".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(validate(&AppConfig::default()).is_ok());
    }

    #[test]
    fn unknown_sslmode_is_rejected() {
        let mut config = AppConfig::default();
        config.db.sslmode = "sometimes".into();
        assert!(matches!(validate(&config), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn url_skips_discrete_field_checks() {
        let mut config = AppConfig::default();
        config.db.url = Some("postgres://localhost/library".into());
        config.db.host = String::new();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn pool_bounds_are_checked() {
        let mut config = AppConfig::default();
        config.db.min_connections = 20;
        assert!(validate(&config).is_err());
        config.db.min_connections = 0;
        config.db.max_connections = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn zero_health_timeout_is_rejected() {
        let mut config = AppConfig::default();
        config.server.health_timeout_secs = 0;
        assert!(validate(&config).is_err());
    }
}
