//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

/// Web server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// SQLite database URL.
    pub database_url: String,
    /// Run one dispatch in the background once the listener is bound.
    pub dispatch_on_startup: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `CONCIERGE_ADDR` | Server bind address | `127.0.0.1:8000` |
    /// | `SQLITE_PATH` | SQLite database URL | `sqlite:concierge.db?mode=rwc` |
    /// | `DISPATCH_ON_STARTUP` | Dispatch once at startup | `true` |
    ///
    /// WhatsApp, reply and dispatch settings are read by their own crates.
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("CONCIERGE_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let database_url = env::var("SQLITE_PATH")
            .unwrap_or_else(|_| "sqlite:concierge.db?mode=rwc".to_string());

        let dispatch_on_startup = env::var("DISPATCH_ON_STARTUP")
            .ok()
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "false" | "0" | "no"))
            .unwrap_or(true);

        Ok(Self {
            addr,
            database_url,
            dispatch_on_startup,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid CONCIERGE_ADDR format")]
    InvalidAddr,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_all() {
            std::env::remove_var("CONCIERGE_ADDR");
            std::env::remove_var("SQLITE_PATH");
            std::env::remove_var("DISPATCH_ON_STARTUP");
        }

        clear_all();
        let config = Config::from_env().unwrap();
        assert_eq!(config.addr.to_string(), "127.0.0.1:8000");
        assert_eq!(config.database_url, "sqlite:concierge.db?mode=rwc");
        assert!(config.dispatch_on_startup);

        std::env::set_var("CONCIERGE_ADDR", "0.0.0.0:9000");
        std::env::set_var("DISPATCH_ON_STARTUP", "false");
        let config = Config::from_env().unwrap();
        assert_eq!(config.addr.port(), 9000);
        assert!(!config.dispatch_on_startup);

        std::env::set_var("CONCIERGE_ADDR", "not-an-address");
        assert!(matches!(Config::from_env(), Err(ConfigError::InvalidAddr)));

        clear_all();
    }
}
