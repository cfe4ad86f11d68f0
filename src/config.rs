//! Configuration Module
//!
//! Loads backend settings from environment variables.

use std::env;
use std::time::Duration;

/// Cache backend configuration.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Redis connection URL
    pub redis_url: String,
    /// Memory backend sweep interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `REDIS_URL` - Redis connection URL (default: redis://127.0.0.1:6379)
    /// - `CLEANUP_INTERVAL` - Memory backend sweep frequency in seconds (default: 1)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            redis_url: env::var("REDIS_URL").unwrap_or(defaults.redis_url),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.cleanup_interval),
        }
    }

    /// Sweep interval as a Duration.
    pub fn cleanup_period(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redis_url: "redis://127.0.0.1:6379".to_string(),
            cleanup_interval: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.redis_url, "redis://127.0.0.1:6379");
        assert_eq!(config.cleanup_interval, 1);
        assert_eq!(config.cleanup_period(), Duration::from_secs(1));
    }

    // Single test touches the process environment so parallel tests don't race.
    #[test]
    fn test_config_from_env() {
        env::remove_var("REDIS_URL");
        env::remove_var("CLEANUP_INTERVAL");

        let config = Config::from_env();
        assert_eq!(config.redis_url, "redis://127.0.0.1:6379");
        assert_eq!(config.cleanup_interval, 1);

        env::set_var("REDIS_URL", "redis://cache.internal:6380/2");
        env::set_var("CLEANUP_INTERVAL", "5");
        let config = Config::from_env();
        assert_eq!(config.redis_url, "redis://cache.internal:6380/2");
        assert_eq!(config.cleanup_interval, 5);

        env::set_var("CLEANUP_INTERVAL", "0");
        assert_eq!(Config::from_env().cleanup_interval, 1);

        env::remove_var("REDIS_URL");
        env::remove_var("CLEANUP_INTERVAL");
    }
}
