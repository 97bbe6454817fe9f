//! Configuration Module
//!
//! Handles loading client configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Default cache TTL in seconds
pub const DEFAULT_CACHE_TTL: u64 = 60;

/// Default PokeAPI root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default HTTP request timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT: u64 = 10;

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache TTL in seconds
    pub cache_ttl: u64,
    /// Background sweep interval in seconds, None = same as the TTL
    pub sweep_interval: Option<u64>,
    /// PokeAPI root URL, without trailing slash
    pub base_url: String,
    /// HTTP request timeout in seconds
    pub http_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_CACHE_TTL` - Cache TTL in seconds (default: 60)
    /// - `POKEDEX_SWEEP_INTERVAL` - Sweep frequency in seconds (default: the TTL)
    /// - `POKEAPI_BASE_URL` - API root (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_HTTP_TIMEOUT` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self {
            cache_ttl: parse_var::<u64>("POKEDEX_CACHE_TTL")
                .filter(|ttl| *ttl > 0)
                .unwrap_or(DEFAULT_CACHE_TTL),
            sweep_interval: parse_var::<u64>("POKEDEX_SWEEP_INTERVAL").filter(|secs| *secs > 0),
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty())
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            http_timeout: parse_var::<u64>("POKEDEX_HTTP_TIMEOUT")
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_HTTP_TIMEOUT),
        }
    }

    /// Cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// Sweep interval as a Duration, falling back to the TTL.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval.unwrap_or(self.cache_ttl))
    }

    /// HTTP timeout as a Duration.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_CACHE_TTL,
            sweep_interval: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_ttl, 60);
        assert_eq!(config.sweep_interval, None);
        assert_eq!(config.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.http_timeout, 10);
    }

    #[test]
    fn test_sweep_interval_falls_back_to_ttl() {
        let mut config = Config::default();
        assert_eq!(config.sweep_interval(), Duration::from_secs(60));

        config.sweep_interval = Some(5);
        assert_eq!(config.sweep_interval(), Duration::from_secs(5));
        assert_eq!(config.cache_ttl(), Duration::from_secs(60));
    }

    #[test]
    fn test_config_from_env() {
        // One test owns these vars so parallel tests never race on them
        let vars = [
            "POKEDEX_CACHE_TTL",
            "POKEDEX_SWEEP_INTERVAL",
            "POKEAPI_BASE_URL",
            "POKEDEX_HTTP_TIMEOUT",
        ];
        for var in vars {
            env::remove_var(var);
        }

        let config = Config::from_env();
        assert_eq!(config.cache_ttl, 60);
        assert_eq!(config.sweep_interval, None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.http_timeout, 10);

        // Zero would expire everything at once or fail every request
        env::set_var("POKEDEX_CACHE_TTL", "0");
        env::set_var("POKEDEX_SWEEP_INTERVAL", "0");
        env::set_var("POKEDEX_HTTP_TIMEOUT", "0");
        let config = Config::from_env();
        assert_eq!(config.cache_ttl, DEFAULT_CACHE_TTL);
        assert_eq!(config.sweep_interval, None);
        assert_eq!(config.http_timeout, DEFAULT_HTTP_TIMEOUT);

        env::set_var("POKEDEX_HTTP_TIMEOUT", "3");
        env::set_var("POKEAPI_BASE_URL", "http://localhost:8080/api/v2/");
        let config = Config::from_env();
        assert_eq!(config.http_timeout(), Duration::from_secs(3));
        assert_eq!(config.base_url, "http://localhost:8080/api/v2");

        for var in vars {
            env::remove_var(var);
        }
    }
}
