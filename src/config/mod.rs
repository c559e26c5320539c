use std::env;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; SEOAnalyzerBot/1.0; +https://seoanalyzer.com)";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub is_dev: bool,
    pub fetch_timeout: Duration,
    pub user_agent: String,
    /// `None` keeps cached analyses for the life of the process.
    pub cache_ttl: Option<Duration>,
    pub allow_private_hosts: bool,
    pub recent_limit_max: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let cache_ttl_secs: u64 = parse_or(&lookup, "CACHE_TTL_SECS", 0)?;

        Ok(Config {
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            server_port: parse_or(&lookup, "SERVER_PORT", 8080)?,
            is_dev: lookup("APP_ENV").as_deref() != Some("production"),
            fetch_timeout: Duration::from_secs(parse_or(&lookup, "FETCH_TIMEOUT_SECS", 10)?),
            user_agent: lookup("FETCH_USER_AGENT")
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            cache_ttl: (cache_ttl_secs > 0).then(|| Duration::from_secs(cache_ttl_secs)),
            allow_private_hosts: parse_or(&lookup, "ALLOW_PRIVATE_HOSTS", false)?,
            recent_limit_max: parse_or(&lookup, "RECENT_LIMIT_MAX", 50)?,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn from_map(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = from_map(&[]).unwrap();
        assert_eq!(config.server_addr(), "127.0.0.1:8080");
        assert!(config.is_dev);
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.cache_ttl, None);
        assert!(!config.allow_private_hosts);
        assert_eq!(config.recent_limit_max, 50);
    }

    #[test]
    fn reads_overrides() {
        let config = from_map(&[
            ("SERVER_HOST", "0.0.0.0"),
            ("SERVER_PORT", "3000"),
            ("APP_ENV", "production"),
            ("CACHE_TTL_SECS", "60"),
            ("ALLOW_PRIVATE_HOSTS", "true"),
            ("RECENT_LIMIT_MAX", "10"),
        ])
        .unwrap();
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
        assert!(!config.is_dev);
        assert_eq!(config.cache_ttl, Some(Duration::from_secs(60)));
        assert!(config.allow_private_hosts);
        assert_eq!(config.recent_limit_max, 10);
    }

    #[test]
    fn rejects_malformed_numbers() {
        let err = from_map(&[("SERVER_PORT", "eighty")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                var: "SERVER_PORT",
                value: "eighty".into()
            }
        );
    }

    #[test]
    fn rejects_malformed_booleans() {
        assert!(from_map(&[("ALLOW_PRIVATE_HOSTS", "yes")]).is_err());
    }

    #[test]
    #[serial]
    fn from_env_reads_process_environment() {
        env::set_var("RECENT_LIMIT_MAX", "7");
        let config = Config::from_env();
        env::remove_var("RECENT_LIMIT_MAX");
        assert_eq!(config.unwrap().recent_limit_max, 7);
    }
}
