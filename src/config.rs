use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/machikoroapp";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Server URL is empty")]
    EmptyUrl,
    #[error("Server URL {0:?} must start with http:// or https://")]
    UnsupportedScheme(String),
    #[error("Request timeout must be at least one second")]
    ZeroTimeout,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "machikoro", about = "Play Machi Koro against a remote game server")]
pub struct ClientArgs {
    /// Base URL of the game service, e.g. http://localhost:8080/machikoroapp
    #[arg(long, env = "MACHIKORO_URL", default_value = DEFAULT_BASE_URL)]
    pub url: String,

    /// Seconds to wait for each request
    #[arg(long, env = "MACHIKORO_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Directory for the rolling log files
    #[arg(long, env = "MACHIKORO_LOG_DIR", default_value = "./logs")]
    pub log_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
    log_dir: PathBuf,
}

impl ClientConfig {
    pub fn new(base_url: &str, timeout: Duration, log_dir: PathBuf) -> Result<Self, ConfigError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ConfigError::EmptyUrl);
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::UnsupportedScheme(base_url.to_string()));
        }
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(ClientConfig {
            base_url: base_url.to_string(),
            timeout,
            log_dir,
        })
    }

    // Never ends with a slash, endpoint paths start with one
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn log_dir(&self) -> &PathBuf {
        &self.log_dir
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            log_dir: PathBuf::from("./logs"),
        }
    }
}

impl TryFrom<ClientArgs> for ClientConfig {
    type Error = ConfigError;

    fn try_from(args: ClientArgs) -> Result<Self, Self::Error> {
        ClientConfig::new(&args.url, Duration::from_secs(args.timeout_secs), args.log_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_command_line() {
        let args = ClientArgs::try_parse_from(["machikoro"]).unwrap();
        // environment may override, but whatever we get must be a valid config
        let config = ClientConfig::try_from(args).unwrap();
        assert!(config.base_url().starts_with("http"));
    }

    #[test]
    fn test_flags() {
        let args = ClientArgs::try_parse_from([
            "machikoro",
            "--url",
            "https://example.org/machikoroapp/",
            "--timeout-secs",
            "3",
            "--log-dir",
            "/tmp/mk",
        ])
        .unwrap();
        let config = ClientConfig::try_from(args).unwrap();
        assert_eq!(config.base_url(), "https://example.org/machikoroapp");
        assert_eq!(config.timeout(), Duration::from_secs(3));
        assert_eq!(config.log_dir(), &PathBuf::from("/tmp/mk"));
    }

    #[test]
    fn test_rejects_bad_urls() {
        let timeout = Duration::from_secs(1);
        assert_eq!(
            ClientConfig::new("  ", timeout, PathBuf::new()),
            Err(ConfigError::EmptyUrl)
        );
        assert_eq!(
            ClientConfig::new("localhost:8080/machikoroapp", timeout, PathBuf::new()),
            Err(ConfigError::UnsupportedScheme(
                "localhost:8080/machikoroapp".to_string()
            ))
        );
    }

    #[test]
    fn test_rejects_zero_timeout() {
        assert_eq!(
            ClientConfig::new(DEFAULT_BASE_URL, Duration::ZERO, PathBuf::new()),
            Err(ConfigError::ZeroTimeout)
        );
    }
}
