use crate::error::{NatureError, Result};
use crate::logger::LogLevel;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_ENDPOINT: &str = "https://image.pollinations.ai/prompt";
pub const DEFAULT_DIMENSION: u32 = 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub width: u32,
    pub height: u32,
    pub download_dir: PathBuf,
    pub host: String,
    pub port: Option<u16>,
    pub production: bool,
    pub log_level: Option<LogLevel>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            width: DEFAULT_DIMENSION,
            height: DEFAULT_DIMENSION,
            download_dir: PathBuf::from("."),
            host: "127.0.0.1".to_string(),
            port: None,
            production: false,
            log_level: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let defaults = Self::default();

        let endpoint = env::var("NATURE_AI_ENDPOINT").unwrap_or(defaults.endpoint);
        let width = env::var("NATURE_AI_WIDTH")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.width);
        let height = env::var("NATURE_AI_HEIGHT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.height);
        let download_dir = env::var("NATURE_AI_DOWNLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.download_dir);
        let host = env::var("NATURE_AI_HOST").unwrap_or(defaults.host);
        let port = env::var("PORT").ok().and_then(|port| port.parse().ok());
        let production = env::var("NATURE_AI_ENV")
            .ok()
            .map_or(false, |val| val == "production");
        let log_level = env::var("NATURE_AI_LOG")
            .ok()
            .and_then(|val| LogLevel::parse(&val));

        Config {
            endpoint,
            width,
            height,
            download_dir,
            host,
            port,
            production,
            log_level,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = dir.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = Some(level);
        self
    }

    pub fn port_or_default(&self) -> u16 {
        self.port.unwrap_or(8080)
    }

    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(NatureError::ConfigError(
                "Image endpoint must not be empty".into(),
            ));
        }
        if self.width == 0 || self.height == 0 {
            return Err(NatureError::ConfigError(format!(
                "Image dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::new();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!((config.width, config.height), (1024, 1024));
        assert_eq!(config.port_or_default(), 8080);
        assert_eq!(config.log_level, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = Config::new()
            .with_endpoint("http://localhost:9000/prompt")
            .with_dimensions(512, 768)
            .with_download_dir("/tmp/nature")
            .with_port(3000)
            .with_log_level(LogLevel::Trace);
        assert_eq!(config.endpoint, "http://localhost:9000/prompt");
        assert_eq!((config.width, config.height), (512, 768));
        assert_eq!(config.download_dir, PathBuf::from("/tmp/nature"));
        assert_eq!(config.port_or_default(), 3000);
        assert_eq!(config.log_level, Some(LogLevel::Trace));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = Config::new().with_dimensions(0, 1024);
        assert!(matches!(config.validate(), Err(NatureError::ConfigError(_))));

        let config = Config::new().with_endpoint("  ");
        assert!(config.validate().is_err());
    }
}
