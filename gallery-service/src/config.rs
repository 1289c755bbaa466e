use std::path::PathBuf;

use anyhow::{Context, Result};
use shared::database::MongoConfig;
use shared::observability::{LogConfig, LogFormat, LogLevel};

/// Largest multipart upload accepted by `/upload` (10 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 << 20;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub mongo: MongoConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub assets_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            assets_dir: PathBuf::from("assets"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ServerConfig {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Pretty,
        }
    }
}

impl LoggingConfig {
    pub fn to_log_config(&self, service_name: &str) -> LogConfig {
        LogConfig {
            level: self.level,
            format: self.format,
            service_name: service_name.to_string(),
            ..LogConfig::default()
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_defaults = ServerConfig::default();
        let logging_defaults = LoggingConfig::default();

        let server = ServerConfig {
            host: lookup("GALLERY_HOST").unwrap_or(server_defaults.host),
            port: match lookup("GALLERY_PORT") {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .with_context(|| format!("GALLERY_PORT is not a valid port: '{}'", raw))?,
                None => server_defaults.port,
            },
            assets_dir: lookup("GALLERY_ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or(server_defaults.assets_dir),
            max_upload_bytes: match lookup("GALLERY_MAX_UPLOAD_BYTES") {
                Some(raw) => raw.trim().parse().with_context(|| {
                    format!("GALLERY_MAX_UPLOAD_BYTES is not a byte count: '{}'", raw)
                })?,
                None => server_defaults.max_upload_bytes,
            },
        };

        let logging = LoggingConfig {
            level: match lookup("LOG_LEVEL") {
                Some(raw) => raw.parse()?,
                None => logging_defaults.level,
            },
            format: match lookup("LOG_FORMAT") {
                Some(raw) => raw.parse()?,
                None => logging_defaults.format,
            },
        };

        let mongo = MongoConfig::from_lookup(&lookup)?;

        Ok(Self {
            server,
            mongo,
            logging,
        })
    }
}
