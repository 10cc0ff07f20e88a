use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use twilio_sms_core::{ConfigError, DEFAULT_API_BASE_URL};

/// Twilio SMS server configuration
///
/// Secrets never live here; they come from the environment through
/// [`twilio_sms_core::Credentials`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// HTTP front-end binding
    #[serde(default)]
    pub server: ServerConfig,

    /// Provider API settings
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// HTTP binding configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// HTTP bind address
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// HTTP port, overridden by `PORT`
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Outbound provider configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Twilio API origin
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Upper bound on a single create-message call, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ProviderConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::info!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from default locations in order:
    /// 1. ./twilio-sms.toml (current directory)
    /// 2. /etc/twilio-sms/config.toml (system-wide)
    /// 3. Built-in defaults
    ///
    /// `PORT` from the environment is applied on top.
    pub fn load_default() -> Result<Self> {
        let paths = vec![
            PathBuf::from("./twilio-sms.toml"),
            PathBuf::from("/etc/twilio-sms/config.toml"),
        ];

        let mut config = None;
        for path in paths {
            if path.exists() {
                config = Some(Self::load(&path)?);
                break;
            }
        }

        let mut config = config.unwrap_or_else(|| {
            tracing::info!("No config file found, using built-in defaults");
            Self::default()
        });
        config.apply_port_override(std::env::var("PORT").ok().as_deref())?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make every send fail
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.provider.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                name: "provider.timeout_secs",
                reason: "must be at least 1 second".to_string(),
            });
        }
        Ok(())
    }

    /// Apply a `PORT` value; blank or absent leaves the port unchanged
    pub fn apply_port_override(&mut self, port: Option<&str>) -> Result<(), ConfigError> {
        let Some(raw) = port.map(str::trim).filter(|p| !p.is_empty()) else {
            return Ok(());
        };

        self.server.port = raw.parse().map_err(|_| ConfigError::InvalidValue {
            name: "PORT",
            reason: format!("'{raw}' is not a valid port number"),
        })?;
        Ok(())
    }

    /// Generate example configuration file
    #[must_use]
    pub fn example() -> String {
        let example = Config::default();
        toml::to_string_pretty(&example).expect("Failed to serialize example config")
    }
}
