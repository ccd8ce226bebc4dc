//! Server configuration read from the environment.

use std::env;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid SOS_PORT: {0}")]
    InvalidPort(String),

    #[error("Invalid {key}: {value} (expected on/off)")]
    InvalidToggle { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Play the alert sound on SOS.
    pub sound: bool,
    /// Show a desktop notification on SOS.
    pub notify: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            sound: true,
            notify: true,
        }
    }
}

impl ServerConfig {
    /// Reads `SOS_HOST`, `SOS_PORT`, `SOS_SOUND` and `SOS_NOTIFY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup("SOS_HOST").unwrap_or(defaults.host);
        let port = match lookup("SOS_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };
        let sound = parse_toggle("SOS_SOUND", lookup("SOS_SOUND"), defaults.sound)?;
        let notify = parse_toggle("SOS_NOTIFY", lookup("SOS_NOTIFY"), defaults.notify)?;

        Ok(Self {
            host,
            port,
            sound,
            notify,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_toggle(key: &'static str, value: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(value) = value else {
        return Ok(default);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Ok(true),
        "off" | "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidToggle { key, value }),
    }
}
