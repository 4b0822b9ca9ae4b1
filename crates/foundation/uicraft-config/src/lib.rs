//! uicraft configuration
//!
//! Layering, lowest to highest priority:
//!
//! 1. Built-in defaults
//! 2. YAML file (`--config <path>`, else `<config dir>/uicraft/config.yaml` if present)
//! 3. Environment (`.env` is loaded first): `GROQ_API_KEY`, `UICRAFT_MODEL`,
//!    `UICRAFT_ENDPOINT`, `UICRAFT_BIND`
//! 4. Command-line overrides

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use uicraft_core::{DEFAULT_MODEL, DEFAULT_TEMPERATURE};

/// OpenAI-compatible chat completions endpoint of the hosted provider
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";

pub const ENV_API_KEY: &str = "GROQ_API_KEY";
pub const ENV_MODEL: &str = "UICRAFT_MODEL";
pub const ENV_ENDPOINT: &str = "UICRAFT_ENDPOINT";
pub const ENV_BIND: &str = "UICRAFT_BIND";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid bind address '{0}', expected HOST:PORT")]
    InvalidBind(String),

    #[error("Invalid endpoint '{0}': {1}")]
    InvalidEndpoint(String, String),

    #[error("Temperature {0} out of range 0.0..=2.0")]
    InvalidTemperature(f32),

    #[error("Port must be non-zero")]
    InvalidPort,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub model: String,
    pub temperature: f32,
    pub endpoint: String,
    /// Unset means the HTTP client default
    pub request_timeout_secs: Option<u64>,
    /// Default key; the sidebar input overrides it
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: None,
            api_key: None,
        }
    }
}

/// Values from the command line. `None` keeps the lower layer.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub model: Option<String>,
    pub temperature: Option<f32>,
}

impl Config {
    /// Default file location, e.g. `~/.config/uicraft/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("uicraft").join("config.yaml"))
    }

    /// Read a YAML file. Missing keys take defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml(raw: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw)
    }

    /// Resolve every layer and validate the result
    pub fn load(explicit_path: Option<&Path>, overrides: Overrides) -> Result<Self> {
        if let Err(e) = dotenv::dotenv() {
            tracing::debug!("No .env file loaded: {}", e);
        }

        let mut config = match explicit_path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => {
                    tracing::info!("Loading config from {}", path.display());
                    Self::from_file(&path)?
                }
                None => Self::default(),
            },
        };

        config.apply_env(|name| std::env::var(name).ok())?;
        config.apply_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Apply environment values through `lookup` so tests need not touch the process env
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_API_KEY).map(|k| k.trim().to_string()) {
            if !key.is_empty() {
                self.api_key = Some(key);
            }
        }
        if let Some(model) = lookup(ENV_MODEL).filter(|m| !m.trim().is_empty()) {
            self.model = model.trim().to_string();
        }
        if let Some(endpoint) = lookup(ENV_ENDPOINT).filter(|e| !e.trim().is_empty()) {
            self.endpoint = endpoint.trim().to_string();
        }
        if let Some(bind) = lookup(ENV_BIND).filter(|b| !b.trim().is_empty()) {
            let (host, port) = parse_bind(bind.trim())?;
            self.host = host;
            self.port = port;
        }
        Ok(())
    }

    pub fn apply_overrides(&mut self, overrides: Overrides) {
        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(model) = overrides.model {
            self.model = model;
        }
        if let Some(temperature) = overrides.temperature {
            self.temperature = temperature;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::InvalidTemperature(self.temperature));
        }
        if self.port == 0 {
            return Err(ConfigError::InvalidPort);
        }
        let parsed = url::Url::parse(&self.endpoint)
            .map_err(|e| ConfigError::InvalidEndpoint(self.endpoint.clone(), e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEndpoint(
                self.endpoint.clone(),
                format!("unsupported scheme '{}'", parsed.scheme()),
            ));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

fn parse_bind(bind: &str) -> Result<(String, u16)> {
    let (host, port) = bind
        .rsplit_once(':')
        .ok_or_else(|| ConfigError::InvalidBind(bind.to_string()))?;
    let port: u16 = port
        .parse()
        .map_err(|_| ConfigError::InvalidBind(bind.to_string()))?;
    if host.is_empty() {
        return Err(ConfigError::InvalidBind(bind.to_string()));
    }
    Ok((host.to_string(), port))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.model, "openai/gpt-oss-safeguard-20b");
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(!config.has_api_key());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml() {
        let config = Config::from_yaml("port: 9000\nmodel: llama-3.3-70b-versatile\n").unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.temperature, 0.2);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Config::from_yaml("  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_env_layer() {
        let mut config = Config::default();
        config
            .apply_env(env(&[
                (ENV_API_KEY, "  gsk_test  "),
                (ENV_BIND, "0.0.0.0:8080"),
                (ENV_MODEL, "other-model"),
            ]))
            .unwrap();

        assert_eq!(config.api_key.as_deref(), Some("gsk_test"));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.model, "other-model");
    }

    #[test]
    fn test_blank_env_key_ignored() {
        let mut config = Config::default();
        config.apply_env(env(&[(ENV_API_KEY, "   ")])).unwrap();
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_bad_bind() {
        let mut config = Config::default();
        let err = config.apply_env(env(&[(ENV_BIND, "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBind(_)));
    }

    #[test]
    fn test_overrides_win() {
        let mut config = Config::default();
        config.apply_overrides(Overrides {
            port: Some(3000),
            temperature: Some(0.7),
            ..Overrides::default()
        });
        assert_eq!(config.port, 3000);
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_validation() {
        let mut config = Config::default();
        config.temperature = 3.5;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidTemperature(_))));

        let mut config = Config::default();
        config.endpoint = "ftp://example.com".into();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidEndpoint(..))));

        let mut config = Config::default();
        config.port = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidPort)));
    }

    #[test]
    fn test_api_key_not_serialized() {
        let config = Config {
            api_key: Some("gsk_secret".into()),
            ..Config::default()
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(!yaml.contains("gsk_secret"));
    }
}
