use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

use crate::constants;
use crate::custom_errors::config_errors::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub ip: [u8; 4],
    pub port: u16,
    pub web_domains: Vec<String>,
    /// Base URL of the document database, e.g. https://myproject.firebaseio.com
    pub database_url: String,
    /// Path to a file holding the database secret.
    pub credentials: String,
    #[serde(default = "default_wikipedia_api_url")]
    pub wikipedia_api_url: String,
    /// Loaded from the credentials file, never from the config file itself.
    #[serde(skip)]
    pub database_secret: String,
}

fn default_wikipedia_api_url() -> String {
    constants::WIKIPEDIA_API_URL.to_string()
}

impl Config {
    /// Any failure here is fatal: the service refuses to start without a
    /// valid database URL and credentials file.
    pub fn load() -> Result<Config, ConfigError> {
        let path = env::var("BASKETBALL_BACKEND_CONFIG")
            .unwrap_or_else(|_| constants::DEFAULT_CONFIG_PATH.to_string());
        Config::load_from(&path)
    }

    pub fn load_from(path: &str) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        let mut config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })?;

        if !config.database_url.starts_with("http://")
            && !config.database_url.starts_with("https://")
        {
            return Err(ConfigError::InvalidDatabaseUrl(config.database_url));
        }
        while config.database_url.ends_with('/') {
            config.database_url.pop();
        }

        let secret =
            fs::read_to_string(&config.credentials).map_err(|source| {
                ConfigError::MissingCredentials {
                    path: config.credentials.clone(),
                    source,
                }
            })?;
        config.database_secret = secret.trim().to_string();
        if config.database_secret.is_empty() {
            return Err(ConfigError::EmptyCredentials(config.credentials));
        }

        Ok(config)
    }
}
