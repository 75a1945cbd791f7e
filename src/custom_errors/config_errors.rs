use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },

    #[error("database_url must start with http:// or https://, got {0:?}")]
    InvalidDatabaseUrl(String),

    #[error("failed to read credentials file {path}: {source}")]
    MissingCredentials {
        path: String,
        source: std::io::Error,
    },

    #[error("credentials file {0} is empty")]
    EmptyCredentials(String),
}
