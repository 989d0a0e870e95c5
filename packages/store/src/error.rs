use thiserror::Error;

/// Failures reported by a [`crate::KeyValueStore`] backend or while reading
/// the client configuration.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage i/o failed for `{key}`: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("invalid client configuration: {0}")]
    Config(#[from] toml::de::Error),
}
