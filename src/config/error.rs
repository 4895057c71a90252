use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("no file list builder registered")]
    MissingFileList,

    #[error("cannot read '{key}' as {expected}: found {found}")]
    InvalidCast {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("failed to deserialize '{key}': {source}")]
    Deserialize {
        key: String,
        source: serde_json::Error,
    },

    #[error("config directory variable '{0}' is not set")]
    MissingConfigDir(String),
}
