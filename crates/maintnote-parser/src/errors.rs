use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read note config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("note config is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("note config field {field} invalid: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

/// Reasons a date or time token found in the text could not be turned into a
/// timestamp. These never leave the crate as errors; the window resolver logs
/// them and treats the token as absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("unrecognized date token '{0}'")]
    InvalidDate(String),

    #[error("unrecognized time token '{0}'")]
    InvalidTime(String),

    #[error("time {hour}:{minute:02} out of range")]
    OutOfRange { hour: u32, minute: u32 },
}
