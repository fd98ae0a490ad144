use std::path::PathBuf;

use thiserror::Error;

/// All errors generated while starting the dashboard.
///
/// Rendering never fails on missing data; it falls back to zero placeholders.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid value for {key}: {value:?}")]
    InvalidSetting { key: &'static str, value: String },
}
