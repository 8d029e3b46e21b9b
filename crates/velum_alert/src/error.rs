//! Error types for velum_alert

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while configuring an alert
#[derive(Error, Debug)]
pub enum AlertError {
    /// Theme file could not be read
    #[error("failed to read theme file {path}: {source}")]
    ThemeIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Theme file is not valid TOML or has unknown keys / bad colors
    #[error("invalid theme: {0}")]
    ThemeParse(#[from] toml::de::Error),

    /// Unmount would happen before the exit animation finishes
    #[error("unmount delay ({unmount_ms}ms) must be longer than the exit animation ({exit_ms}ms)")]
    UnmountBeforeExit { exit_ms: u32, unmount_ms: u32 },
}

/// Result type for velum_alert operations
pub type Result<T> = std::result::Result<T, AlertError>;
