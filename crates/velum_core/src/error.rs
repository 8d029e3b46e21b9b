//! Error types for velum_core

use thiserror::Error;

/// Errors produced while parsing a hex color string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Hex body was not 6 or 8 digits long
    #[error("expected 6 or 8 hex digits, found {0}")]
    InvalidLength(usize),

    /// Input contained something other than hex digits
    #[error("invalid hex color: {0:?}")]
    InvalidDigit(String),
}
