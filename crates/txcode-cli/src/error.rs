//! CLI error types

use thiserror::Error;
use txcode::AbiError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// ABI error
    #[error("ABI error: {0}")]
    Abi(#[from] AbiError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config error
    #[error("Config error: {0}")]
    Config(String),
}
