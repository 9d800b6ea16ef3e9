//! Error types for the CLI.

use pi_core::PiError;
use pi_engine::EngineError;
use thiserror::Error;

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Sampling, estimation or scheduling error
    #[error(transparent)]
    Pi(#[from] PiError),

    /// Playback error
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
