//! Error types for playback.
//!
//! Sampling and scheduling fail with [`PiError`]; playback can additionally
//! fail when the renderer cannot write a frame.

use pi_core::PiError;
use thiserror::Error;

/// Result alias for playback operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Playback error.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Sampling, estimation or scheduling error
    #[error(transparent)]
    Pi(#[from] PiError),

    /// Renderer failed to consume a frame
    #[error("Render error: {0}")]
    Render(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::from(PiError::InvalidFrameCount(0));
        assert!(err.to_string().contains("frame count 0"));

        let err = EngineError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "closed",
        ));
        assert!(err.to_string().starts_with("Render error"));
    }
}
