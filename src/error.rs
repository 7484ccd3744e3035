//! Error handling for chanstats
//!
//! This module defines the crate error type and a Result alias. Errors only
//! occur at the host boundary (parameter decoding, buffer geometry, control
//! channel); the block-processing hot path performs no validation.

use thiserror::Error;

/// Main error type for chanstats operations
#[derive(Error, Debug)]
pub enum ChanStatsError {
    /// Errors related to host parameter updates
    #[error("Parameter error: {0}")]
    Parameter(String),

    /// Errors related to block buffer geometry
    #[error("Block buffer error: expected {expected} samples for {channels} channels, got {actual}")]
    BlockGeometry {
        channels: usize,
        expected: usize,
        actual: usize,
    },

    /// Errors related to engine configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors related to control channel communication
    #[error("Channel error: {0}")]
    Channel(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<ChanStatsError>,
    },
}

impl ChanStatsError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        ChanStatsError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for chanstats operations
pub type Result<T> = std::result::Result<T, ChanStatsError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChanStatsError::Parameter("unknown name 'gain'".to_string());
        assert_eq!(err.to_string(), "Parameter error: unknown name 'gain'");
    }

    #[test]
    fn test_error_with_context() {
        let err = ChanStatsError::Config("bad value".to_string());
        let with_ctx = err.with_context("Failed to apply update");
        assert!(with_ctx.to_string().contains("Failed to apply update"));
    }

    #[test]
    fn test_block_geometry_error() {
        let err = ChanStatsError::BlockGeometry {
            channels: 4,
            expected: 1024,
            actual: 1000,
        };
        assert!(err.to_string().contains("4 channels"));
        assert!(err.to_string().contains("1024"));
    }
}
