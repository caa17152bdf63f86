//! Error types for the automaton core.
//!
//! All conditions are local and recoverable by the caller; none are expected
//! during normal operation once the configuration has been validated.

use thiserror::Error;

/// Main error type for lattice, rule, and scheduler operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Coordinate access outside `[0, N)` on the lattice.
    ///
    /// Reserved for direct API misuse; the rule engine pre-wraps every
    /// coordinate, so this never fires internally.
    #[error("coordinate ({x}, {y}, {z}) outside lattice of size {size}")]
    OutOfRange {
        x: usize,
        y: usize,
        z: usize,
        size: usize,
    },

    /// Rejected configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Cell-buffer length does not match the declared extent.
    ///
    /// Inside the scheduler this is an invariant violation and stops the
    /// generation loop rather than risking a torn publish.
    #[error("cell buffer length mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Creates a new invalid-configuration error.
    #[must_use]
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = CoreError::OutOfRange {
            x: 5,
            y: 0,
            z: 2,
            size: 4,
        };
        assert_eq!(err.to_string(), "coordinate (5, 0, 2) outside lattice of size 4");
    }

    #[test]
    fn test_invalid_config_constructor() {
        let err = CoreError::invalid_config("lattice size must be positive");
        assert!(err.to_string().contains("lattice size must be positive"));
    }
}
