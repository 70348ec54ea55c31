// ============================================================================
// Probe Errors
// Error types for accuracy probe configuration
// ============================================================================

use std::fmt;

/// Errors that can occur when configuring an accuracy probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeError {
    /// Probe label is empty
    EmptyLabel,
    /// A tolerance is below zero
    NegativeTolerance,
    /// A tolerance is NaN or infinite
    NonFiniteTolerance,
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::EmptyLabel => write!(f, "probe label cannot be empty"),
            ProbeError::NegativeTolerance => write!(f, "tolerance cannot be negative"),
            ProbeError::NonFiniteTolerance => {
                write!(f, "tolerance must be a finite number")
            },
        }
    }
}

impl std::error::Error for ProbeError {}

/// Result type alias for probe operations
pub type ProbeResult<T> = Result<T, ProbeError>;
