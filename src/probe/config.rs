// ============================================================================
// Probe Configuration
// Tolerances deciding when accumulated round-off is too large
// ============================================================================

use super::errors::{ProbeError, ProbeResult};

/// Configuration for an [`AccuracyProbe`](super::AccuracyProbe).
///
/// An observation is within tolerance when
/// `|error| <= absolute_tolerance + relative_tolerance * |exact|`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeConfig {
    /// Name of the code section being watched, attached to every log event
    pub label: String,

    /// Error allowed regardless of magnitude
    pub absolute_tolerance: f64,

    /// Error allowed per unit of the exact value
    pub relative_tolerance: f64,
}

impl ProbeConfig {
    /// Create a configuration with single-precision tolerances.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            absolute_tolerance: 0.0,
            relative_tolerance: f64::from(f32::EPSILON),
        }
    }

    /// Builder method: Set absolute tolerance
    pub fn with_absolute_tolerance(mut self, tolerance: f64) -> Self {
        self.absolute_tolerance = tolerance;
        self
    }

    /// Builder method: Set relative tolerance
    pub fn with_relative_tolerance(mut self, tolerance: f64) -> Self {
        self.relative_tolerance = tolerance;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ProbeResult<()> {
        if self.label.is_empty() {
            return Err(ProbeError::EmptyLabel);
        }

        for tolerance in [self.absolute_tolerance, self.relative_tolerance] {
            if !tolerance.is_finite() {
                return Err(ProbeError::NonFiniteTolerance);
            }
            if tolerance < 0.0 {
                return Err(ProbeError::NegativeTolerance);
            }
        }

        Ok(())
    }

    /// Largest error accepted for a given exact value.
    #[inline]
    pub fn allowance(&self, exact: f64) -> f64 {
        self.absolute_tolerance + self.relative_tolerance * exact.abs()
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl ProbeConfig {
    /// Accept error up to one `f32` epsilon relative to the exact value.
    pub fn single_precision(label: impl Into<String>) -> Self {
        Self::new(label)
    }

    /// Flag any divergence at all between primary and shadow.
    pub fn strict(label: impl Into<String>) -> Self {
        Self::new(label).with_relative_tolerance(0.0)
    }
}
