// ============================================================================
// Accuracy Probe
// Observes tracked values and reports round-off beyond tolerance
// ============================================================================

use super::config::ProbeConfig;
use super::errors::ProbeResult;
use crate::numeric::{Precision, Real, Tracked};
use std::fmt;

/// Round-off measured for one tracked value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Primary value, widened
    pub value: f64,
    /// Shadow value
    pub exact: f64,
    /// `|exact - value|`
    pub absolute_error: f64,
    /// Absolute error per unit of `|exact|`
    pub relative_error: f64,
    /// Error is outside the probe's tolerance (a NaN error always is)
    pub exceeded: bool,
}

/// Running statistics of a probe.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProbeSummary {
    /// Values observed since creation or the last reset
    pub observations: u64,
    /// Observations outside tolerance
    pub exceedances: u64,
    /// Largest `|exact - value|` seen (NaN errors are skipped)
    pub worst_absolute_error: f64,
    /// Largest relative error seen
    pub worst_relative_error: f64,
}

impl fmt::Display for ProbeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} observations, {} over tolerance, worst absolute error {:e}, worst relative error {:e}",
            self.observations,
            self.exceedances,
            self.worst_absolute_error,
            self.worst_relative_error
        )
    }
}

/// Watches tracked values in one code section.
///
/// Each call to [`AccuracyProbe::observe`] measures the value's round-off,
/// logs it and folds it into the running [`ProbeSummary`]. Values beyond
/// tolerance are logged at `warn`, the rest at `trace`.
///
/// # Example
/// ```
/// use shadow_real::numeric::{Real, Single, Tracked};
/// use shadow_real::probe::{AccuracyProbe, ProbeConfig};
///
/// let mut probe = AccuracyProbe::new(ProbeConfig::strict("harmonic")).unwrap();
/// let mut sum = Real::<Single, Tracked>::zero();
/// for k in 1..=1000 {
///     sum += 1.0f32 / k as f32;
/// }
/// assert!(probe.observe(sum).exceeded);
/// ```
#[derive(Debug, Clone)]
pub struct AccuracyProbe {
    config: ProbeConfig,
    summary: ProbeSummary,
}

impl AccuracyProbe {
    /// Create a probe from a validated configuration.
    ///
    /// # Errors
    /// Returns the validation error of `config`.
    pub fn new(config: ProbeConfig) -> ProbeResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            summary: ProbeSummary::default(),
        })
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    pub fn summary(&self) -> ProbeSummary {
        self.summary
    }

    /// Measure, log and record the round-off of `real`.
    pub fn observe<P: Precision>(&mut self, real: Real<P, Tracked>) -> Observation {
        let absolute_error = real.error().abs();
        let observation = Observation {
            value: real.widened(),
            exact: real.exact(),
            absolute_error,
            relative_error: real.relative_error(),
            exceeded: !(absolute_error <= self.config.allowance(real.exact())),
        };

        self.record(&observation);
        observation
    }

    /// Clear the running statistics.
    pub fn reset(&mut self) {
        self.summary = ProbeSummary::default();
    }

    fn record(&mut self, observation: &Observation) {
        let summary = &mut self.summary;
        summary.observations += 1;
        summary.worst_absolute_error = summary
            .worst_absolute_error
            .max(observation.absolute_error);
        summary.worst_relative_error = summary
            .worst_relative_error
            .max(observation.relative_error);

        if observation.exceeded {
            summary.exceedances += 1;
            tracing::warn!(
                label = %self.config.label,
                value = observation.value,
                exact = observation.exact,
                "round-off {:e} exceeds tolerance {:e}",
                observation.absolute_error,
                self.config.allowance(observation.exact)
            );
        } else {
            tracing::trace!(
                label = %self.config.label,
                absolute_error = observation.absolute_error,
                "round-off within tolerance"
            );
        }
    }
}
