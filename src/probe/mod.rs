// ============================================================================
// Probe Module
// Round-off monitoring for tracked values
// ============================================================================
//
// This module provides:
// - ProbeConfig: tolerances for one watched code section
// - AccuracyProbe: measures, logs and summarizes round-off of Real<P, Tracked>
// - ProbeError: configuration errors

mod config;
mod errors;
mod monitor;

pub use config::ProbeConfig;
pub use errors::{ProbeError, ProbeResult};
pub use monitor::{AccuracyProbe, Observation, ProbeSummary};
