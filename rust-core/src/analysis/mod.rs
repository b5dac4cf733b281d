//! Transfer-function analysis engine
//!
//! Evaluates rational transfer functions on the unit circle and derives
//! magnitude, phase, group delay, and period views from the complex gain.

pub mod transfer;
pub mod response;
pub mod phase;
pub mod group_delay;

pub use transfer::TransferFunction;
pub use response::{FrequencyResponse, DEFAULT_SAMPLE_COUNT};
pub use phase::unwrap_phase;

use thiserror::Error;

/// Construction-time validation errors.
///
/// Raised only while building a `TransferFunction` (directly or through the
/// catalog). Per-sample numeric degeneracies - infinite period at DC, -inf dB
/// at a spectral null, non-finite group delay at a denominator root - are not
/// errors; they are propagated in the output sequences as IEEE sentinels.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Numerator has no coefficients (zero filter is rejected)")]
    EmptyNumerator,

    #[error("Denominator has no coefficients")]
    EmptyDenominator,

    #[error("Denominator leading coefficient (z^0 term) is zero; transfer function is ill-defined")]
    ZeroLeadingDenominator,

    #[error("Sample rate must be finite and positive (got {0})")]
    InvalidSampleRate(f64),

    #[error("Parameter `{name}` out of range: got {value}, expected {constraint}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        constraint: &'static str,
    },
}
