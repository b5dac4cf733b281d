//! Ehlers-style IIR filters parameterized by a critical period
//!
//! Closed-form second-order recursive filters from John Ehlers' work on
//! cycle analysis: band-pass, high-pass, Butterworth low-pass, and the
//! two-pole Supersmoother.

use crate::analysis::{AnalysisError, TransferFunction};
use std::f64::consts::PI;

const SQRT_2_PI: f64 = std::f64::consts::SQRT_2 * PI;

fn require_positive(name: &'static str, value: f64) -> Result<(), AnalysisError> {
    if !(value.is_finite() && value > 0.0) {
        return Err(AnalysisError::InvalidParameter {
            name,
            value,
            constraint: "finite and > 0",
        });
    }
    Ok(())
}

/// Butterworth/Supersmoother shared intermediates for a critical period
///
/// a1 = e^(-√2·π/P), b1 = 2·a1·cos(√2·π/P); returns (c1, c2, c3) with
/// c1 = 1 - c2 - c3 so the resulting filters have unity DC gain.
fn two_pole_constants(period: f64) -> (f64, f64, f64) {
    let a1 = (-SQRT_2_PI / period).exp();
    let b1 = 2.0 * a1 * (SQRT_2_PI / period).cos();
    let c2 = b1;
    let c3 = -a1 * a1;
    let c1 = 1.0 - c2 - c3;
    (c1, c2, c3)
}

/// Band-pass filter centered on `center_period` samples per cycle
///
/// Pass band is roughly 30 percent of the center period. Exact nulls at DC
/// and Nyquist; near-unity gain at the center frequency 2π/P.
///
/// The formulas assume the center lies inside the Nyquist band: periods of
/// 4 samples or less push cos(2π/P) to zero or negative and the resonator
/// design collapses, producing extreme or non-finite coefficients. Such
/// inputs pass validation (they are well-formed parameters describing a
/// degenerate filter); the degeneracy surfaces in the response data.
///
/// # Errors
/// `InvalidParameter` unless `center_period` is finite and positive.
pub fn band_pass(center_period: f64) -> Result<TransferFunction, AnalysisError> {
    require_positive("center_period", center_period)?;

    let beta = (2.0 * PI / center_period).cos();
    let gamma = 1.0 / (2.0 * PI / center_period).cos();
    let alpha = gamma - (gamma * gamma - 1.0).sqrt();

    TransferFunction::new(
        "Ehlers band-pass filter",
        vec![0.5 * (1.0 - alpha), 0.0, -0.5 * (1.0 - alpha)],
        vec![1.0, -beta * (1.0 + alpha), alpha],
        1.0,
        "pass band is 30 percent of the center period",
    )
}

/// Second-order high-pass filter with critical period `critical_period`
///
/// Rejects DC exactly (the numerator is a second difference) and passes
/// cycles shorter than the critical period with near-unity gain.
///
/// # Errors
/// `InvalidParameter` unless `critical_period` and `sample_rate` are finite
/// and positive.
pub fn high_pass(critical_period: f64, sample_rate: f64) -> Result<TransferFunction, AnalysisError> {
    require_positive("critical_period", critical_period)?;
    require_positive("sample_rate", sample_rate)?;

    let period = sample_rate * critical_period;
    let angle = 2.0 * PI / period;
    let alpha1 = (angle.cos() + angle.sin() - 1.0) / angle.cos();

    let c1 = (1.0 - alpha1 / 2.0).powi(2);
    let c2 = 2.0 * (1.0 - alpha1);
    let c3 = -(1.0 - alpha1).powi(2);

    TransferFunction::new(
        "Ehlers high-pass filter",
        vec![c1, -2.0 * c1, c1],
        vec![1.0, -c2, -c3],
        sample_rate,
        "second-order IIR",
    )
}

/// Two-pole Butterworth low-pass with critical period `critical_period`
///
/// # Errors
/// `InvalidParameter` unless `critical_period` and `sample_rate` are finite
/// and positive.
pub fn butterworth(
    critical_period: f64,
    sample_rate: f64,
) -> Result<TransferFunction, AnalysisError> {
    require_positive("critical_period", critical_period)?;
    require_positive("sample_rate", sample_rate)?;

    let (c1, c2, c3) = two_pole_constants(sample_rate * critical_period);

    TransferFunction::new(
        "Ehlers second-order Butterworth filter",
        vec![c1],
        vec![1.0, -c2, -c3],
        sample_rate,
        "",
    )
}

/// Ehlers Supersmoother: two-pole Butterworth with a two-sample average
///
/// The averaged numerator kills the near-Nyquist leakage the plain
/// Butterworth lets through, at the cost of half a sample of extra delay.
///
/// # Errors
/// `InvalidParameter` unless `critical_period` and `sample_rate` are finite
/// and positive.
pub fn supersmoother(
    critical_period: f64,
    sample_rate: f64,
) -> Result<TransferFunction, AnalysisError> {
    require_positive("critical_period", critical_period)?;
    require_positive("sample_rate", sample_rate)?;

    let (c1, c2, c3) = two_pole_constants(sample_rate * critical_period);

    TransferFunction::new(
        "Supersmoother",
        vec![c1, c1],
        vec![2.0, -2.0 * c2, -2.0 * c3],
        sample_rate,
        "",
    )
}
