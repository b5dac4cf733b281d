//! Moving-average and elementary FIR smoothers
//!
//! Each constructor is a pure function from a small parameter set to a
//! `TransferFunction`; the only failure path is parameter validation.

use crate::analysis::{AnalysisError, TransferFunction};

/// Simple moving average over `window` samples
///
/// N(z^-1) = 1 + z^-1 + ... + z^-(window-1), D(z^-1) = window.
/// Unity DC gain, first spectral null at θ = 2π/window.
///
/// # Errors
/// `InvalidParameter` when `window` is zero.
pub fn moving_average(window: usize) -> Result<TransferFunction, AnalysisError> {
    if window == 0 {
        return Err(AnalysisError::InvalidParameter {
            name: "window",
            value: 0.0,
            constraint: ">= 1",
        });
    }

    TransferFunction::new(
        format!("{}-sample moving average", window),
        vec![1.0; window],
        vec![window as f64],
        1.0,
        "no poles, FIR",
    )
}

/// Single-pole exponential smoother with decay `alpha`
///
/// H(z) = α / (1 - (1-α)z^-1). Unity DC gain for any α in (0, 1);
/// smaller α smooths harder and delays more.
///
/// # Errors
/// `InvalidParameter` unless α lies strictly inside (0, 1).
pub fn exponential_smoother(alpha: f64) -> Result<TransferFunction, AnalysisError> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(AnalysisError::InvalidParameter {
            name: "alpha",
            value: alpha,
            constraint: "strictly inside (0, 1)",
        });
    }

    TransferFunction::new(
        "exponential smoother",
        vec![alpha],
        vec![1.0, -(1.0 - alpha)],
        1.0,
        "1 pole, no zeros",
    )
}

/// First-order high-pass FIR: H(z) = (1 - z^-1) / 2
pub fn first_order_high_pass_fir() -> Result<TransferFunction, AnalysisError> {
    TransferFunction::new(
        "first-order high-pass FIR",
        vec![1.0, -1.0],
        vec![2.0],
        1.0,
        "differencer, null at DC",
    )
}

/// First-order low-pass FIR: H(z) = (1 + z^-1) / 2
pub fn first_order_low_pass_fir() -> Result<TransferFunction, AnalysisError> {
    TransferFunction::new(
        "first-order low-pass FIR",
        vec![1.0, 1.0],
        vec![2.0],
        1.0,
        "two-sample average, null at Nyquist",
    )
}

/// Second-order low-pass FIR: H(z) = (1 + 2z^-1 + z^-2) / 4
pub fn second_order_low_pass_fir() -> Result<TransferFunction, AnalysisError> {
    TransferFunction::new(
        "second-order low-pass FIR",
        vec![1.0, 2.0, 1.0],
        vec![4.0],
        1.0,
        "binomial taps",
    )
}
