//! Group delay estimation from transfer-function coefficients
//!
//! Differencing the unwrapped phase sequence amplifies noise near phase
//! discontinuities and at the grid's resolution limit, so group delay is
//! computed from the coefficients instead.

use super::response::polynomial_at;

/// Threshold below which a numerator evaluation counts as a zero on the
/// unit circle (the scipy convention of 10 machine epsilons)
const SINGULAR_ZERO_TOLERANCE: f64 = 10.0 * f64::EPSILON;

/// Multiply each coefficient by its delay index k
///
/// The resulting polynomial evaluates to j·dP/dθ for P(θ) = Σ c_k e^{-jkθ},
/// which is the ingredient the group-delay formula needs.
fn delay_weighted(coefficients: &[f64]) -> Vec<f64> {
    coefficients
        .iter()
        .enumerate()
        .map(|(k, &coefficient)| k as f64 * coefficient)
        .collect()
}

/// Group delay τ(θ) = -d/dθ[arg H(e^{jθ})] per sample angle
///
/// Uses the classical rational-filter formula
/// τ = Re(Nw/N - Dw/D), where N and D are the numerator and denominator
/// evaluations at e^{-jθ} and Nw, Dw the same evaluations with each
/// coefficient weighted by its delay index. One real value per angle, in
/// samples.
///
/// Singularities split two ways: a zero on the unit circle flips the phase
/// by π, so its derivative ratio blows up even though the filter's delay is
/// perfectly well behaved on either side - those samples are reported as
/// zero, following the scipy convention. A pole on the circle (D vanishing
/// exactly) is a genuine degeneracy of the filter and stays non-finite,
/// reported as data, never raised.
pub(crate) fn group_delay_from_coefficients(
    numerator: &[f64],
    denominator: &[f64],
    angular_frequency: &[f64],
) -> Vec<f64> {
    let numerator_weighted = delay_weighted(numerator);
    let denominator_weighted = delay_weighted(denominator);

    angular_frequency
        .iter()
        .map(|&theta| {
            let num = polynomial_at(numerator, theta);
            let den = polynomial_at(denominator, theta);
            let pole_term = (polynomial_at(&denominator_weighted, theta) / den).re;

            if num.norm() < SINGULAR_ZERO_TOLERANCE {
                return if pole_term.is_finite() { 0.0 } else { f64::NAN };
            }

            (polynomial_at(&numerator_weighted, theta) / num).re - pole_term
        })
        .collect()
}
