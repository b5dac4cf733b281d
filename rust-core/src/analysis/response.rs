//! Frequency response computation
//!
//! Evaluates a rational transfer function H(z) = N(z^-1)/D(z^-1) on the
//! upper unit-circle arc z = e^{jθ}, θ ∈ [0, π), and derives the named
//! output sequences from the complex gain.

use super::group_delay::group_delay_from_coefficients;
use super::phase::unwrap_phase;
use num_complex::Complex64;
use std::f64::consts::PI;

/// Default number of sample angles on the half circle
pub const DEFAULT_SAMPLE_COUNT: usize = 512;

/// Evaluate a polynomial in z^-1 at z = e^{jθ} by direct summation
///
/// Coefficient at index k multiplies z^-k, so the value is
/// Σ coeff[k] · e^{-jkθ}. Coefficient counts are small (tens at most), so
/// direct summation matches the definition exactly with no FFT detour.
pub(crate) fn polynomial_at(coefficients: &[f64], theta: f64) -> Complex64 {
    let mut sum = Complex64::new(0.0, 0.0);
    for (k, &coefficient) in coefficients.iter().enumerate() {
        let angle = -(theta * k as f64);
        sum += coefficient * Complex64::new(angle.cos(), angle.sin());
    }
    sum
}

/// Frequency response of a transfer function, computed once and immutable
///
/// All sequences have the same length and consistent indexing: index i in
/// every sequence refers to the same sample angle. Degenerate samples
/// (division by a vanishing denominator, log of zero magnitude, reciprocal
/// of zero frequency) are carried as IEEE non-finite values, never raised.
#[derive(Debug, Clone)]
pub struct FrequencyResponse {
    /// Sample angles θ in radians, k·π/N for k = 0..N
    angular_frequency: Vec<f64>,

    /// H(e^{jθ}) per sample angle
    complex_gain: Vec<Complex64>,

    /// Cycles per sample: θ · fs / 2π
    frequency: Vec<f64>,

    /// Samples per cycle: 1 / frequency (+∞ at DC)
    period: Vec<f64>,

    /// 20·log10(|H|) (-∞ at a spectral null)
    magnitude_db: Vec<f64>,

    /// Unwrapped phase in radians
    phase: Vec<f64>,

    /// Group delay in samples, from the coefficient formula
    group_delay: Vec<f64>,
}

impl FrequencyResponse {
    /// Compute the response over the default half-circle grid
    ///
    /// # Arguments
    /// * `numerator` - Coefficients of N(z^-1), index k multiplies z^-k
    /// * `denominator` - Coefficients of D(z^-1), same convention
    /// * `sample_rate` - Samples per unit time, scales the frequency axis
    /// * `sample_count` - Number of grid points N; angles are k·π/N
    ///
    /// Coefficient validity is the caller's concern (`TransferFunction`
    /// validates before delegating here).
    pub(crate) fn compute(
        numerator: &[f64],
        denominator: &[f64],
        sample_rate: f64,
        sample_count: usize,
    ) -> Self {
        let angular_frequency: Vec<f64> = (0..sample_count)
            .map(|k| k as f64 * PI / sample_count as f64)
            .collect();

        // A vanishing denominator at some angle is a property of the filter,
        // not of the engine: the division result (possibly non-finite) is
        // kept as-is and left to downstream consumers.
        let complex_gain: Vec<Complex64> = angular_frequency
            .iter()
            .map(|&theta| polynomial_at(numerator, theta) / polynomial_at(denominator, theta))
            .collect();

        let frequency: Vec<f64> = angular_frequency
            .iter()
            .map(|&theta| theta * sample_rate / (2.0 * PI))
            .collect();

        let period: Vec<f64> = frequency.iter().map(|&f| 1.0 / f).collect();

        let magnitude_db: Vec<f64> = complex_gain
            .iter()
            .map(|gain| 20.0 * gain.norm().log10())
            .collect();

        let principal: Vec<f64> = complex_gain.iter().map(|gain| gain.arg()).collect();
        let phase = unwrap_phase(&principal);

        let group_delay =
            group_delay_from_coefficients(numerator, denominator, &angular_frequency);

        Self {
            angular_frequency,
            complex_gain,
            frequency,
            period,
            magnitude_db,
            phase,
            group_delay,
        }
    }

    /// Number of sample angles
    pub fn len(&self) -> usize {
        self.angular_frequency.len()
    }

    /// True when the response has no samples
    pub fn is_empty(&self) -> bool {
        self.angular_frequency.is_empty()
    }

    /// Sample angles θ in radians, spanning [0, π)
    pub fn angular_frequency(&self) -> &[f64] {
        &self.angular_frequency
    }

    /// Complex gain H(e^{jθ}) per sample angle
    pub fn complex_gain(&self) -> &[Complex64] {
        &self.complex_gain
    }

    /// Frequency axis in cycles per sample
    pub fn frequency(&self) -> &[f64] {
        &self.frequency
    }

    /// Period axis in samples per cycle (+∞ at DC)
    pub fn period(&self) -> &[f64] {
        &self.period
    }

    /// Gain in dB (-∞ at a spectral null)
    pub fn magnitude_db(&self) -> &[f64] {
        &self.magnitude_db
    }

    /// Unwrapped phase in radians
    pub fn phase(&self) -> &[f64] {
        &self.phase
    }

    /// Group delay in samples
    pub fn group_delay(&self) -> &[f64] {
        &self.group_delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_shape() {
        let response = FrequencyResponse::compute(&[1.0], &[1.0], 1.0, DEFAULT_SAMPLE_COUNT);
        let w = response.angular_frequency();

        assert_eq!(w.len(), DEFAULT_SAMPLE_COUNT);
        assert_eq!(w[0], 0.0);
        assert!((w[DEFAULT_SAMPLE_COUNT - 1] - PI * 511.0 / 512.0).abs() < 1e-12);

        for pair in w.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_all_sequences_equal_length() {
        let response = FrequencyResponse::compute(&[1.0, 1.0], &[2.0], 1.0, 64);
        let n = response.len();
        assert_eq!(response.complex_gain().len(), n);
        assert_eq!(response.frequency().len(), n);
        assert_eq!(response.period().len(), n);
        assert_eq!(response.magnitude_db().len(), n);
        assert_eq!(response.phase().len(), n);
        assert_eq!(response.group_delay().len(), n);
    }

    #[test]
    fn test_unity_filter_gain() {
        let response = FrequencyResponse::compute(&[1.0], &[1.0], 1.0, 128);
        for (&gain_db, gain) in response
            .magnitude_db()
            .iter()
            .zip(response.complex_gain().iter())
        {
            assert!(gain_db.abs() < 1e-10);
            assert!((gain.re - 1.0).abs() < 1e-12);
            assert!(gain.im.abs() < 1e-12);
        }
    }

    #[test]
    fn test_period_is_reciprocal_frequency() {
        let response = FrequencyResponse::compute(&[1.0, 1.0], &[2.0], 1.0, 64);
        let frequency = response.frequency();
        let period = response.period();

        assert_eq!(frequency[0], 0.0);
        assert!(period[0].is_infinite() && period[0] > 0.0);
        for i in 1..frequency.len() {
            assert_eq!(period[i], 1.0 / frequency[i]);
        }
    }

    #[test]
    fn test_sample_rate_scales_frequency_axis() {
        let slow = FrequencyResponse::compute(&[1.0], &[1.0], 1.0, 32);
        let fast = FrequencyResponse::compute(&[1.0], &[1.0], 4.0, 32);
        for (a, b) in slow.frequency().iter().zip(fast.frequency().iter()) {
            assert!((b - 4.0 * a).abs() < 1e-12);
        }
    }

    #[test]
    fn test_polynomial_at_matches_direct_sum() {
        // [1, -1] at θ = π/2: 1 - e^{-jπ/2} = 1 + j
        let value = polynomial_at(&[1.0, -1.0], PI / 2.0);
        assert!((value.re - 1.0).abs() < 1e-12);
        assert!((value.im - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_spectral_null_is_negative_infinity() {
        // Differencer [1, -1] has an exact null at DC, which the grid hits
        let response = FrequencyResponse::compute(&[1.0, -1.0], &[2.0], 1.0, 64);
        assert!(response.magnitude_db()[0].is_infinite());
        assert!(response.magnitude_db()[0] < 0.0);
    }
}
