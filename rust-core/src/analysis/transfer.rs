//! Transfer function value object
//!
//! Owns its coefficients and the frequency response derived from them.
//! The response is computed eagerly at construction, so there is no stale
//! derived state; changing a filter means building a new instance.

use super::response::{FrequencyResponse, DEFAULT_SAMPLE_COUNT};
use super::AnalysisError;
use num_complex::Complex64;

/// A rational transfer function H(z) = N(z^-1)/D(z^-1) with its response
///
/// Coefficients are indexed by increasing negative powers of the unit
/// delay: `[a, b, c]` stands for a + b·z^-1 + c·z^-2. The `name` and
/// `comment` are display metadata with no semantic effect.
#[derive(Debug, Clone)]
pub struct TransferFunction {
    name: String,
    comment: String,
    numerator: Vec<f64>,
    denominator: Vec<f64>,
    sample_rate: f64,
    response: FrequencyResponse,
}

impl TransferFunction {
    /// Build a transfer function and compute its frequency response
    ///
    /// # Arguments
    /// * `name` - Display name, used for plot titles
    /// * `numerator` - N(z^-1) coefficients, must be non-empty
    /// * `denominator` - D(z^-1) coefficients, must be non-empty with a
    ///   non-zero z^0 term
    /// * `sample_rate` - Samples per unit time, must be finite and positive
    /// * `comment` - Free-form display note
    ///
    /// # Errors
    /// `AnalysisError` when the coefficients or sample rate are invalid.
    /// Validation failures are programming errors in the caller and are
    /// never silently corrected.
    pub fn new(
        name: impl Into<String>,
        numerator: Vec<f64>,
        denominator: Vec<f64>,
        sample_rate: f64,
        comment: impl Into<String>,
    ) -> Result<Self, AnalysisError> {
        Self::with_sample_count(
            name,
            numerator,
            denominator,
            sample_rate,
            comment,
            DEFAULT_SAMPLE_COUNT,
        )
    }

    /// Build with unit sample rate and no comment
    pub fn from_coefficients(
        name: impl Into<String>,
        numerator: Vec<f64>,
        denominator: Vec<f64>,
    ) -> Result<Self, AnalysisError> {
        Self::new(name, numerator, denominator, 1.0, "")
    }

    /// Build with an explicit response grid size
    pub fn with_sample_count(
        name: impl Into<String>,
        numerator: Vec<f64>,
        denominator: Vec<f64>,
        sample_rate: f64,
        comment: impl Into<String>,
        sample_count: usize,
    ) -> Result<Self, AnalysisError> {
        if numerator.is_empty() {
            return Err(AnalysisError::EmptyNumerator);
        }
        if denominator.is_empty() {
            return Err(AnalysisError::EmptyDenominator);
        }
        if denominator[0] == 0.0 {
            return Err(AnalysisError::ZeroLeadingDenominator);
        }
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(AnalysisError::InvalidSampleRate(sample_rate));
        }

        let response =
            FrequencyResponse::compute(&numerator, &denominator, sample_rate, sample_count);

        Ok(Self {
            name: name.into(),
            comment: comment.into(),
            numerator,
            denominator,
            sample_rate,
            response,
        })
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display comment
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// N(z^-1) coefficients
    pub fn numerator(&self) -> &[f64] {
        &self.numerator
    }

    /// D(z^-1) coefficients
    pub fn denominator(&self) -> &[f64] {
        &self.denominator
    }

    /// Samples per unit time
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// The eagerly computed frequency response
    pub fn response(&self) -> &FrequencyResponse {
        &self.response
    }

    /// Sample angles θ in radians
    pub fn angular_frequency(&self) -> &[f64] {
        self.response.angular_frequency()
    }

    /// Complex gain per sample angle
    pub fn complex_gain(&self) -> &[Complex64] {
        self.response.complex_gain()
    }

    /// Frequency axis in cycles per sample
    pub fn frequency(&self) -> &[f64] {
        self.response.frequency()
    }

    /// Period axis in samples per cycle
    pub fn period(&self) -> &[f64] {
        self.response.period()
    }

    /// Gain in dB
    pub fn magnitude_db(&self) -> &[f64] {
        self.response.magnitude_db()
    }

    /// Unwrapped phase in radians
    pub fn phase(&self) -> &[f64] {
        self.response.phase()
    }

    /// Group delay in samples
    pub fn group_delay(&self) -> &[f64] {
        self.response.group_delay()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_rejects_empty_denominator() {
        let result = TransferFunction::from_coefficients("bad", vec![1.0], vec![]);
        assert_eq!(result.unwrap_err(), AnalysisError::EmptyDenominator);
    }

    #[test]
    fn test_rejects_zero_leading_denominator() {
        let result = TransferFunction::from_coefficients("bad", vec![1.0], vec![0.0, 1.0]);
        assert_eq!(result.unwrap_err(), AnalysisError::ZeroLeadingDenominator);
    }

    #[test]
    fn test_rejects_empty_numerator() {
        let result = TransferFunction::from_coefficients("bad", vec![], vec![1.0]);
        assert_eq!(result.unwrap_err(), AnalysisError::EmptyNumerator);
    }

    #[test]
    fn test_rejects_bad_sample_rate() {
        for rate in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = TransferFunction::new("bad", vec![1.0], vec![1.0], rate, "");
            assert!(matches!(
                result.unwrap_err(),
                AnalysisError::InvalidSampleRate(_)
            ));
        }
    }

    #[test]
    fn test_ten_tap_average_response() {
        let tf = TransferFunction::from_coefficients(
            "10-sample moving average",
            vec![1.0; 10],
            vec![10.0],
        )
        .unwrap();

        // Unity DC gain
        assert!(tf.magnitude_db()[0].abs() < 1e-10);

        // Deep null near θ = 2π/10
        let w = tf.angular_frequency();
        let null_theta = 2.0 * PI / 10.0;
        let (null_idx, _) = w
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                (*a - null_theta)
                    .abs()
                    .partial_cmp(&(*b - null_theta).abs())
                    .unwrap()
            })
            .unwrap();
        assert!(tf.magnitude_db()[null_idx] < -40.0);
    }

    #[test]
    fn test_exponential_smoother_monotone_rolloff() {
        for alpha in [0.2, 0.5, 0.8] {
            let tf = TransferFunction::from_coefficients(
                "exponential smoother",
                vec![alpha],
                vec![1.0, -(1.0 - alpha)],
            )
            .unwrap();

            // DC gain ≈ 1 (0 dB)
            assert!(tf.magnitude_db()[0].abs() < 1e-10);

            // Gain strictly decreases with frequency
            for pair in tf.magnitude_db().windows(2) {
                assert!(pair[1] < pair[0]);
            }
        }
    }

    #[test]
    fn test_phase_unwrapping_preserves_wrapped_differences() {
        // Long FIR so the principal phase wraps several times across the grid
        let tf =
            TransferFunction::from_coefficients("long averager", vec![1.0; 16], vec![16.0])
                .unwrap();

        let phase = tf.phase();
        let principal: Vec<f64> = tf.complex_gain().iter().map(|g| g.arg()).collect();
        for (p, q) in phase.iter().zip(principal.iter()) {
            let turns = (p - q) / (2.0 * PI);
            assert!((turns - turns.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_metadata_carried_through() {
        let tf = TransferFunction::new(
            "named",
            vec![1.0],
            vec![1.0],
            2.0,
            "a comment",
        )
        .unwrap();
        assert_eq!(tf.name(), "named");
        assert_eq!(tf.comment(), "a comment");
        assert_eq!(tf.sample_rate(), 2.0);
        assert_eq!(tf.numerator(), &[1.0]);
        assert_eq!(tf.denominator(), &[1.0]);
    }
}
