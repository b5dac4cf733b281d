//! Phase unwrapping
//!
//! Converts a principal-value angle sequence into a continuous phase curve

use std::f64::consts::PI;

/// Unwrap a sequence of principal-value angles
///
/// Scans the sequence in increasing-frequency order and adds integer
/// multiples of 2π so that no step between adjacent samples exceeds π in
/// magnitude. The output differs from the input by multiples of 2π only;
/// wrapped differences between adjacent samples are preserved.
///
/// # Arguments
/// * `angles` - Principal-value angles, each in (-π, π]
///
/// # Returns
/// Continuous angle sequence of the same length
pub fn unwrap_phase(angles: &[f64]) -> Vec<f64> {
    let mut unwrapped = Vec::with_capacity(angles.len());
    let mut offset = 0.0;
    let mut previous = f64::NAN;

    for &angle in angles {
        if previous.is_finite() {
            let step = angle + offset - previous;
            if step > PI {
                offset -= 2.0 * PI;
            } else if step < -PI {
                offset += 2.0 * PI;
            }
        }
        let value = angle + offset;
        // Non-finite samples pass through without disturbing the offset
        if value.is_finite() {
            previous = value;
        }
        unwrapped.push(value);
    }

    unwrapped
}
