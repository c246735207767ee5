//! Error statistics between a reference and an observed series.

use serde::Serialize;

/// Errors related to metric computation.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MetricsError {
    /// The two series do not have the same length.
    LengthMismatch,
    /// No usable pair of values to aggregate ("no data").
    InsufficientData,
}

/// RMSE and mean signed bias of reference vs. observed, rounded to two
/// decimals for display. Computed once per load and immutable afterward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ErrorMetrics {
    /// Root-mean-square error, non-negative.
    pub rmse: f64,
    /// Mean of `reference - observed`; positive means the reference
    /// overestimates.
    pub bias: f64,
    /// Number of pairs that entered the mean.
    pub samples: usize,
}

impl ErrorMetrics {
    /// Compute both metrics over positionally paired values.
    ///
    /// Pairs where either side is the missing sentinel (`NAN`) are excluded
    /// from the count and the sums instead of poisoning the whole mean. If
    /// nothing is left after exclusion the result is
    /// [`MetricsError::InsufficientData`].
    pub fn compute(reference: &[f64], observed: &[f64]) -> Result<ErrorMetrics, MetricsError> {
        if reference.len() != observed.len() {
            return Err(MetricsError::LengthMismatch);
        }

        let mut n = 0usize;
        let mut squared_sum = 0.0;
        let mut signed_sum = 0.0;
        for (&r, &o) in reference.iter().zip(observed.iter()) {
            let diff = r - o;
            if diff.is_nan() {
                continue;
            }
            n += 1;
            squared_sum += diff * diff;
            signed_sum += diff;
        }

        if n == 0 {
            return Err(MetricsError::InsufficientData);
        }

        Ok(ErrorMetrics {
            rmse: round2((squared_sum / n as f64).sqrt()),
            bias: round2(signed_sum / n as f64),
            samples: n,
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
