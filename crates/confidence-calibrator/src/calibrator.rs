//! Min-max confidence calibration.
//!
//! Training records, per label universe, the lowest and highest raw
//! probability the model produced over the validation split. At serving
//! time a raw probability is rescaled against that observed range and
//! clamped, so the UI always shows a confidence in [0, 100] no matter
//! how far the model drifts outside its training-time range.

use serde::{Deserialize, Serialize};
use triage_core::{CalibrationParams, TriageError, TriageResult};

/// Observed raw-probability range for one label universe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationBounds {
    pub min_prob: f64,
    pub max_prob: f64,
}

impl CalibrationBounds {
    /// Build validated bounds. Fails fast on a degenerate range (a
    /// universe whose scores never varied in training) so NaN/Inf can
    /// never reach a ranked result.
    pub fn new(min_prob: f64, max_prob: f64) -> TriageResult<Self> {
        if !min_prob.is_finite() || !max_prob.is_finite() {
            return Err(TriageError::Calibration(format!(
                "non-finite bounds ({min_prob}, {max_prob})"
            )));
        }
        if max_prob <= min_prob {
            return Err(TriageError::Calibration(format!(
                "max_prob {max_prob} must exceed min_prob {min_prob}"
            )));
        }
        Ok(Self { min_prob, max_prob })
    }

    /// Rescale a raw probability into a [0, 100] display confidence.
    /// Values outside the training-time range clamp to exactly 0 or 100.
    pub fn display_confidence(&self, raw_prob: f64) -> f64 {
        let scaled = (raw_prob - self.min_prob) / (self.max_prob - self.min_prob);
        scaled.clamp(0.0, 1.0) * 100.0
    }
}

/// Immutable calibration state for the whole process: one bounds pair
/// per label universe. Loaded from the training collaborator's
/// parameters artifact and replaced wholesale after a retrain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationSnapshot {
    pub tactics: CalibrationBounds,
    pub techniques: CalibrationBounds,
}

impl CalibrationSnapshot {
    pub fn from_params(params: &CalibrationParams) -> TriageResult<Self> {
        Ok(Self {
            tactics: CalibrationBounds::new(params.tactics.0, params.tactics.1)?,
            techniques: CalibrationBounds::new(params.techniques.0, params.techniques.1)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> CalibrationBounds {
        CalibrationBounds::new(0.2, 0.8).unwrap()
    }

    #[test]
    fn midpoint_maps_to_fifty() {
        assert!((bounds().display_confidence(0.5) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_clamps_to_extremes() {
        assert_eq!(bounds().display_confidence(0.9), 100.0);
        assert_eq!(bounds().display_confidence(0.1), 0.0);
        assert_eq!(bounds().display_confidence(0.8), 100.0);
        assert_eq!(bounds().display_confidence(0.2), 0.0);
    }

    #[test]
    fn in_range_is_bounded_and_monotonic() {
        let b = bounds();
        let mut last = -1.0;
        for i in 0..=60 {
            let raw = 0.2 + i as f64 * 0.01;
            let c = b.display_confidence(raw);
            assert!((0.0..=100.0).contains(&c));
            assert!(c >= last);
            last = c;
        }
    }

    #[test]
    fn degenerate_bounds_are_rejected() {
        assert!(matches!(
            CalibrationBounds::new(0.5, 0.5),
            Err(TriageError::Calibration(_))
        ));
        assert!(matches!(
            CalibrationBounds::new(0.8, 0.2),
            Err(TriageError::Calibration(_))
        ));
        assert!(matches!(
            CalibrationBounds::new(f64::NAN, 0.5),
            Err(TriageError::Calibration(_))
        ));
    }

    #[test]
    fn snapshot_rejects_any_degenerate_universe() {
        let params = triage_core::CalibrationParams {
            tactics: (0.1, 0.9),
            techniques: (0.4, 0.4),
        };
        assert!(CalibrationSnapshot::from_params(&params).is_err());
    }
}
