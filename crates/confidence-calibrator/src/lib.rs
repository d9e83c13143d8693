//! Confidence Calibrator Module
//!
//! Rescales raw multi-label model probabilities into bounded [0, 100]
//! display confidences using the per-universe min/max bounds learned at
//! training time, and ranks the joined prediction rows for display.

pub mod calibrator;
pub mod ranker;

pub use calibrator::{CalibrationBounds, CalibrationSnapshot};
pub use ranker::rank;
