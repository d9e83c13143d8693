use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which label universe an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabelKind {
    Tactic,
    Technique,
}

/// One catalog entry. Carries the ATT&CK code, the display name and the
/// STIX identifier together so the code/name/identifier tables can never
/// drift out of alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Label {
    pub code: &'static str,
    pub name: &'static str,
    pub kind: LabelKind,
    pub stix_id: &'static str,
}

/// One row of a ranked prediction, joined from the catalog entry, the
/// binary decision and the calibrated display confidence. Request-scoped;
/// never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionRow {
    pub label: Label,
    pub predicted: bool,
    pub raw_prob: f64,
    /// Calibrated confidence in [0, 100].
    pub confidence: f64,
}

/// Rows for one label universe, sorted by descending display confidence.
#[derive(Debug, Clone, Serialize)]
pub struct RankedPredictions {
    pub kind: LabelKind,
    pub rows: Vec<PredictionRow>,
}

impl RankedPredictions {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A curator-confirmed report prepared for STIX export. Built whole, then
/// written exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRecord {
    pub report_text: String,
    pub author_name: String,
    pub report_date: String,
    /// Deduplicated STIX identifiers of the confirmed labels.
    pub reference_ids: BTreeSet<String>,
}

/// A curator-confirmed report prepared for the training corpus. The text
/// is tab-safe (line breaks already flattened) and the keys are the raw
/// catalog codes, not STIX identifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingExample {
    pub report_text: String,
    pub label_keys: BTreeSet<String>,
}

/// Raw model output for one report, aligned positionally with the tactic
/// and technique catalogs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelOutput {
    pub tactic_predictions: Vec<bool>,
    pub tactic_probabilities: Vec<f64>,
    pub technique_predictions: Vec<bool>,
    pub technique_probabilities: Vec<f64>,
}
