//! Joins catalog entries with model output and orders them for review.

use crate::CalibrationBounds;
use tracing::debug;
use triage_core::{Label, PredictionRow, RankedPredictions, TriageError, TriageResult};

/// Build the ranked result set for one label universe.
///
/// `labels`, `predicted` and `raw_probs` are positionally aligned; a
/// length mismatch means the catalog and the model disagree about the
/// universe and is always a programming error, never user input.
///
/// The sort is stable and purely a function of the inputs: descending
/// display confidence, catalog order preserved among ties.
pub fn rank(
    labels: &'static [Label],
    predicted: &[bool],
    raw_probs: &[f64],
    bounds: &CalibrationBounds,
) -> TriageResult<RankedPredictions> {
    if labels.len() != predicted.len() || labels.len() != raw_probs.len() {
        return Err(TriageError::DimensionMismatch(format!(
            "catalog has {} labels but model returned {} predictions / {} probabilities",
            labels.len(),
            predicted.len(),
            raw_probs.len()
        )));
    }

    let kind = match labels.first() {
        Some(label) => label.kind,
        None => {
            return Err(TriageError::DimensionMismatch(
                "empty label catalog".to_string(),
            ))
        }
    };

    let mut rows: Vec<PredictionRow> = labels
        .iter()
        .zip(predicted.iter().zip(raw_probs.iter()))
        .map(|(label, (&predicted, &raw_prob))| PredictionRow {
            label: *label,
            predicted,
            raw_prob,
            confidence: bounds.display_confidence(raw_prob),
        })
        .collect();

    // Stable: equal confidences keep catalog order.
    rows.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!(?kind, rows = rows.len(), "ranked prediction rows");
    Ok(RankedPredictions { kind, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_core::LabelKind;

    static LABELS: &[Label] = &[
        Label {
            code: "TA0001",
            name: "Initial Access",
            kind: LabelKind::Tactic,
            stix_id: "x-mitre-tactic--aaaa",
        },
        Label {
            code: "TA0002",
            name: "Execution",
            kind: LabelKind::Tactic,
            stix_id: "x-mitre-tactic--bbbb",
        },
        Label {
            code: "TA0003",
            name: "Persistence",
            kind: LabelKind::Tactic,
            stix_id: "x-mitre-tactic--cccc",
        },
        Label {
            code: "TA0004",
            name: "Privilege Escalation",
            kind: LabelKind::Tactic,
            stix_id: "x-mitre-tactic--dddd",
        },
    ];

    fn bounds() -> CalibrationBounds {
        CalibrationBounds::new(0.0, 1.0).unwrap()
    }

    #[test]
    fn output_covers_every_label_sorted_descending() {
        let ranked = rank(
            LABELS,
            &[true, false, true, false],
            &[0.2, 0.9, 0.4, 0.7],
            &bounds(),
        )
        .unwrap();

        assert_eq!(ranked.len(), LABELS.len());
        let codes: Vec<&str> = ranked.rows.iter().map(|r| r.label.code).collect();
        assert_eq!(codes, vec!["TA0002", "TA0004", "TA0003", "TA0001"]);
        assert!(ranked
            .rows
            .windows(2)
            .all(|w| w[0].confidence >= w[1].confidence));
    }

    #[test]
    fn ties_preserve_catalog_order() {
        let ranked = rank(
            LABELS,
            &[false, false, false, false],
            &[0.5, 0.5, 0.9, 0.5],
            &bounds(),
        )
        .unwrap();

        let codes: Vec<&str> = ranked.rows.iter().map(|r| r.label.code).collect();
        assert_eq!(codes, vec!["TA0003", "TA0001", "TA0002", "TA0004"]);
    }

    #[test]
    fn rows_join_label_prediction_and_confidence() {
        let ranked = rank(LABELS, &[true, false, false, false], &[1.0, 0.0, 0.0, 0.0], &bounds())
            .unwrap();
        let top = &ranked.rows[0];
        assert_eq!(top.label.code, "TA0001");
        assert!(top.predicted);
        assert_eq!(top.raw_prob, 1.0);
        assert_eq!(top.confidence, 100.0);
    }

    #[test]
    fn dimension_mismatch_is_an_error() {
        let err = rank(LABELS, &[true, false], &[0.1, 0.2, 0.3, 0.4], &bounds()).unwrap_err();
        assert!(matches!(err, TriageError::DimensionMismatch(_)));

        let err = rank(LABELS, &[true; 4], &[0.1], &bounds()).unwrap_err();
        assert!(matches!(err, TriageError::DimensionMismatch(_)));
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let run = || {
            rank(LABELS, &[true, true, false, false], &[0.3, 0.6, 0.6, 0.1], &bounds()).unwrap()
        };
        let a = run();
        let b = run();
        let codes = |r: &RankedPredictions| -> Vec<&str> {
            r.rows.iter().map(|row| row.label.code).collect()
        };
        assert_eq!(codes(&a), codes(&b));
    }
}
