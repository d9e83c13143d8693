//! Routes a confirmed report to the export sink or the corpus sink.

use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;
use tracing::info;
use triage_core::{CorpusSink, ExportRecord, ExportSink, TrainingExample, TriageError, TriageResult};

/// Form field carrying the reviewed report text.
pub const FIELD_REPORT: &str = "hidereport";
/// Form fields carrying export metadata.
pub const FIELD_NAME: &str = "name";
pub const FIELD_DATE: &str = "date";
/// Mode flags submitted by the review form.
pub const FLAG_EXPORT: &str = "filesave";
pub const FLAG_TRAIN: &str = "trainsave";

/// The two terminal persistence modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    Export,
    TrainAppend,
}

impl SaveMode {
    /// Resolve the mode from the submitted form. Exactly one of the two
    /// flags must be present; zero or both is a rejected submission and
    /// nothing is written.
    pub fn from_form(form: &HashMap<String, String>) -> TriageResult<Self> {
        match (form.contains_key(FLAG_EXPORT), form.contains_key(FLAG_TRAIN)) {
            (true, false) => Ok(Self::Export),
            (false, true) => Ok(Self::TrainAppend),
            (true, true) => Err(TriageError::InvalidRequest(
                "both filesave and trainsave requested; pick one".to_string(),
            )),
            (false, false) => Err(TriageError::InvalidRequest(
                "no save mode requested".to_string(),
            )),
        }
    }
}

/// What the router did with the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Bundle written; path is served back for download.
    Exported(PathBuf),
    /// One row appended to the training corpus.
    Appended,
}

fn required_field<'a>(form: &'a HashMap<String, String>, key: &str) -> TriageResult<&'a str> {
    form.get(key)
        .map(String::as_str)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| TriageError::InvalidRequest(format!("missing form field '{key}'")))
}

/// Keys in the form that name catalog labels (the confirmed checkboxes).
fn confirmed_labels(form: &HashMap<String, String>) -> impl Iterator<Item = &'static triage_core::Label> + '_ {
    form.keys().filter_map(|key| label_catalog::find(key))
}

/// Build the export record: confirmed label keys are translated to their
/// STIX identifiers, line breaks collapse to spaces. The record is fully
/// built before anything touches the sink.
pub fn prepare_export(form: &HashMap<String, String>) -> TriageResult<ExportRecord> {
    let report = required_field(form, FIELD_REPORT)?;
    let author = required_field(form, FIELD_NAME)?;
    let date = required_field(form, FIELD_DATE)?;

    let reference_ids: BTreeSet<String> = confirmed_labels(form)
        .map(|label| label.stix_id.to_string())
        .collect();

    Ok(ExportRecord {
        report_text: report_normalizer::flatten_for_export(report),
        author_name: author.to_string(),
        report_date: date.to_string(),
        reference_ids,
    })
}

/// Build the training example: confirmed label keys are kept raw (the
/// trainer speaks catalog codes, not STIX), and the text goes through
/// the full charset reversal plus tab flattening so it lands as one
/// well-formed TSV row.
pub fn prepare_training(form: &HashMap<String, String>) -> TriageResult<TrainingExample> {
    let report = required_field(form, FIELD_REPORT)?;

    let label_keys: BTreeSet<String> = confirmed_labels(form)
        .map(|label| label.code.to_string())
        .collect();

    let decoded = report_normalizer::decode_report(report)?;
    Ok(TrainingExample {
        report_text: report_normalizer::flatten_for_corpus(&decoded),
        label_keys,
    })
}

/// Route the submitted form to exactly one sink.
pub async fn route(
    form: &HashMap<String, String>,
    corpus: &dyn CorpusSink,
    exporter: &dyn ExportSink,
) -> TriageResult<SaveOutcome> {
    match SaveMode::from_form(form)? {
        SaveMode::Export => {
            let record = prepare_export(form)?;
            let path = exporter.export(&record).await?;
            info!(refs = record.reference_ids.len(), ?path, "report exported");
            Ok(SaveOutcome::Exported(path))
        }
        SaveMode::TrainAppend => {
            let example = prepare_training(form)?;
            corpus.append(&example).await?;
            info!(labels = example.label_keys.len(), "report appended to corpus");
            Ok(SaveOutcome::Appended)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_form() -> HashMap<String, String> {
        let mut form = HashMap::new();
        form.insert(FIELD_REPORT.to_string(), "line1\r\nline2".to_string());
        form.insert(FIELD_NAME.to_string(), "A".to_string());
        form.insert(FIELD_DATE.to_string(), "2024-01-01".to_string());
        form.insert("T1059".to_string(), "on".to_string());
        form
    }

    #[test]
    fn mode_requires_exactly_one_flag() {
        let mut form = base_form();
        assert!(matches!(
            SaveMode::from_form(&form),
            Err(TriageError::InvalidRequest(_))
        ));

        form.insert(FLAG_EXPORT.to_string(), String::new());
        assert_eq!(SaveMode::from_form(&form).unwrap(), SaveMode::Export);

        form.insert(FLAG_TRAIN.to_string(), String::new());
        assert!(matches!(
            SaveMode::from_form(&form),
            Err(TriageError::InvalidRequest(_))
        ));
    }

    #[test]
    fn export_maps_keys_to_stix_and_joins_lines_with_spaces() {
        let record = prepare_export(&base_form()).unwrap();

        assert_eq!(record.report_text, "line1 line2");
        assert!(!record.report_text.contains('\r'));
        assert_eq!(record.author_name, "A");
        assert_eq!(record.report_date, "2024-01-01");

        let expected = label_catalog::find("T1059").unwrap().stix_id;
        assert_eq!(
            record.reference_ids.iter().collect::<Vec<_>>(),
            vec![expected]
        );
    }

    #[test]
    fn training_keeps_raw_keys_and_tab_joins_lines() {
        let example = prepare_training(&base_form()).unwrap();

        assert_eq!(example.report_text, "line1\tline2");
        assert_eq!(
            example.label_keys.iter().collect::<Vec<_>>(),
            vec!["T1059"]
        );
    }

    #[test]
    fn unknown_form_keys_are_ignored() {
        let mut form = base_form();
        form.insert("csrf_token".to_string(), "zzz".to_string());
        form.insert("T9999".to_string(), "on".to_string());

        let record = prepare_export(&form).unwrap();
        assert_eq!(record.reference_ids.len(), 1);
    }

    #[test]
    fn confirmations_from_both_universes_collect() {
        let mut form = base_form();
        form.insert("TA0002".to_string(), "on".to_string());
        let record = prepare_export(&form).unwrap();
        // one technique + one tactic, both unique
        assert_eq!(record.reference_ids.len(), 2);
    }

    #[test]
    fn missing_report_text_is_rejected() {
        let mut form = base_form();
        form.remove(FIELD_REPORT);
        assert!(matches!(
            prepare_export(&form),
            Err(TriageError::InvalidRequest(_))
        ));
        assert!(matches!(
            prepare_training(&form),
            Err(TriageError::InvalidRequest(_))
        ));
    }
}
