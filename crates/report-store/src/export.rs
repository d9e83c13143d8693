//! Write-once STIX 2.0 bundle export.
//!
//! One bundle per confirmed report: a single `report` object whose
//! `object_refs` are the STIX identifiers of the confirmed labels. The
//! bundle is serialized fully in memory, written to a temp path and then
//! renamed, so the download path never holds a truncated file.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::debug;
use triage_core::{ExportRecord, ExportSink, TriageError, TriageResult};
use uuid::Uuid;

pub struct StixExporter {
    dir: PathBuf,
}

impl StixExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn bundle_json(record: &ExportRecord, report_id: &str, bundle_id: &str) -> serde_json::Value {
        let created = Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        json!({
            "type": "bundle",
            "id": bundle_id,
            "spec_version": "2.0",
            "objects": [
                {
                    "type": "report",
                    "id": report_id,
                    "created": created,
                    "modified": created,
                    "name": record.author_name,
                    "published": record.report_date,
                    "description": record.report_text,
                    "labels": ["threat-report"],
                    "object_refs": record.reference_ids,
                }
            ]
        })
    }
}

#[async_trait]
impl ExportSink for StixExporter {
    async fn export(&self, record: &ExportRecord) -> TriageResult<PathBuf> {
        let report_id = format!("report--{}", Uuid::new_v4());
        let bundle_id = format!("bundle--{}", Uuid::new_v4());
        let bundle = Self::bundle_json(record, &report_id, &bundle_id);

        let body = serde_json::to_vec_pretty(&bundle)
            .map_err(|e| TriageError::ExportWrite(e.to_string()))?;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| TriageError::ExportWrite(e.to_string()))?;

        let final_path = self.dir.join(format!("{bundle_id}.json"));
        let tmp_path = self.dir.join(format!("{bundle_id}.json.tmp"));

        tokio::fs::write(&tmp_path, &body)
            .await
            .map_err(|e| TriageError::ExportWrite(e.to_string()))?;
        tokio::fs::rename(&tmp_path, &final_path)
            .await
            .map_err(|e| TriageError::ExportWrite(e.to_string()))?;

        debug!(path = %final_path.display(), "wrote STIX bundle");
        Ok(final_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn record() -> ExportRecord {
        ExportRecord {
            report_text: "line1 line2".to_string(),
            author_name: "A".to_string(),
            report_date: "2024-01-01".to_string(),
            reference_ids: BTreeSet::from([
                "attack-pattern--5fdecf08-2c05-4c4c-893d-280f600da591".to_string(),
            ]),
        }
    }

    #[tokio::test]
    async fn writes_a_complete_bundle_and_no_temp_leftover() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = StixExporter::new(dir.path());

        let path = exporter.export(&record()).await.unwrap();
        assert!(path.exists());

        let bundle: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(bundle["type"], "bundle");
        assert_eq!(bundle["spec_version"], "2.0");

        let report = &bundle["objects"][0];
        assert_eq!(report["type"], "report");
        assert_eq!(report["description"], "line1 line2");
        assert_eq!(report["published"], "2024-01-01");
        assert_eq!(
            report["object_refs"][0],
            "attack-pattern--5fdecf08-2c05-4c4c-893d-280f600da591"
        );

        // temp-then-rename leaves nothing behind
        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[tokio::test]
    async fn each_export_is_a_fresh_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = StixExporter::new(dir.path());

        let a = exporter.export(&record()).await.unwrap();
        let b = exporter.export(&record()).await.unwrap();
        assert_ne!(a, b);
        assert!(a.exists() && b.exists());
    }
}
