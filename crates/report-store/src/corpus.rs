//! Append-only tab-delimited training corpus.
//!
//! One confirmed report per line: the tab-flattened text, then one tab
//! per confirmed label key. The retrainer reads this file, so a reader
//! must never observe a half-written row: each record is formatted whole
//! in memory and lands with a single append write, and concurrent
//! appends serialize on an async mutex.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::debug;
use triage_core::{CorpusSink, TrainingExample, TriageError, TriageResult};

pub struct FileCorpus {
    path: PathBuf,
    append_lock: Mutex<()>,
}

impl FileCorpus {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            append_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn format_record(example: &TrainingExample) -> TriageResult<String> {
        // The text must already be tab-safe; a stray line break here
        // would corrupt every read of the corpus after this row.
        if example.report_text.contains('\n') || example.report_text.contains('\r') {
            return Err(TriageError::CorpusWrite(
                "training example text contains unflattened line breaks".to_string(),
            ));
        }

        let mut line = example.report_text.clone();
        for key in &example.label_keys {
            line.push('\t');
            line.push_str(key);
        }
        line.push('\n');
        Ok(line)
    }
}

#[async_trait]
impl CorpusSink for FileCorpus {
    async fn append(&self, example: &TrainingExample) -> TriageResult<()> {
        let line = Self::format_record(example)?;

        let _guard = self.append_lock.lock().await;
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| TriageError::CorpusWrite(e.to_string()))?;
        }
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| TriageError::CorpusWrite(e.to_string()))?;

        file.write_all(line.as_bytes())
            .await
            .map_err(|e| TriageError::CorpusWrite(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| TriageError::CorpusWrite(e.to_string()))?;

        debug!(labels = example.label_keys.len(), "appended training example");
        Ok(())
    }
}
