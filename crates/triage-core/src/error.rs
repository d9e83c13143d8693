use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriageError {
    #[error("Undecodable report text: {0}")]
    Decoding(String),

    #[error("Degenerate calibration bounds: {0}")]
    Calibration(String),

    #[error("Catalog/model dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("Catalog integrity violation: {0}")]
    DataIntegrity(String),

    #[error("Corpus append failed: {0}")]
    CorpusWrite(String),

    #[error("Export write failed: {0}")]
    ExportWrite(String),

    #[error("Retrain failed: {0}")]
    Retrain(String),

    #[error("Model service error: {0}")]
    ModelService(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

pub type TriageResult<T> = Result<T, TriageError>;
