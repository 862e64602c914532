//! Error types for the catalog analysis pipeline.

use thiserror::Error;

/// Domain failures raised by the pipeline stages.
///
/// File and parse failures travel as `anyhow` errors with context attached
/// at the I/O boundary; these variants cover the rest.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A column the stage cannot run without is absent.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// Input file extension is not one we can read.
    #[error("Unsupported file format: '{0}'. Supported formats: csv, parquet")]
    UnsupportedFormat(String),
}
