//! Dataset loader for CSV and Parquet catalog exports

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;
use tracing::info;

use super::error::PipelineError;

/// Supported input formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Parquet,
}

impl InputFormat {
    /// Detect the format from the path's extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self, PipelineError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "parquet" => Ok(Self::Parquet),
            _ => Err(PipelineError::UnsupportedFormat(extension)),
        }
    }
}

/// CSV tokens read as missing in addition to empty fields
pub const MISSING_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Build a lazy scan over the input file.
///
/// Empty CSV fields and [`MISSING_TOKENS`] are read as nulls. An `infer_schema_length` of 0 scans
/// the whole file before settling on column types.
fn scan_catalog(path: &Path, infer_schema_length: usize) -> Result<LazyFrame> {
    let lf = match InputFormat::from_path(path)? {
        InputFormat::Csv => {
            let schema_length = if infer_schema_length == 0 {
                None
            } else {
                Some(infer_schema_length)
            };
            let null_values = NullValues::AllColumns(
                MISSING_TOKENS.iter().map(|token| (*token).into()).collect(),
            );
            LazyCsvReader::new(path)
                .with_infer_schema_length(schema_length)
                .with_null_values(Some(null_values))
                .finish()
                .with_context(|| format!("Failed to load CSV file: {}", path.display()))?
        }
        InputFormat::Parquet => LazyFrame::scan_parquet(path, Default::default())
            .with_context(|| format!("Failed to load Parquet file: {}", path.display()))?,
    };

    Ok(lf)
}

/// Load the catalog into memory.
///
/// No schema validation happens here; downstream stages look columns up by
/// name and decide for themselves whether an absent one is fatal.
pub fn load_catalog(path: &Path, infer_schema_length: usize) -> Result<DataFrame> {
    let df = scan_catalog(path, infer_schema_length)?
        .collect()
        .with_context(|| format!("Failed to read dataset: {}", path.display()))?;

    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "catalog loaded"
    );
    Ok(df)
}

/// Read only the column names, without materializing rows
pub fn get_column_names(path: &Path) -> Result<Vec<String>> {
    let schema = scan_catalog(path, 100)?
        .collect_schema()
        .with_context(|| format!("Failed to read schema: {}", path.display()))?;

    Ok(schema.iter_names().map(|name| name.to_string()).collect())
}

/// Fail before loading rows when the file lacks one of `required`
pub fn check_required_columns(path: &Path, required: &[&str]) -> Result<()> {
    let available = get_column_names(path)?;
    if let Some(column) = required
        .iter()
        .find(|column| !available.iter().any(|name| name.as_str() == **column))
    {
        return Err(PipelineError::ColumnNotFound(column.to_string()).into());
    }
    Ok(())
}

/// Estimated in-memory size of the frame in megabytes
pub fn estimated_memory_mb(df: &DataFrame) -> f64 {
    df.estimated_size() as f64 / (1024.0 * 1024.0)
}
