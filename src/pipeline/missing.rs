//! Missing value accounting per column

use polars::prelude::*;

/// Null count for one column
#[derive(Debug, Clone, PartialEq)]
pub struct MissingCount {
    pub column: String,
    pub missing: usize,
    /// `missing / rows`, 0.0 for an empty frame
    pub ratio: f64,
}

/// Count nulls in every column, in schema order.
pub fn count_missing_values(df: &DataFrame) -> Vec<MissingCount> {
    let rows = df.height();

    df.get_columns()
        .iter()
        .map(|column| {
            let missing = column.null_count();
            let ratio = if rows == 0 {
                0.0
            } else {
                missing as f64 / rows as f64
            };
            MissingCount {
                column: column.name().to_string(),
                missing,
                ratio,
            }
        })
        .collect()
}

/// Total null cells across the frame
pub fn total_missing(counts: &[MissingCount]) -> usize {
    counts.iter().map(|c| c.missing).sum()
}

/// Columns that still hold at least one null
pub fn columns_with_missing(counts: &[MissingCount]) -> Vec<String> {
    counts
        .iter()
        .filter(|c| c.missing > 0)
        .map(|c| c.column.clone())
        .collect()
}
