//! Numeric duration derivation
//!
//! `duration` arrives as text such as "90 min" or "2 Seasons". The first
//! run of ASCII digits becomes the numeric value; text without digits (including
//! the "Unknown" placeholder) becomes null rather than an error.

use anyhow::Result;
use once_cell::sync::Lazy;
use polars::prelude::*;
use regex::Regex;
use tracing::info;

use super::columns;
use super::error::PipelineError;

static DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+").expect("digit pattern is valid"));

/// Parse the first run of ASCII digits in `text`.
pub fn extract_minutes(text: &str) -> Option<f64> {
    DIGITS
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Replace `duration` with its Float64 minutes value.
pub fn derive_duration_minutes(mut df: DataFrame) -> Result<DataFrame> {
    let column = df
        .column(columns::DURATION)
        .map_err(|_| PipelineError::ColumnNotFound(columns::DURATION.to_string()))?;

    let as_text = column.cast(&DataType::String)?;
    let minutes: Float64Chunked = as_text
        .str()?
        .into_iter()
        .map(|value| value.and_then(extract_minutes))
        .collect();
    let unparsed = minutes.null_count();

    df.with_column(minutes.with_name(columns::DURATION.into()).into_series())?;

    info!(unparsed, "duration converted to minutes");
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_minutes() {
        assert_eq!(extract_minutes("90 min"), Some(90.0));
        assert_eq!(extract_minutes("2 Seasons"), Some(2.0));
        assert_eq!(extract_minutes("Season 10 of 12"), Some(10.0));
        assert_eq!(extract_minutes("\u{0663} parts, 90 min"), Some(90.0));
        assert_eq!(extract_minutes("\u{0663}\u{0660}"), None);
        assert_eq!(extract_minutes("Unknown"), None);
        assert_eq!(extract_minutes(""), None);
    }

    #[test]
    fn test_derive_replaces_column_in_place() {
        let df = df! {
            "type" => ["Movie", "TV Show", "Movie"],
            "duration" => ["90 min", "2 Seasons", "Unknown"],
        }
        .unwrap();

        let df = derive_duration_minutes(df).unwrap();
        let duration = df.column("duration").unwrap();

        assert_eq!(duration.dtype(), &DataType::Float64);
        let values: Vec<_> = duration.f64().unwrap().into_iter().collect();
        assert_eq!(values, vec![Some(90.0), Some(2.0), None]);
        assert_eq!(df.get_column_names()[1].as_str(), "duration");
    }

    #[test]
    fn test_numeric_duration_column_is_kept() {
        let df = df! { "duration" => [Some(45i64), None] }.unwrap();
        let df = derive_duration_minutes(df).unwrap();
        let values: Vec<_> = df.column("duration").unwrap().f64().unwrap().into_iter().collect();
        assert_eq!(values, vec![Some(45.0), None]);
    }

    #[test]
    fn test_missing_duration_column_is_fatal() {
        let df = df! { "type" => ["Movie"] }.unwrap();
        let err = derive_duration_minutes(df).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::ColumnNotFound(name)) if name == "duration"
        ));
    }
}
