//! Shared test utilities and fixture generators

#![allow(dead_code)]

use polars::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// A small catalog export with known missing-value patterns
///
/// - `s2` has no director, `s1` no cast, `s3` no country
/// - `s4` has no `date_added` and `s6` no `rating` (both dropped by cleaning)
/// - `s7` has no duration (becomes "Unknown", then a missing minute value)
/// - "Kirsten Johnson" directs two of the surviving titles
pub fn create_catalog_dataframe() -> DataFrame {
    df! {
        "show_id" => ["s1", "s2", "s3", "s4", "s5", "s6", "s7", "s8"],
        "type" => ["Movie", "TV Show", "TV Show", "Movie", "Movie", "Movie", "Movie", "Movie"],
        "title" => [
            "Dick Johnson Is Dead", "Blood & Water", "Ganglands", "Sankofa",
            "The Starling", "Jeans", "Grown Ups", "Dark Skies",
        ],
        "director" => [
            Some("Kirsten Johnson"), None, Some("Julien Leclercq"), Some("Haile Gerima"),
            Some("Theodore Melfi"), Some("S. Shankar"), Some("Dennis Dugan"), Some("Kirsten Johnson"),
        ],
        "cast" => [
            None, Some("Ama Qamata"), Some("Sami Bouajila"), Some("Kofi Ghanaba"),
            Some("Melissa McCarthy"), Some("Prashanth"), Some("Adam Sandler"), Some("Keri Russell"),
        ],
        "country" => [
            Some("United States"), Some("South Africa"), None, Some("United States"),
            Some("United States"), Some("India"), Some("United States"), Some("United States"),
        ],
        "date_added" => [
            Some("September 25, 2021"), Some("September 24, 2021"), Some("September 24, 2021"), None,
            Some("September 24, 2021"), Some("September 21, 2021"), Some("September 20, 2021"), Some("September 19, 2021"),
        ],
        "release_year" => [2020i64, 2021, 2021, 1993, 2021, 1998, 2010, 2013],
        "rating" => [
            Some("PG-13"), Some("TV-MA"), Some("TV-MA"), Some("TV-MA"),
            Some("PG-13"), None, Some("PG-13"), Some("PG-13"),
        ],
        "duration" => [
            Some("90 min"), Some("2 Seasons"), Some("1 Season"), Some("125 min"),
            Some("104 min"), Some("166 min"), None, Some("120 min"),
        ],
    }
    .unwrap()
}

/// Write a DataFrame to a CSV file inside a fresh temporary directory
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("titles.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Write raw CSV text to a file inside a fresh temporary directory
pub fn write_temp_csv(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("titles.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();

    (temp_dir, csv_path)
}

/// Assert that a DataFrame has expected shape
pub fn assert_shape(df: &DataFrame, expected_rows: usize, expected_cols: usize) {
    let (rows, cols) = df.shape();
    assert_eq!(rows, expected_rows, "Row count mismatch: expected {}, got {}", expected_rows, rows);
    assert_eq!(cols, expected_cols, "Column count mismatch: expected {}, got {}", expected_cols, cols);
}

/// Assert that a DataFrame contains specific columns
pub fn assert_has_columns(df: &DataFrame, expected_cols: &[&str]) {
    let actual_cols: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    for col in expected_cols {
        assert!(
            actual_cols.contains(&col.to_string()),
            "Missing expected column: '{}'. Actual columns: {:?}",
            col,
            actual_cols
        );
    }
}

/// Assert that a DataFrame does NOT contain specific columns
pub fn assert_missing_columns(df: &DataFrame, unexpected_cols: &[&str]) {
    let actual_cols: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    for col in unexpected_cols {
        assert!(
            !actual_cols.contains(&col.to_string()),
            "Unexpected column still present: '{}'",
            col
        );
    }
}

/// Collect a text column as owned options
pub fn string_values(df: &DataFrame, column: &str) -> Vec<Option<String>> {
    df.column(column)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.map(|s| s.to_string()))
        .collect()
}
