//! Read-only aggregations over the cleaned catalog

use std::collections::HashMap;

use anyhow::Result;
use polars::prelude::*;
use tracing::info;

use super::columns;
use super::error::PipelineError;
use super::stats::{mean, DescriptiveStats};

/// Default length of the director ranking
pub const DEFAULT_TOP_DIRECTORS: usize = 5;

/// Everything the aggregation stage reports
#[derive(Debug, Clone)]
pub struct CatalogAnalysis {
    pub type_counts: Vec<(String, usize)>,
    pub top_directors: Vec<(String, usize)>,
    pub average_movie_duration: f64,
    pub movie_duration_stats: DescriptiveStats,
    pub release_year_stats: DescriptiveStats,
}

fn required_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name)
        .map_err(|_| PipelineError::ColumnNotFound(name.to_string()).into())
}

/// Frequency of each non-null value in `column`, highest count first.
///
/// Equal counts keep the order in which values were first seen.
pub fn value_counts(df: &DataFrame, column: &str) -> Result<Vec<(String, usize)>> {
    let as_text = required_column(df, column)?.cast(&DataType::String)?;

    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for value in as_text.str()?.into_iter().flatten() {
        match index.get(value) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(value, counts.len());
                counts.push((value.to_string(), 1));
            }
        }
    }

    // sort_by is stable, so ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(counts)
}

/// Counts of each `type` category
pub fn type_counts(df: &DataFrame) -> Result<Vec<(String, usize)>> {
    value_counts(df, columns::TYPE)
}

/// The `n` most frequent directors. The "Unknown" placeholder is ranked
/// like any other name.
pub fn top_directors(df: &DataFrame, n: usize) -> Result<Vec<(String, usize)>> {
    let mut counts = value_counts(df, columns::DIRECTOR)?;
    counts.truncate(n);
    Ok(counts)
}

fn float_values(column: &Column) -> Result<Vec<Option<f64>>> {
    let as_float = column.cast(&DataType::Float64)?;
    Ok(as_float
        .f64()?
        .into_iter()
        .map(|v| v.filter(|x| !x.is_nan()))
        .collect())
}

/// Numeric durations of rows whose `type` is "Movie", nulls removed
pub fn movie_durations(df: &DataFrame) -> Result<Vec<f64>> {
    let types = required_column(df, columns::TYPE)?.cast(&DataType::String)?;
    let durations = float_values(required_column(df, columns::DURATION)?)?;

    Ok(types
        .str()?
        .into_iter()
        .zip(durations)
        .filter_map(|(kind, minutes)| match kind {
            Some(columns::MOVIE) => minutes,
            _ => None,
        })
        .collect())
}

/// Mean movie duration in minutes, NaN when no movie has one
pub fn average_movie_duration(df: &DataFrame) -> Result<f64> {
    Ok(mean(&movie_durations(df)?))
}

/// Non-null release years across all titles
pub fn release_years(df: &DataFrame) -> Result<Vec<f64>> {
    let years = float_values(required_column(df, columns::RELEASE_YEAR)?)?;
    Ok(years.into_iter().flatten().collect())
}

/// Run every aggregation over the cleaned, transformed frame.
pub fn analyze_catalog(df: &DataFrame, top_n: usize) -> Result<CatalogAnalysis> {
    let durations = movie_durations(df)?;
    let years = release_years(df)?;

    let analysis = CatalogAnalysis {
        type_counts: type_counts(df)?,
        top_directors: top_directors(df, top_n)?,
        average_movie_duration: mean(&durations),
        movie_duration_stats: DescriptiveStats::from_values(&durations),
        release_year_stats: DescriptiveStats::from_values(&years),
    };

    info!(
        movies_with_duration = analysis.movie_duration_stats.count,
        titles_with_year = analysis.release_year_stats.count,
        "aggregation complete"
    );
    Ok(analysis)
}
