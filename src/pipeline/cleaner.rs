//! Missing value cleaning driven by a column policy table
//!
//! Every rule is gated on the column existing. A column the export does not
//! carry is skipped and never synthesized, so older or trimmed exports still
//! clean without failing the run.

use anyhow::Result;
use polars::prelude::*;
use tracing::{debug, info};

use super::columns;

/// What to do with a column during cleaning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPolicy {
    /// Remove the whole column
    DropColumn,
    /// Replace nulls with a fixed placeholder (the column becomes text)
    FillWith(&'static str),
    /// Remove every row where this column is null
    DropRowsIfMissing,
}

/// Ordered column → policy table
#[derive(Debug, Clone)]
pub struct CleaningRules {
    rules: Vec<(&'static str, ColumnPolicy)>,
}

impl CleaningRules {
    pub fn new(rules: Vec<(&'static str, ColumnPolicy)>) -> Self {
        Self { rules }
    }

    /// The fixed rules for the catalog export
    pub fn catalog() -> Self {
        Self::new(vec![
            (columns::SHOW_ID, ColumnPolicy::DropColumn),
            (columns::DIRECTOR, ColumnPolicy::FillWith(columns::UNKNOWN)),
            (columns::CAST, ColumnPolicy::FillWith(columns::UNKNOWN)),
            (columns::COUNTRY, ColumnPolicy::FillWith(columns::UNKNOWN)),
            (columns::DURATION, ColumnPolicy::FillWith(columns::UNKNOWN)),
            (columns::DATE_ADDED, ColumnPolicy::DropRowsIfMissing),
            (columns::RATING, ColumnPolicy::DropRowsIfMissing),
        ])
    }

    pub fn rules(&self) -> &[(&'static str, ColumnPolicy)] {
        &self.rules
    }

    fn with_policy(
        &self,
        wanted: fn(&ColumnPolicy) -> bool,
    ) -> impl Iterator<Item = &(&'static str, ColumnPolicy)> + '_ {
        self.rules.iter().filter(move |(_, policy)| wanted(policy))
    }
}

impl Default for CleaningRules {
    fn default() -> Self {
        Self::catalog()
    }
}

/// Cleaned frame plus a record of what cleaning did to it
#[derive(Debug, Clone)]
pub struct CleaningOutcome {
    pub df: DataFrame,
    pub dropped_columns: Vec<String>,
    /// (column, cells filled) for columns that actually had nulls
    pub filled: Vec<(String, usize)>,
    pub rows_removed: usize,
    /// Rule columns absent from the input
    pub skipped: Vec<String>,
}

fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_index(name).is_some()
}

/// Replace nulls in `name` with `placeholder`, returning the number of cells filled.
fn fill_text_nulls(df: &mut DataFrame, name: &str, placeholder: &str) -> Result<usize> {
    let column = df.column(name)?;
    let nulls = column.null_count();
    if nulls == 0 {
        return Ok(0);
    }

    let as_text = column.cast(&DataType::String)?;
    let filled: StringChunked = as_text
        .str()?
        .into_iter()
        .map(|value| Some(value.unwrap_or(placeholder)))
        .collect();

    df.with_column(filled.with_name(name.into()).into_series())?;
    Ok(nulls)
}

/// Apply the rules in order: column drops, fills, then one row filter.
///
/// A row survives the filter only when every existing `DropRowsIfMissing`
/// column is non-null. Running this again on its own output changes nothing.
pub fn clean_catalog(mut df: DataFrame, rules: &CleaningRules) -> Result<CleaningOutcome> {
    let mut dropped_columns = Vec::new();
    let mut filled = Vec::new();
    let mut skipped = Vec::new();

    for (name, _) in rules.with_policy(|p| matches!(p, ColumnPolicy::DropColumn)) {
        if has_column(&df, name) {
            df = df.drop(name)?;
            debug!(column = name, "dropped column");
            dropped_columns.push(name.to_string());
        } else {
            debug!(column = name, "column absent, drop skipped");
            skipped.push(name.to_string());
        }
    }

    for (name, policy) in rules.with_policy(|p| matches!(p, ColumnPolicy::FillWith(_))) {
        let ColumnPolicy::FillWith(placeholder) = policy else {
            continue;
        };
        if !has_column(&df, name) {
            debug!(column = name, "column absent, fill skipped");
            skipped.push(name.to_string());
            continue;
        }
        let count = fill_text_nulls(&mut df, name, placeholder)?;
        if count > 0 {
            debug!(column = name, cells = count, placeholder, "filled nulls");
            filled.push((name.to_string(), count));
        }
    }

    let mut required = Vec::new();
    for (name, _) in rules.with_policy(|p| matches!(p, ColumnPolicy::DropRowsIfMissing)) {
        if has_column(&df, name) {
            required.push(*name);
        } else {
            debug!(column = name, "column absent, row filter skipped");
            skipped.push(name.to_string());
        }
    }

    let mut rows_removed = 0;
    if !required.is_empty() {
        let before = df.height();
        let mut keep = BooleanChunked::full("keep".into(), true, before);
        for name in &required {
            keep = &keep & &df.column(name)?.is_not_null();
        }
        df = df.filter(&keep)?;
        rows_removed = before - df.height();
        debug!(columns = ?required, rows_removed, "dropped rows with missing values");
    }

    info!(
        dropped_columns = dropped_columns.len(),
        filled_columns = filled.len(),
        rows_removed,
        "cleaning complete"
    );

    Ok(CleaningOutcome {
        df,
        dropped_columns,
        filled,
        rows_removed,
        skipped,
    })
}
