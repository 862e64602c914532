//! Dataset overview tables: dtypes, numeric summary, missing values

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Color, Table};
use polars::prelude::*;

use crate::pipeline::{mean_of, median_of, quantile_of, std_of, MissingCount};

/// Format a statistic with two decimals; NaN stays visible as "NaN"
pub fn format_stat(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{:.2}", value)
    }
}

pub(crate) fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(
        header
            .into_iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    table
}

/// First `rows` rows rendered with polars' own formatter
pub fn head_preview(df: &DataFrame, rows: usize) -> String {
    format!("{}", df.head(Some(rows)))
}

/// Column name and polars dtype, one row per column
pub fn dtype_table(df: &DataFrame) -> Table {
    let mut table = new_table(vec!["Column", "Type"]);
    for column in df.get_columns() {
        table.add_row(vec![
            Cell::new(column.name().as_str()),
            Cell::new(column.dtype().to_string()).fg(Color::Cyan),
        ]);
    }
    table
}

fn count(values: &Float64Chunked) -> f64 {
    (values.len() - values.null_count()) as f64
}

fn sample_std(values: &Float64Chunked) -> f64 {
    std_of(values, 1)
}

fn min(values: &Float64Chunked) -> f64 {
    quantile_of(values, 0.0)
}

fn lower_quartile(values: &Float64Chunked) -> f64 {
    quantile_of(values, 0.25)
}

fn upper_quartile(values: &Float64Chunked) -> f64 {
    quantile_of(values, 0.75)
}

fn max(values: &Float64Chunked) -> f64 {
    quantile_of(values, 1.0)
}

/// Column as Float64 with NaN treated as missing
fn numeric_values(column: &Column) -> Result<Float64Chunked> {
    let as_float = column.cast(&DataType::Float64)?;
    Ok(as_float
        .f64()?
        .into_iter()
        .map(|v| v.filter(|x| !x.is_nan()))
        .collect())
}

/// Summary of numeric columns: count, mean, std, min, quartiles, max.
///
/// `std` here is the sample (N - 1) deviation. Returns None when the frame
/// has no numeric column.
pub fn describe_table(df: &DataFrame) -> Result<Option<Table>> {
    let numeric: Vec<&Column> = df
        .get_columns()
        .iter()
        .filter(|c| c.dtype().is_primitive_numeric())
        .collect();
    if numeric.is_empty() {
        return Ok(None);
    }

    let mut header = vec!["Statistic"];
    header.extend(numeric.iter().map(|c| c.name().as_str()));
    let mut table = new_table(header);

    let values: Vec<Float64Chunked> = numeric
        .iter()
        .map(|c| numeric_values(c))
        .collect::<Result<_>>()?;

    let rows: [(&str, fn(&Float64Chunked) -> f64); 8] = [
        ("count", count),
        ("mean", mean_of),
        ("std", sample_std),
        ("min", min),
        ("25%", lower_quartile),
        ("50%", median_of),
        ("75%", upper_quartile),
        ("max", max),
    ];

    for (label, statistic) in rows {
        let mut row = vec![Cell::new(label).add_attribute(Attribute::Bold)];
        row.extend(values.iter().map(|v| {
            Cell::new(format_stat(statistic(v))).set_alignment(CellAlignment::Right)
        }));
        table.add_row(row);
    }

    Ok(Some(table))
}

/// Missing values per column. With `after`, shows before/after side by side;
/// columns removed by cleaning show "dropped".
pub fn missing_table(before: &[MissingCount], after: Option<&[MissingCount]>) -> Table {
    let mut header = vec!["Column", "Missing"];
    if after.is_some() {
        header.push("After cleaning");
    }
    let mut table = new_table(header);

    for count in before {
        let color = if count.missing > 0 { Color::Yellow } else { Color::White };
        let mut row = vec![
            Cell::new(&count.column),
            Cell::new(format!("{} ({:.1}%)", count.missing, count.ratio * 100.0)).fg(color),
        ];
        if let Some(after) = after {
            let cell = match after.iter().find(|a| a.column == count.column) {
                Some(a) if a.missing > 0 => Cell::new(a.missing).fg(Color::Red),
                Some(a) => Cell::new(a.missing).fg(Color::Green),
                None => Cell::new("dropped").fg(Color::DarkGrey),
            };
            row.push(cell);
        }
        table.add_row(row);
    }
    table
}
