//! Analysis summary report generation

use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};
use console::style;

use super::overview::{format_stat, new_table};
use crate::pipeline::{CatalogAnalysis, CleaningOutcome, DescriptiveStats};

/// Row bookkeeping plus the aggregation results, ready for display
#[derive(Debug, Clone)]
pub struct AnalysisSummary {
    pub initial_rows: usize,
    pub initial_columns: usize,
    pub final_rows: usize,
    pub final_columns: usize,
    pub dropped_columns: Vec<String>,
    pub filled: Vec<(String, usize)>,
    pub analysis: CatalogAnalysis,
}

impl AnalysisSummary {
    pub fn new(
        initial_shape: (usize, usize),
        cleaning: &CleaningOutcome,
        analysis: CatalogAnalysis,
    ) -> Self {
        let (final_rows, final_columns) = cleaning.df.shape();
        Self {
            initial_rows: initial_shape.0,
            initial_columns: initial_shape.1,
            final_rows,
            final_columns,
            dropped_columns: cleaning.dropped_columns.clone(),
            filled: cleaning.filled.clone(),
            analysis,
        }
    }

    pub fn rows_removed(&self) -> usize {
        self.initial_rows.saturating_sub(self.final_rows)
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("ANALYSIS SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());

        print_titled("Dataset", &self.dataset_table());
        print_titled("Count of Movies vs. TV Shows", &counts_table("Type", &self.analysis.type_counts));
        print_titled(
            &format!("Top {} Directors", self.analysis.top_directors.len()),
            &counts_table("Director", &self.analysis.top_directors),
        );

        println!();
        println!(
            "      Average movie duration: {} minutes",
            style(format_stat(self.analysis.average_movie_duration)).yellow().bold()
        );

        print_titled(
            "Descriptive Statistics",
            &stats_table(
                &self.analysis.movie_duration_stats,
                &self.analysis.release_year_stats,
            ),
        );
    }

    /// Rows and columns before and after cleaning
    pub fn dataset_table(&self) -> Table {
        let mut table = new_table(vec!["Metric", "Value"]);

        table.add_row(vec![
            Cell::new("📁 Initial rows × columns"),
            Cell::new(format!("{} × {}", self.initial_rows, self.initial_columns)),
        ]);

        table.add_row(vec![
            Cell::new("🗑️  Rows removed"),
            Cell::new(self.rows_removed()).fg(if self.rows_removed() == 0 {
                Color::White
            } else {
                Color::Red
            }),
        ]);

        let filled_cells: usize = self.filled.iter().map(|(_, n)| n).sum();
        table.add_row(vec![
            Cell::new("🩹 Cells imputed"),
            Cell::new(filled_cells).fg(if filled_cells == 0 {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);

        let dropped = if self.dropped_columns.is_empty() {
            "none".to_string()
        } else {
            self.dropped_columns.join(", ")
        };
        table.add_row(vec![Cell::new("✂️  Columns dropped"), Cell::new(dropped)]);

        table.add_row(vec![
            Cell::new("✅ Final rows × columns"),
            Cell::new(format!("{} × {}", self.final_rows, self.final_columns))
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        table
    }
}

fn print_titled(title: &str, table: &Table) {
    println!();
    println!("      {}", style(title).yellow());
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}

/// Two-column value/count table
pub fn counts_table(label: &str, counts: &[(String, usize)]) -> Table {
    let mut table = new_table(vec![label, "Count"]);
    for (value, count) in counts {
        table.add_row(vec![
            Cell::new(value),
            Cell::new(count).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Side-by-side statistics for movie durations and release years
pub fn stats_table(durations: &DescriptiveStats, years: &DescriptiveStats) -> Table {
    let mut table = new_table(vec!["Statistic", "Movie duration (min)", "Release year"]);

    let rows = [
        ("Count", durations.count.to_string(), years.count.to_string()),
        ("Mean", format_stat(durations.mean), format_stat(years.mean)),
        ("Median", format_stat(durations.median), format_stat(years.median)),
        (
            "Std dev (population)",
            format_stat(durations.std_dev),
            format_stat(years.std_dev),
        ),
    ];

    for (label, duration, year) in rows {
        table.add_row(vec![
            Cell::new(label).add_attribute(Attribute::Bold),
            Cell::new(duration).set_alignment(CellAlignment::Right),
            Cell::new(year).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_table_keeps_order() {
        let counts = vec![("Movie".to_string(), 3), ("TV Show".to_string(), 1)];
        let rendered = counts_table("Type", &counts).to_string();
        let movie = rendered.find("Movie").unwrap();
        let show = rendered.find("TV Show").unwrap();
        assert!(movie < show);
    }

    #[test]
    fn test_stats_table_renders_nan_for_empty() {
        let empty = DescriptiveStats::from_values(&[]);
        let years = DescriptiveStats::from_values(&[2000.0, 2002.0]);
        let rendered = stats_table(&empty, &years).to_string();
        assert!(rendered.contains("NaN"));
        assert!(rendered.contains("2001.00"));
    }
}
