//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// cateda - Explore a media catalog export: clean, summarize and chart it
#[derive(Parser, Debug)]
#[command(name = "cateda")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file path (CSV or Parquet)
    #[arg(short, long, default_value = "netflix_titles.csv")]
    pub input: PathBuf,

    /// Directory the chart images are written to (created if missing)
    #[arg(short, long, default_value = "charts")]
    pub output_dir: PathBuf,

    /// Number of directors listed in the ranking
    #[arg(long, default_value = "5", value_parser = validate_top_directors)]
    pub top_directors: usize,

    /// Number of rows to use for schema inference (CSV only).
    /// Use 0 for full table scan.
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,

    /// Skip chart rendering
    #[arg(long, default_value = "false")]
    pub no_charts: bool,

    /// Increase diagnostic logging on stderr (-v info, -vv debug).
    /// RUST_LOG takes precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Chart directory, or None when charts are disabled
    pub fn chart_dir(&self) -> Option<&PathBuf> {
        if self.no_charts {
            None
        } else {
            Some(&self.output_dir)
        }
    }
}

/// Validator for top_directors parameter
fn validate_top_directors(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid count", s))?;

    if value == 0 {
        Err("top_directors must be at least 1".to_string())
    } else {
        Ok(value)
    }
}
