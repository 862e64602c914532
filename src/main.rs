//! cateda: Catalog Exploratory Data Analysis CLI
//!
//! Runs the catalog export through load, clean, transform, aggregate and
//! chart steps, printing a styled report along the way.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::style;

use cateda::cli::Cli;
use cateda::pipeline::{
    analyze_catalog, clean_catalog, columns, columns_with_missing, count_missing_values,
    check_required_columns, derive_duration_minutes, estimated_memory_mb, load_catalog,
    total_missing, CleaningRules,
};
use cateda::report::{
    describe_table, dtype_table, head_preview, missing_table, render_charts, AnalysisSummary,
};
use cateda::utils::{
    create_spinner, finish_with_success, finish_with_warning, init_logging, print_banner,
    print_completion, print_config, print_count, print_indented, print_info, print_section,
    print_step_header, print_step_time, print_success, CHART,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(&cli.input, cli.chart_dir().map(|p| p.as_path()), cli.top_directors);

    // Step 1: Load dataset
    print_step_header(1, "Load Dataset");
    let step_start = Instant::now();
    let spinner = create_spinner("Reading catalog...");
    check_required_columns(&cli.input, &columns::ANALYSIS_REQUIRED)?;
    let df = load_catalog(&cli.input, cli.infer_schema_length)?;
    finish_with_success(&spinner, "Dataset loaded");

    let initial_shape = df.shape();
    print_section("Dataset Statistics");
    println!("      Rows: {}", initial_shape.0);
    println!("      Columns: {}", initial_shape.1);
    println!("      Estimated memory: {:.2} MB", estimated_memory_mb(&df));

    print_section("First rows");
    print_indented(&head_preview(&df, 5));
    print_section("Column types");
    print_indented(&dtype_table(&df).to_string());
    if let Some(table) = describe_table(&df)? {
        print_section("Numeric summary");
        print_indented(&table.to_string());
    }
    print_step_time(step_start.elapsed());

    // Step 2: Clean missing values
    print_step_header(2, "Missing Value Cleaning");
    let step_start = Instant::now();
    let missing_before = count_missing_values(&df);
    let missing_total = total_missing(&missing_before);
    if missing_total == 0 {
        print_info("No missing values found");
    } else {
        print_count(
            "missing cell(s)",
            missing_total,
            Some(&format!(
                "across {} column(s)",
                columns_with_missing(&missing_before).len()
            )),
        );
    }

    let cleaning = clean_catalog(df, &CleaningRules::catalog())?;
    let missing_after = count_missing_values(&cleaning.df);
    print_indented(&missing_table(&missing_before, Some(missing_after.as_slice())).to_string());
    if cleaning.rows_removed > 0 {
        print_count("row(s) dropped for missing date_added/rating", cleaning.rows_removed, None);
    }
    print_success("Missing values cleaned");
    print_step_time(step_start.elapsed());

    // Step 3: Derive numeric duration
    print_step_header(3, "Duration Conversion");
    let step_start = Instant::now();
    let df = derive_duration_minutes(cleaning.df.clone())?;
    let unparsed = df.column(columns::DURATION)?.null_count();
    if unparsed > 0 {
        print_count("duration value(s) without a number", unparsed, Some("(now missing)"));
    }
    print_success("Duration converted to minutes");
    print_step_time(step_start.elapsed());

    // Step 4: Aggregate
    print_step_header(4, "Catalog Analysis");
    let step_start = Instant::now();
    let analysis = analyze_catalog(&df, cli.top_directors)?;
    let summary = AnalysisSummary::new(initial_shape, &cleaning, analysis);
    summary.display();
    print_step_time(step_start.elapsed());

    // Step 5: Charts
    if let Some(dir) = cli.chart_dir() {
        print_step_header(5, "Charts");
        let step_start = Instant::now();
        let spinner = create_spinner("Rendering charts...");
        let written = render_charts(&df, dir)?;
        if summary.analysis.movie_duration_stats.is_empty() {
            finish_with_warning(&spinner, "Charts rendered (no movie durations to plot)");
        } else {
            finish_with_success(&spinner, "Charts rendered");
        }
        for path in &written {
            println!("      {}{}", CHART, style(path.display()).dim());
        }
        print_step_time(step_start.elapsed());
    }

    print_completion();

    Ok(())
}
