//! Chart rendering (SVG, via plotters)
//!
//! Three charts summarize the cleaned catalog: a bar chart of title types,
//! and histograms with a density overlay for release years and movie
//! durations. The density curve is a Gaussian KDE scaled to bar counts so
//! both share the count axis.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plotters::prelude::*;
use polars::prelude::DataFrame;
use tracing::{debug, warn};

use crate::pipeline::{gaussian_kde, histogram, movie_durations, release_years, type_counts};

const TYPE_CHART: &str = "type_counts.svg";
const RELEASE_YEAR_CHART: &str = "release_years.svg";
const DURATION_CHART: &str = "movie_durations.svg";

/// Points on the density curve
const KDE_POINTS: usize = 200;

const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
const SALMON: RGBColor = RGBColor(250, 128, 114);

/// Layout of one histogram chart
#[derive(Debug, Clone)]
pub struct HistogramChart {
    pub title: &'static str,
    pub x_desc: &'static str,
    pub bins: usize,
    pub color: RGBColor,
    pub size: (u32, u32),
}

impl HistogramChart {
    pub fn release_years() -> Self {
        Self {
            title: "Distribution of Release Years",
            x_desc: "Release Year",
            bins: 20,
            color: SKY_BLUE,
            size: (1000, 600),
        }
    }

    pub fn movie_durations() -> Self {
        Self {
            title: "Distribution of Movie Durations",
            x_desc: "Duration (minutes)",
            bins: 30,
            color: SALMON,
            size: (1000, 600),
        }
    }
}

/// Bar chart with one differently colored bar per category
pub fn render_count_chart(
    path: &Path,
    title: &str,
    x_desc: &str,
    counts: &[(String, usize)],
) -> Result<()> {
    let root = SVGBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let categories = counts.len().max(1) as u32;
    let top = counts.iter().map(|(_, c)| *c).max().unwrap_or(0);
    let y_max = ((top as f64) * 1.1).ceil().max(1.0) as u32;
    let labels: Vec<String> = counts.iter().map(|(name, _)| name.clone()).collect();

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((0u32..categories).into_segmented(), 0u32..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(x_desc)
        .y_desc("Count")
        .x_labels(labels.len().max(1))
        .x_label_formatter(&|v: &SegmentValue<u32>| match v {
            SegmentValue::CenterOf(i) => labels.get(*i as usize).cloned().unwrap_or_default(),
            _ => String::new(),
        })
        .draw()?;

    chart.draw_series(counts.iter().enumerate().map(|(i, (_, count))| {
        let i = i as u32;
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0),
                (SegmentValue::Exact(i + 1), *count as u32),
            ],
            Palette99::pick(i as usize).filled(),
        );
        bar.set_margin(0, 0, 40, 40);
        bar
    }))?;

    root.present()
        .with_context(|| format!("Failed to write chart: {}", path.display()))?;
    Ok(())
}

/// Histogram of `values` with a KDE curve scaled to counts.
///
/// An empty input still produces a chart with empty axes.
pub fn render_histogram(path: &Path, spec: &HistogramChart, values: &[f64]) -> Result<()> {
    let hist = histogram(values, spec.bins);
    let (lo, hi) = match (hist.edges.first(), hist.edges.last()) {
        (Some(&lo), Some(&hi)) => (lo, hi),
        _ => (0.0, 1.0),
    };

    let grid: Vec<f64> = (0..KDE_POINTS)
        .map(|i| lo + (hi - lo) * i as f64 / (KDE_POINTS - 1) as f64)
        .collect();
    let scale = values.len() as f64 * hist.bin_width();
    let curve: Vec<(f64, f64)> = grid
        .iter()
        .zip(gaussian_kde(values, &grid))
        .map(|(&x, density)| (x, density * scale))
        .collect();

    let curve_top = curve.iter().map(|(_, y)| *y).fold(0.0, f64::max);
    let y_max = (hist.max_count() as f64).max(curve_top).max(1.0) * 1.1;

    let root = SVGBackend::new(path, spec.size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(spec.title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(lo..hi, 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc(spec.x_desc)
        .y_desc("Count")
        .x_label_formatter(&|x: &f64| format!("{:.0}", x))
        .y_label_formatter(&|y: &f64| format!("{:.0}", y))
        .draw()?;

    let fill = spec.color.mix(0.6).filled();
    chart.draw_series(hist.counts.iter().enumerate().map(|(i, &count)| {
        Rectangle::new(
            [(hist.edges[i], 0.0), (hist.edges[i + 1], count as f64)],
            fill,
        )
    }))?;
    chart.draw_series(hist.counts.iter().enumerate().map(|(i, &count)| {
        Rectangle::new(
            [(hist.edges[i], 0.0), (hist.edges[i + 1], count as f64)],
            WHITE.stroke_width(1),
        )
    }))?;

    if !curve.is_empty() {
        chart.draw_series(LineSeries::new(curve, spec.color.stroke_width(3)))?;
    }

    root.present()
        .with_context(|| format!("Failed to write chart: {}", path.display()))?;
    Ok(())
}

/// Render all three charts into `out_dir`, returning the written paths.
pub fn render_charts(df: &DataFrame, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create chart directory: {}", out_dir.display()))?;

    let mut written = Vec::with_capacity(3);

    let path = out_dir.join(TYPE_CHART);
    render_count_chart(&path, "Count of Movies vs. TV Shows", "Type", &type_counts(df)?)?;
    debug!(path = %path.display(), "type chart written");
    written.push(path);

    let years = release_years(df)?;
    if years.is_empty() {
        warn!("no release years to plot");
    }
    let path = out_dir.join(RELEASE_YEAR_CHART);
    render_histogram(&path, &HistogramChart::release_years(), &years)?;
    debug!(path = %path.display(), values = years.len(), "release year chart written");
    written.push(path);

    let durations = movie_durations(df)?;
    if durations.is_empty() {
        warn!("no movie durations to plot");
    }
    let path = out_dir.join(DURATION_CHART);
    render_histogram(&path, &HistogramChart::movie_durations(), &durations)?;
    debug!(path = %path.display(), values = durations.len(), "duration chart written");
    written.push(path);

    Ok(written)
}
