//! Descriptive statistics over f64 values
//!
//! Location and spread come from polars' chunked-array aggregations; the
//! histogram and density helpers for the charts are computed here. Every
//! function accepts empty input. Location and spread of nothing are NaN;
//! callers print them as-is instead of failing the run.

use polars::prelude::*;

/// Wrap plain values as a Float64 chunked array for polars aggregations
pub fn to_chunked(values: &[f64]) -> Float64Chunked {
    Float64Chunked::from_slice("values".into(), values)
}

/// Mean of the non-null values, NaN when there are none
pub fn mean_of(values: &Float64Chunked) -> f64 {
    values.mean().unwrap_or(f64::NAN)
}

/// Median of the non-null values: the middle element, or the average of the
/// two middle elements for an even count
pub fn median_of(values: &Float64Chunked) -> f64 {
    values.median().unwrap_or(f64::NAN)
}

/// Standard deviation with `ddof` delta degrees of freedom.
/// NaN when there are no more than `ddof` non-null values.
pub fn std_of(values: &Float64Chunked, ddof: u8) -> f64 {
    if values.len() - values.null_count() <= ddof as usize {
        return f64::NAN;
    }
    values.std(ddof).unwrap_or(f64::NAN)
}

/// Quantile with linear interpolation between closest ranks, `q` in [0, 1]
pub fn quantile_of(values: &Float64Chunked, q: f64) -> f64 {
    values
        .quantile(q.clamp(0.0, 1.0), QuantileMethod::Linear)
        .ok()
        .flatten()
        .unwrap_or(f64::NAN)
}

pub fn mean(values: &[f64]) -> f64 {
    mean_of(&to_chunked(values))
}

pub fn median(values: &[f64]) -> f64 {
    median_of(&to_chunked(values))
}

/// Population standard deviation (divisor N)
pub fn population_std(values: &[f64]) -> f64 {
    std_of(&to_chunked(values), 0)
}

/// Sample standard deviation (divisor N - 1), as shown in `describe` tables
pub fn sample_std(values: &[f64]) -> f64 {
    std_of(&to_chunked(values), 1)
}

pub fn quantile(values: &[f64], q: f64) -> f64 {
    quantile_of(&to_chunked(values), q)
}

/// Count, mean, median and population standard deviation of one variable
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

impl DescriptiveStats {
    pub fn from_values(values: &[f64]) -> Self {
        let chunked = to_chunked(values);
        Self {
            count: values.len(),
            mean: mean_of(&chunked),
            median: median_of(&chunked),
            std_dev: std_of(&chunked, 0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Equal-width histogram
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `bins + 1` ascending bin edges
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn bin_width(&self) -> f64 {
        match self.edges.as_slice() {
            [first, second, ..] => second - first,
            _ => 0.0,
        }
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Bin `values` into `bins` equal-width bins spanning min..=max.
///
/// Bins are half-open except the last, which also holds the maximum. When
/// every value is equal the range is widened by 0.5 on each side. Non-finite
/// values are ignored.
pub fn histogram(values: &[f64], bins: usize) -> Histogram {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let bins = bins.max(1);

    if finite.is_empty() {
        return Histogram {
            edges: (0..=bins).map(|i| i as f64 / bins as f64).collect(),
            counts: vec![0; bins],
        };
    }

    let mut lo = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();
    let mut counts = vec![0usize; bins];
    for v in finite {
        let index = (((v - lo) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }

    Histogram { edges, counts }
}

/// Scott's rule bandwidth for a Gaussian kernel
pub fn scott_bandwidth(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    sample_std(values) * n.powf(-1.0 / 5.0)
}

/// Gaussian kernel density estimate evaluated at each point of `grid`.
///
/// Returns an empty vector when the bandwidth is not positive (fewer than
/// two values, or zero spread), since no smooth curve exists.
pub fn gaussian_kde(values: &[f64], grid: &[f64]) -> Vec<f64> {
    let bandwidth = scott_bandwidth(values);
    if !(bandwidth.is_finite() && bandwidth > 0.0) {
        return Vec::new();
    }

    let n = values.len() as f64;
    let norm = 1.0 / (n * bandwidth * (2.0 * std::f64::consts::PI).sqrt());
    grid.iter()
        .map(|&x| {
            let sum: f64 = values
                .iter()
                .map(|&v| {
                    let z = (x - v) / bandwidth;
                    (-0.5 * z * z).exp()
                })
                .sum();
            sum * norm
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_median_even_and_odd() {
        assert!((median(&[1.0, 2.0, 3.0, 4.0]) - 2.5).abs() < EPS);
        assert!((median(&[3.0, 1.0, 2.0]) - 2.0).abs() < EPS);
    }

    #[test]
    fn test_population_std() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((population_std(&values) - 2.0).abs() < EPS);
        assert!((sample_std(&values) - 2.138089935299395).abs() < 1e-12);
    }

    #[test]
    fn test_empty_input_is_nan() {
        let stats = DescriptiveStats::from_values(&[]);
        assert!(stats.is_empty());
        assert!(stats.mean.is_nan());
        assert!(stats.median.is_nan());
        assert!(stats.std_dev.is_nan());
        assert!(quantile(&[], 0.5).is_nan());
    }

    #[test]
    fn test_single_value() {
        let stats = DescriptiveStats::from_values(&[7.0]);
        assert_eq!(stats.mean, 7.0);
        assert_eq!(stats.median, 7.0);
        assert_eq!(stats.std_dev, 0.0);
        assert!(sample_std(&[7.0]).is_nan());
    }

    #[test]
    fn test_quantile_interpolates() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert!((quantile(&values, 0.25) - 1.75).abs() < EPS);
        assert!((quantile(&values, 0.5) - 2.5).abs() < EPS);
        assert_eq!(quantile(&values, 1.0), 4.0);
    }

    #[test]
    fn test_chunked_statistics_skip_nulls() {
        let values: Float64Chunked = [Some(1.0), None, Some(3.0), Some(5.0), None]
            .into_iter()
            .collect();

        assert!((mean_of(&values) - 3.0).abs() < EPS);
        assert!((median_of(&values) - 3.0).abs() < EPS);
        assert!((std_of(&values, 1) - 2.0).abs() < EPS);
        assert!((quantile_of(&values, 0.25) - 2.0).abs() < EPS);
        assert!(std_of(&[Some(4.0), None].into_iter().collect(), 1).is_nan());
    }

    #[test]
    fn test_histogram_last_bin_is_closed() {
        let values = [0.0, 1.0, 2.0, 3.0, 4.0, 10.0];
        let hist = histogram(&values, 5);

        assert_eq!(hist.edges.len(), 6);
        assert_eq!(hist.counts.iter().sum::<usize>(), values.len());
        assert_eq!(hist.counts[4], 1, "maximum lands in the last bin");
        assert!((hist.bin_width() - 2.0).abs() < EPS);
        assert_eq!(hist.max_count(), 2);
    }

    #[test]
    fn test_histogram_constant_values() {
        let hist = histogram(&[5.0, 5.0, 5.0], 4);
        assert_eq!(hist.counts.iter().sum::<usize>(), 3);
        assert!((hist.edges[0] - 4.5).abs() < EPS);
        assert!((hist.edges[4] - 5.5).abs() < EPS);
    }

    #[test]
    fn test_histogram_empty() {
        let hist = histogram(&[], 20);
        assert_eq!(hist.counts, vec![0; 20]);
        assert_eq!(hist.max_count(), 0);
    }

    #[test]
    fn test_kde_integrates_to_about_one() {
        let values: Vec<f64> = (0..50).map(|i| (i % 10) as f64).collect();
        let step = 0.05;
        let grid: Vec<f64> = (0..=600).map(|i| -10.0 + i as f64 * step).collect();
        let density = gaussian_kde(&values, &grid);
        let area: f64 = density.iter().sum::<f64>() * step;
        assert!((area - 1.0).abs() < 0.01, "area was {}", area);
    }

    #[test]
    fn test_kde_degenerate_input() {
        assert!(gaussian_kde(&[1.0], &[0.0, 1.0]).is_empty());
        assert!(gaussian_kde(&[2.0, 2.0], &[0.0, 1.0]).is_empty());
    }
}
