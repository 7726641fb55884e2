//! Descriptive statistics kernel.

use crate::types::StatsSummary;
use auditkernel_core::{AuditKernel, Domain, KernelMetadata};

// ============================================================================
// Descriptive Statistics Kernel
// ============================================================================

/// Descriptive statistics over a numeric series.
///
/// Produces the summary an auditor scans before deeper testing: central
/// tendency, spread, range and distribution shape in one pass.
#[derive(Debug, Clone)]
pub struct DescriptiveStatistics {
    metadata: KernelMetadata,
}

impl Default for DescriptiveStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl DescriptiveStatistics {
    /// Create a new descriptive statistics kernel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            metadata: KernelMetadata::new("stats/descriptive", Domain::DescriptiveStatistics)
                .with_description("Summary statistics over a numeric series"),
        }
    }

    /// Summarize `data`.
    ///
    /// Empty input yields an all-zero summary. Variance and standard
    /// deviation use the sample (n - 1) denominator and are zero for a
    /// single value. Skewness and kurtosis use the bias-adjusted sample
    /// conventions and are zero below their minimum lengths (3 and 4)
    /// or for a constant series.
    #[must_use]
    pub fn summarize(data: &[f64]) -> StatsSummary {
        if data.is_empty() {
            return StatsSummary::default();
        }

        let count = data.len();
        let n = count as f64;
        let sum: f64 = data.iter().sum();
        let mean = sum / n;

        let variance = if count < 2 {
            0.0
        } else {
            data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0)
        };
        let std = variance.sqrt();

        let min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        StatsSummary {
            count,
            sum,
            mean,
            std,
            variance,
            min,
            max,
            median: median(data),
            skewness: skewness(data, mean, std),
            kurtosis: kurtosis(data, mean, std),
        }
    }
}

impl AuditKernel for DescriptiveStatistics {
    fn metadata(&self) -> &KernelMetadata {
        &self.metadata
    }
}

// NaN values sort last under `total_cmp`; the typed `Population` path
// rejects non-finite numbers before they reach here.
fn median(data: &[f64]) -> f64 {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Bias-adjusted sample skewness (adjusted Fisher-Pearson G1).
fn skewness(data: &[f64], mean: f64, std: f64) -> f64 {
    let n = data.len() as f64;
    if data.len() < 3 || std == 0.0 {
        return 0.0;
    }
    let m3: f64 = data.iter().map(|x| ((x - mean) / std).powi(3)).sum();
    n / ((n - 1.0) * (n - 2.0)) * m3
}

/// Bias-adjusted excess kurtosis (sample G2).
fn kurtosis(data: &[f64], mean: f64, std: f64) -> f64 {
    let n = data.len() as f64;
    if data.len() < 4 || std == 0.0 {
        return 0.0;
    }
    let m4: f64 = data.iter().map(|x| ((x - mean) / std).powi(4)).sum();
    n * (n + 1.0) / ((n - 1.0) * (n - 2.0) * (n - 3.0)) * m4
        - 3.0 * (n - 1.0).powi(2) / ((n - 2.0) * (n - 3.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_summary_on_small_series() {
        let summary = DescriptiveStatistics::summarize(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(summary.count, 5);
        assert!((summary.sum - 15.0).abs() < TOLERANCE);
        assert!((summary.mean - 3.0).abs() < TOLERANCE);
        assert!((summary.variance - 2.5).abs() < TOLERANCE);
        assert!((summary.std - 2.5f64.sqrt()).abs() < TOLERANCE);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 5.0);
        assert!((summary.median - 3.0).abs() < TOLERANCE);
        // Symmetric series: no skew, platykurtic.
        assert!(summary.skewness.abs() < TOLERANCE);
        assert!((summary.kurtosis - (-1.2)).abs() < 1e-6);
    }

    #[test]
    fn test_even_count_median_is_midpoint() {
        let summary = DescriptiveStatistics::summarize(&[4.0, 1.0, 3.0, 2.0]);
        assert!((summary.median - 2.5).abs() < TOLERANCE);
    }

    #[test]
    fn test_right_skewed_series_has_positive_skewness() {
        let summary = DescriptiveStatistics::summarize(&[1.0, 1.0, 1.0, 2.0, 50.0]);
        assert!(summary.skewness > 0.0);
        assert!(summary.kurtosis > 0.0);
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        let summary = DescriptiveStatistics::summarize(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.sum, 0.0);
        assert_eq!(summary.mean, 0.0);
        assert_eq!(summary.min, 0.0);
        assert_eq!(summary.max, 0.0);
    }

    #[test]
    fn test_single_value() {
        let summary = DescriptiveStatistics::summarize(&[42.0]);
        assert_eq!(summary.count, 1);
        assert_eq!(summary.mean, 42.0);
        assert_eq!(summary.median, 42.0);
        assert_eq!(summary.variance, 0.0);
        assert_eq!(summary.std, 0.0);
        assert_eq!(summary.skewness, 0.0);
        assert_eq!(summary.kurtosis, 0.0);
    }

    #[test]
    fn test_constant_series_has_zero_shape_statistics() {
        let summary = DescriptiveStatistics::summarize(&[7.0; 10]);
        assert_eq!(summary.std, 0.0);
        assert_eq!(summary.skewness, 0.0);
        assert_eq!(summary.kurtosis, 0.0);
    }

    #[test]
    fn test_shape_statistics_below_minimum_length() {
        let short = DescriptiveStatistics::summarize(&[1.0, 9.0]);
        assert_eq!(short.skewness, 0.0);
        assert_eq!(short.kurtosis, 0.0);

        let three = DescriptiveStatistics::summarize(&[1.0, 2.0, 9.0]);
        assert!(three.skewness != 0.0);
        assert_eq!(three.kurtosis, 0.0);
    }

    #[test]
    fn test_nan_input_does_not_panic() {
        // Raw-slice callers can hand over NaN; moments go NaN, the
        // order statistics stay defined with NaN sorted last.
        let summary = DescriptiveStatistics::summarize(&[1.0, f64::NAN, 2.0]);
        assert_eq!(summary.count, 3);
        assert!(summary.mean.is_nan());
        assert_eq!(summary.median, 2.0);
    }

    #[test]
    fn test_kernel_metadata() {
        let kernel = DescriptiveStatistics::new();
        assert_eq!(kernel.id(), "stats/descriptive");
        assert_eq!(kernel.domain(), Domain::DescriptiveStatistics);
    }
}
