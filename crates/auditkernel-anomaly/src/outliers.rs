//! Statistical outlier detection kernels.
//!
//! Z-score and interquartile-range detection over numeric series. Short or
//! constant series are degenerate-but-valid inputs: they yield empty
//! outlier sets with the summary fields still reported, never errors.

use crate::types::{IqrReport, ZScoreReport};
use auditkernel_core::{AuditKernel, Domain, KernelMetadata};

/// Default Z-score threshold.
pub const DEFAULT_ZSCORE_THRESHOLD: f64 = 3.0;

/// IQR fence multiplier.
pub const IQR_FENCE_MULTIPLIER: f64 = 1.5;

// ============================================================================
// Z-Score Outlier Kernel
// ============================================================================

/// Z-score outlier detection.
#[derive(Debug, Clone)]
pub struct ZScoreOutliers {
    metadata: KernelMetadata,
}

impl Default for ZScoreOutliers {
    fn default() -> Self {
        Self::new()
    }
}

impl ZScoreOutliers {
    /// Create a new Z-score outlier kernel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            metadata: KernelMetadata::new("anomaly/zscore-outliers", Domain::AnomalyDetection)
                .with_description("Z-score outlier detection over numeric series"),
        }
    }

    /// Flag values whose absolute Z-score exceeds `threshold`.
    ///
    /// Fewer than 3 points cannot support a meaningful Z-score: the report
    /// carries the mean with an empty score list. A constant series (zero
    /// standard deviation) yields all-zero scores and no outliers rather
    /// than dividing by zero.
    #[must_use]
    pub fn detect(data: &[f64], threshold: f64) -> ZScoreReport {
        if data.len() < 3 {
            return ZScoreReport {
                outlier_indices: Vec::new(),
                outlier_values: Vec::new(),
                z_scores: Vec::new(),
                mean: mean(data),
                std: 0.0,
            };
        }

        let mean = mean(data);
        let std = sample_std(data, mean);

        if std == 0.0 {
            return ZScoreReport {
                outlier_indices: Vec::new(),
                outlier_values: Vec::new(),
                z_scores: vec![0.0; data.len()],
                mean,
                std: 0.0,
            };
        }

        let z_scores: Vec<f64> = data.iter().map(|x| (x - mean) / std).collect();
        let outlier_indices: Vec<usize> = z_scores
            .iter()
            .enumerate()
            .filter(|(_, z)| z.abs() > threshold)
            .map(|(i, _)| i)
            .collect();
        let outlier_values = outlier_indices.iter().map(|&i| data[i]).collect();

        ZScoreReport {
            outlier_indices,
            outlier_values,
            z_scores,
            mean,
            std,
        }
    }
}

impl AuditKernel for ZScoreOutliers {
    fn metadata(&self) -> &KernelMetadata {
        &self.metadata
    }
}

// ============================================================================
// IQR Outlier Kernel
// ============================================================================

/// Interquartile-range outlier detection.
#[derive(Debug, Clone)]
pub struct IqrOutliers {
    metadata: KernelMetadata,
}

impl Default for IqrOutliers {
    fn default() -> Self {
        Self::new()
    }
}

impl IqrOutliers {
    /// Create a new IQR outlier kernel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            metadata: KernelMetadata::new("anomaly/iqr-outliers", Domain::AnomalyDetection)
                .with_description("Interquartile-range outlier detection over numeric series"),
        }
    }

    /// Flag values outside `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]`.
    ///
    /// Quartiles need at least 4 points; shorter input yields an empty
    /// outlier set with the quartiles still reported and the fences zeroed.
    #[must_use]
    pub fn detect(data: &[f64]) -> IqrReport {
        if data.len() < 4 {
            return IqrReport {
                outlier_indices: Vec::new(),
                outlier_values: Vec::new(),
                q1: if data.is_empty() { 0.0 } else { quantile(data, 0.25) },
                q3: if data.is_empty() { 0.0 } else { quantile(data, 0.75) },
                iqr: 0.0,
                lower_bound: 0.0,
                upper_bound: 0.0,
            };
        }

        let q1 = quantile(data, 0.25);
        let q3 = quantile(data, 0.75);
        let iqr = q3 - q1;
        let lower_bound = q1 - IQR_FENCE_MULTIPLIER * iqr;
        let upper_bound = q3 + IQR_FENCE_MULTIPLIER * iqr;

        let outlier_indices: Vec<usize> = data
            .iter()
            .enumerate()
            .filter(|(_, &x)| x < lower_bound || x > upper_bound)
            .map(|(i, _)| i)
            .collect();
        let outlier_values = outlier_indices.iter().map(|&i| data[i]).collect();

        IqrReport {
            outlier_indices,
            outlier_values,
            q1,
            q3,
            iqr,
            lower_bound,
            upper_bound,
        }
    }
}

impl AuditKernel for IqrOutliers {
    fn metadata(&self) -> &KernelMetadata {
        &self.metadata
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        0.0
    } else {
        data.iter().sum::<f64>() / data.len() as f64
    }
}

fn sample_std(data: &[f64], mean: f64) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    let sum_sq: f64 = data.iter().map(|x| (x - mean).powi(2)).sum();
    (sum_sq / (data.len() - 1) as f64).sqrt()
}

/// Quantile by linear interpolation over the sorted values.
///
/// NaN values sort last under `total_cmp` and poison any quantile whose
/// interpolation touches them; the typed `Population` path rejects
/// non-finite numbers before they reach here.
fn quantile(data: &[f64], q: f64) -> f64 {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    let position = (sorted.len() - 1) as f64 * q;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    if lower == upper {
        sorted[lower]
    } else {
        let fraction = position - lower as f64;
        sorted[lower] + fraction * (sorted[upper] - sorted[lower])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERIES: [f64; 7] = [10.0, 12.0, 11.0, 100.0, 13.0, 11.0, 12.0];

    #[test]
    fn test_zscore_flags_single_outlier() {
        // In a 7-point series the outlier inflates the sample std enough
        // to keep its own |z| near 2.3, so threshold 2.0 isolates it.
        let report = ZScoreOutliers::detect(&SERIES, 2.0);
        assert_eq!(report.outlier_indices, vec![3]);
        assert_eq!(report.outlier_values, vec![100.0]);
        assert_eq!(report.z_scores.len(), SERIES.len());
        assert!(report.z_scores[3] > 2.0);
    }

    #[test]
    fn test_zscore_default_threshold_on_longer_series() {
        let mut data = vec![10.0, 12.0, 11.0, 13.0, 11.0, 12.0];
        data.extend_from_slice(&[11.0, 12.0, 10.0, 13.0, 12.0, 11.0, 10.0, 12.0, 11.0]);
        data.push(500.0);
        let report = ZScoreOutliers::detect(&data, DEFAULT_ZSCORE_THRESHOLD);
        assert_eq!(report.outlier_indices, vec![data.len() - 1]);
    }

    #[test]
    fn test_zscore_short_series_is_degenerate_not_error() {
        let report = ZScoreOutliers::detect(&[5.0, 6.0], DEFAULT_ZSCORE_THRESHOLD);
        assert!(report.outlier_indices.is_empty());
        assert!(report.z_scores.is_empty());
        assert!((report.mean - 5.5).abs() < 1e-12);
        assert_eq!(report.std, 0.0);
    }

    #[test]
    fn test_zscore_constant_series_no_divide_by_zero() {
        let report = ZScoreOutliers::detect(&[7.0; 5], DEFAULT_ZSCORE_THRESHOLD);
        assert!(report.outlier_indices.is_empty());
        assert_eq!(report.z_scores, vec![0.0; 5]);
        assert_eq!(report.std, 0.0);
    }

    #[test]
    fn test_zscore_empty_input() {
        let report = ZScoreOutliers::detect(&[], DEFAULT_ZSCORE_THRESHOLD);
        assert!(report.outlier_indices.is_empty());
        assert_eq!(report.mean, 0.0);
    }

    #[test]
    fn test_iqr_flags_outlier() {
        let report = IqrOutliers::detect(&SERIES);
        assert_eq!(report.outlier_indices, vec![3]);
        assert_eq!(report.outlier_values, vec![100.0]);
        assert!(report.iqr > 0.0);
        assert!(report.lower_bound < report.upper_bound);
    }

    #[test]
    fn test_iqr_short_series_is_degenerate_not_error() {
        let report = IqrOutliers::detect(&[1.0, 2.0]);
        assert!(report.outlier_indices.is_empty());
        assert_eq!(report.iqr, 0.0);
        assert_eq!(report.lower_bound, 0.0);
        assert_eq!(report.upper_bound, 0.0);
        // Quartiles are still reported for the short series.
        assert!((report.q1 - 1.25).abs() < 1e-12);
        assert!((report.q3 - 1.75).abs() < 1e-12);
    }

    #[test]
    fn test_iqr_empty_input() {
        let report = IqrOutliers::detect(&[]);
        assert!(report.outlier_indices.is_empty());
        assert_eq!(report.q1, 0.0);
        assert_eq!(report.q3, 0.0);
    }

    #[test]
    fn test_iqr_nan_input_does_not_panic() {
        // Raw-slice callers can hand over NaN; it must degrade, not panic.
        let report = IqrOutliers::detect(&[1.0, f64::NAN, 2.0, 3.0]);
        assert!(report.outlier_indices.is_empty());
    }

    #[test]
    fn test_quantile_interpolation() {
        let data = [1.0, 2.0, 3.0, 4.0];
        assert!((quantile(&data, 0.25) - 1.75).abs() < 1e-12);
        assert!((quantile(&data, 0.5) - 2.5).abs() < 1e-12);
        assert!((quantile(&data, 0.75) - 3.25).abs() < 1e-12);
    }

    #[test]
    fn test_kernel_metadata() {
        assert_eq!(ZScoreOutliers::new().id(), "anomaly/zscore-outliers");
        assert_eq!(IqrOutliers::new().id(), "anomaly/iqr-outliers");
        assert_eq!(IqrOutliers::new().domain(), Domain::AnomalyDetection);
    }
}
