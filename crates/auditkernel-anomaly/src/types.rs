//! Anomaly detection types and data structures.

use auditkernel_core::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Column name the timing and pattern detectors read timestamps from.
pub const TIMESTAMP_COLUMN: &str = "timestamp";

/// Column name the pattern detectors read amounts from.
pub const AMOUNT_COLUMN: &str = "amount";

// ============================================================================
// Outlier Reports
// ============================================================================

/// Result of Z-score outlier detection.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ZScoreReport {
    /// Indices of flagged values.
    pub outlier_indices: Vec<usize>,
    /// The flagged values.
    pub outlier_values: Vec<f64>,
    /// Z-score per input value; empty for fewer than 3 points.
    pub z_scores: Vec<f64>,
    /// Mean of the input.
    pub mean: f64,
    /// Sample standard deviation of the input.
    pub std: f64,
}

/// Result of IQR outlier detection.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IqrReport {
    /// Indices of flagged values.
    pub outlier_indices: Vec<usize>,
    /// The flagged values.
    pub outlier_values: Vec<f64>,
    /// First quartile.
    pub q1: f64,
    /// Third quartile.
    pub q3: f64,
    /// Interquartile range (zero for fewer than 4 points).
    pub iqr: f64,
    /// Lower fence `Q1 - 1.5 * IQR`.
    pub lower_bound: f64,
    /// Upper fence `Q3 + 1.5 * IQR`.
    pub upper_bound: f64,
}

// ============================================================================
// Pattern Reports
// ============================================================================

/// Result of round-number flagging.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundNumberReport {
    /// Indices of flagged amounts.
    pub flagged_indices: Vec<usize>,
    /// The flagged amounts.
    pub flagged_values: Vec<f64>,
    /// Number of flagged amounts.
    pub count: usize,
    /// Flagged share of the input, in percent.
    pub percentage: f64,
}

/// Result of duplicate detection.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DuplicateReport {
    /// Indices of every row sharing a key with at least one other row.
    pub indices: Vec<usize>,
    /// The duplicate rows, in index order.
    pub records: Vec<Record>,
    /// Number of distinct keys that had duplicates.
    pub group_count: usize,
}

/// Compound pattern flags over a time-sorted population.
///
/// All index lists refer to positions in the timestamp-sorted order (input
/// order when the population has no timestamp column), deduplicated and
/// sorted ascending.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PatternFlags {
    /// Members of adjacent pairs less than 60 seconds apart.
    pub rapid_succession: Vec<usize>,
    /// Amount outliers per the IQR detector.
    pub unusual_amounts: Vec<usize>,
    /// Members of consecutive triples with amounts within 10% of the first.
    pub split_transactions: Vec<usize>,
}

// ============================================================================
// Timing Reports
// ============================================================================

/// Result of off-hours detection.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OffHoursReport {
    /// Indices of transactions outside business hours.
    pub flagged_indices: Vec<usize>,
    /// Number of flagged transactions.
    pub flagged_count: usize,
    /// Total transactions examined.
    pub total_count: usize,
    /// Flagged share of the input, in percent.
    pub percentage: f64,
    /// Count of flagged transactions per hour of day.
    pub hour_distribution: BTreeMap<u32, usize>,
    /// The `[start, end)` business-hours window that was applied.
    pub business_hours: (u32, u32),
}

/// Result of weekend detection.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WeekendReport {
    /// Indices of weekend transactions.
    pub flagged_indices: Vec<usize>,
    /// Number of flagged transactions.
    pub flagged_count: usize,
    /// Total transactions examined.
    pub total_count: usize,
    /// Flagged share of the input, in percent.
    pub percentage: f64,
    /// Number of Saturday transactions.
    pub saturday_count: usize,
    /// Number of Sunday transactions.
    pub sunday_count: usize,
}

/// Result of holiday detection.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HolidayReport {
    /// Indices of holiday transactions.
    pub flagged_indices: Vec<usize>,
    /// Number of flagged transactions.
    pub flagged_count: usize,
    /// Total transactions examined.
    pub total_count: usize,
    /// Flagged share of the input, in percent.
    pub percentage: f64,
    /// Count of transactions per holiday that saw any.
    pub holiday_distribution: BTreeMap<NaiveDate, usize>,
    /// The holidays that were checked, sorted and deduplicated.
    pub holidays_checked: Vec<NaiveDate>,
}

/// Percentage of `part` in `total`, zero when the total is empty.
pub(crate) fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_empty_total() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(1, 4), 25.0);
    }
}
