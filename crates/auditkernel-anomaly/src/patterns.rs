//! Transaction pattern detection kernels.
//!
//! Round-number flagging, duplicate detection over caller-chosen key
//! columns, and compound pattern screening (rapid succession, unusual
//! amounts, potential split transactions).

use crate::outliers::IqrOutliers;
use crate::types::{
    percentage, DuplicateReport, PatternFlags, RoundNumberReport, AMOUNT_COLUMN, TIMESTAMP_COLUMN,
};
use auditkernel_core::{AuditError, AuditKernel, Domain, KernelMetadata, Population, Result};
use std::collections::BTreeMap;

/// Default round-number threshold.
pub const DEFAULT_ROUND_NUMBER_THRESHOLD: f64 = 100.0;

/// Maximum gap between adjacent transactions to count as rapid succession.
pub const RAPID_SUCCESSION_SECONDS: i64 = 60;

/// Relative tolerance for split-transaction amount matching.
pub const SPLIT_AMOUNT_TOLERANCE: f64 = 0.1;

// ============================================================================
// Round Number Kernel
// ============================================================================

/// Round-number amount flagging.
///
/// Suspiciously round amounts (exact multiples of the threshold) are a
/// classic fabrication signal in journal entry testing.
#[derive(Debug, Clone)]
pub struct RoundNumberFlag {
    metadata: KernelMetadata,
}

impl Default for RoundNumberFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundNumberFlag {
    /// Create a new round-number kernel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            metadata: KernelMetadata::new("anomaly/round-numbers", Domain::AnomalyDetection)
                .with_description("Flags amounts that are exact multiples of a threshold"),
        }
    }

    /// Flag amounts that are at least `threshold` and an exact multiple
    /// of it. Values below the threshold are never flagged, so a 100.0
    /// threshold passes over 0.0 and 50.0 but catches 100.0 and 2300.0.
    #[must_use]
    pub fn detect(amounts: &[f64], threshold: f64) -> RoundNumberReport {
        let flagged_indices: Vec<usize> = amounts
            .iter()
            .enumerate()
            .filter(|(_, &v)| v >= threshold && v % threshold == 0.0)
            .map(|(i, _)| i)
            .collect();
        let flagged_values: Vec<f64> = flagged_indices.iter().map(|&i| amounts[i]).collect();
        let count = flagged_indices.len();

        RoundNumberReport {
            flagged_indices,
            flagged_values,
            count,
            percentage: percentage(count, amounts.len()),
        }
    }
}

impl AuditKernel for RoundNumberFlag {
    fn metadata(&self) -> &KernelMetadata {
        &self.metadata
    }
}

// ============================================================================
// Duplicate Detection Kernel
// ============================================================================

/// Exact duplicate detection over caller-chosen key columns.
#[derive(Debug, Clone)]
pub struct DuplicateDetection {
    metadata: KernelMetadata,
}

impl Default for DuplicateDetection {
    fn default() -> Self {
        Self::new()
    }
}

impl DuplicateDetection {
    /// Create a new duplicate detection kernel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            metadata: KernelMetadata::new("anomaly/duplicates", Domain::AnomalyDetection)
                .with_description("Exact duplicate detection over key columns"),
        }
    }

    /// Find every record whose key (the values of `key_columns`) occurs
    /// more than once. All occurrences are reported, not just the
    /// second and later ones, so an auditor sees the full duplicate set.
    pub fn detect(population: &Population, key_columns: &[&str]) -> Result<DuplicateReport> {
        if key_columns.is_empty() {
            return Err(AuditError::validation(
                "at least one key column is required",
            ));
        }
        for column in key_columns {
            if !population.has_column(column) {
                return Err(AuditError::column_not_found(column));
            }
        }

        let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (idx, record) in population.records().iter().enumerate() {
            // Columns were validated above, so the key always builds.
            if let Some(key) = record.composite_key(key_columns) {
                groups.entry(key).or_default().push(idx);
            }
        }

        let mut indices: Vec<usize> = Vec::new();
        let mut group_count = 0;
        for members in groups.values() {
            if members.len() > 1 {
                group_count += 1;
                indices.extend_from_slice(members);
            }
        }
        indices.sort_unstable();
        let records = indices
            .iter()
            .map(|&idx| population.records()[idx].clone())
            .collect();

        Ok(DuplicateReport {
            indices,
            records,
            group_count,
        })
    }
}

impl AuditKernel for DuplicateDetection {
    fn metadata(&self) -> &KernelMetadata {
        &self.metadata
    }
}

// ============================================================================
// Unusual Pattern Kernel
// ============================================================================

/// Compound transaction pattern screening.
///
/// Screens a population for rapid-succession bursts, amount outliers and
/// potential split transactions in one pass over the time-sorted data.
#[derive(Debug, Clone)]
pub struct UnusualPatterns {
    metadata: KernelMetadata,
}

impl Default for UnusualPatterns {
    fn default() -> Self {
        Self::new()
    }
}

impl UnusualPatterns {
    /// Create a new unusual pattern kernel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            metadata: KernelMetadata::new("anomaly/unusual-patterns", Domain::AnomalyDetection)
                .with_description("Rapid succession, amount outlier and split screening"),
        }
    }

    /// Screen `population` for unusual transaction patterns.
    ///
    /// Records are examined in `timestamp` order when that column exists,
    /// otherwise in input order; the returned indices refer to positions
    /// in that examination order. Amount-based flags are empty when the
    /// population has no `amount` column.
    ///
    /// - Rapid succession: both members of any adjacent pair less than
    ///   60 seconds apart.
    /// - Unusual amounts: IQR outliers over the amounts.
    /// - Split transactions: three consecutive amounts where the second
    ///   and third are within 10% of a positive first, a shape typical
    ///   of approval-limit evasion.
    pub fn detect(population: &Population) -> Result<PatternFlags> {
        if population.is_empty() {
            return Ok(PatternFlags::default());
        }

        // Examination order: timestamp-sorted when available.
        let mut order: Vec<usize> = (0..population.len()).collect();
        let timestamps = if population.has_column(TIMESTAMP_COLUMN) {
            let ts = population.timestamp_column(TIMESTAMP_COLUMN)?;
            order.sort_by_key(|&i| ts[i]);
            Some(ts)
        } else {
            None
        };

        let mut flags = PatternFlags::default();

        if let Some(ts) = &timestamps {
            for pos in 1..order.len() {
                let gap = ts[order[pos]] - ts[order[pos - 1]];
                if gap.num_seconds() < RAPID_SUCCESSION_SECONDS {
                    flags.rapid_succession.push(pos - 1);
                    flags.rapid_succession.push(pos);
                }
            }
        }

        if population.has_column(AMOUNT_COLUMN) {
            let raw = population.numeric_column(AMOUNT_COLUMN)?;
            let amounts: Vec<f64> = order.iter().map(|&i| raw[i]).collect();

            flags.unusual_amounts = IqrOutliers::detect(&amounts).outlier_indices;

            for pos in 0..amounts.len().saturating_sub(2) {
                let base = amounts[pos];
                if base <= 0.0 {
                    continue;
                }
                let lo = base * (1.0 - SPLIT_AMOUNT_TOLERANCE);
                let hi = base * (1.0 + SPLIT_AMOUNT_TOLERANCE);
                let near = |v: f64| v >= lo && v <= hi;
                if near(amounts[pos + 1]) && near(amounts[pos + 2]) {
                    flags.split_transactions.extend([pos, pos + 1, pos + 2]);
                }
            }
        }

        dedup_sorted(&mut flags.rapid_succession);
        dedup_sorted(&mut flags.unusual_amounts);
        dedup_sorted(&mut flags.split_transactions);

        Ok(flags)
    }
}

impl AuditKernel for UnusualPatterns {
    fn metadata(&self) -> &KernelMetadata {
        &self.metadata
    }
}

fn dedup_sorted(indices: &mut Vec<usize>) {
    indices.sort_unstable();
    indices.dedup();
}
