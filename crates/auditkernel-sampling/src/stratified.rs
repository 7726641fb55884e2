//! Stratified proportional sampling kernel.

use crate::types::{seeded_rng, Sample, SamplingMethod};
use auditkernel_core::{AuditError, AuditKernel, Domain, KernelMetadata, Population, Result};
use std::collections::HashMap;

// ============================================================================
// Stratified Sampling Kernel
// ============================================================================

/// Stratified proportional sampling.
///
/// Partitions the population by a strata column and allocates the sample
/// budget proportionally, guaranteeing at least one representative per
/// non-empty stratum while the budget lasts.
///
/// Strata are processed in a deterministic order: descending by stratum
/// count, ties broken by ascending stratum key. When the budget is tight
/// this gives larger strata priority for the at-least-one guarantee. The
/// returned sample may be smaller than requested when proportional rounding
/// under-allocates; the discrepancy is visible via `Sample::requested`
/// versus `Sample::actual`.
#[derive(Debug, Clone)]
pub struct StratifiedSampling {
    metadata: KernelMetadata,
}

impl Default for StratifiedSampling {
    fn default() -> Self {
        Self::new()
    }
}

impl StratifiedSampling {
    /// Create a new stratified sampling kernel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            metadata: KernelMetadata::new("sampling/stratified", Domain::Sampling)
                .with_description("Proportional per-stratum selection with minimum representation"),
        }
    }

    /// Select up to `sample_size` records, stratified by `strata_column`.
    ///
    /// Fails if `sample_size` is zero, exceeds the population size, or the
    /// strata column is missing. Pass a seed for a reproducible selection.
    pub fn select(
        population: &Population,
        strata_column: &str,
        sample_size: usize,
        seed: Option<u64>,
    ) -> Result<Sample> {
        if sample_size == 0 {
            return Err(AuditError::validation("sample size must be positive"));
        }
        if sample_size > population.len() {
            return Err(AuditError::validation(
                "sample size cannot exceed population size",
            ));
        }
        if !population.has_column(strata_column) {
            return Err(AuditError::column_not_found(strata_column));
        }

        // Partition record indices by stratum key.
        let mut strata: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, record) in population.records().iter().enumerate() {
            let key = record
                .get(strata_column)
                .map(ToString::to_string)
                .unwrap_or_default();
            strata.entry(key).or_default().push(idx);
        }

        // Deterministic processing order: descending count, then ascending key.
        let mut ordered: Vec<(String, Vec<usize>)> = strata.into_iter().collect();
        ordered.sort_by(|(key_a, idx_a), (key_b, idx_b)| {
            idx_b.len().cmp(&idx_a.len()).then(key_a.cmp(key_b))
        });

        let total = population.len();
        let mut rng = seeded_rng(seed);
        let mut selected = Vec::with_capacity(sample_size);
        let mut remaining = sample_size;

        for (_, stratum_indices) in &ordered {
            if remaining == 0 {
                break;
            }
            let count = stratum_indices.len();
            let target = ((sample_size * count) / total).max(1);
            let take = target.min(count).min(remaining);

            for pick in rand::seq::index::sample(&mut rng, count, take).iter() {
                selected.push(stratum_indices[pick]);
            }
            remaining -= take;
        }

        Ok(Sample::from_indices(
            SamplingMethod::Stratified,
            sample_size,
            population,
            selected,
        ))
    }
}

impl AuditKernel for StratifiedSampling {
    fn metadata(&self) -> &KernelMetadata {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auditkernel_core::Record;

    fn population(categories: &[(&str, usize)]) -> Population {
        let mut records = Vec::new();
        let mut id = 0;
        for (category, count) in categories {
            for _ in 0..*count {
                records.push(
                    Record::new()
                        .with_number("id", id as f64)
                        .with_text("category", *category),
                );
                id += 1;
            }
        }
        Population::new(records).unwrap()
    }

    fn stratum_counts(sample: &Sample) -> std::collections::HashMap<String, usize> {
        let mut counts = std::collections::HashMap::new();
        for record in &sample.records {
            let key = record.get("category").unwrap().to_string();
            *counts.entry(key).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_every_stratum_represented() {
        let population = population(&[("A", 50), ("B", 30), ("C", 20)]);
        let sample =
            StratifiedSampling::select(&population, "category", 10, Some(3)).unwrap();

        let counts = stratum_counts(&sample);
        assert!(counts.contains_key("A"));
        assert!(counts.contains_key("B"));
        assert!(counts.contains_key("C"));
        assert!(sample.actual() <= 10);
    }

    #[test]
    fn test_proportional_allocation() {
        let population = population(&[("A", 80), ("B", 20)]);
        let sample =
            StratifiedSampling::select(&population, "category", 10, Some(11)).unwrap();

        let counts = stratum_counts(&sample);
        assert_eq!(counts["A"], 8);
        assert_eq!(counts["B"], 2);
        assert_eq!(sample.actual(), 10);
    }

    #[test]
    fn test_tight_budget_prioritizes_larger_strata() {
        // Budget of 2 across three strata: the two largest get the
        // at-least-one guarantee, the smallest is dropped.
        let population = population(&[("large", 60), ("medium", 30), ("tiny", 10)]);
        let sample =
            StratifiedSampling::select(&population, "category", 2, Some(5)).unwrap();

        let counts = stratum_counts(&sample);
        assert_eq!(sample.actual(), 2);
        assert!(counts.contains_key("large"));
        assert!(counts.contains_key("medium"));
        assert!(!counts.contains_key("tiny"));
    }

    #[test]
    fn test_tiny_stratum_still_represented() {
        // 1-record stratum gets its guaranteed representative when the
        // budget allows.
        let population = population(&[("common", 99), ("rare", 1)]);
        let sample =
            StratifiedSampling::select(&population, "category", 10, Some(17)).unwrap();

        let counts = stratum_counts(&sample);
        assert_eq!(counts["rare"], 1);
    }

    #[test]
    fn test_under_fill_is_surfaced_not_an_error() {
        // Many equally tiny strata with floor(...) rounding to the minimum:
        // the sample can come up short of the request.
        let population = population(&[("a", 3), ("b", 3), ("c", 3), ("d", 3)]);
        let sample =
            StratifiedSampling::select(&population, "category", 7, Some(23)).unwrap();

        assert!(sample.actual() <= 7);
        assert_eq!(sample.requested, 7);
        if sample.actual() < 7 {
            assert!(sample.under_filled());
        }
    }

    #[test]
    fn test_validation_errors() {
        let population = population(&[("A", 10)]);
        assert!(StratifiedSampling::select(&population, "category", 0, None).is_err());
        assert!(StratifiedSampling::select(&population, "category", 11, None).is_err());
        assert!(StratifiedSampling::select(&population, "missing", 5, None).is_err());
    }

    #[test]
    fn test_seeded_selection_is_reproducible() {
        let population = population(&[("A", 40), ("B", 40), ("C", 20)]);
        let a = StratifiedSampling::select(&population, "category", 12, Some(2)).unwrap();
        let b = StratifiedSampling::select(&population, "category", 12, Some(2)).unwrap();
        assert_eq!(a.indices, b.indices);
    }

    #[test]
    fn test_kernel_metadata() {
        let kernel = StratifiedSampling::new();
        assert_eq!(kernel.id(), "sampling/stratified");
        assert_eq!(kernel.domain(), Domain::Sampling);
    }
}
