//! Monetary unit sampling (MUS) kernel.

use crate::types::{seeded_rng, Sample, SamplingMethod};
use auditkernel_core::{AuditError, AuditKernel, Domain, KernelMetadata, Population, Result};
use rand::Rng;

// ============================================================================
// Monetary Unit Sampling Kernel
// ============================================================================

/// Monetary unit sampling (probability-proportional-to-value).
///
/// Walks the cumulative sum of the positive amounts at a fixed interval
/// from a random start point; each sampling point selects the record whose
/// cumulative sum first reaches it. Larger-value records are proportionally
/// more likely to be hit, which is MUS's defining property.
#[derive(Debug, Clone)]
pub struct MonetaryUnitSampling {
    metadata: KernelMetadata,
}

impl Default for MonetaryUnitSampling {
    fn default() -> Self {
        Self::new()
    }
}

impl MonetaryUnitSampling {
    /// Create a new monetary unit sampling kernel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            metadata: KernelMetadata::new("sampling/monetary-unit", Domain::Sampling)
                .with_description("Probability-proportional-to-value selection"),
        }
    }

    /// Select up to `sample_size` records with probability proportional to
    /// their amount.
    ///
    /// Non-positive amounts are filtered out first; it is a validation
    /// error if none remain. A request larger than the positive-amount
    /// count is clamped to it. The sampling interval defaults to
    /// `total_value / sample_size`; a caller-supplied interval must be
    /// positive. The returned count may be less than requested when the
    /// population has few high-value records relative to the interval.
    pub fn select(
        population: &Population,
        amount_column: &str,
        sample_size: usize,
        interval: Option<f64>,
        seed: Option<u64>,
    ) -> Result<Sample> {
        if sample_size == 0 {
            return Err(AuditError::validation("sample size must be positive"));
        }
        let amounts = population.numeric_column(amount_column)?;

        // Keep only strictly positive amounts, remembering source indices.
        let positives: Vec<(usize, f64)> = amounts
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, amount)| amount > 0.0)
            .collect();

        if positives.is_empty() {
            return Err(AuditError::validation(
                "no positive amounts found in population",
            ));
        }

        let requested = sample_size;
        let sample_size = sample_size.min(positives.len());
        let total_value: f64 = positives.iter().map(|&(_, amount)| amount).sum();

        let interval = match interval {
            Some(value) if value <= 0.0 => {
                return Err(AuditError::validation("sampling interval must be positive"));
            }
            Some(value) => value,
            None => total_value / sample_size as f64,
        };

        let mut rng = seeded_rng(seed);
        let start: f64 = rng.random_range(0.0..interval);

        // Cumulative sums over the positive subpopulation.
        let mut cumulative = Vec::with_capacity(positives.len());
        let mut running = 0.0;
        for &(_, amount) in &positives {
            running += amount;
            cumulative.push(running);
        }

        // Single forward-advancing pointer over the cumulative sums: each
        // sampling point lands at or after the previous one, so the walk is
        // O(n) overall rather than rescanning per point.
        let mut selected = Vec::with_capacity(sample_size);
        let mut point = start;
        let mut cursor = 0;
        while point <= total_value && selected.len() < sample_size {
            while cursor < cumulative.len() && cumulative[cursor] < point {
                cursor += 1;
            }
            if cursor >= cumulative.len() {
                break;
            }
            let source_idx = positives[cursor].0;
            if selected.last() != Some(&source_idx) {
                selected.push(source_idx);
            }
            point += interval;
        }

        Ok(Sample::from_indices(
            SamplingMethod::MonetaryUnit,
            requested,
            population,
            selected,
        ))
    }
}

impl AuditKernel for MonetaryUnitSampling {
    fn metadata(&self) -> &KernelMetadata {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RandomSampling;
    use auditkernel_core::Record;

    fn population(amounts: &[f64]) -> Population {
        let records = amounts
            .iter()
            .enumerate()
            .map(|(i, &amount)| {
                Record::new()
                    .with_number("id", i as f64)
                    .with_number("amount", amount)
            })
            .collect();
        Population::new(records).unwrap()
    }

    fn selected_value(population: &Population, sample: &Sample) -> f64 {
        sample
            .indices
            .iter()
            .map(|&idx| {
                population.records()[idx]
                    .get("amount")
                    .unwrap()
                    .as_number()
                    .unwrap()
            })
            .sum()
    }

    #[test]
    fn test_selects_distinct_records() {
        let population = population(&[1000.0, 2000.0, 500.0, 1500.0, 3000.0, 800.0, 1200.0]);
        let sample =
            MonetaryUnitSampling::select(&population, "amount", 4, None, Some(9)).unwrap();

        assert!(sample.actual() <= 4);
        assert!(sample.actual() >= 1);
        let mut seen = sample.indices.clone();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), sample.actual(), "indices must be distinct");
    }

    #[test]
    fn test_non_positive_amounts_filtered() {
        let population = population(&[-50.0, 0.0, 4000.0, 100.0]);
        let sample =
            MonetaryUnitSampling::select(&population, "amount", 2, None, Some(1)).unwrap();

        for &idx in &sample.indices {
            let amount = population.records()[idx]
                .get("amount")
                .unwrap()
                .as_number()
                .unwrap();
            assert!(amount > 0.0);
        }
    }

    #[test]
    fn test_no_positive_amounts_is_validation_error() {
        let population = population(&[-10.0, 0.0, -5.0]);
        let err = MonetaryUnitSampling::select(&population, "amount", 2, None, None).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_request_clamped_to_positive_count() {
        let population = population(&[100.0, 0.0, 200.0]);
        let sample =
            MonetaryUnitSampling::select(&population, "amount", 10, None, Some(4)).unwrap();
        assert!(sample.actual() <= 2);
        assert_eq!(sample.requested, 10);
    }

    #[test]
    fn test_dominant_record_always_selected() {
        // One record carries nearly all the value; every interval walk
        // must hit it.
        let population = population(&[1.0, 1.0, 1.0, 1.0, 100_000.0]);
        for seed in 0..20 {
            let sample =
                MonetaryUnitSampling::select(&population, "amount", 2, None, Some(seed)).unwrap();
            assert!(
                sample.indices.contains(&4),
                "seed {seed} missed the dominant record"
            );
        }
    }

    #[test]
    fn test_validation_errors() {
        let population = population(&[100.0, 200.0]);
        assert!(MonetaryUnitSampling::select(&population, "amount", 0, None, None).is_err());
        assert!(MonetaryUnitSampling::select(&population, "missing", 2, None, None).is_err());
        assert!(
            MonetaryUnitSampling::select(&population, "amount", 2, Some(-5.0), None).is_err()
        );
    }

    #[test]
    fn test_bias_toward_high_value_records() {
        // Right-skewed population: MUS should capture a larger share of
        // total value than plain random sampling of the same size.
        let mut amounts = vec![10.0; 95];
        amounts.extend([50_000.0, 80_000.0, 120_000.0, 200_000.0, 400_000.0]);
        let population = population(&amounts);
        let total: f64 = amounts.iter().sum();

        let trials = 30;
        let mut mus_share = 0.0;
        let mut random_share = 0.0;
        for seed in 0..trials {
            let mus =
                MonetaryUnitSampling::select(&population, "amount", 5, None, Some(seed)).unwrap();
            let random = RandomSampling::select(&population, 5, Some(seed)).unwrap();
            mus_share += selected_value(&population, &mus) / total;
            random_share += selected_value(&population, &random) / total;
        }
        mus_share /= trials as f64;
        random_share /= trials as f64;

        assert!(
            mus_share > random_share,
            "MUS share {mus_share:.3} should exceed random share {random_share:.3}"
        );
    }

    #[test]
    fn test_kernel_metadata() {
        let kernel = MonetaryUnitSampling::new();
        assert_eq!(kernel.id(), "sampling/monetary-unit");
        assert_eq!(kernel.domain(), Domain::Sampling);
    }
}
