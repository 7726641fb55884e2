//! Uniform random sampling kernel.

use crate::types::{seeded_rng, Sample, SamplingMethod};
use auditkernel_core::{AuditError, AuditKernel, Domain, KernelMetadata, Population, Result};

// ============================================================================
// Random Sampling Kernel
// ============================================================================

/// Uniform random sampling without replacement.
#[derive(Debug, Clone)]
pub struct RandomSampling {
    metadata: KernelMetadata,
}

impl Default for RandomSampling {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSampling {
    /// Create a new random sampling kernel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            metadata: KernelMetadata::new("sampling/random", Domain::Sampling)
                .with_description("Uniform random selection without replacement"),
        }
    }

    /// Select exactly `sample_size` records uniformly without replacement.
    ///
    /// Fails if `sample_size` is zero or exceeds the population size.
    /// Pass a seed for a reproducible selection.
    pub fn select(
        population: &Population,
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

        let mut rng = seeded_rng(seed);
        let indices = rand::seq::index::sample(&mut rng, population.len(), sample_size).into_vec();

        Ok(Sample::from_indices(
            SamplingMethod::Random,
            sample_size,
            population,
            indices,
        ))
    }
}

impl AuditKernel for RandomSampling {
    fn metadata(&self) -> &KernelMetadata {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auditkernel_core::Record;

    fn population(n: usize) -> Population {
        let records = (0..n)
            .map(|i| {
                Record::new()
                    .with_number("id", i as f64)
                    .with_number("amount", (i * 10) as f64)
            })
            .collect();
        Population::new(records).unwrap()
    }

    #[test]
    fn test_selects_exact_size_without_replacement() {
        let population = population(100);
        let sample = RandomSampling::select(&population, 10, Some(7)).unwrap();

        assert_eq!(sample.actual(), 10);
        assert_eq!(sample.requested, 10);
        assert!(!sample.under_filled());

        let mut seen = sample.indices.clone();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 10, "indices must be distinct");
    }

    #[test]
    fn test_zero_size_is_validation_error() {
        let population = population(10);
        assert!(RandomSampling::select(&population, 0, None).is_err());
    }

    #[test]
    fn test_oversized_request_is_validation_error() {
        let population = population(10);
        assert!(RandomSampling::select(&population, 11, None).is_err());
    }

    #[test]
    fn test_full_population_sample() {
        let population = population(5);
        let sample = RandomSampling::select(&population, 5, Some(1)).unwrap();
        assert_eq!(sample.actual(), 5);
    }

    #[test]
    fn test_seeded_selection_is_reproducible() {
        let population = population(50);
        let a = RandomSampling::select(&population, 8, Some(99)).unwrap();
        let b = RandomSampling::select(&population, 8, Some(99)).unwrap();
        assert_eq!(a.indices, b.indices);
    }

    #[test]
    fn test_kernel_metadata() {
        let kernel = RandomSampling::new();
        assert_eq!(kernel.id(), "sampling/random");
        assert_eq!(kernel.domain(), Domain::Sampling);
    }
}
