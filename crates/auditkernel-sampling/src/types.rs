//! Sampling types and data structures.

use auditkernel_core::{Population, Record};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Selection method used to draw a sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SamplingMethod {
    /// Uniform random selection without replacement.
    Random,
    /// Proportional selection per stratum.
    Stratified,
    /// Probability-proportional-to-value (PPS) selection.
    MonetaryUnit,
}

impl SamplingMethod {
    /// Returns the method name as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            SamplingMethod::Random => "random",
            SamplingMethod::Stratified => "stratified",
            SamplingMethod::MonetaryUnit => "monetary-unit",
        }
    }
}

impl fmt::Display for SamplingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An ordered subset of a population's records.
///
/// Tagged with the selecting method and the requested size. Stratified and
/// monetary-unit sampling may legitimately return fewer records than
/// requested; compare [`Sample::actual`] against [`Sample::requested`] to
/// observe the discrepancy.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Sample {
    /// Method used to select this sample.
    pub method: SamplingMethod,
    /// Requested sample size.
    pub requested: usize,
    /// Indices of the selected records in the source population.
    pub indices: Vec<usize>,
    /// The selected records, re-indexed from 0 in selection order.
    pub records: Vec<Record>,
}

impl Sample {
    /// Build a sample from the selected population indices.
    #[must_use]
    pub(crate) fn from_indices(
        method: SamplingMethod,
        requested: usize,
        population: &Population,
        indices: Vec<usize>,
    ) -> Self {
        let records = indices
            .iter()
            .map(|&idx| population.records()[idx].clone())
            .collect();
        Self {
            method,
            requested,
            indices,
            records,
        }
    }

    /// Actual number of records selected.
    #[must_use]
    pub fn actual(&self) -> usize {
        self.records.len()
    }

    /// Returns true if fewer records were selected than requested.
    #[must_use]
    pub fn under_filled(&self) -> bool {
        self.actual() < self.requested
    }
}

/// Build an RNG from an optional caller seed.
///
/// Seeded calls are reproducible; unseeded calls draw entropy from the
/// thread-local generator.
pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}
