//! # AuditKernel Sampling
//!
//! Audit sampling kernels over tabular populations.
//!
//! ## Kernels
//!
//! - `RandomSampling` - uniform selection without replacement
//! - `StratifiedSampling` - proportional per-stratum selection with a
//!   minimum-representation guarantee
//! - `MonetaryUnitSampling` - probability-proportional-to-value (PPS)
//!   selection
//!
//! All selectors read the caller's population and return a new [`Sample`];
//! the population is never mutated. Randomized selection accepts an
//! optional seed for reproducibility.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod monetary;
pub mod random;
pub mod stratified;
pub mod types;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::monetary::*;
    pub use crate::random::*;
    pub use crate::stratified::*;
    pub use crate::types::*;
}

pub use monetary::MonetaryUnitSampling;
pub use random::RandomSampling;
pub use stratified::StratifiedSampling;
pub use types::{Sample, SamplingMethod};

use auditkernel_core::{AuditKernel, KernelRegistry, Result};

/// Register all sampling kernels with a registry.
pub fn register_all(registry: &KernelRegistry) -> Result<()> {
    tracing::info!("Registering sampling kernels");

    registry.register(RandomSampling::new().metadata().clone())?;
    registry.register(StratifiedSampling::new().metadata().clone())?;
    registry.register(MonetaryUnitSampling::new().metadata().clone())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_all() {
        let registry = KernelRegistry::new();
        register_all(&registry).expect("failed to register sampling kernels");
        assert_eq!(registry.count(), 3);
        assert!(registry.contains("sampling/monetary-unit"));
    }
}
