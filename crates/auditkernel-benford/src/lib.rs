//! # AuditKernel Benford
//!
//! Benford's Law first-digit analysis for audit populations.
//!
//! ## Kernels
//!
//! - `BenfordAnalysis` - first-digit distribution test with chi-square
//!   statistic and a heuristic conformity score
//!
//! The analysis is screening evidence, not proof: a nonconforming
//! population warrants follow-up testing, nothing more.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod types;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::analysis::*;
    pub use crate::types::*;
}

pub use analysis::BenfordAnalysis;
pub use types::{BenfordReport, CHI_SQUARE_CRITICAL};

use auditkernel_core::{AuditKernel, KernelRegistry, Result};

/// Register all Benford analysis kernels with a registry.
pub fn register_all(registry: &KernelRegistry) -> Result<()> {
    tracing::info!("Registering Benford analysis kernels");

    registry.register(BenfordAnalysis::new().metadata().clone())?;

    Ok(())
}
