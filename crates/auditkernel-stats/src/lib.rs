//! # AuditKernel Statistics
//!
//! Descriptive statistics kernels for audit populations.
//!
//! ## Kernels
//!
//! - `DescriptiveStatistics` - count, sum, central tendency, spread,
//!   range and distribution shape in one pass

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod descriptive;
pub mod types;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::descriptive::*;
    pub use crate::types::*;
}

pub use descriptive::DescriptiveStatistics;
pub use types::StatsSummary;

use auditkernel_core::{AuditKernel, KernelRegistry, Result};

/// Register all statistics kernels with a registry.
pub fn register_all(registry: &KernelRegistry) -> Result<()> {
    tracing::info!("Registering statistics kernels");

    registry.register(DescriptiveStatistics::new().metadata().clone())?;

    Ok(())
}
