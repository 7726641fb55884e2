//! # AuditKernel Risk
//!
//! Risk scoring and control effectiveness kernels.
//!
//! ## Kernels
//!
//! - `RiskScoring` - likelihood x impact scoring, inherent/residual risk,
//!   heatmap construction
//! - `ControlEffectiveness` - test-result ratings, status bands, gap
//!   analysis, status summaries

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod controls;
pub mod scoring;
pub mod types;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::controls::*;
    pub use crate::scoring::*;
    pub use crate::types::*;
}

pub use controls::ControlEffectiveness;
pub use scoring::{RiskScoring, RESIDUAL_RISK_FLOOR};
pub use types::{
    ControlAssessment, ControlDetail, ControlSet, ControlStatus, ControlStatusSummary,
    HeatmapEntry, RiskFactorSet, RiskHeatmap, RiskItem, RiskRating, TestResult,
};

use auditkernel_core::{AuditKernel, KernelRegistry, Result};

/// Register all risk and control kernels with a registry.
pub fn register_all(registry: &KernelRegistry) -> Result<()> {
    tracing::info!("Registering risk and control kernels");

    registry.register(RiskScoring::new().metadata().clone())?;
    registry.register(ControlEffectiveness::new().metadata().clone())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_all() {
        let registry = KernelRegistry::new();
        register_all(&registry).expect("failed to register risk kernels");
        assert_eq!(registry.count(), 2);
        assert!(registry.contains("risk/scoring"));
        assert!(registry.contains("controls/effectiveness"));
    }
}
