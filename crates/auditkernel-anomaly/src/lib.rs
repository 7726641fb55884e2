//! # AuditKernel Anomaly Detection
//!
//! Anomaly detection kernels for transaction populations.
//!
//! ## Kernels
//!
//! - `ZScoreOutliers` - Z-score outlier detection
//! - `IqrOutliers` - interquartile-range outlier detection
//! - `RoundNumberFlag` - round-amount flagging
//! - `DuplicateDetection` - exact duplicates over key columns
//! - `UnusualPatterns` - rapid succession, amount outlier and split
//!   transaction screening
//! - `OffHoursDetection` - activity outside business hours
//! - `WeekendDetection` - Saturday and Sunday activity
//! - `HolidayDetection` - activity on caller-supplied holiday dates
//!
//! Detectors flag, they never judge: every kernel returns the indices and
//! supporting measurements and leaves disposition to the auditor.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod outliers;
pub mod patterns;
pub mod timing;
pub mod types;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::outliers::*;
    pub use crate::patterns::*;
    pub use crate::timing::*;
    pub use crate::types::*;
}

pub use outliers::{IqrOutliers, ZScoreOutliers};
pub use patterns::{DuplicateDetection, RoundNumberFlag, UnusualPatterns};
pub use timing::{HolidayDetection, OffHoursDetection, WeekendDetection};
pub use types::{
    DuplicateReport, HolidayReport, IqrReport, OffHoursReport, PatternFlags, RoundNumberReport,
    WeekendReport, ZScoreReport,
};

use auditkernel_core::{AuditKernel, KernelRegistry, Result};

/// Register all anomaly detection kernels with a registry.
pub fn register_all(registry: &KernelRegistry) -> Result<()> {
    tracing::info!("Registering anomaly detection kernels");

    registry.register(ZScoreOutliers::new().metadata().clone())?;
    registry.register(IqrOutliers::new().metadata().clone())?;
    registry.register(RoundNumberFlag::new().metadata().clone())?;
    registry.register(DuplicateDetection::new().metadata().clone())?;
    registry.register(UnusualPatterns::new().metadata().clone())?;
    registry.register(OffHoursDetection::new().metadata().clone())?;
    registry.register(WeekendDetection::new().metadata().clone())?;
    registry.register(HolidayDetection::new().metadata().clone())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_all() {
        let registry = KernelRegistry::new();
        register_all(&registry).expect("failed to register anomaly kernels");
        assert_eq!(registry.count(), 8);
        assert!(registry.contains("anomaly/zscore-outliers"));
        assert!(registry.contains("anomaly/holiday"));
    }
}
