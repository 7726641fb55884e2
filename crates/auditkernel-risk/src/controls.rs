//! Control effectiveness kernel.
//!
//! Turns pass/fail control test results into an effectiveness ratio and a
//! qualitative status; computes expected-vs-actual performance gaps and
//! per-population status summaries.

use crate::types::{
    ControlAssessment, ControlDetail, ControlStatus, ControlStatusSummary, TestResult,
};
use auditkernel_core::{AuditError, AuditKernel, Domain, KernelMetadata, Result};
use std::collections::BTreeMap;

// ============================================================================
// Control Effectiveness Kernel
// ============================================================================

/// Control effectiveness rating kernel.
#[derive(Debug, Clone)]
pub struct ControlEffectiveness {
    metadata: KernelMetadata,
}

impl Default for ControlEffectiveness {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlEffectiveness {
    /// Create a new control effectiveness kernel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            metadata: KernelMetadata::new("controls/effectiveness", Domain::ControlTesting)
                .with_description("Effectiveness rating, status bands, and gap analysis"),
        }
    }

    /// Rate control effectiveness as the proportion of passed tests.
    ///
    /// Fails if no test results are supplied.
    pub fn rate(results: &[TestResult]) -> Result<f64> {
        if results.is_empty() {
            return Err(AuditError::validation(
                "at least one test result must be provided",
            ));
        }
        let passed = results.iter().filter(|result| result.passed).count();
        Ok(passed as f64 / results.len() as f64)
    }

    /// Compute the gap between expected and actual control performance.
    ///
    /// Only positive shortfalls are reported; over-performance yields 0.
    pub fn gap(expected: f64, actual: f64) -> Result<f64> {
        if !(0.0..=1.0).contains(&expected) {
            return Err(AuditError::validation(
                "expected performance must be between 0.0 and 1.0",
            ));
        }
        if !(0.0..=1.0).contains(&actual) {
            return Err(AuditError::validation(
                "actual performance must be between 0.0 and 1.0",
            ));
        }
        Ok((expected - actual).max(0.0))
    }

    /// Summarize control statuses across a set of assessed controls.
    ///
    /// An empty input yields a summary with zero counts, average
    /// effectiveness 0.0, and an `Ineffective` overall status.
    #[must_use]
    pub fn summary(controls: &[ControlAssessment]) -> ControlStatusSummary {
        let mut status_counts: BTreeMap<ControlStatus, usize> = BTreeMap::new();
        let mut details = Vec::with_capacity(controls.len());

        for control in controls {
            let status = ControlStatus::from_rating(control.effectiveness);
            *status_counts.entry(status).or_default() += 1;
            details.push(ControlDetail {
                name: control.name.clone(),
                effectiveness: control.effectiveness,
                status,
            });
        }

        let average_effectiveness = if controls.is_empty() {
            0.0
        } else {
            controls.iter().map(|c| c.effectiveness).sum::<f64>() / controls.len() as f64
        };

        ControlStatusSummary {
            status_counts,
            details,
            total_controls: controls.len(),
            average_effectiveness,
            overall_status: ControlStatus::from_rating(average_effectiveness),
        }
    }
}

impl AuditKernel for ControlEffectiveness {
    fn metadata(&self) -> &KernelMetadata {
        &self.metadata
    }
}
