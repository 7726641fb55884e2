//! Risk scoring kernel.
//!
//! Likelihood x impact scoring, inherent risk from factor sets, residual
//! risk after control mitigation, and heatmap construction.

use crate::types::{ControlSet, HeatmapEntry, RiskFactorSet, RiskHeatmap, RiskItem, RiskRating};
use auditkernel_core::{AuditError, AuditKernel, Domain, KernelMetadata, Result};
use std::collections::BTreeMap;

/// Minimum residual risk. Risk is never fully eliminated by controls.
pub const RESIDUAL_RISK_FLOOR: f64 = 0.5;

// ============================================================================
// Risk Scoring Kernel
// ============================================================================

/// Risk scoring kernel.
///
/// Pure functions over small per-risk inputs; the caller holds all state.
#[derive(Debug, Clone)]
pub struct RiskScoring {
    metadata: KernelMetadata,
}

impl Default for RiskScoring {
    fn default() -> Self {
        Self::new()
    }
}

impl RiskScoring {
    /// Create a new risk scoring kernel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            metadata: KernelMetadata::new("risk/scoring", Domain::RiskScoring)
                .with_description("Likelihood x impact scoring, inherent and residual risk"),
        }
    }

    /// Compute the risk score `likelihood * impact`.
    ///
    /// Both arguments must be in 1..=5; the result is in 1..=25.
    pub fn score(likelihood: u8, impact: u8) -> Result<u8> {
        if !(1..=5).contains(&likelihood) {
            return Err(AuditError::validation("likelihood must be between 1 and 5"));
        }
        if !(1..=5).contains(&impact) {
            return Err(AuditError::validation("impact must be between 1 and 5"));
        }
        Ok(likelihood * impact)
    }

    /// Compute inherent risk as the mean of the factor scores.
    ///
    /// Fails if the factor set is empty or any score is outside 1..=5.
    /// The result is in [1.0, 5.0].
    pub fn inherent_risk(factors: &RiskFactorSet) -> Result<f64> {
        if factors.is_empty() {
            return Err(AuditError::validation(
                "at least one risk factor must be provided",
            ));
        }
        let mut total = 0u32;
        for (name, score) in factors.iter() {
            if !(1..=5).contains(&score) {
                return Err(AuditError::validation(format!(
                    "factor '{name}' score must be between 1 and 5"
                )));
            }
            total += u32::from(score);
        }
        Ok(f64::from(total) / factors.len() as f64)
    }

    /// Compute residual risk after applying control effectiveness.
    ///
    /// An empty control set returns the inherent risk unchanged (no
    /// mitigation assumed). Otherwise the result is
    /// `inherent * (1 - mean(effectiveness))`, floored at
    /// [`RESIDUAL_RISK_FLOOR`]. Always `<= inherent`.
    pub fn residual_risk(inherent: f64, controls: &ControlSet) -> Result<f64> {
        if !(1.0..=5.0).contains(&inherent) {
            return Err(AuditError::validation(
                "inherent risk must be between 1.0 and 5.0",
            ));
        }
        if controls.is_empty() {
            return Ok(inherent);
        }
        let mut total = 0.0;
        for (name, effectiveness) in controls.iter() {
            if !(0.0..=1.0).contains(&effectiveness) {
                return Err(AuditError::validation(format!(
                    "control '{name}' effectiveness must be between 0.0 and 1.0"
                )));
            }
            total += effectiveness;
        }
        let avg_effectiveness = total / controls.len() as f64;
        let residual = inherent * (1.0 - avg_effectiveness);
        Ok(residual.max(RESIDUAL_RISK_FLOOR))
    }

    /// Build a 5x5 likelihood x impact heatmap over a set of risks.
    ///
    /// Out-of-range likelihood/impact values are clamped into the matrix.
    #[must_use]
    pub fn heatmap(risks: &[RiskItem]) -> RiskHeatmap {
        let mut matrix: Vec<Vec<Vec<HeatmapEntry>>> = vec![vec![Vec::new(); 5]; 5];
        let mut counts: BTreeMap<RiskRating, usize> = BTreeMap::new();

        for risk in risks {
            let likelihood = risk.likelihood.clamp(1, 5);
            let impact = risk.impact.clamp(1, 5);
            let likelihood_idx = usize::from(likelihood) - 1;
            let impact_idx = usize::from(impact) - 1;
            let score = likelihood * impact;
            let rating = RiskRating::from_score(score);

            matrix[likelihood_idx][impact_idx].push(HeatmapEntry {
                name: risk.name.clone(),
                score,
                rating,
            });
            *counts.entry(rating).or_default() += 1;
        }

        RiskHeatmap {
            matrix,
            counts,
            total_risks: risks.len(),
        }
    }
}

impl AuditKernel for RiskScoring {
    fn metadata(&self) -> &KernelMetadata {
        &self.metadata
    }
}
