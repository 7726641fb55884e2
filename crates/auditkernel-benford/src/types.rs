//! Benford analysis types.

use serde::{Deserialize, Serialize};

/// Chi-square critical value for 8 degrees of freedom at alpha = 0.05.
pub const CHI_SQUARE_CRITICAL: f64 = 15.51;

/// Result of a Benford first-digit analysis.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BenfordReport {
    /// Pearson chi-square statistic over the nine first-digit counts.
    pub chi_square: f64,
    /// Heuristic conformity score in `[0, 1]`, higher is closer to Benford.
    pub conformity_score: f64,
    /// Observed first-digit proportions for digits 1 through 9.
    pub observed_distribution: [f64; 9],
    /// Observed first-digit counts for digits 1 through 9.
    pub digit_counts: [u64; 9],
    /// Number of values that contributed a first digit.
    pub sample_size: usize,
}

impl BenfordReport {
    /// Whether the chi-square statistic is under the 15.51 critical value
    /// (8 degrees of freedom, alpha = 0.05). The conformity score is a
    /// smoothed heuristic; this is the statistical test.
    #[must_use]
    pub fn conforms(&self) -> bool {
        self.sample_size > 0 && self.chi_square < CHI_SQUARE_CRITICAL
    }
}
