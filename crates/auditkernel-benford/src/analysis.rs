//! Benford's Law first-digit analysis kernel.

use crate::types::BenfordReport;
use auditkernel_core::{AuditKernel, Domain, KernelMetadata};

// ============================================================================
// Benford Analysis Kernel
// ============================================================================

/// Benford's Law first-digit distribution analysis.
///
/// Naturally occurring amount populations spanning several orders of
/// magnitude follow the logarithmic first-digit distribution; fabricated
/// figures usually do not. The kernel compares the observed first-digit
/// counts against the Benford expectation with a Pearson chi-square test.
#[derive(Debug, Clone)]
pub struct BenfordAnalysis {
    metadata: KernelMetadata,
}

impl Default for BenfordAnalysis {
    fn default() -> Self {
        Self::new()
    }
}

impl BenfordAnalysis {
    /// Expected first-digit proportions for digits 1 through 9.
    pub const EXPECTED: [f64; 9] = [
        0.301, 0.176, 0.125, 0.097, 0.079, 0.067, 0.058, 0.051, 0.046,
    ];

    /// Scale of the conformity heuristic: chi-square values at or beyond
    /// this map to a score of zero.
    const CONFORMITY_SCALE: f64 = 50.0;

    /// Create a new Benford analysis kernel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            metadata: KernelMetadata::new("benford/first-digit", Domain::BenfordAnalysis)
                .with_description("First-digit distribution test against Benford's Law"),
        }
    }

    /// Analyze the first-digit distribution of `data`.
    ///
    /// Only positive finite values contribute a digit; zeros, negatives
    /// and non-finite values are skipped. If nothing remains the report
    /// is all-zero with `sample_size == 0`, not an error.
    ///
    /// The chi-square statistic is Pearson's over the nine digit counts
    /// with expected counts `p_d * n`. The conformity score compresses it
    /// into `[0, 1]` as `1 - chi_square / 50`, clamped; the raw statistic
    /// is reported alongside so callers can apply the 15.51 critical value
    /// (8 degrees of freedom, alpha = 0.05) directly.
    #[must_use]
    pub fn analyze(data: &[f64]) -> BenfordReport {
        let mut digit_counts = [0u64; 9];
        for &value in data {
            if let Some(digit) = first_digit(value) {
                digit_counts[digit - 1] += 1;
            }
        }

        let sample_size: usize = digit_counts.iter().map(|&c| c as usize).sum();
        if sample_size == 0 {
            return BenfordReport {
                chi_square: 0.0,
                conformity_score: 0.0,
                observed_distribution: [0.0; 9],
                digit_counts,
                sample_size: 0,
            };
        }

        let n = sample_size as f64;
        let mut observed_distribution = [0.0; 9];
        let mut chi_square = 0.0;
        for digit in 0..9 {
            let observed = digit_counts[digit] as f64;
            let expected = Self::EXPECTED[digit] * n;
            observed_distribution[digit] = observed / n;
            chi_square += (observed - expected).powi(2) / expected;
        }

        let conformity_score = (1.0 - chi_square / Self::CONFORMITY_SCALE).clamp(0.0, 1.0);

        BenfordReport {
            chi_square,
            conformity_score,
            observed_distribution,
            digit_counts,
            sample_size,
        }
    }
}

impl AuditKernel for BenfordAnalysis {
    fn metadata(&self) -> &KernelMetadata {
        &self.metadata
    }
}

/// First significant digit of a positive finite value, 1 through 9.
fn first_digit(value: f64) -> Option<usize> {
    if !value.is_finite() || value <= 0.0 {
        return None;
    }
    let mut v = value;
    while v >= 10.0 {
        v /= 10.0;
    }
    while v < 1.0 {
        v *= 10.0;
    }
    Some(v.trunc() as usize)
}
