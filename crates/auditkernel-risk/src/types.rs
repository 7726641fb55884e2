//! Risk scoring and control testing types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Risk Types
// ============================================================================

/// Qualitative risk rating band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskRating {
    /// Score 1-4.
    Low,
    /// Score 5-9.
    Medium,
    /// Score 10-16.
    High,
    /// Score 17 and above.
    Critical,
}

impl RiskRating {
    /// Map a likelihood x impact score to its rating band.
    ///
    /// Total function: any score above the Critical floor is Critical.
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=4 => RiskRating::Low,
            5..=9 => RiskRating::Medium,
            10..=16 => RiskRating::High,
            _ => RiskRating::Critical,
        }
    }

    /// Returns the rating name as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            RiskRating::Low => "Low",
            RiskRating::Medium => "Medium",
            RiskRating::High => "High",
            RiskRating::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A set of named risk factors, each scored 1-5.
///
/// e.g. complexity, volume, regulatory exposure, technology.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskFactorSet {
    factors: BTreeMap<String, u8>,
}

impl RiskFactorSet {
    /// Create an empty factor set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a factor score.
    #[must_use]
    pub fn with_factor(mut self, name: impl Into<String>, score: u8) -> Self {
        self.factors.insert(name.into(), score);
        self
    }

    /// Returns true if no factors are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Number of factors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// Iterate over (name, score) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.factors.iter().map(|(name, score)| (name.as_str(), *score))
    }
}

/// A set of named controls with their effectiveness ratios in [0.0, 1.0].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlSet {
    controls: BTreeMap<String, f64>,
}

impl ControlSet {
    /// Create an empty control set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a control effectiveness ratio.
    #[must_use]
    pub fn with_control(mut self, name: impl Into<String>, effectiveness: f64) -> Self {
        self.controls.insert(name.into(), effectiveness);
        self
    }

    /// Returns true if no controls are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Number of controls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Iterate over (name, effectiveness) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.controls
            .iter()
            .map(|(name, effectiveness)| (name.as_str(), *effectiveness))
    }
}

/// A risk item placed on the likelihood x impact heatmap.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RiskItem {
    /// Risk name.
    pub name: String,
    /// Likelihood rating (1-5).
    pub likelihood: u8,
    /// Impact rating (1-5).
    pub impact: u8,
}

impl RiskItem {
    /// Create a new risk item.
    #[must_use]
    pub fn new(name: impl Into<String>, likelihood: u8, impact: u8) -> Self {
        Self {
            name: name.into(),
            likelihood,
            impact,
        }
    }
}

/// One risk placed in a heatmap cell.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HeatmapEntry {
    /// Risk name.
    pub name: String,
    /// Likelihood x impact score.
    pub score: u8,
    /// Rating band for the score.
    pub rating: RiskRating,
}

/// Likelihood x impact heatmap over a set of risks.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RiskHeatmap {
    /// 5x5 matrix indexed [likelihood-1][impact-1]; out-of-range inputs are
    /// clamped into the matrix.
    pub matrix: Vec<Vec<Vec<HeatmapEntry>>>,
    /// Number of risks per rating band.
    pub counts: BTreeMap<RiskRating, usize>,
    /// Total number of risks placed.
    pub total_risks: usize,
}

impl RiskHeatmap {
    /// Axis labels for the likelihood dimension (index 0 = rating 1).
    pub const LIKELIHOOD_LABELS: [&'static str; 5] =
        ["Rare", "Unlikely", "Possible", "Likely", "Almost Certain"];

    /// Axis labels for the impact dimension (index 0 = rating 1).
    pub const IMPACT_LABELS: [&'static str; 5] =
        ["Insignificant", "Minor", "Moderate", "Major", "Catastrophic"];
}

// ============================================================================
// Control Testing Types
// ============================================================================

/// Result of a single control test.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TestResult {
    /// What was tested.
    pub description: String,
    /// Whether the test passed.
    pub passed: bool,
}

impl TestResult {
    /// Create a new test result.
    #[must_use]
    pub fn new(description: impl Into<String>, passed: bool) -> Self {
        Self {
            description: description.into(),
            passed,
        }
    }
}

/// Qualitative control status band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ControlStatus {
    /// Effectiveness below 0.5.
    Ineffective,
    /// Effectiveness in [0.5, 0.7).
    NeedsImprovement,
    /// Effectiveness in [0.7, 0.85).
    Satisfactory,
    /// Effectiveness 0.85 and above.
    Effective,
}

impl ControlStatus {
    /// Map an effectiveness rating to its status band.
    #[must_use]
    pub fn from_rating(rating: f64) -> Self {
        if rating < 0.5 {
            ControlStatus::Ineffective
        } else if rating < 0.7 {
            ControlStatus::NeedsImprovement
        } else if rating < 0.85 {
            ControlStatus::Satisfactory
        } else {
            ControlStatus::Effective
        }
    }

    /// Returns the status name as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ControlStatus::Ineffective => "Ineffective",
            ControlStatus::NeedsImprovement => "Needs Improvement",
            ControlStatus::Satisfactory => "Satisfactory",
            ControlStatus::Effective => "Effective",
        }
    }
}

impl fmt::Display for ControlStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named control with its assessed effectiveness.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ControlAssessment {
    /// Control name.
    pub name: String,
    /// Assessed effectiveness ratio.
    pub effectiveness: f64,
}

impl ControlAssessment {
    /// Create a new control assessment.
    #[must_use]
    pub fn new(name: impl Into<String>, effectiveness: f64) -> Self {
        Self {
            name: name.into(),
            effectiveness,
        }
    }
}

/// Status detail for a single control in a summary.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ControlDetail {
    /// Control name.
    pub name: String,
    /// Assessed effectiveness ratio.
    pub effectiveness: f64,
    /// Status band for the effectiveness.
    pub status: ControlStatus,
}

/// Summary of control statuses across a control population.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ControlStatusSummary {
    /// Number of controls per status band.
    pub status_counts: BTreeMap<ControlStatus, usize>,
    /// Per-control status details, in input order.
    pub details: Vec<ControlDetail>,
    /// Total number of controls.
    pub total_controls: usize,
    /// Mean effectiveness across all controls (0.0 when empty).
    pub average_effectiveness: f64,
    /// Status band for the mean effectiveness.
    pub overall_status: ControlStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_rating_bands() {
        assert_eq!(RiskRating::from_score(1), RiskRating::Low);
        assert_eq!(RiskRating::from_score(4), RiskRating::Low);
        assert_eq!(RiskRating::from_score(5), RiskRating::Medium);
        assert_eq!(RiskRating::from_score(9), RiskRating::Medium);
        assert_eq!(RiskRating::from_score(10), RiskRating::High);
        assert_eq!(RiskRating::from_score(16), RiskRating::High);
        assert_eq!(RiskRating::from_score(17), RiskRating::Critical);
        assert_eq!(RiskRating::from_score(25), RiskRating::Critical);
        // Anything above the Critical floor stays Critical.
        assert_eq!(RiskRating::from_score(200), RiskRating::Critical);
    }

    #[test]
    fn test_risk_rating_monotone_in_score() {
        let mut previous = RiskRating::from_score(1);
        for score in 2..=25 {
            let rating = RiskRating::from_score(score);
            assert!(rating >= previous, "rating decreased at score {score}");
            previous = rating;
        }
    }

    #[test]
    fn test_control_status_boundaries() {
        assert_eq!(ControlStatus::from_rating(0.49), ControlStatus::Ineffective);
        assert_eq!(ControlStatus::from_rating(0.5), ControlStatus::NeedsImprovement);
        assert_eq!(ControlStatus::from_rating(0.69), ControlStatus::NeedsImprovement);
        assert_eq!(ControlStatus::from_rating(0.7), ControlStatus::Satisfactory);
        assert_eq!(ControlStatus::from_rating(0.84), ControlStatus::Satisfactory);
        assert_eq!(ControlStatus::from_rating(0.85), ControlStatus::Effective);
        assert_eq!(ControlStatus::from_rating(1.0), ControlStatus::Effective);
    }

    #[test]
    fn test_factor_set_builder() {
        let factors = RiskFactorSet::new()
            .with_factor("complexity", 4)
            .with_factor("volume", 3);
        assert_eq!(factors.len(), 2);
        assert!(!factors.is_empty());
    }
}
