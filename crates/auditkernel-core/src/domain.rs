//! Domain definitions for kernel categorization.
//!
//! Kernels are organized into domains representing the audit-analytics
//! areas they serve. Domains are used for kernel discovery, registry
//! statistics, and organization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Audit-analytics domain for kernel categorization.
///
/// Each domain represents a distinct area of the audit workflow:
/// - Risk assessment (risk scoring, control testing)
/// - Evidence gathering (sampling)
/// - Analytics (anomaly detection, Benford analysis, descriptive statistics)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Domain {
    /// Risk scoring: likelihood/impact matrices, inherent and residual risk
    RiskScoring,

    /// Control testing: effectiveness ratings, status bands, gap analysis
    ControlTesting,

    /// Audit sampling: random, stratified, and monetary-unit selection
    Sampling,

    /// Anomaly detection: outliers, duplicates, timing and pattern flags
    AnomalyDetection,

    /// Benford's Law first-digit conformity analysis
    BenfordAnalysis,

    /// Descriptive statistics over numeric populations
    DescriptiveStatistics,

    /// Core: infrastructure and test kernels
    Core,
}

impl Domain {
    /// All available domains.
    pub const ALL: &'static [Domain] = &[
        Domain::RiskScoring,
        Domain::ControlTesting,
        Domain::Sampling,
        Domain::AnomalyDetection,
        Domain::BenfordAnalysis,
        Domain::DescriptiveStatistics,
        Domain::Core,
    ];

    /// Returns the domain name as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Domain::RiskScoring => "RiskScoring",
            Domain::ControlTesting => "ControlTesting",
            Domain::Sampling => "Sampling",
            Domain::AnomalyDetection => "AnomalyDetection",
            Domain::BenfordAnalysis => "BenfordAnalysis",
            Domain::DescriptiveStatistics => "DescriptiveStatistics",
            Domain::Core => "Core",
        }
    }

    /// Parse a domain from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "RiskScoring" => Some(Domain::RiskScoring),
            "ControlTesting" => Some(Domain::ControlTesting),
            "Sampling" => Some(Domain::Sampling),
            "AnomalyDetection" => Some(Domain::AnomalyDetection),
            "BenfordAnalysis" => Some(Domain::BenfordAnalysis),
            "DescriptiveStatistics" => Some(Domain::DescriptiveStatistics),
            "Core" => Some(Domain::Core),
            _ => None,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_all_count() {
        assert_eq!(Domain::ALL.len(), 7);
    }

    #[test]
    fn test_domain_parse() {
        assert_eq!(Domain::parse("Sampling"), Some(Domain::Sampling));
        assert_eq!(Domain::parse("Unknown"), None);
        for domain in Domain::ALL {
            assert_eq!(Domain::parse(domain.as_str()), Some(*domain));
        }
    }

    #[test]
    fn test_domain_display() {
        assert_eq!(Domain::RiskScoring.to_string(), "RiskScoring");
        assert_eq!(Domain::BenfordAnalysis.to_string(), "BenfordAnalysis");
    }
}
