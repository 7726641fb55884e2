//! Descriptive statistics types.

use serde::{Deserialize, Serialize};

/// Descriptive summary of a numeric series.
///
/// All fields are zero for an empty input; `count == 0` distinguishes
/// that case from a genuinely all-zero series.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StatsSummary {
    /// Number of values.
    pub count: usize,
    /// Sum of the values.
    pub sum: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator).
    pub std: f64,
    /// Sample variance (n - 1 denominator).
    pub variance: f64,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// Median (midpoint of the middle pair for even counts).
    pub median: f64,
    /// Bias-adjusted sample skewness; zero for fewer than 3 values.
    pub skewness: f64,
    /// Bias-adjusted excess kurtosis; zero for fewer than 4 values.
    pub kurtosis: f64,
}
