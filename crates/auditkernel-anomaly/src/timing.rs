//! Transaction timing detection kernels.
//!
//! Off-hours, weekend and holiday activity screening. All three read the
//! `timestamp` column and fail with a validation error when it is missing;
//! calendar handling is date-only for holidays and hour-of-day for the
//! business-hours window.

use crate::types::{
    percentage, HolidayReport, OffHoursReport, WeekendReport, TIMESTAMP_COLUMN,
};
use auditkernel_core::{AuditError, AuditKernel, Domain, KernelMetadata, Population, Result};
use chrono::{Datelike, NaiveDate, Timelike, Weekday};
use std::collections::BTreeMap;

/// Default business hours window, `[start, end)` in hours of day.
pub const DEFAULT_BUSINESS_HOURS: (u32, u32) = (9, 17);

// ============================================================================
// Off-Hours Kernel
// ============================================================================

/// Off-hours transaction detection.
#[derive(Debug, Clone)]
pub struct OffHoursDetection {
    metadata: KernelMetadata,
}

impl Default for OffHoursDetection {
    fn default() -> Self {
        Self::new()
    }
}

impl OffHoursDetection {
    /// Create a new off-hours detection kernel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            metadata: KernelMetadata::new("anomaly/off-hours", Domain::AnomalyDetection)
                .with_description("Flags transactions outside business hours"),
        }
    }

    /// Flag transactions whose hour of day falls outside the half-open
    /// `[start, end)` window. A transaction at exactly the end hour is
    /// off-hours; one at the start hour is not.
    pub fn detect(population: &Population, business_hours: (u32, u32)) -> Result<OffHoursReport> {
        let (start, end) = business_hours;
        if start >= 24 || end > 24 || start >= end {
            return Err(AuditError::validation(format!(
                "invalid business hours window ({start}, {end})"
            )));
        }
        let timestamps = population.timestamp_column(TIMESTAMP_COLUMN)?;

        let mut flagged_indices = Vec::new();
        let mut hour_distribution: BTreeMap<u32, usize> = BTreeMap::new();
        for (idx, ts) in timestamps.iter().enumerate() {
            let hour = ts.hour();
            if hour < start || hour >= end {
                flagged_indices.push(idx);
                *hour_distribution.entry(hour).or_insert(0) += 1;
            }
        }

        let flagged_count = flagged_indices.len();
        Ok(OffHoursReport {
            flagged_indices,
            flagged_count,
            total_count: timestamps.len(),
            percentage: percentage(flagged_count, timestamps.len()),
            hour_distribution,
            business_hours,
        })
    }
}

impl AuditKernel for OffHoursDetection {
    fn metadata(&self) -> &KernelMetadata {
        &self.metadata
    }
}

// ============================================================================
// Weekend Kernel
// ============================================================================

/// Weekend transaction detection.
#[derive(Debug, Clone)]
pub struct WeekendDetection {
    metadata: KernelMetadata,
}

impl Default for WeekendDetection {
    fn default() -> Self {
        Self::new()
    }
}

impl WeekendDetection {
    /// Create a new weekend detection kernel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            metadata: KernelMetadata::new("anomaly/weekend", Domain::AnomalyDetection)
                .with_description("Flags Saturday and Sunday transactions"),
        }
    }

    /// Flag transactions falling on a Saturday or Sunday.
    pub fn detect(population: &Population) -> Result<WeekendReport> {
        let timestamps = population.timestamp_column(TIMESTAMP_COLUMN)?;

        let mut flagged_indices = Vec::new();
        let mut saturday_count = 0;
        let mut sunday_count = 0;
        for (idx, ts) in timestamps.iter().enumerate() {
            match ts.weekday() {
                Weekday::Sat => {
                    flagged_indices.push(idx);
                    saturday_count += 1;
                }
                Weekday::Sun => {
                    flagged_indices.push(idx);
                    sunday_count += 1;
                }
                _ => {}
            }
        }

        let flagged_count = flagged_indices.len();
        Ok(WeekendReport {
            flagged_indices,
            flagged_count,
            total_count: timestamps.len(),
            percentage: percentage(flagged_count, timestamps.len()),
            saturday_count,
            sunday_count,
        })
    }
}

impl AuditKernel for WeekendDetection {
    fn metadata(&self) -> &KernelMetadata {
        &self.metadata
    }
}

// ============================================================================
// Holiday Kernel
// ============================================================================

/// Holiday transaction detection against a caller-supplied calendar.
#[derive(Debug, Clone)]
pub struct HolidayDetection {
    metadata: KernelMetadata,
}

impl Default for HolidayDetection {
    fn default() -> Self {
        Self::new()
    }
}

impl HolidayDetection {
    /// Create a new holiday detection kernel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            metadata: KernelMetadata::new("anomaly/holiday", Domain::AnomalyDetection)
                .with_description("Flags transactions on caller-supplied holiday dates"),
        }
    }

    /// Flag transactions whose date matches any of `holidays`.
    ///
    /// Matching is date-only; the time of day is ignored. An empty
    /// calendar is valid and flags nothing.
    pub fn detect(population: &Population, holidays: &[NaiveDate]) -> Result<HolidayReport> {
        let timestamps = population.timestamp_column(TIMESTAMP_COLUMN)?;

        let mut holidays_checked: Vec<NaiveDate> = holidays.to_vec();
        holidays_checked.sort_unstable();
        holidays_checked.dedup();

        let mut flagged_indices = Vec::new();
        let mut holiday_distribution: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        for (idx, ts) in timestamps.iter().enumerate() {
            let date = ts.date_naive();
            if holidays_checked.binary_search(&date).is_ok() {
                flagged_indices.push(idx);
                *holiday_distribution.entry(date).or_insert(0) += 1;
            }
        }

        let flagged_count = flagged_indices.len();
        Ok(HolidayReport {
            flagged_indices,
            flagged_count,
            total_count: timestamps.len(),
            percentage: percentage(flagged_count, timestamps.len()),
            holiday_distribution,
            holidays_checked,
        })
    }
}

impl AuditKernel for HolidayDetection {
    fn metadata(&self) -> &KernelMetadata {
        &self.metadata
    }
}
