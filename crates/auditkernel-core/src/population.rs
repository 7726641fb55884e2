//! Tabular population abstraction.
//!
//! Analytics kernels consume an ordered sequence of records with a
//! homogeneous field set. Schema validation happens once at construction,
//! so kernels can use the checked column accessors without defensive
//! per-access handling. Populations are never mutated by kernels; every
//! operation reads the population and returns new derived structures.

use crate::error::{AuditError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A scalar field value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Numeric value (amounts, scores).
    Number(f64),
    /// Text value (categories, identifiers).
    Text(String),
    /// Timestamp value.
    Timestamp(DateTime<Utc>),
}

impl Value {
    /// Returns the numeric value, if this is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text value, if this is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the timestamp value, if this is a timestamp.
    #[must_use]
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Timestamp(ts) => write!(f, "{}", ts.to_rfc3339()),
        }
    }
}

/// A single record: a mapping from field name to scalar value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a numeric field.
    #[must_use]
    pub fn with_number(mut self, field: impl Into<String>, value: f64) -> Self {
        self.fields.insert(field.into(), Value::Number(value));
        self
    }

    /// Add a text field.
    #[must_use]
    pub fn with_text(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(field.into(), Value::Text(value.into()));
        self
    }

    /// Add a timestamp field.
    #[must_use]
    pub fn with_timestamp(mut self, field: impl Into<String>, value: DateTime<Utc>) -> Self {
        self.fields.insert(field.into(), Value::Timestamp(value));
        self
    }

    /// Get a field value by name.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Field names in this record, in sorted order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Build a composite key over the given columns.
    ///
    /// Returns `None` if any column is missing from the record. Used for
    /// grouping rows by a caller-specified column set. Each part is
    /// length-prefixed, so two records collide only if they render the
    /// same value in every key column; no separator character in the
    /// data can merge or split parts.
    #[must_use]
    pub fn composite_key(&self, columns: &[&str]) -> Option<String> {
        let mut key = String::new();
        for column in columns {
            let part = self.get(column)?.to_string();
            key.push_str(&part.len().to_string());
            key.push(':');
            key.push_str(&part);
        }
        Some(key)
    }
}

/// An ordered, schema-homogeneous sequence of records.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Population {
    records: Vec<Record>,
}

impl Population {
    /// Create a population, validating schema homogeneity.
    ///
    /// Every record must carry the same field set as the first; validation
    /// happens here once so kernels never re-check field presence per row.
    /// An empty population is valid.
    pub fn new(records: Vec<Record>) -> Result<Self> {
        if let Some(first) = records.first() {
            let schema: Vec<&str> = first.field_names().collect();
            for (i, record) in records.iter().enumerate().skip(1) {
                let fields: Vec<&str> = record.field_names().collect();
                if fields != schema {
                    return Err(AuditError::validation(format!(
                        "record {i} does not match the population schema"
                    )));
                }
            }
        }
        Ok(Self { records })
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the population has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records, in order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns true if every record carries the given column.
    #[must_use]
    pub fn has_column(&self, column: &str) -> bool {
        self.records
            .first()
            .is_some_and(|record| record.get(column).is_some())
    }

    /// Extract a numeric column.
    ///
    /// Fails with a validation error if the column is missing, any value
    /// in it is not numeric, or any value is NaN or infinite. Rejecting
    /// non-finite numbers here keeps them out of every downstream kernel.
    pub fn numeric_column(&self, column: &str) -> Result<Vec<f64>> {
        if !self.is_empty() && !self.has_column(column) {
            return Err(AuditError::column_not_found(column));
        }
        self.records
            .iter()
            .map(|record| {
                let value = record
                    .get(column)
                    .and_then(Value::as_number)
                    .ok_or_else(|| {
                        AuditError::validation(format!("column '{column}' is not numeric"))
                    })?;
                if !value.is_finite() {
                    return Err(AuditError::validation(format!(
                        "column '{column}' contains a non-finite number"
                    )));
                }
                Ok(value)
            })
            .collect()
    }

    /// Extract a timestamp column.
    ///
    /// Fails with a validation error if the column is missing or any value
    /// in it is not a timestamp.
    pub fn timestamp_column(&self, column: &str) -> Result<Vec<DateTime<Utc>>> {
        if !self.is_empty() && !self.has_column(column) {
            return Err(AuditError::column_not_found(column));
        }
        self.records
            .iter()
            .map(|record| {
                record
                    .get(column)
                    .and_then(Value::as_timestamp)
                    .ok_or_else(|| {
                        AuditError::validation(format!("column '{column}' is not a timestamp"))
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn tx(amount: f64, category: &str) -> Record {
        Record::new()
            .with_number("amount", amount)
            .with_text("category", category)
    }

    #[test]
    fn test_schema_homogeneity_enforced() {
        let records = vec![tx(100.0, "A"), Record::new().with_number("amount", 50.0)];
        let err = Population::new(records).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_empty_population_is_valid() {
        let population = Population::new(Vec::new()).unwrap();
        assert!(population.is_empty());
        assert!(!population.has_column("amount"));
    }

    #[test]
    fn test_numeric_column_extraction() {
        let population = Population::new(vec![tx(100.0, "A"), tx(250.5, "B")]).unwrap();
        let amounts = population.numeric_column("amount").unwrap();
        assert_eq!(amounts, vec![100.0, 250.5]);
    }

    #[test]
    fn test_missing_column_is_validation_error() {
        let population = Population::new(vec![tx(100.0, "A")]).unwrap();
        let err = population.numeric_column("fee").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_non_numeric_column_is_validation_error() {
        let population = Population::new(vec![tx(100.0, "A")]).unwrap();
        let err = population.numeric_column("category").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_non_finite_numeric_column_is_validation_error() {
        let population = Population::new(vec![tx(100.0, "A"), tx(f64::NAN, "B")]).unwrap();
        let err = population.numeric_column("amount").unwrap_err();
        assert!(err.is_validation());

        let population = Population::new(vec![tx(f64::INFINITY, "A")]).unwrap();
        assert!(population.numeric_column("amount").is_err());
    }

    #[test]
    fn test_timestamp_column_extraction() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let records = vec![Record::new().with_timestamp("timestamp", ts)];
        let population = Population::new(records).unwrap();
        assert_eq!(population.timestamp_column("timestamp").unwrap(), vec![ts]);
    }

    #[test]
    fn test_composite_key() {
        let record = tx(100.0, "A");
        let key = record.composite_key(&["amount", "category"]).unwrap();
        assert_eq!(key, "3:1001:A");
        assert!(record.composite_key(&["amount", "missing"]).is_none());
    }

    #[test]
    fn test_composite_key_separator_in_data_does_not_collide() {
        // Values that would merge under naive separator joining must
        // still produce distinct keys.
        let a = Record::new().with_text("first", "x:y").with_text("second", "z");
        let b = Record::new().with_text("first", "x").with_text("second", "y:z");
        let key_a = a.composite_key(&["first", "second"]).unwrap();
        let key_b = b.composite_key(&["first", "second"]).unwrap();
        assert_ne!(key_a, key_b);
    }
}
