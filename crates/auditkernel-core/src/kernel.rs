//! Kernel metadata.
//!
//! Every analytics kernel carries a metadata record describing its identity,
//! domain, and version. The registry stores these records for discovery.

use crate::domain::Domain;
use serde::{Deserialize, Serialize};

/// Metadata describing an analytics kernel.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KernelMetadata {
    /// Unique kernel identifier (e.g., "sampling/monetary-unit").
    pub id: String,

    /// Audit domain for organization and discovery.
    pub domain: Domain,

    /// Human-readable description.
    pub description: String,

    /// Version of the kernel implementation.
    pub version: u32,
}

impl KernelMetadata {
    /// Create new kernel metadata.
    #[must_use]
    pub fn new(id: impl Into<String>, domain: Domain) -> Self {
        Self {
            id: id.into(),
            domain,
            description: String::new(),
            version: 1,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the version.
    #[must_use]
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }
}

impl Default for KernelMetadata {
    fn default() -> Self {
        Self::new("unnamed", Domain::Core)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_builder() {
        let meta = KernelMetadata::new("sampling/random", Domain::Sampling)
            .with_description("Uniform random selection without replacement")
            .with_version(2);

        assert_eq!(meta.id, "sampling/random");
        assert_eq!(meta.domain, Domain::Sampling);
        assert_eq!(meta.version, 2);
        assert!(!meta.description.is_empty());
    }

    #[test]
    fn test_metadata_default() {
        let meta = KernelMetadata::default();
        assert_eq!(meta.id, "unnamed");
        assert_eq!(meta.domain, Domain::Core);
        assert_eq!(meta.version, 1);
    }
}
