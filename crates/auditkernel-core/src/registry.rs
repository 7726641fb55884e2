//! Kernel registry.
//!
//! The registry manages the metadata of registered kernels and provides
//! lookup functionality. Kernels themselves are stateless pure computations,
//! so only their metadata is stored.

use crate::domain::Domain;
use crate::error::{AuditError, Result};
use crate::kernel::KernelMetadata;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

/// Registry statistics.
#[derive(Debug, Clone, Default)]
pub struct RegistryStats {
    /// Total number of registered kernels.
    pub total: usize,
    /// Kernels by domain.
    pub by_domain: HashMap<Domain, usize>,
}

/// Central registry of kernel metadata.
#[derive(Debug, Default)]
pub struct KernelRegistry {
    kernels: RwLock<HashMap<String, KernelMetadata>>,
}

impl KernelRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a kernel's metadata.
    ///
    /// Fails if a kernel with the same ID is already registered.
    pub fn register(&self, metadata: KernelMetadata) -> Result<()> {
        let mut kernels = self.kernels.write().expect("registry lock poisoned");
        if kernels.contains_key(&metadata.id) {
            return Err(AuditError::KernelAlreadyRegistered(metadata.id));
        }
        debug!(id = %metadata.id, domain = %metadata.domain, "registered kernel");
        kernels.insert(metadata.id.clone(), metadata);
        Ok(())
    }

    /// Look up a kernel's metadata by ID.
    pub fn get(&self, id: &str) -> Result<KernelMetadata> {
        self.kernels
            .read()
            .expect("registry lock poisoned")
            .get(id)
            .cloned()
            .ok_or_else(|| AuditError::not_found(id))
    }

    /// Returns true if a kernel with the given ID is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.kernels
            .read()
            .expect("registry lock poisoned")
            .contains_key(id)
    }

    /// All registered kernel IDs, sorted.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .kernels
            .read()
            .expect("registry lock poisoned")
            .keys()
            .cloned()
            .collect();
        ids.sort();
        ids
    }

    /// Total number of registered kernels.
    #[must_use]
    pub fn count(&self) -> usize {
        self.kernels.read().expect("registry lock poisoned").len()
    }

    /// Number of registered kernels in a domain.
    #[must_use]
    pub fn count_for(&self, domain: Domain) -> usize {
        self.kernels
            .read()
            .expect("registry lock poisoned")
            .values()
            .filter(|meta| meta.domain == domain)
            .count()
    }

    /// Registry statistics.
    #[must_use]
    pub fn stats(&self) -> RegistryStats {
        let kernels = self.kernels.read().expect("registry lock poisoned");
        let mut by_domain: HashMap<Domain, usize> = HashMap::new();
        for meta in kernels.values() {
            *by_domain.entry(meta.domain).or_default() += 1;
        }
        RegistryStats {
            total: kernels.len(),
            by_domain,
        }
    }
}
