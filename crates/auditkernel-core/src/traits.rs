//! Core kernel traits.
//!
//! This module defines the `AuditKernel` trait implemented by every
//! analytics kernel. Kernels are stateless: the trait exposes identity and
//! validation only, and each kernel's computation is an associated function
//! taking all data as explicit arguments.

use crate::domain::Domain;
use crate::error::Result;
use crate::kernel::KernelMetadata;
use std::fmt::Debug;

/// Base trait for all audit analytics kernels.
///
/// Provides access to kernel metadata. Kernels carry no mutable state and
/// never read ambient global state; callers supply every input explicitly.
pub trait AuditKernel: Send + Sync + Debug {
    /// Returns the kernel metadata.
    fn metadata(&self) -> &KernelMetadata;

    /// Validate kernel configuration.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Returns the kernel ID.
    fn id(&self) -> &str {
        &self.metadata().id
    }

    /// Returns the kernel's domain.
    fn domain(&self) -> Domain {
        self.metadata().domain
    }
}
