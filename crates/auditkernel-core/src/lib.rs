//! # AuditKernel Core
//!
//! Core abstractions, traits, and registry for the auditkernels analytics
//! library.
//!
//! This crate provides:
//! - Domain definitions for kernel categorization
//! - Error types and the shared `Result` alias
//! - Kernel metadata and the `AuditKernel` trait
//! - A metadata registry for kernel discovery
//! - The `Population` tabular abstraction consumed by the analytics kernels

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod error;
pub mod kernel;
pub mod population;
pub mod registry;
pub mod traits;

pub use domain::Domain;
pub use error::{AuditError, Result};
pub use kernel::KernelMetadata;
pub use population::{Population, Record, Value};
pub use registry::{KernelRegistry, RegistryStats};
pub use traits::AuditKernel;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::domain::Domain;
    pub use crate::error::{AuditError, Result};
    pub use crate::kernel::KernelMetadata;
    pub use crate::population::{Population, Record, Value};
    pub use crate::registry::{KernelRegistry, RegistryStats};
    pub use crate::traits::AuditKernel;
}
