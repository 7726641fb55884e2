//! Error types for auditkernels.

use thiserror::Error;

/// Result type alias using `AuditError`.
pub type Result<T> = std::result::Result<T, AuditError>;

/// Errors that can occur during kernel operations.
///
/// Every precondition failure is a `ValidationError`: it is raised
/// synchronously before any computation proceeds and must be fixed by the
/// caller supplying valid input. Degenerate-but-valid inputs (short series,
/// constant data, empty control maps) are never errors; each kernel
/// documents its fallback behavior for those.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Input validation failed.
    #[error("Input validation failed: {0}")]
    ValidationError(String),

    /// Kernel not found in registry.
    #[error("Kernel not found: {0}")]
    KernelNotFound(String),

    /// Kernel already registered.
    #[error("Kernel already registered: {0}")]
    KernelAlreadyRegistered(String),
}

impl AuditError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(msg: impl Into<String>) -> Self {
        AuditError::ValidationError(msg.into())
    }

    /// Create a validation error for a missing column.
    #[must_use]
    pub fn column_not_found(column: impl AsRef<str>) -> Self {
        AuditError::ValidationError(format!(
            "column '{}' not found in population",
            column.as_ref()
        ))
    }

    /// Create a kernel not found error.
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        AuditError::KernelNotFound(id.into())
    }

    /// Returns true if this is a caller-contract (validation) error.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, AuditError::ValidationError(_))
    }
}
