//! # Error Types
//!
//! Domain-specific error types for paket-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  paket-core errors (this file)                                      │
//! │  ├── CoreError        - General domain errors                       │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  paket-db errors (separate crate)                                   │
//! │  └── DbError          - Database operation failures                 │
//! │                                                                     │
//! │  Tauri API errors (in app)                                          │
//! │  └── ApiError         - What frontend sees (serialized)             │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → DbError → ApiError → Frontend  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (tracking number, id, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
///
/// These errors represent rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No package exists under the given tracking number.
    #[error("Package not found: {0}")]
    PackageNotFound(String),

    /// No courier exists with the given id.
    #[error("Courier not found: {0}")]
    CourierNotFound(i64),

    /// A freshly generated tracking number collided with an existing row.
    ///
    /// ## When This Occurs
    /// The `LL-DDDDDD` scheme has ~676M combinations; a uniform draw can hit
    /// an existing number. The generator performs no retry loop; the caller
    /// reports failure with a retry suggestion instead.
    #[error("Tracking number {0} already exists, try sending again")]
    TrackingCollision(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before any row is written.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::TrackingCollision("AB-123456".to_string());
        assert_eq!(
            err.to_string(),
            "Tracking number AB-123456 already exists, try sending again"
        );

        let err = CoreError::CourierNotFound(42);
        assert_eq!(err.to_string(), "Courier not found: 42");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "sender".to_string(),
        };
        assert_eq!(err.to_string(), "sender is required");

        let err = ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 1,
            max: 5,
        };
        assert_eq!(err.to_string(), "rating must be between 1 and 5");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "recipient".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
