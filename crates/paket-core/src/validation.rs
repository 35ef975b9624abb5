//! # Validation Module
//!
//! Input validation rules for Paket.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Frontend (form)                                           │
//! │  ├── Basic format checks (empty fields, rating dropdown)            │
//! │  └── Immediate user feedback                                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: Tauri Command (Rust)                                      │
//! │  └── THIS MODULE: server-side rule validation, independent of       │
//! │      whatever constraints the UI applies                            │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Database (SQLite)                                         │
//! │  ├── NOT NULL constraints                                           │
//! │  └── UNIQUE constraint on packages.tracking_number                  │
//! │                                                                     │
//! │  Defense in depth: no mutating operation touches storage with a     │
//! │  missing required field or an out-of-range rating                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::{MAX_RATING, MIN_RATING};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a required field is present.
///
/// Whitespace-only input counts as missing. Returns the trimmed value so
/// callers store normalized strings.
///
/// ## Example
/// ```rust
/// use paket_core::validation::validate_required;
///
/// assert_eq!(validate_required("sender", "  Иван ").unwrap(), "Иван");
/// assert!(validate_required("sender", "   ").is_err());
/// ```
pub fn validate_required(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(value.to_string())
}

/// Normalizes an optional field: trims, keeps empty as empty.
///
/// Used for the fields the forms allow to stay blank (addresses, phone,
/// email, comment).
pub fn normalize_optional(value: &str) -> String {
    value.trim().to_string()
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a review rating.
///
/// ## Rules
/// - Must be within 1..=5 inclusive
/// - Checked here regardless of UI constraints (the rating dropdown only
///   offers 1-5, but the command layer cannot trust that)
///
/// ## Example
/// ```rust
/// use paket_core::validation::validate_rating;
///
/// assert!(validate_rating(1).is_ok());
/// assert!(validate_rating(5).is_ok());
/// assert!(validate_rating(0).is_err());
/// assert!(validate_rating(6).is_err());
/// ```
pub fn validate_rating(rating: i64) -> ValidationResult<()> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: MIN_RATING,
            max: MAX_RATING,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert_eq!(validate_required("name", "Иван").unwrap(), "Иван");
        assert_eq!(validate_required("name", "  Иван  ").unwrap(), "Иван");

        assert!(validate_required("name", "").is_err());
        assert!(validate_required("name", "   ").is_err());
        assert!(validate_required("name", "\t\n").is_err());
    }

    #[test]
    fn test_validate_required_reports_field_name() {
        let err = validate_required("recipient", "").unwrap_err();
        assert_eq!(err.to_string(), "recipient is required");
    }

    #[test]
    fn test_normalize_optional() {
        assert_eq!(normalize_optional("  ул. Ленина, 1  "), "ул. Ленина, 1");
        assert_eq!(normalize_optional("   "), "");
    }

    #[test]
    fn test_validate_rating_bounds() {
        // Boundary values are valid
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(3).is_ok());

        // Outside the range is rejected
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
        assert!(validate_rating(-1).is_err());
        assert!(validate_rating(100).is_err());
    }
}
