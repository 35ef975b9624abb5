//! # API Error Type
//!
//! Unified error type for Tauri commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Paket                              │
//! │                                                                     │
//! │  Frontend                    Rust Backend                           │
//! │  ────────                    ────────────                           │
//! │                                                                     │
//! │  invoke('send_package')                                             │
//! │         │                                                           │
//! │         ▼                                                           │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                             │  │
//! │  │  Result<T, ApiError>                                          │  │
//! │  │         │                                                     │  │
//! │  │         ▼                                                     │  │
//! │  │  Validation Error? ─── ValidationError ──────┐                │  │
//! │  │         │                                    │                │  │
//! │  │         ▼                                    ▼                │  │
//! │  │  Database Error? ───── DbError ────────── ApiError ─────────► │  │
//! │  │         │                                                     │  │
//! │  │         ▼                                                     │  │
//! │  │  Success ───────────────────────────────────────────────────► │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │                                                                     │
//! │  ◄───────────────────────────────────────────────────────────────  │
//! │                                                                     │
//! │  try {                                                              │
//! │    await invoke('send_package', ...)                                │
//! │  } catch (e) {                                                      │
//! │    // e.code = "TRACKING_CONFLICT"                                  │
//! │    // frontend shows the matching Russian modal text                │
//! │  }                                                                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tauri Error Serialization
//! Tauri requires errors to be serializable. We implement `Serialize`
//! and include both a machine-readable `code` and human-readable `message`.
//! All failures are caught at the store boundary and converted here;
//! nothing panics across the IPC boundary.

use serde::Serialize;

use paket_core::{CoreError, ValidationError};
use paket_db::DbError;

/// API error returned from Tauri commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Package not found: AB-123456"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for logs; the frontend picks its own
    /// Russian display text off the code
    pub message: String,
}

/// Error codes for API responses.
///
/// ## Usage in Frontend
/// ```javascript
/// try {
///   await invoke('track_package', { trackingNumber });
/// } catch (e) {
///   switch (e.code) {
///     case 'NOT_FOUND':
///       showError('Посылка с таким номером не найдена');
///       break;
///     case 'TRACKING_CONFLICT':
///       showError('Ошибка при создании посылки. Пожалуйста, попробуйте еще раз.');
///       break;
///     // ...
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (package by tracking number, courier by id)
    NotFound,

    /// Input validation failed (empty required field, rating out of range)
    ValidationError,

    /// Generated tracking number collided with an existing package;
    /// the user should simply try sending again
    TrackingConflict,

    /// Database operation failed
    DatabaseError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{resource} not found: {id}"))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            DbError::UniqueViolation { field, .. } => {
                // The only UNIQUE index is packages.tracking_number, so a
                // violation here is a tracking-number collision
                ApiError::new(
                    ErrorCode::TrackingConflict,
                    format!("Duplicate {field}, try again"),
                )
            }
            DbError::ConnectionFailed(_) => {
                ApiError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(_) => {
                ApiError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Database query failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::PoolExhausted => {
                ApiError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Converts validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::PackageNotFound(nr) => ApiError::not_found("Package", &nr),
            CoreError::CourierNotFound(id) => ApiError::not_found("Courier", &id.to_string()),
            CoreError::TrackingCollision(nr) => ApiError::new(
                ErrorCode::TrackingConflict,
                format!("Tracking number {nr} already exists, try sending again"),
            ),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_violation_maps_to_tracking_conflict() {
        let db_err = DbError::duplicate("packages.tracking_number", "AB-123456");
        let api_err: ApiError = db_err.into();
        assert!(matches!(api_err.code, ErrorCode::TrackingConflict));
    }

    #[test]
    fn test_not_found_maps_through() {
        let db_err = DbError::not_found("Package", "ZZ-999999");
        let api_err: ApiError = db_err.into();
        assert!(matches!(api_err.code, ErrorCode::NotFound));
        assert_eq!(api_err.message, "Package not found: ZZ-999999");
    }

    #[test]
    fn test_error_codes_serialize_screaming_snake_case() {
        let api_err = ApiError::validation("rating must be between 1 and 5");
        let json = serde_json::to_value(&api_err).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}
