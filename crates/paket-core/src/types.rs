//! # Domain Types
//!
//! Core domain types used throughout Paket.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐    │
//! │  │    Package      │   │    Courier      │   │     Review      │    │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │    │
//! │  │  id (rowid)     │   │  id (rowid)     │   │  id (rowid)     │    │
//! │  │  tracking_nr    │   │  name           │   │  tracking_nr?   │    │
//! │  │  status         │   │  phone / email  │   │  customer_name  │    │
//! │  │  sender/recip.  │   │  status         │   │  rating (1..=5) │    │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Packages have:
//! - `id`: SQLite rowid - immutable, internal
//! - `tracking_number`: business ID - human-readable, globally unique
//!
//! Couriers and reviews only carry the rowid; couriers are addressed by it
//! in the UI, reviews are append-only and never addressed at all.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Package
// =============================================================================

/// A registered package.
///
/// Lifecycle: created on send with [`crate::DEFAULT_PACKAGE_STATUS`]; status
/// mutated by explicit status-update calls; never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Package {
    /// Internal row id.
    pub id: i64,

    /// Business identifier, format `LL-DDDDDD`. Globally unique.
    pub tracking_number: String,

    /// What is being shipped.
    pub description: String,

    /// Free-text progress label. No enforced transition order.
    pub status: String,

    /// Who sent the package.
    pub sender: String,

    /// Who receives the package.
    pub recipient: String,

    /// Pickup address (optional, used by the map tab).
    pub sender_address: String,

    /// Delivery address (optional, used by the map tab).
    pub recipient_address: String,

    /// When the package was registered.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Courier
// =============================================================================

/// A courier on the roster.
///
/// Lifecycle: created via form, deleted via explicit removal. There is no
/// update operation; status stays at its default.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Courier {
    /// Internal row id (what the UI uses for deletion).
    pub id: i64,

    /// Courier display name.
    pub name: String,

    /// Contact phone (may be empty).
    pub phone: String,

    /// Contact email (may be empty).
    pub email: String,

    /// Free-text status, defaults to [`crate::DEFAULT_COURIER_STATUS`].
    pub status: String,

    /// When the courier was registered.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Review
// =============================================================================

/// A customer review.
///
/// Lifecycle: created only; never updated or deleted. The tracking-number
/// reference is advisory - it is displayed but not enforced against the
/// packages table at the application layer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Review {
    /// Internal row id.
    pub id: i64,

    /// Loose reference to a package (not enforced).
    pub tracking_number: Option<String>,

    /// Who left the review.
    pub customer_name: String,

    /// Rating, always within 1..=5.
    pub rating: i64,

    /// Free-text comment (may be empty).
    pub comment: String,

    /// When the review was left.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Insert Inputs
// =============================================================================
// Row ids are assigned by SQLite (AUTOINCREMENT), and created_at / default
// statuses are stamped at insert time, so the write path carries dedicated
// input types instead of half-filled entities.

/// Validated input for registering a package.
///
/// Built by the command layer after validation; the tracking number is
/// already generated at this point.
#[derive(Debug, Clone)]
pub struct NewPackage {
    pub tracking_number: String,
    pub description: String,
    pub sender: String,
    pub recipient: String,
    pub sender_address: String,
    pub recipient_address: String,
}

/// Validated input for adding a courier.
#[derive(Debug, Clone)]
pub struct NewCourier {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Validated input for adding a review.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub tracking_number: Option<String>,
    pub customer_name: String,
    pub rating: i64,
    pub comment: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_serializes_tracking_number() {
        let pkg = Package {
            id: 1,
            tracking_number: "AB-123456".to_string(),
            description: "Книги".to_string(),
            status: crate::DEFAULT_PACKAGE_STATUS.to_string(),
            sender: "Иван".to_string(),
            recipient: "Мария".to_string(),
            sender_address: String::new(),
            recipient_address: String::new(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&pkg).unwrap();
        assert_eq!(json["tracking_number"], "AB-123456");
        assert_eq!(json["status"], "Отправлена");
    }

    #[test]
    fn test_review_optional_tracking_number() {
        let review = Review {
            id: 1,
            tracking_number: None,
            customer_name: "Анна".to_string(),
            rating: 5,
            comment: String::new(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&review).unwrap();
        assert!(json["tracking_number"].is_null());
    }
}
