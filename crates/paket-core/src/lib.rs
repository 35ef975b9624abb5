//! # paket-core: Pure Domain Logic for Paket
//!
//! This crate is the **heart** of the Paket delivery service. It contains all
//! domain logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Paket Architecture                           │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                  Frontend (tabbed form)                       │  │
//! │  │  Send ──► Track ──► Reviews ──► Couriers ──► Map search       │  │
//! │  └────────────────────────────┬──────────────────────────────────┘  │
//! │                               │ Tauri IPC                           │
//! │  ┌────────────────────────────▼──────────────────────────────────┐  │
//! │  │                    Tauri Commands                             │  │
//! │  │  send_package, track_package, add_courier, add_review, ...    │  │
//! │  └────────────────────────────┬──────────────────────────────────┘  │
//! │                               │                                     │
//! │  ┌────────────────────────────▼──────────────────────────────────┐  │
//! │  │               ★ paket-core (THIS CRATE) ★                     │  │
//! │  │                                                               │  │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐                │  │
//! │  │   │   types   │  │ tracking  │  │ validation │                │  │
//! │  │   │  Package  │  │ LL-DDDDDD │  │   rules    │                │  │
//! │  │   │  Courier  │  │ generator │  │   checks   │                │  │
//! │  │   │  Review   │  └───────────┘  └────────────┘                │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                           │  │
//! │  └────────────────────────────┬──────────────────────────────────┘  │
//! │                               │                                     │
//! │  ┌────────────────────────────▼──────────────────────────────────┐  │
//! │  │                    paket-db (Database Layer)                  │  │
//! │  │         SQLite queries, migrations, repositories              │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Package, Courier, Review)
//! - [`tracking`] - Tracking-number generation and format checks
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 2. **Explicit Errors**: All errors are typed, never strings or panics
//! 3. **Deterministic where possible**: the tracking generator accepts an
//!    explicit `Rng` so tests can seed it

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod tracking;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use paket_core::Package` instead of
// `use paket_core::types::Package`

pub use error::{CoreError, ValidationError};
pub use tracking::{generate_tracking_number, is_tracking_number};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Status assigned to a package when it is first registered.
///
/// Status is free text with no enforced transition order; this is only the
/// initial value. The UI is Russian-language, so the stored value is too.
pub const DEFAULT_PACKAGE_STATUS: &str = "Отправлена";

/// Status assigned to a newly registered courier.
pub const DEFAULT_COURIER_STATUS: &str = "Активен";

/// Minimum allowed review rating (inclusive).
pub const MIN_RATING: i64 = 1;

/// Maximum allowed review rating (inclusive).
pub const MAX_RATING: i64 = 5;
