//! # paket-db: Database Layer for Paket
//!
//! This crate provides database access for the Paket delivery service.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Paket Data Flow                              │
//! │                                                                     │
//! │  Tauri Command (send_package)                                       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                     paket-db (THIS CRATE)                     │  │
//! │  │                                                               │  │
//! │  │   ┌───────────────┐   ┌────────────────┐   ┌──────────────┐  │  │
//! │  │   │   Database    │   │  Repositories  │   │  Migrations  │  │  │
//! │  │   │   (pool.rs)   │   │ (package.rs)   │   │  (embedded)  │  │  │
//! │  │   │               │   │                │   │              │  │  │
//! │  │   │ SqlitePool    │◄──│ PackageRepo    │   │ 001_init.sql │  │  │
//! │  │   │ Connection    │   │ CourierRepo    │   │              │  │  │
//! │  │   │ Management    │   │ ReviewRepo     │   │              │  │  │
//! │  │   └───────────────┘   └────────────────┘   └──────────────┘  │  │
//! │  │                                                               │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                     SQLite Database                           │  │
//! │  │   ~/.local/share/paket/paket.db (platform-dependent)          │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (package, courier, review)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use paket_db::{Database, DbConfig};
//!
//! // Create database with default config
//! let config = DbConfig::new("path/to/paket.db");
//! let db = Database::new(config).await?;
//!
//! // Use repositories
//! let package = db.packages().get_by_tracking("AB-123456").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::DbError;
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::courier::CourierRepository;
pub use repository::package::PackageRepository;
pub use repository::review::ReviewRepository;
