//! # Repository Module
//!
//! Database repository implementations for Paket.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                     │
//! │                                                                     │
//! │  The Repository pattern abstracts database access behind a clean    │
//! │  API.                                                               │
//! │                                                                     │
//! │  Tauri Command                                                      │
//! │       │                                                             │
//! │       │  db.packages().get_by_tracking("AB-123456")                 │
//! │       ▼                                                             │
//! │  PackageRepository                                                  │
//! │  ├── insert(&self, new_package)                                     │
//! │  ├── get_by_tracking(&self, tracking_number)                        │
//! │  ├── update_status(&self, tracking_number, status)                  │
//! │  └── list_recent(&self)                                             │
//! │       │                                                             │
//! │       │  SQL Query                                                  │
//! │       ▼                                                             │
//! │  SQLite Database                                                    │
//! │                                                                     │
//! │  Benefits:                                                          │
//! │  • Clean separation of concerns                                     │
//! │  • SQL is isolated in one place                                     │
//! │  • Repositories are tested against in-memory databases              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`PackageRepository`] - Package insert, lookup, status update
//! - [`CourierRepository`] - Courier insert, listing, deletion
//! - [`ReviewRepository`] - Review insert and listing
//!
//! [`PackageRepository`]: package::PackageRepository
//! [`CourierRepository`]: courier::CourierRepository
//! [`ReviewRepository`]: review::ReviewRepository

pub mod courier;
pub mod package;
pub mod review;
