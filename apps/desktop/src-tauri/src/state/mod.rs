//! # State Module
//!
//! Manages application state for the Tauri desktop app.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Clearer Command Signatures**: Commands declare exactly what state they need
//! 3. **Reduced Contention**: Independent states don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                               │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                      Tauri Runtime                            │  │
//! │  │  app.manage(db_state);                                        │  │
//! │  │  app.manage(config_state);                                    │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │                              │                                      │
//! │              ┌───────────────┴───────────────┐                      │
//! │              ▼                               ▼                      │
//! │      ┌──────────────┐              ┌──────────────────┐             │
//! │      │   DbState    │              │   ConfigState    │             │
//! │      │              │              │                  │             │
//! │      │  Database    │              │  map_base_url    │             │
//! │      │  (SQLite     │              │                  │             │
//! │      │   pool)      │              │                  │             │
//! │      └──────────────┘              └──────────────────┘             │
//! │                                                                     │
//! │  THREAD SAFETY:                                                     │
//! │  • DbState: Database has internal connection pool (thread-safe)     │
//! │  • ConfigState: Read-only after initialization                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod db;

pub use config::{ConfigState, DEFAULT_MAP_BASE_URL};
pub use db::DbState;
