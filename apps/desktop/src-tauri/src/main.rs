//! # Paket Desktop Application Entry Point
//!
//! This is the main entry point for the Tauri desktop application.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Paket Desktop                                │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                      Tauri WebView                            │  │
//! │  │  ┌─────────────────────────────────────────────────────────┐  │  │
//! │  │  │                  Tabbed Frontend                        │  │  │
//! │  │  │  • Send form        • Track lookup                      │  │  │
//! │  │  │  • Reviews          • Couriers      • Map search        │  │  │
//! │  │  └─────────────────────────────────────────────────────────┘  │  │
//! │  │                              │                                │  │
//! │  │                     invoke('command')                         │  │
//! │  │                              │                                │  │
//! │  └──────────────────────────────┼────────────────────────────────┘  │
//! │                                 ▼                                   │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                  │  │
//! │  │                                                               │  │
//! │  │  main.rs ────► delegates to lib.rs                            │  │
//! │  │  lib.rs ─────► logging, database, state, Tauri setup          │  │
//! │  │  commands/ ──► send_package, track_package, add_review, ...   │  │
//! │  │  state/ ─────► DbState, ConfigState                           │  │
//! │  │                                                               │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │                                 │                                   │
//! │                                 ▼                                   │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                         SQLite Database                       │  │
//! │  │  paket.db (local file, WAL mode)                              │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

// Prevents an additional console window on Windows in release
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

fn main() {
    // Run the Tauri application
    // The actual setup is in lib.rs for better testability
    paket_desktop_lib::run();
}
