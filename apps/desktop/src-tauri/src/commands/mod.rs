//! # Tauri Commands Module
//!
//! All commands exposed to the tabbed frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── package.rs  ◄─── Send, track, status update, listing
//! ├── courier.rs  ◄─── Courier roster (add, list, remove)
//! ├── review.rs   ◄─── Reviews (add, list)
//! └── map.rs      ◄─── Map-search URL side effect
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                               │
//! │                                                                     │
//! │  Frontend                                                           │
//! │  ─────────────────                                                  │
//! │  const pkg = await invoke('send_package', {                         │
//! │    description: 'Книги',                                            │
//! │    sender: 'Иван',                                                  │
//! │    recipient: 'Мария'                                               │
//! │  });                                                                │
//! │         │                                                           │
//! │         │ (IPC via WebView)                                         │
//! │         ▼                                                           │
//! │  Rust Backend                                                       │
//! │  ────────────                                                       │
//! │  #[tauri::command]                                                  │
//! │  async fn send_package(                                             │
//! │      db: State<'_, DbState>,   ◄── Injected by Tauri                │
//! │      description: String,      ◄── From invoke params               │
//! │      ...                                                            │
//! │  ) -> Result<PackageDto, ApiError>                                  │
//! │         │                                                           │
//! │         │ (JSON serialization)                                      │
//! │         ▼                                                           │
//! │  Frontend receives: PackageDto (with the tracking number)           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs database
//! async fn track_package(db: State<'_, DbState>, ...)
//!
//! // Only needs configuration
//! async fn open_map_search(app: AppHandle, config: State<'_, ConfigState>, ...)
//! ```

pub mod courier;
pub mod map;
pub mod package;
pub mod review;
