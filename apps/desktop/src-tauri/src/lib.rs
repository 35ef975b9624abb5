//! # Paket Desktop Library
//!
//! Core library for the Paket delivery service desktop application.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! paket_desktop_lib/
//! ├── lib.rs          ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── db.rs       ◄─── Database state wrapper
//! │   └── config.rs   ◄─── Configuration state (map service URL)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── package.rs  ◄─── Send / track / status update / listing
//! │   ├── courier.rs  ◄─── Courier roster commands
//! │   ├── review.rs   ◄─── Review commands
//! │   └── map.rs      ◄─── Map-search URL side effect
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Management (Multiple State Types)
//! Instead of a single `AppState` struct, we use multiple focused state
//! types; each command declares only the state it needs.

pub mod commands;
pub mod error;
pub mod state;

use directories::ProjectDirs;
use std::path::PathBuf;
use tauri::Manager;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use paket_db::{Database, DbConfig};
use state::{ConfigState, DbState};

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                           │
/// │                                                                     │
/// │  1. Initialize Logging ──────────────────────────────────────────►  │
/// │     • tracing-subscriber with env filter                            │
/// │     • Default: INFO, can be overridden with RUST_LOG                │
/// │                                                                     │
/// │  2. Determine Database Path ─────────────────────────────────────►  │
/// │     • macOS: ~/Library/Application Support/com.paket.delivery/      │
/// │     • Windows: %APPDATA%\paket\delivery\                            │
/// │     • Linux: ~/.local/share/paket-delivery/                         │
/// │                                                                     │
/// │  3. Connect to Database ─────────────────────────────────────────►  │
/// │     • SQLite with WAL mode                                          │
/// │     • Run pending migrations                                        │
/// │                                                                     │
/// │  4. Initialize State Objects ────────────────────────────────────►  │
/// │     • DbState: Wraps Database connection                            │
/// │     • ConfigState: map service base URL                             │
/// │                                                                     │
/// │  5. Build & Run Tauri App ───────────────────────────────────────►  │
/// │     • Register all commands                                         │
/// │     • Launch window                                                 │
/// └─────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    // Initialize tracing (logging)
    init_tracing();

    info!("Starting Paket Desktop Application");

    // Build and run the Tauri app
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        // Setup hook runs before the app starts
        .setup(|app| {
            // Determine database path
            let db_path = get_database_path(app)?;
            info!(?db_path, "Database path determined");

            // Initialize database (blocking in setup, async in runtime)
            let db = tauri::async_runtime::block_on(async {
                let config = DbConfig::new(db_path);
                Database::new(config).await
            })?;

            info!("Database connected and migrations applied");

            // Initialize state objects
            let db_state = DbState::new(db);
            let config_state = ConfigState::default();

            // Register state with Tauri
            app.manage(db_state);
            app.manage(config_state);

            info!("State initialized");
            Ok(())
        })
        // Register all commands
        .invoke_handler(tauri::generate_handler![
            // Package commands
            commands::package::send_package,
            commands::package::track_package,
            commands::package::update_package_status,
            commands::package::list_packages,
            // Courier commands
            commands::courier::add_courier,
            commands::courier::list_couriers,
            commands::courier::remove_courier,
            // Review commands
            commands::review::add_review,
            commands::review::list_reviews,
            // Map commands
            commands::map::open_map_search,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=paket=trace` - Show trace for paket crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,paket=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}

/// Determines the database file path based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.paket.delivery/paket.db`
/// - **Windows**: `%APPDATA%\paket\delivery\paket.db`
/// - **Linux**: `~/.local/share/paket-delivery/paket.db`
///
/// ## Development Override
/// Set `PAKET_DB_PATH` environment variable to use a custom path.
fn get_database_path(_app: &tauri::App) -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Check for override
    if let Ok(path) = std::env::var("PAKET_DB_PATH") {
        return Ok(PathBuf::from(path));
    }

    // Use platform-specific app data directory
    let proj_dirs = ProjectDirs::from("com", "paket", "delivery")
        .ok_or("Could not determine app data directory")?;

    let data_dir = proj_dirs.data_dir();

    // Create directory if it doesn't exist
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("paket.db"))
}
