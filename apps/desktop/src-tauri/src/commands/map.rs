//! # Map Commands
//!
//! The application's one outbound side effect: opening a map-service URL
//! in the system's default browser.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Map Search Flow                                  │
//! │                                                                     │
//! │  User enters an address on the map tab                              │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  invoke('open_map_search', { address })                             │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Url::parse_with_params(map_base_url, [("text", address)])          │
//! │       │        (percent-encodes the address)                        │
//! │       ▼                                                             │
//! │  opener plugin ──► system default browser                           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Returns the opened URL for the status bar                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use tauri::State;
use tauri_plugin_opener::OpenerExt;
use tracing::{debug, info};
use url::Url;

use crate::error::ApiError;
use crate::state::ConfigState;
use paket_core::validation::validate_required;

/// Builds the map-search URL for an address.
///
/// Split out of the command so the URL shape (base + percent-encoded
/// `text` parameter) is testable without a running app.
fn build_map_url(base: &str, address: &str) -> Result<Url, ApiError> {
    Url::parse_with_params(base, &[("text", address)])
        .map_err(|e| ApiError::internal(format!("Invalid map base URL: {e}")))
}

/// Opens the map service in the default browser with the given address.
///
/// ## Validation
/// Address is required; an empty input never reaches the browser.
///
/// ## Returns
/// The URL that was opened (shown in the frontend status bar).
#[tauri::command]
pub async fn open_map_search(
    app: tauri::AppHandle,
    config: State<'_, ConfigState>,
    address: String,
) -> Result<String, ApiError> {
    debug!("open_map_search command");

    let address = validate_required("address", &address)?;
    let url = build_map_url(&config.map_base_url, &address)?;

    app.opener()
        .open_url(url.as_str(), None::<&str>)
        .map_err(|e| ApiError::internal(format!("Could not open browser: {e}")))?;

    info!(url = %url, "Opened map search in browser");
    Ok(url.into())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DEFAULT_MAP_BASE_URL;

    #[test]
    fn test_build_map_url_percent_encodes_address() {
        let url = build_map_url(DEFAULT_MAP_BASE_URL, "Москва, ул. Ленина, 1").unwrap();

        let s = url.as_str();
        assert!(s.starts_with("https://yandex.ru/maps/?text="));
        // Spaces and commas must not appear raw in the query string
        assert!(!s.contains(' '));
        assert!(s.contains("%D0%9C")); // 'М' percent-encoded
    }

    #[test]
    fn test_build_map_url_plain_ascii() {
        let url = build_map_url(DEFAULT_MAP_BASE_URL, "Main street 1").unwrap();
        assert_eq!(
            url.as_str(),
            "https://yandex.ru/maps/?text=Main+street+1"
        );
    }
}
