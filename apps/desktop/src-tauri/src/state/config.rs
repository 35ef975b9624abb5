//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`PAKET_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};

/// Base URL of the map service used by the map-search tab.
///
/// The address query is attached as a percent-encoded `text` parameter:
/// `https://yandex.ru/maps/?text=<address>`.
pub const DEFAULT_MAP_BASE_URL: &str = "https://yandex.ru/maps/";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Map service base URL for the address-search side effect.
    pub map_base_url: String,
}

impl Default for ConfigState {
    /// Returns default configuration, honoring the `PAKET_MAP_URL`
    /// environment override.
    fn default() -> Self {
        ConfigState {
            map_base_url: std::env::var("PAKET_MAP_URL")
                .unwrap_or_else(|_| DEFAULT_MAP_BASE_URL.to_string()),
        }
    }
}
