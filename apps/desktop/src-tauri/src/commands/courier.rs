//! # Courier Commands
//!
//! Tauri commands for the courier roster tab.
//!
//! The roster is deliberately minimal: add with a required name, list
//! ordered by name, remove by id. There is no edit operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::DbState;
use paket_core::validation::{normalize_optional, validate_required};
use paket_core::{Courier, NewCourier};

/// Courier DTO for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourierDto {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Courier> for CourierDto {
    fn from(c: Courier) -> Self {
        CourierDto {
            id: c.id,
            name: c.name,
            phone: c.phone,
            email: c.email,
            status: c.status,
            created_at: c.created_at,
        }
    }
}

/// Adds a courier to the roster.
///
/// ## Validation
/// Name is required; phone and email may be blank. The status defaults
/// server-side.
#[tauri::command]
pub async fn add_courier(
    db: State<'_, DbState>,
    name: String,
    phone: Option<String>,
    email: Option<String>,
) -> Result<CourierDto, ApiError> {
    debug!("add_courier command");

    let new = NewCourier {
        name: validate_required("name", &name)?,
        phone: normalize_optional(phone.as_deref().unwrap_or_default()),
        email: normalize_optional(email.as_deref().unwrap_or_default()),
    };

    let courier = (*db).inner().couriers().insert(&new).await?;

    info!(id = courier.id, name = %courier.name, "Courier added");
    Ok(CourierDto::from(courier))
}

/// Lists all couriers, ordered by name.
#[tauri::command]
pub async fn list_couriers(db: State<'_, DbState>) -> Result<Vec<CourierDto>, ApiError> {
    debug!("list_couriers command");

    let couriers = (*db).inner().couriers().list_all().await?;
    Ok(couriers.into_iter().map(CourierDto::from).collect())
}

/// Removes a courier by id.
///
/// ## Returns
/// `NOT_FOUND` when no courier has this id; the frontend reports the
/// failure instead of silently succeeding.
#[tauri::command]
pub async fn remove_courier(db: State<'_, DbState>, id: i64) -> Result<(), ApiError> {
    debug!(id = id, "remove_courier command");

    (*db).inner().couriers().delete(id).await?;

    info!(id = id, "Courier removed");
    Ok(())
}
