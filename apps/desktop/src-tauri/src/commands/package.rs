//! # Package Commands
//!
//! Tauri commands for sending, tracking and updating packages.
//!
//! ## Send Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Send Package Flow                                │
//! │                                                                     │
//! │  User fills the send form (description, sender, recipient, ...)     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  invoke('send_package', { ... })                                    │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  validate_required: description, sender, recipient                  │
//! │       │          (addresses are optional)                           │
//! │       ▼                                                             │
//! │  generate_tracking_number()  ← LL-DDDDDD, no retry loop             │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  INSERT INTO packages                                               │
//! │       │                                                             │
//! │       ├── ok ────────► PackageDto (frontend shows the number)       │
//! │       │                                                             │
//! │       └── collision ─► ApiError TRACKING_CONFLICT                   │
//! │                        (frontend suggests trying again)             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::DbState;
use paket_core::validation::{normalize_optional, validate_required};
use paket_core::{generate_tracking_number, NewPackage, Package};

/// Package DTO (Data Transfer Object) for the frontend.
///
/// ## Why DTO?
/// - Decouples internal domain model from API contract
/// - Handles serde rename to camelCase for JS consumption
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDto {
    pub id: i64,
    pub tracking_number: String,
    pub description: String,
    pub status: String,
    pub sender: String,
    pub recipient: String,
    pub sender_address: String,
    pub recipient_address: String,
    pub created_at: DateTime<Utc>,
}

impl From<Package> for PackageDto {
    fn from(p: Package) -> Self {
        PackageDto {
            id: p.id,
            tracking_number: p.tracking_number,
            description: p.description,
            status: p.status,
            sender: p.sender,
            recipient: p.recipient,
            sender_address: p.sender_address,
            recipient_address: p.recipient_address,
            created_at: p.created_at,
        }
    }
}

/// Registers a new package and returns it with its tracking number.
///
/// ## Validation
/// Description, sender and recipient are required; addresses may be blank.
/// Nothing is written when validation fails.
///
/// ## Collision Policy
/// The tracking number is a single uniform draw with no retry loop. If it
/// collides with an existing package (UNIQUE index), the command fails with
/// `TRACKING_CONFLICT` and the user simply sends again.
#[tauri::command]
pub async fn send_package(
    db: State<'_, DbState>,
    description: String,
    sender: String,
    recipient: String,
    sender_address: Option<String>,
    recipient_address: Option<String>,
) -> Result<PackageDto, ApiError> {
    debug!("send_package command");

    // Server-side validation, before any row is written
    let new = NewPackage {
        tracking_number: generate_tracking_number(),
        description: validate_required("description", &description)?,
        sender: validate_required("sender", &sender)?,
        recipient: validate_required("recipient", &recipient)?,
        sender_address: normalize_optional(sender_address.as_deref().unwrap_or_default()),
        recipient_address: normalize_optional(recipient_address.as_deref().unwrap_or_default()),
    };

    let package = (*db).inner().packages().insert(&new).await?;

    info!(
        tracking_number = %package.tracking_number,
        "Package registered"
    );

    Ok(PackageDto::from(package))
}

/// Looks up a package by its tracking number.
///
/// ## Arguments
/// * `tracking_number` - User-entered tracking number
///
/// ## Returns
/// The package if found, or `ApiError` with `NOT_FOUND`.
#[tauri::command]
pub async fn track_package(
    db: State<'_, DbState>,
    tracking_number: String,
) -> Result<PackageDto, ApiError> {
    debug!(tracking_number = %tracking_number, "track_package command");

    let tracking_number = validate_required("tracking_number", &tracking_number)?;

    let package = (*db)
        .inner()
        .packages()
        .get_by_tracking(&tracking_number)
        .await?
        .ok_or_else(|| ApiError::not_found("Package", &tracking_number))?;

    Ok(PackageDto::from(package))
}

/// Updates a package's status.
///
/// Status is free text; any caller may set any label, there is no
/// transition state machine.
#[tauri::command]
pub async fn update_package_status(
    db: State<'_, DbState>,
    tracking_number: String,
    status: String,
) -> Result<(), ApiError> {
    debug!(tracking_number = %tracking_number, status = %status, "update_package_status command");

    let tracking_number = validate_required("tracking_number", &tracking_number)?;
    let status = validate_required("status", &status)?;

    (*db).inner()
        .packages()
        .update_status(&tracking_number, &status)
        .await?;

    info!(tracking_number = %tracking_number, status = %status, "Package status updated");
    Ok(())
}

/// Lists all packages, newest first.
///
/// ## When Used
/// The map tab shows every package's sender/recipient addresses.
#[tauri::command]
pub async fn list_packages(db: State<'_, DbState>) -> Result<Vec<PackageDto>, ApiError> {
    debug!("list_packages command");

    let packages = (*db).inner().packages().list_recent().await?;
    Ok(packages.into_iter().map(PackageDto::from).collect())
}
