//! # Review Commands
//!
//! Tauri commands for the reviews tab.
//!
//! The rating range is checked server-side regardless of the UI's dropdown:
//! the command layer cannot trust frontend constraints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::DbState;
use paket_core::validation::{normalize_optional, validate_rating, validate_required};
use paket_core::{NewReview, Review};

/// Review DTO for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: i64,
    pub tracking_number: Option<String>,
    pub customer_name: String,
    pub rating: i64,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewDto {
    fn from(r: Review) -> Self {
        ReviewDto {
            id: r.id,
            tracking_number: r.tracking_number,
            customer_name: r.customer_name,
            rating: r.rating,
            comment: r.comment,
            created_at: r.created_at,
        }
    }
}

/// Adds a customer review.
///
/// ## Validation
/// - Customer name is required
/// - Rating must be within 1..=5 (boundaries included)
/// - Tracking number is optional and NOT checked against packages:
///   it is a loose reference by design
#[tauri::command]
pub async fn add_review(
    db: State<'_, DbState>,
    customer_name: String,
    rating: i64,
    tracking_number: Option<String>,
    comment: Option<String>,
) -> Result<ReviewDto, ApiError> {
    debug!("add_review command");

    validate_rating(rating)?;

    // An all-whitespace tracking number counts as absent
    let tracking_number = tracking_number
        .as_deref()
        .map(normalize_optional)
        .filter(|t| !t.is_empty());

    let new = NewReview {
        tracking_number,
        customer_name: validate_required("customer_name", &customer_name)?,
        rating,
        comment: normalize_optional(comment.as_deref().unwrap_or_default()),
    };

    let review = (*db).inner().reviews().insert(&new).await?;

    info!(id = review.id, rating = review.rating, "Review added");
    Ok(ReviewDto::from(review))
}

/// Lists all reviews, newest first.
#[tauri::command]
pub async fn list_reviews(db: State<'_, DbState>) -> Result<Vec<ReviewDto>, ApiError> {
    debug!("list_reviews command");

    let reviews = (*db).inner().reviews().list_recent().await?;
    Ok(reviews.into_iter().map(ReviewDto::from).collect())
}
