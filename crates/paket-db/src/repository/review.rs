//! # Review Repository
//!
//! Database operations for customer reviews.
//!
//! Reviews are append-only: inserted and listed, never updated or deleted.
//! The tracking-number column is a loose reference - it may name a package
//! that does not exist, and the repository does not check.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use paket_core::{NewReview, Review};

/// Repository for review database operations.
#[derive(Debug, Clone)]
pub struct ReviewRepository {
    pool: SqlitePool,
}

impl ReviewRepository {
    /// Creates a new ReviewRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReviewRepository { pool }
    }

    /// Inserts a new review.
    ///
    /// Rating range checks belong to paket-core validation; by the time
    /// input reaches this repository it is already validated.
    pub async fn insert(&self, new: &NewReview) -> DbResult<Review> {
        debug!(customer = %new.customer_name, rating = new.rating, "Inserting review");

        let created_at = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO reviews (tracking_number, customer_name, rating, comment, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&new.tracking_number)
        .bind(&new.customer_name)
        .bind(new.rating)
        .bind(&new.comment)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(Review {
            id: result.last_insert_rowid(),
            tracking_number: new.tracking_number.clone(),
            customer_name: new.customer_name.clone(),
            rating: new.rating,
            comment: new.comment.clone(),
            created_at,
        })
    }

    /// Lists all reviews, newest first.
    pub async fn list_recent(&self) -> DbResult<Vec<Review>> {
        let reviews = sqlx::query_as::<_, Review>(
            r#"
            SELECT id, tracking_number, customer_name, rating, comment, created_at
            FROM reviews
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(reviews)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_insert_and_list() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.reviews();

        let inserted = repo
            .insert(&NewReview {
                tracking_number: Some("AB-123456".to_string()),
                customer_name: "Анна".to_string(),
                rating: 5,
                comment: "Быстрая доставка".to_string(),
            })
            .await
            .unwrap();
        assert!(inserted.id > 0);

        let all = repo.list_recent().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].customer_name, "Анна");
        assert_eq!(all[0].rating, 5);
    }

    #[tokio::test]
    async fn test_insert_without_tracking_number() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.reviews();

        repo.insert(&NewReview {
            tracking_number: None,
            customer_name: "Пётр".to_string(),
            rating: 3,
            comment: String::new(),
        })
        .await
        .unwrap();

        let all = repo.list_recent().await.unwrap();
        assert_eq!(all[0].tracking_number, None);
    }

    #[tokio::test]
    async fn test_tracking_reference_is_not_enforced() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        // No package ZZ-999999 exists; the loose reference still inserts
        db.reviews()
            .insert(&NewReview {
                tracking_number: Some("ZZ-999999".to_string()),
                customer_name: "Ольга".to_string(),
                rating: 1,
                comment: "Посылка потерялась".to_string(),
            })
            .await
            .unwrap();
    }
}
