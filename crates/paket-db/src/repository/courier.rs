//! # Courier Repository
//!
//! Database operations for the courier roster.
//!
//! Couriers are the only entity with a hard delete: the roster tab removes
//! rows outright. There is no update operation; status keeps its default.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use paket_core::{Courier, NewCourier, DEFAULT_COURIER_STATUS};

/// Repository for courier database operations.
#[derive(Debug, Clone)]
pub struct CourierRepository {
    pool: SqlitePool,
}

impl CourierRepository {
    /// Creates a new CourierRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CourierRepository { pool }
    }

    /// Inserts a new courier with the default status.
    ///
    /// ## Returns
    /// * `Ok(Courier)` - Inserted courier with generated id
    pub async fn insert(&self, new: &NewCourier) -> DbResult<Courier> {
        debug!(name = %new.name, "Inserting courier");

        let created_at = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO couriers (name, phone, email, status, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&new.name)
        .bind(&new.phone)
        .bind(&new.email)
        .bind(DEFAULT_COURIER_STATUS)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(Courier {
            id: result.last_insert_rowid(),
            name: new.name.clone(),
            phone: new.phone.clone(),
            email: new.email.clone(),
            status: DEFAULT_COURIER_STATUS.to_string(),
            created_at,
        })
    }

    /// Lists all couriers, ordered by name.
    pub async fn list_all(&self) -> DbResult<Vec<Courier>> {
        let couriers = sqlx::query_as::<_, Courier>(
            r#"
            SELECT id, name, phone, email, status, created_at
            FROM couriers
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(couriers)
    }

    /// Deletes a courier by id.
    ///
    /// ## Returns
    /// * `Ok(())` - Courier removed
    /// * `Err(DbError::NotFound)` - No courier with this id
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id = %id, "Deleting courier");

        let result = sqlx::query("DELETE FROM couriers WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Courier", id));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    fn courier(name: &str) -> NewCourier {
        NewCourier {
            name: name.to_string(),
            phone: "+7 900 000-00-00".to_string(),
            email: "courier@paket.example".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_sets_default_status() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let inserted = db.couriers().insert(&courier("Алексей")).await.unwrap();
        assert_eq!(inserted.status, DEFAULT_COURIER_STATUS);
        assert!(inserted.id > 0);
    }

    #[tokio::test]
    async fn test_list_all_ordered_by_name() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.couriers();

        repo.insert(&courier("Борис")).await.unwrap();
        repo.insert(&courier("Алексей")).await.unwrap();

        let all = repo.list_all().await.unwrap();
        let names: Vec<_> = all.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Алексей", "Борис"]);
    }

    #[tokio::test]
    async fn test_delete_removes_courier_from_listing() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.couriers();

        let kept = repo.insert(&courier("Алексей")).await.unwrap();
        let removed = repo.insert(&courier("Борис")).await.unwrap();

        repo.delete(removed.id).await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, kept.id);
    }

    #[tokio::test]
    async fn test_delete_nonexistent_id_is_not_found() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let err = db.couriers().delete(9999).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
