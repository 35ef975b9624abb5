//! # Package Repository
//!
//! Database operations for packages.
//!
//! ## Key Operations
//! - Insert with a pre-generated tracking number
//! - Lookup by tracking number
//! - Status update (free-text, no transition rules)
//! - Recency-ordered listing for the map tab
//!
//! ## Uniqueness
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │              Tracking-Number Uniqueness Enforcement                 │
//! │                                                                     │
//! │  send_package command                                               │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  paket_core::generate_tracking_number()  (no retry loop)            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  INSERT INTO packages (tracking_number, ...)                        │
//! │       │                                                             │
//! │       ├── ok ──────────► Package row + Package returned             │
//! │       │                                                             │
//! │       └── UNIQUE constraint failed: packages.tracking_number        │
//! │                │                                                    │
//! │                ▼                                                    │
//! │           DbError::UniqueViolation ──► caller reports failure       │
//! │           with a retry suggestion                                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use paket_core::{NewPackage, Package, DEFAULT_PACKAGE_STATUS};

/// Repository for package database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = PackageRepository::new(pool);
///
/// // Lookup by tracking number
/// let package = repo.get_by_tracking("AB-123456").await?;
/// ```
#[derive(Debug, Clone)]
pub struct PackageRepository {
    pool: SqlitePool,
}

impl PackageRepository {
    /// Creates a new PackageRepository.
    pub fn new(pool: SqlitePool) -> Self {
        PackageRepository { pool }
    }

    /// Inserts a new package.
    ///
    /// Stamps the default status and the current timestamp; the row id is
    /// assigned by SQLite.
    ///
    /// ## Returns
    /// * `Ok(Package)` - Inserted package with generated id
    /// * `Err(DbError::UniqueViolation)` - Tracking number already exists
    pub async fn insert(&self, new: &NewPackage) -> DbResult<Package> {
        debug!(tracking_number = %new.tracking_number, "Inserting package");

        let created_at = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO packages (
                tracking_number, description, status, sender, recipient,
                sender_address, recipient_address, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(&new.tracking_number)
        .bind(&new.description)
        .bind(DEFAULT_PACKAGE_STATUS)
        .bind(&new.sender)
        .bind(&new.recipient)
        .bind(&new.sender_address)
        .bind(&new.recipient_address)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(Package {
            id: result.last_insert_rowid(),
            tracking_number: new.tracking_number.clone(),
            description: new.description.clone(),
            status: DEFAULT_PACKAGE_STATUS.to_string(),
            sender: new.sender.clone(),
            recipient: new.recipient.clone(),
            sender_address: new.sender_address.clone(),
            recipient_address: new.recipient_address.clone(),
            created_at,
        })
    }

    /// Gets a package by its tracking number.
    ///
    /// ## Returns
    /// * `Ok(Some(Package))` - Package found
    /// * `Ok(None)` - No package under this tracking number
    pub async fn get_by_tracking(&self, tracking_number: &str) -> DbResult<Option<Package>> {
        let package = sqlx::query_as::<_, Package>(
            r#"
            SELECT id, tracking_number, description, status, sender, recipient,
                   sender_address, recipient_address, created_at
            FROM packages
            WHERE tracking_number = ?1
            "#,
        )
        .bind(tracking_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(package)
    }

    /// Updates a package's status.
    ///
    /// Status is free text; no transition order is enforced.
    ///
    /// ## Returns
    /// * `Ok(())` - Status updated
    /// * `Err(DbError::NotFound)` - No package under this tracking number
    pub async fn update_status(&self, tracking_number: &str, status: &str) -> DbResult<()> {
        debug!(tracking_number = %tracking_number, status = %status, "Updating package status");

        let result = sqlx::query(
            r#"
            UPDATE packages SET status = ?2 WHERE tracking_number = ?1
            "#,
        )
        .bind(tracking_number)
        .bind(status)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Package", tracking_number));
        }

        Ok(())
    }

    /// Lists all packages, newest first.
    ///
    /// ## Usage
    /// Feeds the map tab's address list.
    pub async fn list_recent(&self) -> DbResult<Vec<Package>> {
        let packages = sqlx::query_as::<_, Package>(
            r#"
            SELECT id, tracking_number, description, status, sender, recipient,
                   sender_address, recipient_address, created_at
            FROM packages
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(packages)
    }

    /// Counts total packages (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM packages")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    fn sample_package(tracking_number: &str) -> NewPackage {
        NewPackage {
            tracking_number: tracking_number.to_string(),
            description: "Книги".to_string(),
            sender: "Иван Петров".to_string(),
            recipient: "Мария Сидорова".to_string(),
            sender_address: "Москва, ул. Ленина, 1".to_string(),
            recipient_address: "Санкт-Петербург, Невский пр., 10".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_get_by_tracking() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.packages();

        let inserted = repo.insert(&sample_package("AB-123456")).await.unwrap();
        assert_eq!(inserted.status, DEFAULT_PACKAGE_STATUS);

        let found = repo.get_by_tracking("AB-123456").await.unwrap().unwrap();
        assert_eq!(found.id, inserted.id);
        assert_eq!(found.sender, "Иван Петров");
        assert_eq!(found.recipient, "Мария Сидорова");
        assert_eq!(found.description, "Книги");
    }

    #[tokio::test]
    async fn test_get_unknown_tracking_returns_none() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let found = db.packages().get_by_tracking("ZZ-999999").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_tracking_number_is_unique_violation() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.packages();

        repo.insert(&sample_package("AB-123456")).await.unwrap();
        let err = repo.insert(&sample_package("AB-123456")).await.unwrap_err();

        assert!(err.is_unique_violation(), "expected unique violation, got {err:?}");

        // The collision must not have written a second row
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_status() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.packages();

        repo.insert(&sample_package("CD-000001")).await.unwrap();
        repo.update_status("CD-000001", "Доставлена").await.unwrap();

        let found = repo.get_by_tracking("CD-000001").await.unwrap().unwrap();
        assert_eq!(found.status, "Доставлена");
    }

    #[tokio::test]
    async fn test_update_status_unknown_tracking_is_not_found() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let err = db
            .packages()
            .update_status("ZZ-999999", "Доставлена")
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_recent_returns_newest_first() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.packages();

        repo.insert(&sample_package("AA-000001")).await.unwrap();
        repo.insert(&sample_package("AA-000002")).await.unwrap();

        let all = repo.list_recent().await.unwrap();
        assert_eq!(all.len(), 2);
        // Equal timestamps are possible at insert speed; ids break the tie
        // only implicitly, so just check both rows are present.
        let numbers: Vec<_> = all.iter().map(|p| p.tracking_number.as_str()).collect();
        assert!(numbers.contains(&"AA-000001"));
        assert!(numbers.contains(&"AA-000002"));
    }
}
