//! # Shop Repository
//!
//! Shops own products and orders. The admin screen works on shop 1, which
//! the initial migration creates; other shops exist so the revenue report
//! has something to rank.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use shopdesk_core::Shop;

/// Repository for shop database operations.
#[derive(Debug, Clone)]
pub struct ShopRepository {
    pool: SqlitePool,
}

impl ShopRepository {
    /// Creates a new ShopRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ShopRepository { pool }
    }

    /// Inserts a shop and returns its ID.
    ///
    /// ## Returns
    /// * `Err(DbError::UniqueViolation)` - A shop with this name exists
    pub async fn insert(&self, name: &str) -> DbResult<i64> {
        let name = name.trim();
        debug!(name = %name, "Inserting shop");

        let result = sqlx::query("INSERT INTO shops (name) VALUES (?1)")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| match DbError::from(e) {
                DbError::UniqueViolation { field, .. } => DbError::duplicate(field, name),
                other => other,
            })?;

        Ok(result.last_insert_rowid())
    }

    /// Gets a shop by ID.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Shop>> {
        let shop = sqlx::query_as::<_, Shop>("SELECT id, name FROM shops WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(shop)
    }

    /// Lists all shops ordered by ID.
    pub async fn list(&self) -> DbResult<Vec<Shop>> {
        let shops = sqlx::query_as::<_, Shop>("SELECT id, name FROM shops ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(shops)
    }
}
