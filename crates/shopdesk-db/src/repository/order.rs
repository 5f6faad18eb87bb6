//! # Order Repository
//!
//! Orders and their lines. Lines carry the unit price at order time, which
//! is what the revenue report sums.
//!
//! ## Create Flow
//! ```text
//! BEGIN
//!   INSERT INTO orders (shop_id, status, placed_at)  ──► order_id
//!   INSERT INTO order_lines (order_id, ...)  × n
//! COMMIT            (any failure rolls the whole order back)
//! ```

use chrono::NaiveDate;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use shopdesk_core::{NewOrderLine, Order, OrderStatus};

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Creates an order with its lines in one transaction.
    ///
    /// ## Returns
    /// The new order ID.
    pub async fn create(
        &self,
        shop_id: i64,
        status: OrderStatus,
        placed_at: NaiveDate,
        lines: &[NewOrderLine],
    ) -> DbResult<i64> {
        debug!(shop_id, %status, lines = lines.len(), "Creating order");

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let order_id = sqlx::query(
            "INSERT INTO orders (shop_id, status, placed_at) VALUES (?1, ?2, ?3)",
        )
        .bind(shop_id)
        .bind(status)
        .bind(placed_at)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        for line in lines {
            sqlx::query(
                r#"
                INSERT INTO order_lines (order_id, product_id, quantity, unit_price)
                VALUES (?1, ?2, ?3, ?4)
                "#,
            )
            .bind(order_id)
            .bind(line.product_id)
            .bind(line.quantity)
            .bind(line.unit_price)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(order_id)
    }

    /// Gets an order by ID.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(
            "SELECT id, shop_id, status, placed_at FROM orders WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    /// Changes an order's status.
    pub async fn set_status(&self, id: i64, status: OrderStatus) -> DbResult<()> {
        debug!(id, %status, "Updating order status");

        let result = sqlx::query("UPDATE orders SET status = ?2 WHERE id = ?1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Order", id));
        }

        Ok(())
    }

    /// Sum of `quantity × unit_price` over the order's lines.
    pub async fn total(&self, id: i64) -> DbResult<i64> {
        let total: Option<i64> = sqlx::query_scalar(
            "SELECT SUM(quantity * unit_price) FROM order_lines WHERE order_id = ?1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(total.unwrap_or(0))
    }
}
