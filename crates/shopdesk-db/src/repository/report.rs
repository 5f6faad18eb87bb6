//! # Report Repository
//!
//! Aggregation behind the high revenue shops report.
//!
//! ## Query Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 High Revenue Shops (year, min_revenue)                  │
//! │                                                                         │
//! │  shops ──► orders (status = completed, placed_at in [year, year+1))     │
//! │                │                                                        │
//! │                ▼                                                        │
//! │         order_lines: SUM(quantity × unit_price) per shop                │
//! │                │                                                        │
//! │                ▼                                                        │
//! │         HAVING revenue >= min_revenue                                   │
//! │                │                                                        │
//! │                ▼                                                        │
//! │         ORDER BY revenue DESC, shop id                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Shops without a completed order in the year do not appear, even when
//! `min_revenue` is 0.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use shopdesk_core::{OrderStatus, ShopRevenue};

/// Repository for report queries.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: SqlitePool,
}

impl ReportRepository {
    /// Creates a new ReportRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReportRepository { pool }
    }

    /// Shops whose completed-order revenue in `year` is at least
    /// `min_revenue`, highest revenue first.
    pub async fn high_revenue_shops(
        &self,
        year: i32,
        min_revenue: i64,
    ) -> DbResult<Vec<ShopRevenue>> {
        debug!(year, min_revenue, "Building high revenue shops report");

        // Dates are stored as YYYY-MM-DD text, so a string range selects the year
        let (from, until) = year_bounds(year);

        let rows = sqlx::query_as::<_, ShopRevenue>(
            r#"
            SELECT
                s.id                            AS shop_id,
                s.name                          AS shop_name,
                COUNT(DISTINCT o.id)            AS order_count,
                SUM(l.quantity * l.unit_price)  AS total_revenue
            FROM shops s
            INNER JOIN orders o      ON o.shop_id = s.id
            INNER JOIN order_lines l ON l.order_id = o.id
            WHERE o.status = ?1
              AND o.placed_at >= ?2
              AND o.placed_at < ?3
            GROUP BY s.id, s.name
            HAVING SUM(l.quantity * l.unit_price) >= ?4
            ORDER BY total_revenue DESC, s.id
            "#,
        )
        .bind(OrderStatus::Completed)
        .bind(from)
        .bind(until)
        .bind(min_revenue)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Report rows");
        Ok(rows)
    }
}

/// Half-open `[from, until)` date strings covering `year`.
fn year_bounds(year: i32) -> (String, String) {
    (format!("{year:04}-01-01"), format!("{:04}-01-01", year + 1))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::NaiveDate;
    use shopdesk_core::{NewOrderLine, ProductInput, DEFAULT_SHOP_ID};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    struct Fixture {
        db: Database,
        main: i64,
        corner: i64,
        quiet: i64,
        product: i64,
    }

    async fn fixture() -> Fixture {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let corner = db.shops().insert("Corner Books").await.unwrap();
        let quiet = db.shops().insert("Quiet Shop").await.unwrap();

        let input = ProductInput {
            name: "Lamp".to_string(),
            description: None,
            original_price: 100,
            stock: 10,
        }
        .validated()
        .unwrap();
        let product = db
            .products()
            .insert(DEFAULT_SHOP_ID, &input, date(2024, 1, 1))
            .await
            .unwrap();

        Fixture {
            db,
            main: DEFAULT_SHOP_ID,
            corner,
            quiet,
            product,
        }
    }

    impl Fixture {
        async fn order(&self, shop: i64, status: OrderStatus, on: NaiveDate, qty: i64, price: i64) {
            self.db
                .orders()
                .create(
                    shop,
                    status,
                    on,
                    &[NewOrderLine {
                        product_id: self.product,
                        quantity: qty,
                        unit_price: price,
                    }],
                )
                .await
                .unwrap();
        }
    }

    #[test]
    fn test_year_bounds() {
        assert_eq!(
            year_bounds(2025),
            ("2025-01-01".to_string(), "2026-01-01".to_string())
        );
    }

    #[tokio::test]
    async fn test_ranks_shops_by_completed_revenue() {
        let f = fixture().await;
        f.order(f.main, OrderStatus::Completed, date(2025, 2, 1), 2, 100).await;
        f.order(f.main, OrderStatus::Completed, date(2025, 12, 31), 1, 100).await;
        f.order(f.corner, OrderStatus::Completed, date(2025, 5, 5), 5, 100).await;

        let report = f.db.reports().high_revenue_shops(2025, 0).await.unwrap();

        assert_eq!(report.len(), 2);
        assert_eq!(report[0].shop_id, f.corner);
        assert_eq!(report[0].total_revenue, 500);
        assert_eq!(report[0].order_count, 1);
        assert_eq!(report[1].shop_id, f.main);
        assert_eq!(report[1].shop_name, "Main Shop");
        assert_eq!(report[1].total_revenue, 300);
        assert_eq!(report[1].order_count, 2);
    }

    #[tokio::test]
    async fn test_ignores_other_years_and_unfinished_orders() {
        let f = fixture().await;
        f.order(f.main, OrderStatus::Completed, date(2024, 12, 31), 9, 100).await;
        f.order(f.main, OrderStatus::Completed, date(2026, 1, 1), 9, 100).await;
        f.order(f.main, OrderStatus::Pending, date(2025, 3, 3), 9, 100).await;
        f.order(f.main, OrderStatus::Cancelled, date(2025, 3, 3), 9, 100).await;
        f.order(f.main, OrderStatus::Completed, date(2025, 3, 3), 1, 100).await;

        let report = f.db.reports().high_revenue_shops(2025, 0).await.unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].total_revenue, 100);
        assert_eq!(report[0].order_count, 1);
    }

    #[tokio::test]
    async fn test_min_revenue_is_inclusive() {
        let f = fixture().await;
        f.order(f.main, OrderStatus::Completed, date(2025, 1, 1), 3, 100).await;
        f.order(f.corner, OrderStatus::Completed, date(2025, 1, 1), 2, 100).await;

        let report = f.db.reports().high_revenue_shops(2025, 300).await.unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].shop_id, f.main);
    }

    #[tokio::test]
    async fn test_shops_without_orders_are_omitted() {
        let f = fixture().await;
        f.order(f.corner, OrderStatus::Completed, date(2025, 1, 1), 1, 100).await;

        let report = f.db.reports().high_revenue_shops(2025, 0).await.unwrap();
        assert!(report.iter().all(|r| r.shop_id != f.quiet));
        assert!(report.iter().all(|r| r.shop_id != f.main));
    }

    #[tokio::test]
    async fn test_ties_break_on_shop_id() {
        let f = fixture().await;
        f.order(f.corner, OrderStatus::Completed, date(2025, 1, 1), 1, 100).await;
        f.order(f.main, OrderStatus::Completed, date(2025, 1, 1), 1, 100).await;

        let ids: Vec<i64> = f
            .db
            .reports()
            .high_revenue_shops(2025, 0)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.shop_id)
            .collect();
        assert_eq!(ids, vec![f.main, f.corner]);
    }

    #[tokio::test]
    async fn test_empty_year() {
        let f = fixture().await;
        let report = f.db.reports().high_revenue_shops(2030, 0).await.unwrap();
        assert!(report.is_empty());
    }
}
