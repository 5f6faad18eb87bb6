//! # Report Commands
//!
//! Backs the High Revenue Shops view.

use serde::Serialize;
use std::time::Instant;
use tauri::State;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{ConfigState, DbState};
use shopdesk_core::{RevenueReportQuery, ShopRevenue};
use shopdesk_db::Database;

/// One ranked row of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopRevenueDto {
    pub rank: usize,
    pub shop_id: i64,
    pub shop_name: String,
    pub order_count: i64,
    pub total_revenue: i64,
}

/// The report with the filters it was computed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueReportDto {
    pub year: i32,
    pub min_revenue: i64,
    pub shops: Vec<ShopRevenueDto>,
}

impl RevenueReportDto {
    fn new(year: i32, min_revenue: i64, rows: Vec<ShopRevenue>) -> Self {
        let shops = rows
            .into_iter()
            .enumerate()
            .map(|(i, r)| ShopRevenueDto {
                rank: i + 1,
                shop_id: r.shop_id,
                shop_name: r.shop_name,
                order_count: r.order_count,
                total_revenue: r.total_revenue,
            })
            .collect();

        RevenueReportDto {
            year,
            min_revenue,
            shops,
        }
    }
}

pub(crate) async fn high_revenue(
    db: &Database,
    query: RevenueReportQuery,
) -> Result<RevenueReportDto, ApiError> {
    let start = Instant::now();
    let (year, min_revenue) = query.resolve()?;

    let rows = db.reports().high_revenue_shops(year, min_revenue).await?;

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        year,
        min_revenue,
        count = rows.len(),
        "High revenue report complete"
    );
    Ok(RevenueReportDto::new(year, min_revenue, rows))
}

/// Shops whose completed revenue in `year` reaches `min_revenue`.
///
/// ## Arguments
/// * `year` - Calendar year. Absent uses the configured default (2025).
/// * `min_revenue` - Inclusive floor. Absent means 0.
#[tauri::command]
pub async fn get_high_revenue_report(
    db: State<'_, DbState>,
    config: State<'_, ConfigState>,
    year: Option<i32>,
    min_revenue: Option<i64>,
) -> Result<RevenueReportDto, ApiError> {
    debug!(?year, ?min_revenue, "get_high_revenue_report command");
    let query = RevenueReportQuery {
        year: year.or(Some(config.default_report_year)),
        min_revenue,
    };
    high_revenue(db.inner().inner(), query).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use chrono::NaiveDate;
    use shopdesk_core::{NewOrderLine, OrderStatus, ProductInput, DEFAULT_SHOP_ID};
    use shopdesk_db::DbConfig;

    async fn seeded() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let corner = db.shops().insert("Corner Books").await.unwrap();

        let product = ProductInput {
            name: "Lamp".into(),
            description: None,
            original_price: 100,
            stock: 10,
        }
        .validated()
        .unwrap();
        let on = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let product_id = db.products().insert(DEFAULT_SHOP_ID, &product, on).await.unwrap();

        for (shop, qty) in [(DEFAULT_SHOP_ID, 2), (corner, 7)] {
            let line = NewOrderLine {
                product_id,
                quantity: qty,
                unit_price: 100,
            };
            db.orders()
                .create(shop, OrderStatus::Completed, on, &[line])
                .await
                .unwrap();
        }
        db
    }

    #[tokio::test]
    async fn test_defaults_rank_all_shops() {
        let db = seeded().await;
        let report = high_revenue(&db, RevenueReportQuery::default()).await.unwrap();

        assert_eq!(report.year, 2025);
        assert_eq!(report.min_revenue, 0);
        assert_eq!(report.shops.len(), 2);
        assert_eq!(report.shops[0].rank, 1);
        assert_eq!(report.shops[0].shop_name, "Corner Books");
        assert_eq!(report.shops[0].total_revenue, 700);
        assert_eq!(report.shops[1].rank, 2);
    }

    #[tokio::test]
    async fn test_min_revenue_filters() {
        let db = seeded().await;
        let query = RevenueReportQuery {
            year: Some(2025),
            min_revenue: Some(500),
        };
        let report = high_revenue(&db, query).await.unwrap();
        assert_eq!(report.shops.len(), 1);
        assert_eq!(report.shops[0].order_count, 1);
    }

    #[tokio::test]
    async fn test_rejects_bad_filters() {
        let db = seeded().await;
        let bad_year = RevenueReportQuery {
            year: Some(1990),
            min_revenue: None,
        };
        let err = high_revenue(&db, bad_year).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let bad_floor = RevenueReportQuery {
            year: None,
            min_revenue: Some(-1),
        };
        let err = high_revenue(&db, bad_floor).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_dto_serializes_camel_case() {
        let report = RevenueReportDto::new(2025, 0, Vec::new());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["minRevenue"], 0);
        assert!(json["shops"].as_array().unwrap().is_empty());
    }
}
