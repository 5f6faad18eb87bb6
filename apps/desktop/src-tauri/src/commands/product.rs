//! # Product Commands
//!
//! Tauri commands behind the Product Management view.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Management Flow                              │
//! │                                                                         │
//! │  View mounts ──────────► list_products() ─────► newest first            │
//! │                                                                         │
//! │  Search box ───────────► search_products(keyword?, maxPrice?)           │
//! │       │                       │                                         │
//! │       │                       ▼                                         │
//! │       │                 name LIKE %keyword% AND price <= maxPrice       │
//! │       │                                                                 │
//! │  Form submit ──────────► create_product(input) ─► { newId }             │
//! │                                                                         │
//! │  Row edit ─────────────► update_product(id, input) ─► ProductDto        │
//! │                                                                         │
//! │  Row delete ───────────► delete_product(id)                             │
//! │                           (VALIDATION_ERROR while orders reference it)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command is a thin wrapper over a plain async function that takes
//! `&Database`, so the behaviour is testable without a window.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tauri::State;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{ConfigState, DbState};
use shopdesk_core::{CoreError, Product, ProductInput, ProductSearch};
use shopdesk_db::Database;

/// Product as the frontend sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i64,
    pub shop_id: i64,
    pub name: String,
    pub description: String,
    pub original_price: i64,
    pub stock: i64,
    /// `YYYY-MM-DD`
    pub created_at: String,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        ProductDto {
            id: p.id,
            shop_id: p.shop_id,
            name: p.name,
            description: p.description,
            original_price: p.original_price,
            stock: p.stock,
            created_at: p.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Returned by `create_product`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedProduct {
    pub new_id: i64,
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

// =============================================================================
// Handlers
// =============================================================================

pub(crate) async fn list(db: &Database) -> Result<Vec<ProductDto>, ApiError> {
    let start = Instant::now();
    let products = db.products().list().await?;

    info!(
        elapsed_ms = elapsed_ms(start),
        count = products.len(),
        "list_products complete"
    );
    Ok(products.into_iter().map(ProductDto::from).collect())
}

pub(crate) async fn search(
    db: &Database,
    query: ProductSearch,
) -> Result<Vec<ProductDto>, ApiError> {
    let start = Instant::now();
    let (keyword, max_price) = query.resolve()?;

    let products = db.products().search(&keyword, max_price).await?;

    info!(
        elapsed_ms = elapsed_ms(start),
        count = products.len(),
        keyword = %keyword,
        max_price,
        "search_products complete"
    );
    Ok(products.into_iter().map(ProductDto::from).collect())
}

pub(crate) async fn create(
    db: &Database,
    shop_id: i64,
    input: &ProductInput,
    today: NaiveDate,
) -> Result<CreatedProduct, ApiError> {
    let product = input.validated()?;

    if db.shops().get_by_id(shop_id).await?.is_none() {
        return Err(CoreError::ShopNotFound(shop_id).into());
    }

    let new_id = db.products().insert(shop_id, &product, today).await?;
    info!(id = new_id, shop_id, name = %product.name, "Product created");

    Ok(CreatedProduct { new_id })
}

pub(crate) async fn update(
    db: &Database,
    id: i64,
    input: &ProductInput,
) -> Result<ProductDto, ApiError> {
    let product = input.validated()?;
    db.products().update(id, &product).await?;

    let updated = db
        .products()
        .get_by_id(id)
        .await?
        .ok_or(CoreError::ProductNotFound(id))?;

    info!(id, "Product updated");
    Ok(ProductDto::from(updated))
}

pub(crate) async fn delete(db: &Database, id: i64) -> Result<(), ApiError> {
    db.products().delete(id).await?;
    info!(id, "Product deleted");
    Ok(())
}

// =============================================================================
// Tauri Commands
// =============================================================================

/// Lists every product, newest first.
#[tauri::command]
pub async fn list_products(db: State<'_, DbState>) -> Result<Vec<ProductDto>, ApiError> {
    debug!("list_products command");
    list(db.inner().inner()).await
}

/// Searches products by name substring and price ceiling.
///
/// ## Arguments
/// * `keyword` - Case-insensitive name substring. Absent or blank matches all.
/// * `max_price` - Inclusive ceiling. Absent uses the configured default.
#[tauri::command]
pub async fn search_products(
    db: State<'_, DbState>,
    config: State<'_, ConfigState>,
    keyword: Option<String>,
    max_price: Option<i64>,
) -> Result<Vec<ProductDto>, ApiError> {
    debug!(?keyword, ?max_price, "search_products command");
    let query = ProductSearch {
        keyword,
        max_price: max_price.or(Some(config.default_search_max_price)),
    };
    search(db.inner().inner(), query).await
}

/// Creates a product in the configured shop, dated today.
#[tauri::command]
pub async fn create_product(
    db: State<'_, DbState>,
    config: State<'_, ConfigState>,
    input: ProductInput,
) -> Result<CreatedProduct, ApiError> {
    debug!(name = %input.name, "create_product command");
    let today = chrono::Local::now().date_naive();
    create(db.inner().inner(), config.default_shop_id, &input, today).await
}

/// Replaces the editable fields of a product.
///
/// ## Returns
/// The product as stored after the update, or NOT_FOUND.
#[tauri::command]
pub async fn update_product(
    db: State<'_, DbState>,
    id: i64,
    input: ProductInput,
) -> Result<ProductDto, ApiError> {
    debug!(id, "update_product command");
    update(db.inner().inner(), id, &input).await
}

/// Deletes a product that no order references.
#[tauri::command]
pub async fn delete_product(db: State<'_, DbState>, id: i64) -> Result<(), ApiError> {
    debug!(id, "delete_product command");
    delete(db.inner().inner(), id).await
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use shopdesk_core::{NewOrderLine, OrderStatus, DEFAULT_SHOP_ID};
    use shopdesk_db::DbConfig;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn input(name: &str, price: i64) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            description: None,
            original_price: price,
            stock: 5,
        }
    }

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let db = db().await;
        let first = create(&db, DEFAULT_SHOP_ID, &input("Mug", 100), today()).await.unwrap();
        let second = create(&db, DEFAULT_SHOP_ID, &input("Tea", 50), today()).await.unwrap();
        assert!(second.new_id > first.new_id);

        let listed = list(&db).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.new_id);
        assert_eq!(listed[1].name, "Mug");
        assert_eq!(listed[1].created_at, "2025-06-01");
        assert_eq!(listed[1].description, "");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input() {
        let db = db().await;
        let err = create(&db, DEFAULT_SHOP_ID, &input("  ", 100), today()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = create(&db, DEFAULT_SHOP_ID, &input("Mug", -1), today()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(list(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_in_missing_shop() {
        let db = db().await;
        let err = create(&db, 999, &input("Mug", 100), today()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_search_defaults_and_filters() {
        let db = db().await;
        create(&db, DEFAULT_SHOP_ID, &input("Ceramic Mug", 120), today()).await.unwrap();
        create(&db, DEFAULT_SHOP_ID, &input("Travel mug", 300), today()).await.unwrap();
        create(&db, DEFAULT_SHOP_ID, &input("Lotus Tea", 80), today()).await.unwrap();

        let all = search(&db, ProductSearch::default()).await.unwrap();
        assert_eq!(all.len(), 3);

        let mugs = search(
            &db,
            ProductSearch {
                keyword: Some("MUG".into()),
                max_price: Some(200),
            },
        )
        .await
        .unwrap();
        assert_eq!(mugs.len(), 1);
        assert_eq!(mugs[0].name, "Ceramic Mug");
    }

    #[tokio::test]
    async fn test_search_rejects_negative_ceiling() {
        let db = db().await;
        let err = search(
            &db,
            ProductSearch {
                keyword: None,
                max_price: Some(-1),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_update_returns_stored_product() {
        let db = db().await;
        let created = create(&db, DEFAULT_SHOP_ID, &input("Mug", 100), today()).await.unwrap();

        let mut edit = input("Big Mug", 150);
        edit.description = Some("Holds a lot".into());
        let dto = update(&db, created.new_id, &edit).await.unwrap();

        assert_eq!(dto.name, "Big Mug");
        assert_eq!(dto.original_price, 150);
        assert_eq!(dto.description, "Holds a lot");
        assert_eq!(dto.created_at, "2025-06-01");
    }

    #[tokio::test]
    async fn test_update_missing_product() {
        let db = db().await;
        let err = update(&db, 404, &input("Ghost", 1)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_delete() {
        let db = db().await;
        let created = create(&db, DEFAULT_SHOP_ID, &input("Mug", 100), today()).await.unwrap();

        delete(&db, created.new_id).await.unwrap();
        assert!(list(&db).await.unwrap().is_empty());

        let err = delete(&db, created.new_id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_delete_ordered_product_is_a_validation_error() {
        let db = db().await;
        let created = create(&db, DEFAULT_SHOP_ID, &input("Mug", 100), today()).await.unwrap();
        db.orders()
            .create(
                DEFAULT_SHOP_ID,
                OrderStatus::Completed,
                today(),
                &[NewOrderLine {
                    product_id: created.new_id,
                    quantity: 1,
                    unit_price: 100,
                }],
            )
            .await
            .unwrap();

        let err = delete(&db, created.new_id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(list(&db).await.unwrap().len(), 1);
    }

    #[test]
    fn test_dto_serializes_camel_case() {
        let dto = ProductDto {
            id: 1,
            shop_id: 1,
            name: "Mug".into(),
            description: String::new(),
            original_price: 100,
            stock: 2,
            created_at: "2025-01-01".into(),
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["originalPrice"], 100);
        assert_eq!(json["shopId"], 1);
        assert_eq!(json["createdAt"], "2025-01-01");

        let created = serde_json::to_value(CreatedProduct { new_id: 9 }).unwrap();
        assert_eq!(created["newId"], 9);
    }
}
