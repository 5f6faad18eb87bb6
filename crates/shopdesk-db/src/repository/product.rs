//! # Product Repository
//!
//! Database operations behind the product management view.
//!
//! ## Key Operations
//! - Listing, newest first
//! - Create / update / delete
//! - Keyword + price ceiling search
//!
//! ## Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Product Search Works                             │
//! │                                                                         │
//! │  keyword: "mug"   max_price: 150000                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  name LIKE '%mug%' ESCAPE '\'   (case-insensitive for ASCII)           │
//! │  AND original_price <= 150000                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Ceramic Mug       120000   ← MATCH                                    │
//! │  Travel Mug XL     180000   ← price too high                           │
//! │  Teapot             90000   ← name doesn't match                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ORDER BY id DESC (newest first)                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use shopdesk_core::{Product, ValidProduct};

const PRODUCT_COLUMNS: &str =
    "id, shop_id, name, description, original_price, stock, created_at";

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let all = repo.list().await?;
/// let mugs = repo.search("mug", 150_000).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists every product, newest first.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id DESC");
        let products = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1");
        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    /// Searches products by name substring and price ceiling.
    ///
    /// ## Arguments
    /// * `keyword` - Substring of the name. Empty matches every product.
    ///   `%` and `_` are matched literally.
    /// * `max_price` - Inclusive upper bound on `original_price`
    pub async fn search(&self, keyword: &str, max_price: i64) -> DbResult<Vec<Product>> {
        let keyword = keyword.trim();
        debug!(keyword = %keyword, max_price, "Searching products");

        let pattern = format!("%{}%", escape_like(keyword));
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products \
             WHERE name LIKE ?1 ESCAPE '\\' AND original_price <= ?2 \
             ORDER BY id DESC"
        );

        let products = sqlx::query_as::<_, Product>(&sql)
            .bind(pattern)
            .bind(max_price)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Search returned products");
        Ok(products)
    }

    /// Inserts a new product and returns its generated ID.
    ///
    /// ## Arguments
    /// * `shop_id` - Owning shop (must exist)
    /// * `product` - Validated fields
    /// * `created_at` - Creation day
    pub async fn insert(
        &self,
        shop_id: i64,
        product: &ValidProduct,
        created_at: NaiveDate,
    ) -> DbResult<i64> {
        debug!(name = %product.name, shop_id, "Inserting product");

        let result = sqlx::query(
            r#"
            INSERT INTO products (shop_id, name, description, original_price, stock, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(shop_id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.original_price)
        .bind(product.stock)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Replaces the editable fields of an existing product.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::NotFound)` - Product doesn't exist
    pub async fn update(&self, id: i64, product: &ValidProduct) -> DbResult<()> {
        debug!(id, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                description = ?3,
                original_price = ?4,
                stock = ?5
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.original_price)
        .bind(product.stock)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Deletes a product.
    ///
    /// Fails with [`DbError::ForeignKeyViolation`] while order lines still
    /// reference the product, so past revenue stays intact.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Counts products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Escapes LIKE wildcards so the keyword is matched literally.
fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

// =============================================================================
// Unit Tests
// =============================================================================
