//! # Domain Types
//!
//! Types behind the two main views of the shell.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Shop       │   │     Product     │   │      Order      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──│  shop_id        │   │  shop_id ───────┼──►Shop│
//! │  │  name           │   │  original_price │   │  status         │       │
//! │  └─────────────────┘   │  stock          │   │  placed_at      │       │
//! │                        └─────────────────┘   └────────┬────────┘       │
//! │                                 ▲                     │ 1..n           │
//! │                                 │            ┌────────▼────────┐       │
//! │                                 └────────────│   OrderLine     │       │
//! │                                              │ quantity × price│       │
//! │                                              └─────────────────┘       │
//! │                                                                         │
//! │  ShopRevenue: one row of the high revenue shops report                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Money
//! Prices and revenue are whole currency units in `i64`. The shop sells in a
//! currency without minor units, so there is no fractional part to track.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::validation;
use crate::{DEFAULT_REPORT_YEAR, DEFAULT_SEARCH_MAX_PRICE};

// =============================================================================
// Product
// =============================================================================

/// A product listed by a shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Product {
    /// Auto-increment identifier.
    pub id: i64,

    /// Owning shop.
    pub shop_id: i64,

    /// Display name.
    pub name: String,

    /// Free text description. Empty when not provided.
    pub description: String,

    /// List price in whole currency units.
    pub original_price: i64,

    /// Units in stock.
    pub stock: i64,

    /// Day the product was created.
    #[ts(as = "String")]
    pub created_at: NaiveDate,
}

/// Fields the product form submits on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub original_price: i64,
    pub stock: i64,
}

impl ProductInput {
    /// Validates the input and returns a trimmed copy.
    ///
    /// A missing description becomes the empty string.
    pub fn validated(&self) -> CoreResult<ValidProduct> {
        let name = self.name.trim();
        validation::validate_product_name(name)?;

        let description = self.description.as_deref().unwrap_or("").trim();
        validation::validate_description(description)?;
        validation::validate_price(self.original_price)?;
        validation::validate_stock(self.stock)?;

        Ok(ValidProduct {
            name: name.to_string(),
            description: description.to_string(),
            original_price: self.original_price,
            stock: self.stock,
        })
    }
}

/// Product fields that passed validation. Only produced by
/// [`ProductInput::validated`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidProduct {
    pub name: String,
    pub description: String,
    pub original_price: i64,
    pub stock: i64,
}

/// Product search filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductSearch {
    /// Substring to look for in the name. Empty or absent matches everything.
    pub keyword: Option<String>,
    /// Inclusive price ceiling.
    pub max_price: Option<i64>,
}

impl ProductSearch {
    /// Applies defaults and validation, returning `(keyword, max_price)`.
    pub fn resolve(&self) -> CoreResult<(String, i64)> {
        let keyword = validation::validate_keyword(self.keyword.as_deref().unwrap_or(""))?;
        let max_price = self.max_price.unwrap_or(DEFAULT_SEARCH_MAX_PRICE);
        validation::validate_price(max_price)?;
        Ok((keyword, max_price))
    }
}

// =============================================================================
// Shop
// =============================================================================

/// A shop selling on the marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Shop {
    pub id: i64,
    pub name: String,
}

// =============================================================================
// Orders
// =============================================================================

/// Lifecycle state of an order. Only completed orders count as revenue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(CoreError::UnknownOrderStatus(other.to_string())),
        }
    }
}

/// An order placed with a shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Order {
    pub id: i64,
    pub shop_id: i64,
    pub status: OrderStatus,
    #[ts(as = "String")]
    pub placed_at: NaiveDate,
}

/// A line to insert with a new order.
///
/// `unit_price` is frozen at order time; later price edits on the product do
/// not change past revenue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrderLine {
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: i64,
}

// =============================================================================
// Revenue Report
// =============================================================================

/// One row of the high revenue shops report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct ShopRevenue {
    pub shop_id: i64,
    pub shop_name: String,
    /// Completed orders in the year.
    pub order_count: i64,
    /// Sum of `quantity × unit_price` over those orders.
    pub total_revenue: i64,
}

/// Report parameters as received from the report view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RevenueReportQuery {
    pub year: Option<i32>,
    pub min_revenue: Option<i64>,
}

impl RevenueReportQuery {
    /// Applies defaults and validation, returning `(year, min_revenue)`.
    pub fn resolve(&self) -> CoreResult<(i32, i64)> {
        let year = self.year.unwrap_or(DEFAULT_REPORT_YEAR);
        validation::validate_report_year(year)?;

        let min_revenue = self.min_revenue.unwrap_or(0);
        validation::validate_min_revenue(min_revenue)?;

        Ok((year, min_revenue))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
