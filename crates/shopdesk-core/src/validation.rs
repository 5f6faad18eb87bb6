//! # Validation Module
//!
//! Input validation for the product form, product search and the revenue
//! report filters.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend                                                     │
//! │  └── Basic format checks, immediate feedback                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Tauri Command (Rust)                                         │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: value rules                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL / CHECK constraints                                      │
//! │  └── Foreign key constraints                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopdesk_core::validation::{validate_product_name, validate_report_year};
//!
//! assert!(validate_product_name("Ceramic Mug").is_ok());
//! assert!(validate_report_year(1850).is_err());
//! ```

use crate::error::ValidationError;
use crate::{MAX_DESCRIPTION_LEN, MAX_KEYWORD_LEN, MAX_PRODUCT_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Earliest year the revenue report accepts.
pub const MIN_REPORT_YEAR: i32 = 2000;

/// Latest year the revenue report accepts.
pub const MAX_REPORT_YEAR: i32 = 2100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a product description. Empty is allowed.
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        });
    }
    Ok(())
}

/// Validates a search keyword.
///
/// ## Rules
/// - Can be empty (matches every product)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed keyword.
pub fn validate_keyword(keyword: &str) -> ValidationResult<String> {
    let keyword = keyword.trim();

    if keyword.chars().count() > MAX_KEYWORD_LEN {
        return Err(ValidationError::TooLong {
            field: "keyword".to_string(),
            max: MAX_KEYWORD_LEN,
        });
    }

    Ok(keyword.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

fn non_negative(field: &str, value: i64) -> ValidationResult<()> {
    if value < 0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a price (list price or search ceiling).
pub fn validate_price(price: i64) -> ValidationResult<()> {
    non_negative("price", price)
}

/// Validates a stock quantity.
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    non_negative("stock", stock)
}

/// Validates the revenue floor of the report.
pub fn validate_min_revenue(min_revenue: i64) -> ValidationResult<()> {
    non_negative("min_revenue", min_revenue)
}

/// Validates the report year.
pub fn validate_report_year(year: i32) -> ValidationResult<()> {
    if !(MIN_REPORT_YEAR..=MAX_REPORT_YEAR).contains(&year) {
        return Err(ValidationError::OutOfRange {
            field: "year".to_string(),
            min: MIN_REPORT_YEAR as i64,
            max: MAX_REPORT_YEAR as i64,
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Ceramic Mug").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(201)).is_err());
        assert!(validate_product_name(&"A".repeat(200)).is_ok());
    }

    #[test]
    fn test_validate_product_name_counts_chars_not_bytes() {
        // 200 two-byte characters is still within the limit
        assert!(validate_product_name(&"é".repeat(200)).is_ok());
    }

    #[test]
    fn test_validate_description() {
        assert!(validate_description("").is_ok());
        assert!(validate_description(&"x".repeat(2001)).is_err());
    }

    #[test]
    fn test_validate_keyword() {
        assert_eq!(validate_keyword("  mug ").unwrap(), "mug");
        assert_eq!(validate_keyword("").unwrap(), "");
        assert!(validate_keyword(&"k".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_numbers() {
        assert!(validate_price(0).is_ok());
        assert!(validate_price(-1).is_err());
        assert!(validate_stock(10).is_ok());
        assert!(validate_stock(-10).is_err());
        assert!(validate_min_revenue(0).is_ok());
        assert!(validate_min_revenue(-5).is_err());
    }

    #[test]
    fn test_validate_report_year() {
        assert!(validate_report_year(2025).is_ok());
        assert!(validate_report_year(2000).is_ok());
        assert!(validate_report_year(2100).is_ok());
        assert!(validate_report_year(1999).is_err());
        assert!(validate_report_year(2101).is_err());
    }
}
