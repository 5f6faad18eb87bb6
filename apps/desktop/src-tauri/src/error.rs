//! # API Error Type
//!
//! Unified error type for Tauri commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Shopdesk                               │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  invoke('update_product')                                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Validation Error? ─── CoreError::Validation ─────┐             │  │
//! │  │         │                                          │             │  │
//! │  │         ▼                                          ▼             │  │
//! │  │  Database Error? ─── DbError::NotFound ─────────► ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │  ◄────────────────────────────────────────────────────────────────────  │
//! │                                                                         │
//! │  try {                                                                  │
//! │    await invoke('update_product', { id, input })                        │
//! │  } catch (e) {                                                          │
//! │    // e.code = "NOT_FOUND"                                              │
//! │    // e.message = "Product not found: 42"                               │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Raw SQL errors are logged, never sent to the frontend.

use serde::Serialize;
use shopdesk_core::CoreError;
use shopdesk_db::DbError;

/// API error returned from Tauri commands.
///
/// ```json
/// { "code": "VALIDATION_ERROR", "message": "price must not be negative" }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product or shop does not exist
    NotFound,

    /// Input rejected before or by the database
    ValidationError,

    /// Database operation failed
    DatabaseError,

    /// Anything else
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{resource} not found: {id}"))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ApiError::not_found(&entity, id),
            DbError::UniqueViolation { field, value } => {
                ApiError::validation(format!("{field} '{value}' already exists"))
            }
            DbError::ForeignKeyViolation { message } => {
                tracing::warn!("Foreign key violation: {}", message);
                ApiError::validation("Record is still referenced by orders")
            }
            DbError::CheckViolation { message } => {
                tracing::warn!("Check constraint violation: {}", message);
                ApiError::validation("Value rejected by the database")
            }
            DbError::ConnectionFailed(_) => {
                ApiError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(_) => {
                ApiError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed(e) => {
                tracing::error!("Database query failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::TransactionFailed(e) => {
                tracing::error!("Transaction failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database transaction failed")
            }
            DbError::PoolExhausted => {
                ApiError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", id),
            CoreError::ShopNotFound(id) => ApiError::not_found("Shop", id),
            CoreError::UnknownPage(_) | CoreError::UnknownOrderStatus(_) => {
                ApiError::validation(err.to_string())
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use shopdesk_core::ValidationError;

    #[test]
    fn test_serializes_code_and_message() {
        let json = serde_json::to_value(ApiError::not_found("Product", 42)).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Product not found: 42");
    }

    #[test]
    fn test_db_errors_map_to_codes() {
        let cases = [
            (DbError::not_found("Product", 7), ErrorCode::NotFound),
            (DbError::duplicate("shops.name", "Main Shop"), ErrorCode::ValidationError),
            (
                DbError::ForeignKeyViolation {
                    message: "FOREIGN KEY constraint failed".into(),
                },
                ErrorCode::ValidationError,
            ),
            (
                DbError::CheckViolation {
                    message: "CHECK constraint failed: stock >= 0".into(),
                },
                ErrorCode::ValidationError,
            ),
            (DbError::QueryFailed("syntax".into()), ErrorCode::DatabaseError),
            (DbError::PoolExhausted, ErrorCode::DatabaseError),
        ];

        for (db_err, code) in cases {
            assert_eq!(ApiError::from(db_err).code, code);
        }
    }

    #[test]
    fn test_sql_text_is_not_exposed() {
        let err = ApiError::from(DbError::QueryFailed("no such table: products".into()));
        assert!(!err.message.contains("products"));
    }

    #[test]
    fn test_core_errors_map_to_codes() {
        let err = ApiError::from(CoreError::Validation(ValidationError::Negative {
            field: "price".into(),
        }));
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "price must not be negative");

        assert_eq!(ApiError::from(CoreError::ShopNotFound(3)).code, ErrorCode::NotFound);
        assert_eq!(
            ApiError::from(CoreError::UnknownPage("dashboard".into())).code,
            ErrorCode::ValidationError
        );
    }
}
