//! # shopdesk-core: Pure Logic for Shopdesk
//!
//! This crate is the **heart** of Shopdesk. It holds the navigation shell,
//! the domain types shared by the database layer and the desktop app, and
//! input validation. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopdesk Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (WebView)                           │   │
//! │  │    Sidebar ──► TopBar ──► ProductManagement | RevenueReport     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Tauri Commands                               │   │
//! │  │    navigate, list_products, get_high_revenue_report, etc.      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ shopdesk-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ navigation │  │   types   │  │   error   │  │ validation│  │   │
//! │  │   │   Shell    │  │  Product  │  │ CoreError │  │   rules   │  │   │
//! │  │   │   Page     │  │ShopRevenue│  │           │  │  checks   │  │   │
//! │  │   └────────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  shopdesk-db (Database Layer)                   │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`navigation`] - The app shell: current page, sidebar, top bar, main area
//! - [`types`] - Domain types (Product, Shop, Order, ShopRevenue)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use shopdesk_core::navigation::{MainView, Page, Shell};
//!
//! let mut shell = Shell::new();
//! assert_eq!(shell.current_page(), Page::Products);
//!
//! let view = shell.navigate(Page::RevenueReport);
//! assert_eq!(view.main, MainView::RevenueReport);
//! assert_eq!(view.top_bar.current_page, Page::RevenueReport);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod navigation;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use navigation::{MainView, NavAction, Page, Shell, ShellView};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Shop that newly created products are attached to.
///
/// The admin screen manages a single shop; multi-shop product entry is not
/// exposed in the UI.
pub const DEFAULT_SHOP_ID: i64 = 1;

/// Year the revenue report uses when the caller does not pass one.
pub const DEFAULT_REPORT_YEAR: i32 = 2025;

/// Upper price bound used by product search when none is given.
pub const DEFAULT_SEARCH_MAX_PRICE: i64 = 2_000_000_000;

/// Maximum length of a product name.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Maximum length of a product description.
pub const MAX_DESCRIPTION_LEN: usize = 2000;

/// Maximum length of a search keyword.
pub const MAX_KEYWORD_LEN: usize = 100;
