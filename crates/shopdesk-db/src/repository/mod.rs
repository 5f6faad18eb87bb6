//! # Repository Module
//!
//! Database repository implementations for Shopdesk.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Tauri Command                                                         │
//! │       │                                                                 │
//! │       │  db.products().search("mug", 500_000)                           │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── list / get_by_id / search                                         │
//! │  ├── insert / update                                                   │
//! │  └── delete                                                            │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD and search
//! - [`ShopRepository`](shop::ShopRepository) - Shops
//! - [`OrderRepository`](order::OrderRepository) - Orders and their lines
//! - [`ReportRepository`](report::ReportRepository) - Revenue aggregation

pub mod order;
pub mod product;
pub mod report;
pub mod shop;
