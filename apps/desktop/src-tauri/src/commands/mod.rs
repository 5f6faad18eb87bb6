//! # Tauri Commands Module
//!
//! All commands exposed to the frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports)
//! ├── navigation.rs  ◄─── get_shell, navigate
//! ├── product.rs     ◄─── Product list, search, CRUD
//! ├── report.rs      ◄─── High revenue shops report
//! └── config.rs      ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                                   │
//! │                                                                         │
//! │  Frontend                                                               │
//! │  ────────                                                               │
//! │  const { invoke } = window.__TAURI__.core;                              │
//! │                                                                         │
//! │  const products = await invoke('search_products', {                     │
//! │    keyword: 'mug',                                                      │
//! │    maxPrice: 200000                                                     │
//! │  });                                                                    │
//! │         │                                                               │
//! │         │ (IPC via WebView, camelCase args → snake_case params)         │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  #[tauri::command]                                                      │
//! │  async fn search_products(                                              │
//! │      db: State<'_, DbState>,      ◄── Injected by Tauri                 │
//! │      config: State<'_, ConfigState>,                                    │
//! │      keyword: Option<String>,     ◄── From invoke params                │
//! │      max_price: Option<i64>,                                            │
//! │  ) -> Result<Vec<ProductDto>, ApiError>                                 │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives: ProductDto[]                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command declares only the state it needs.

pub mod config;
pub mod navigation;
pub mod product;
pub mod report;
