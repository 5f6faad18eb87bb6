//! # State Module
//!
//! Manages application state for the Tauri desktop app.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything, each
//! concern gets its own state type so commands declare exactly what they
//! touch, and navigation never waits on a database call.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Tauri Runtime                              │   │
//! │  │  app.manage(db_state);                                          │   │
//! │  │  app.manage(navigation_state);                                  │   │
//! │  │  app.manage(config_state);                                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌─────────────────┐  ┌──────────────────┐           │
//! │  │   DbState    │  │ NavigationState │  │   ConfigState    │           │
//! │  │              │  │                 │  │                  │           │
//! │  │  Database    │  │  Arc<Mutex<     │  │  store_name      │           │
//! │  │  (SQLite     │  │    Shell        │  │  currency        │           │
//! │  │   pool)      │  │  >>             │  │  defaults        │           │
//! │  └──────────────┘  └─────────────────┘  └──────────────────┘           │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • DbState: Database has internal connection pool (thread-safe)        │
//! │  • NavigationState: Protected by Arc<Mutex<T>>                         │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod db;
mod navigation;

pub use config::{ConfigError, ConfigState};
pub use db::DbState;
pub use navigation::NavigationState;
