//! # Shopdesk Desktop Library
//!
//! Configures and runs the Tauri app: a sidebar, a top bar and one of two
//! main views (Product Management, High Revenue Shops Report).
//!
//! ## Module Organization
//! ```text
//! shopdesk_desktop_lib/
//! ├── lib.rs             ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs         ◄─── State type exports
//! │   ├── db.rs          ◄─── Database state wrapper
//! │   ├── navigation.rs  ◄─── Shell behind a Mutex
//! │   └── config.rs      ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs         ◄─── Command exports
//! │   ├── navigation.rs  ◄─── get_shell / navigate
//! │   ├── product.rs     ◄─── Product list/search/CRUD
//! │   ├── report.rs      ◄─── High revenue shops
//! │   └── config.rs      ◄─── get_config
//! └── error.rs           ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use directories::ProjectDirs;
use std::path::PathBuf;
use tauri::Manager;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use shopdesk_db::{Database, DbConfig};
use state::{ConfigState, DbState, NavigationState};

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ──── tracing-subscriber, RUST_LOG override       │
/// │                                                                         │
/// │  2. Load Config ─────────── defaults → config.toml → SHOPDESK_*         │
/// │                                                                         │
/// │  3. Determine Database Path  SHOPDESK_DB_PATH or the app data dir       │
/// │                                                                         │
/// │  4. Connect to Database ─── SQLite (WAL), run pending migrations        │
/// │                                                                         │
/// │  5. Manage State ────────── DbState, NavigationState, ConfigState       │
/// │                                                                         │
/// │  6. Register Commands & Launch Window (shell opens on Products)         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    init_tracing();

    info!("Starting Shopdesk Desktop Application");

    let result = tauri::Builder::default()
        .setup(|app| {
            let config = ConfigState::load_or_default(None);
            info!(store = %config.store_name, "Configuration loaded");

            let db_path = get_database_path()?;
            info!(?db_path, "Database path determined");

            let db = tauri::async_runtime::block_on(Database::new(DbConfig::new(db_path)))?;
            info!("Database connected and migrations applied");

            if let Some(window) = app.get_webview_window("main") {
                window.set_title(&config.store_name)?;
            }

            app.manage(DbState::new(db));
            app.manage(NavigationState::new());
            app.manage(config);

            info!("State initialized");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Shell
            commands::navigation::get_shell,
            commands::navigation::navigate,
            // Products
            commands::product::list_products,
            commands::product::search_products,
            commands::product::create_product,
            commands::product::update_product,
            commands::product::delete_product,
            // Reports
            commands::report::get_high_revenue_report,
            // Config
            commands::config::get_config,
        ])
        .run(tauri::generate_context!());

    if let Err(e) = result {
        error!("Error while running tauri application: {}", e);
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shopdesk=trace` - Show trace for shopdesk crates only
/// - Default: `info,shopdesk=debug,sqlx=warn`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shopdesk=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Determines the database file path based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.shopdesk.admin/shopdesk.db`
/// - **Windows**: `%APPDATA%\shopdesk\admin\data\shopdesk.db`
/// - **Linux**: `~/.local/share/admin/shopdesk.db`
///
/// ## Development Override
/// Set `SHOPDESK_DB_PATH` to use a custom path.
fn get_database_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Ok(path) = std::env::var("SHOPDESK_DB_PATH") {
        return Ok(PathBuf::from(path));
    }

    let proj_dirs = ProjectDirs::from("com", "shopdesk", "admin")
        .ok_or("Could not determine app data directory")?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("shopdesk.db"))
}
