//! # Shopdesk Desktop Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopdesk Desktop                                 │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Tauri WebView (dist/)                       │  │
//! │  │  ┌──────────┐ ┌────────────────────────────────────────────────┐ │  │
//! │  │  │ Sidebar  │ │ Top bar                                        │ │  │
//! │  │  │          │ ├────────────────────────────────────────────────┤ │  │
//! │  │  │ Products │ │ Product Management | High Revenue Shops Report │ │  │
//! │  │  │ Revenue  │ │                                                │ │  │
//! │  │  └──────────┘ └────────────────────────────────────────────────┘ │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                          invoke('command')                              │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  lib.rs ─────► logging, config, database, state, commands        │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │                   shopdesk.db (SQLite, WAL mode)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

// Prevents an additional console window on Windows in release
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

fn main() {
    shopdesk_desktop_lib::run();
}
