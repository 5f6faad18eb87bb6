//! # Navigation State
//!
//! Holds the one [`Shell`] of the running app.
//!
//! ## Thread Safety
//! The shell is wrapped in `Arc<Mutex<T>>` because Tauri commands can run
//! concurrently and two fast sidebar clicks must apply one after the other.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Navigation State Operations                          │
//! │                                                                         │
//! │  Frontend Action          Tauri Command           Shell Change          │
//! │  ───────────────          ─────────────           ────────────          │
//! │                                                                         │
//! │  Window opens ───────────► get_shell() ─────────► (read only)          │
//! │                                                                         │
//! │  Click sidebar item ─────► navigate(page) ──────► current_page = page  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use shopdesk_core::Shell;

/// Thread-safe wrapper around the shell.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    shell: Arc<Mutex<Shell>>,
}

impl NavigationState {
    /// Creates the state with the shell on its initial page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the shell.
    pub fn with_shell<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Shell) -> R,
    {
        f(&self.lock())
    }

    /// Executes a function with write access to the shell.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let view = nav.with_shell_mut(|shell| shell.navigate(Page::RevenueReport));
    /// ```
    pub fn with_shell_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Shell) -> R,
    {
        f(&mut self.lock())
    }

    // A panic inside a closure cannot leave `Shell` half-updated (it is a
    // single Copy field), so a poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, Shell> {
        self.shell.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
