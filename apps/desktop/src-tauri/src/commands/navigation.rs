//! # Navigation Commands
//!
//! The sidebar, top bar and main area are all derived from one value:
//! the shell's current page.
//!
//! ```text
//!  click "Revenue Report"
//!        │
//!        ▼
//!  invoke('navigate', { page: 'revenue-report' })
//!        │
//!        ▼
//!  NavigationState.with_shell_mut(navigate) ──► ShellView
//!        │                                         │
//!        ▼                                         ▼
//!  emit "shell://navigated"                 returned to caller
//! ```

use tauri::{AppHandle, Emitter, State};
use tracing::{debug, info, warn};

use crate::state::NavigationState;
use shopdesk_core::{Page, ShellView};

/// Event emitted after every navigation, carrying the new [`ShellView`].
pub const NAVIGATED_EVENT: &str = "shell://navigated";

// =============================================================================
// Handlers
// =============================================================================

pub(crate) fn current(nav: &NavigationState) -> ShellView {
    nav.with_shell(|shell| shell.render())
}

/// Moves the shell to `page` and hands the new view to `notify` once the
/// lock is released.
pub(crate) fn go_to<F>(nav: &NavigationState, page: Page, notify: F) -> ShellView
where
    F: FnOnce(&ShellView),
{
    let (from, view) = nav.with_shell_mut(|shell| {
        let from = shell.current_page();
        (from, shell.navigate(page))
    });

    info!(%from, to = %page, "Navigated");
    notify(&view);
    view
}

// =============================================================================
// Commands
// =============================================================================

/// Renders the shell for the current page.
#[tauri::command]
pub fn get_shell(nav: State<'_, NavigationState>) -> ShellView {
    debug!("get_shell command");
    current(&nav)
}

/// Makes `page` the current page and emits [`NAVIGATED_EVENT`].
///
/// Selecting the page that is already current re-renders the same view.
/// Unknown page names never reach this function: they fail to deserialize
/// into [`Page`] with `Unknown page: <name>`.
#[tauri::command]
pub fn navigate(app: AppHandle, nav: State<'_, NavigationState>, page: Page) -> ShellView {
    go_to(&nav, page, |view| {
        if let Err(e) = app.emit(NAVIGATED_EVENT, view) {
            warn!("Failed to emit {}: {}", NAVIGATED_EVENT, e);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopdesk_core::{MainView, Shell};

    /// Runs `go_to` and returns the view plus every payload passed to `notify`.
    fn go_to_recording(nav: &NavigationState, page: Page) -> (ShellView, Vec<ShellView>) {
        let mut sent = Vec::new();
        let view = go_to(nav, page, |v| sent.push(v.clone()));
        (view, sent)
    }

    #[test]
    fn test_current_starts_on_products() {
        let nav = NavigationState::new();
        let view = current(&nav);

        assert!(view.is_mounted(MainView::ProductManagement));
        assert_eq!(view.top_bar.title, "Product Management");
    }

    #[test]
    fn test_go_to_notifies_with_new_view() {
        let nav = NavigationState::new();
        let (view, sent) = go_to_recording(&nav, Page::RevenueReport);

        assert!(view.is_mounted(MainView::RevenueReport));
        assert_eq!(sent, vec![view.clone()]);
        assert_eq!(current(&nav), view);

        let payload = serde_json::to_value(&sent[0]).unwrap();
        assert_eq!(payload["topBar"]["currentPage"], "revenue-report");
        assert_eq!(payload["main"], "RevenueReport");
    }

    #[test]
    fn test_go_to_current_page_still_notifies() {
        let nav = NavigationState::new();
        let (view, sent) = go_to_recording(&nav, Page::Products);

        assert_eq!(sent.len(), 1);
        assert_eq!(view, Shell::new().render());
    }

    #[test]
    fn test_go_back_restores_initial_view() {
        let nav = NavigationState::new();
        let initial = current(&nav);

        go_to_recording(&nav, Page::RevenueReport);
        let (back, sent) = go_to_recording(&nav, Page::Products);

        assert_eq!(back, initial);
        assert_eq!(sent, vec![initial]);
    }

    #[test]
    fn test_notify_can_read_state() {
        // notify runs after the lock is released, so it may read the shell
        let nav = NavigationState::new();
        let mut seen = None;
        go_to(&nav, Page::RevenueReport, |_| seen = Some(current(&nav)));

        assert_eq!(seen, Some(current(&nav)));
    }
}
