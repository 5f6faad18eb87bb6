//! # Navigation Shell
//!
//! The root container of the admin screen. It owns one piece of state, the
//! current [`Page`], and renders the three regions of the window from it.
//!
//! ## Layout
//! ```text
//! ┌──────────────┬──────────────────────────────────────────────────────────┐
//! │              │  TopBar (reads current page)                             │
//! │   Sidebar    ├──────────────────────────────────────────────────────────┤
//! │              │                                                          │
//! │  ▸ Products  │  Main                                                    │
//! │    Revenue   │    products        ──► ProductManagement                 │
//! │              │    revenue-report  ──► RevenueReport                     │
//! │ (navigates)  │                                                          │
//! └──────────────┴──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! Only the sidebar changes the page, through [`Shell::navigate`] (or the
//! reducer form [`Shell::dispatch`]). The top bar and the main area get a
//! read-only copy inside [`ShellView`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

// =============================================================================
// Page
// =============================================================================

/// The page currently selected in the sidebar.
///
/// Wire names are `"products"` and `"revenue-report"`. Deserializing goes
/// through `FromStr`, so any other string fails with
/// [`CoreError::UnknownPage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Page {
    /// Product data entry and listing.
    #[default]
    Products,
    /// High revenue shops report.
    RevenueReport,
}

impl Page {
    /// Every page, in sidebar order.
    pub const ALL: [Page; 2] = [Page::Products, Page::RevenueReport];

    /// Wire name of the page.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Page::Products => "products",
            Page::RevenueReport => "revenue-report",
        }
    }

    /// Short label shown in the sidebar.
    pub const fn label(&self) -> &'static str {
        match self {
            Page::Products => "Products",
            Page::RevenueReport => "Revenue Report",
        }
    }

    /// Heading shown in the top bar.
    pub const fn title(&self) -> &'static str {
        match self {
            Page::Products => "Product Management",
            Page::RevenueReport => "High Revenue Shops Report",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "products" => Ok(Page::Products),
            "revenue-report" => Ok(Page::RevenueReport),
            other => Err(CoreError::UnknownPage(other.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Page {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Actions
// =============================================================================

/// Reducer actions accepted by [`Shell::dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum NavAction {
    SelectProducts,
    SelectRevenueReport,
}

impl NavAction {
    /// Page this action selects.
    pub const fn target(&self) -> Page {
        match self {
            NavAction::SelectProducts => Page::Products,
            NavAction::SelectRevenueReport => Page::RevenueReport,
        }
    }
}

impl From<Page> for NavAction {
    fn from(page: Page) -> Self {
        match page {
            Page::Products => NavAction::SelectProducts,
            Page::RevenueReport => NavAction::SelectRevenueReport,
        }
    }
}

// =============================================================================
// Rendered View
// =============================================================================

/// One entry in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SidebarItem {
    pub page: Page,
    pub label: String,
    pub active: bool,
}

/// What the sidebar receives: the current page and its entries.
///
/// The navigation callback itself is not data; in the desktop app it is the
/// `navigate` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SidebarView {
    pub current_page: Page,
    pub items: Vec<SidebarItem>,
}

/// What the top bar receives. Read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TopBarView {
    pub current_page: Page,
    pub title: String,
}

/// The single child view mounted in the main area.
///
/// Neither child receives props from the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum MainView {
    ProductManagement,
    RevenueReport,
}

impl From<Page> for MainView {
    fn from(page: Page) -> Self {
        match page {
            Page::Products => MainView::ProductManagement,
            Page::RevenueReport => MainView::RevenueReport,
        }
    }
}

/// Full render of the shell for one value of the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ShellView {
    pub sidebar: SidebarView,
    pub top_bar: TopBarView,
    pub main: MainView,
}

impl ShellView {
    /// Renders the shell for `page`.
    pub fn for_page(page: Page) -> Self {
        let items = Page::ALL
            .iter()
            .map(|&p| SidebarItem {
                page: p,
                label: p.label().to_string(),
                active: p == page,
            })
            .collect();

        ShellView {
            sidebar: SidebarView {
                current_page: page,
                items,
            },
            top_bar: TopBarView {
                current_page: page,
                title: page.title().to_string(),
            },
            main: MainView::from(page),
        }
    }

    /// Returns true if `view` is the mounted child.
    pub fn is_mounted(&self, view: MainView) -> bool {
        self.main == view
    }
}

// =============================================================================
// Shell
// =============================================================================

/// Root container holding the current page for the whole session.
///
/// ## Invariants
/// - Exactly one page is current at any time.
/// - A new shell always starts on [`Page::Products`].
/// - The page only changes through `navigate` / `dispatch`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shell {
    current_page: Page,
}

impl Shell {
    /// Creates a shell on the products page.
    pub fn new() -> Self {
        Shell::default()
    }

    /// The current page.
    pub fn current_page(&self) -> Page {
        self.current_page
    }

    /// Sets the current page and returns the re-rendered view.
    ///
    /// Navigating to the page that is already current is allowed and
    /// renders the same view again.
    pub fn navigate(&mut self, page: Page) -> ShellView {
        self.current_page = page;
        self.render()
    }

    /// Reducer form of [`Shell::navigate`].
    pub fn dispatch(&mut self, action: NavAction) -> ShellView {
        self.navigate(action.target())
    }

    /// Renders the shell for the current page.
    pub fn render(&self) -> ShellView {
        ShellView::for_page(self.current_page)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_render_shows_products() {
        let shell = Shell::new();
        let view = shell.render();

        assert_eq!(shell.current_page(), Page::Products);
        assert!(view.is_mounted(MainView::ProductManagement));
        assert!(!view.is_mounted(MainView::RevenueReport));
        assert_eq!(view.top_bar.current_page, Page::Products);
        assert_eq!(view.sidebar.current_page, Page::Products);
    }

    #[test]
    fn test_navigate_to_revenue_report() {
        let mut shell = Shell::new();
        let view = shell.navigate(Page::RevenueReport);

        assert_eq!(shell.current_page(), Page::RevenueReport);
        assert!(view.is_mounted(MainView::RevenueReport));
        assert!(!view.is_mounted(MainView::ProductManagement));
        assert_eq!(view.top_bar.current_page, Page::RevenueReport);
        assert_eq!(view.top_bar.title, "High Revenue Shops Report");
    }

    #[test]
    fn test_round_trip_returns_to_initial_render() {
        let initial = Shell::new().render();

        let mut shell = Shell::new();
        shell.navigate(Page::RevenueReport);
        let back = shell.navigate(Page::Products);

        assert_eq!(back, initial);
        assert_eq!(shell, Shell::new());
    }

    #[test]
    fn test_navigate_to_current_page_is_stable() {
        let mut shell = Shell::new();
        let first = shell.navigate(Page::Products);
        let second = shell.navigate(Page::Products);
        assert_eq!(first, second);
    }

    #[test]
    fn test_dispatch_matches_navigate() {
        for page in Page::ALL {
            let mut by_setter = Shell::new();
            let mut by_reducer = Shell::new();
            assert_eq!(
                by_setter.navigate(page),
                by_reducer.dispatch(NavAction::from(page))
            );
        }
    }

    #[test]
    fn test_sidebar_marks_exactly_one_active() {
        for page in Page::ALL {
            let view = ShellView::for_page(page);
            let active: Vec<_> = view.sidebar.items.iter().filter(|i| i.active).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].page, page);
        }
    }

    #[test]
    fn test_page_parse() {
        assert_eq!("products".parse::<Page>().unwrap(), Page::Products);
        assert_eq!("revenue-report".parse::<Page>().unwrap(), Page::RevenueReport);

        let err = "settings".parse::<Page>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownPage(ref p) if p == "settings"));
    }

    #[test]
    fn test_page_serde_rejects_third_value() {
        assert_eq!(
            serde_json::to_string(&Page::RevenueReport).unwrap(),
            "\"revenue-report\""
        );
        assert_eq!(
            serde_json::from_str::<Page>("\"products\"").unwrap(),
            Page::Products
        );

        let err = serde_json::from_str::<Page>("\"dashboard\"").unwrap_err();
        assert!(
            err.to_string().starts_with("Unknown page: dashboard"),
            "unexpected error: {err}"
        );

        let err = serde_json::from_str::<Page>("\"Products\"").unwrap_err();
        assert!(err.to_string().starts_with("Unknown page: Products"));
    }

    #[test]
    fn test_page_inside_view_rejects_unknown_name() {
        let mut json = serde_json::to_value(Shell::new().render()).unwrap();
        json["topBar"]["currentPage"] = "settings".into();

        let err = serde_json::from_value::<ShellView>(json).unwrap_err();
        assert!(err.to_string().contains("Unknown page: settings"));
    }

    #[test]
    fn test_shell_view_json_shape() {
        let json = serde_json::to_value(Shell::new().render()).unwrap();
        assert_eq!(json["topBar"]["currentPage"], "products");
        assert_eq!(json["sidebar"]["items"][1]["page"], "revenue-report");
        assert_eq!(json["main"], "ProductManagement");
    }
}
