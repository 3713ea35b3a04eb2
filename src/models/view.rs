//! Workbench view state for the UI chrome.

/// Sidebar view selected in the activity bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarView {
    /// File tree (default)
    #[default]
    Explorer,
    /// Search inside the open document
    Search,
}

impl SidebarView {
    pub fn title(self) -> &'static str {
        match self {
            SidebarView::Explorer => "EXPLORER",
            SidebarView::Search => "SEARCH",
        }
    }
}
