//! Open document tabs.

use super::Language;

/// Everything needed to open (or re-activate) a tab.
///
/// Built by the file tree from a leaf; the tab registry turns it into a [`Tab`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabDescriptor {
    /// Identity key. Equals the content id (PDF documents use `doc:<name>`).
    pub id: String,
    pub label: String,
    pub language: Language,
    pub content_id: String,
    pub url: Option<String>,
}

/// One open document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tab {
    pub id: String,
    pub label: String,
    pub language: Language,
    pub content_id: String,
    pub url: Option<String>,
}

impl From<TabDescriptor> for Tab {
    fn from(desc: TabDescriptor) -> Self {
        Self {
            id: desc.id,
            label: desc.label,
            language: desc.language,
            content_id: desc.content_id,
            url: desc.url,
        }
    }
}

/// Result of closing a tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CloseOutcome {
    /// No tab with that id was open.
    Missing,
    /// An inactive tab was removed; the active tab is unchanged.
    Closed,
    /// The active tab was removed and this tab became active.
    Activated(String),
    /// The last tab was removed; nothing is active.
    Emptied,
}

/// Tabs playing their close animation.
///
/// A pending close only goes through if its id is still here when the timer
/// fires; reopening the tab in the meantime takes it back out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClosingTabs {
    ids: Vec<String>,
}

impl ClosingTabs {
    /// Mark `id` as closing. Returns `false` if it already was.
    pub fn begin(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id.to_string());
        true
    }

    /// Drop `id`. Returns whether it was closing.
    pub fn cancel(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|t| t != id);
        self.ids.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|t| t == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closing_begin_once() {
        let mut closing = ClosingTabs::default();
        assert!(closing.begin("about"));
        assert!(!closing.begin("about"));
        assert!(closing.contains("about"));
    }

    #[test]
    fn test_closing_cancel_reports_pending() {
        let mut closing = ClosingTabs::default();
        closing.begin("about");
        closing.begin("contact");

        // A reopen cancels, so the timer that fires later finds nothing.
        assert!(closing.cancel("about"));
        assert!(!closing.cancel("about"));
        assert!(!closing.contains("about"));
        assert!(closing.contains("contact"));
    }
}
