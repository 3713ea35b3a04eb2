use crate::models::{CloseOutcome, Tab, TabDescriptor};

/// Ordered set of open tabs plus the active selection.
///
/// Tabs are keyed by id and kept in open order; re-activating a tab never
/// moves it. At most one tab is active.
///
/// # Invariant
///
/// `active` is either `None` or the id of a tab in `tabs`.
#[derive(Clone, Debug, Default)]
pub struct TabRegistry {
    tabs: Vec<Tab>,
    active: Option<String>,
}

impl TabRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a tab and make it active.
    ///
    /// If a tab with the same id is already open it is re-activated in place.
    /// Returns `true` when a new tab was created.
    pub fn open_tab(&mut self, descriptor: TabDescriptor) -> bool {
        let id = descriptor.id.clone();
        let created = if self.contains(&id) {
            false
        } else {
            self.tabs.push(Tab::from(descriptor));
            true
        };
        self.active = Some(id);
        created
    }

    /// Make an open tab active. Unknown ids are ignored (returns `false`).
    pub fn switch_tab(&mut self, id: &str) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.active = Some(id.to_string());
        true
    }

    /// Close a tab whether or not it is active.
    ///
    /// Closing the active tab activates the last tab in open order, or leaves
    /// nothing active when the registry is empty.
    pub fn close_tab(&mut self, id: &str) -> CloseOutcome {
        let Some(index) = self.tabs.iter().position(|t| t.id == id) else {
            return CloseOutcome::Missing;
        };
        self.tabs.remove(index);

        if self.active.as_deref() != Some(id) {
            return CloseOutcome::Closed;
        }

        match self.tabs.last() {
            Some(last) => {
                let next = last.id.clone();
                self.active = Some(next.clone());
                CloseOutcome::Activated(next)
            }
            None => {
                self.active = None;
                CloseOutcome::Emptied
            }
        }
    }

    /// Close every tab.
    pub fn close_all_tabs(&mut self) {
        self.tabs.clear();
        self.active = None;
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn get(&self, id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.active_id().and_then(|id| self.get(id))
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == Some(id)
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Language;

    fn desc(id: &str) -> TabDescriptor {
        TabDescriptor {
            id: id.to_string(),
            label: format!("{}.md", id),
            language: Language::Markdown,
            content_id: id.to_string(),
            url: None,
        }
    }

    fn ids(reg: &TabRegistry) -> Vec<&str> {
        reg.tabs().iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_open_activates() {
        let mut reg = TabRegistry::new();
        assert!(reg.open_tab(desc("about")));
        assert_eq!(reg.active_id(), Some("about"));
        assert_eq!(reg.active_tab().unwrap().label, "about.md");
    }

    #[test]
    fn test_open_twice_keeps_one_tab() {
        let mut reg = TabRegistry::new();
        reg.open_tab(desc("about"));
        let single = reg.len();
        assert!(!reg.open_tab(desc("about")));
        assert_eq!(reg.len(), single);
    }

    #[test]
    fn test_reopen_does_not_reorder() {
        let mut reg = TabRegistry::new();
        reg.open_tab(desc("a"));
        reg.open_tab(desc("b"));
        reg.open_tab(desc("c"));
        reg.open_tab(desc("a"));
        assert_eq!(ids(&reg), vec!["a", "b", "c"]);
        assert_eq!(reg.active_id(), Some("a"));
    }

    #[test]
    fn test_switch_unknown_is_noop() {
        let mut reg = TabRegistry::new();
        reg.open_tab(desc("a"));
        assert!(!reg.switch_tab("zzz"));
        assert_eq!(reg.active_id(), Some("a"));
    }

    #[test]
    fn test_switch() {
        let mut reg = TabRegistry::new();
        reg.open_tab(desc("a"));
        reg.open_tab(desc("b"));
        assert!(reg.switch_tab("a"));
        assert!(reg.is_active("a"));
        assert!(!reg.is_active("b"));
    }

    #[test]
    fn test_close_only_tab_empties() {
        let mut reg = TabRegistry::new();
        reg.open_tab(desc("a"));
        assert_eq!(reg.close_tab("a"), CloseOutcome::Emptied);
        assert!(reg.is_empty());
        assert_eq!(reg.active_id(), None);
    }

    #[test]
    fn test_close_inactive_keeps_active() {
        let mut reg = TabRegistry::new();
        reg.open_tab(desc("a"));
        reg.open_tab(desc("b"));
        reg.open_tab(desc("c"));
        reg.switch_tab("b");

        assert_eq!(reg.close_tab("c"), CloseOutcome::Closed);
        assert_eq!(reg.active_id(), Some("b"));
        assert_eq!(reg.close_tab("a"), CloseOutcome::Closed);
        assert_eq!(reg.active_id(), Some("b"));
    }

    #[test]
    fn test_close_active_activates_last_remaining() {
        let mut reg = TabRegistry::new();
        reg.open_tab(desc("a"));
        reg.open_tab(desc("b"));
        reg.open_tab(desc("c"));
        reg.switch_tab("a");

        assert_eq!(reg.close_tab("a"), CloseOutcome::Activated("c".into()));
        assert_eq!(reg.active_id(), Some("c"));
        assert_eq!(ids(&reg), vec!["b", "c"]);
    }

    #[test]
    fn test_close_missing() {
        let mut reg = TabRegistry::new();
        reg.open_tab(desc("a"));
        assert_eq!(reg.close_tab("b"), CloseOutcome::Missing);
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.active_id(), Some("a"));
    }

    #[test]
    fn test_close_twice_is_noop() {
        let mut reg = TabRegistry::new();
        reg.open_tab(desc("a"));
        reg.open_tab(desc("b"));
        reg.close_tab("b");
        assert_eq!(reg.close_tab("b"), CloseOutcome::Missing);
        assert_eq!(reg.active_id(), Some("a"));
    }

    #[test]
    fn test_close_all() {
        let mut reg = TabRegistry::new();
        reg.open_tab(desc("a"));
        reg.open_tab(desc("b"));
        reg.close_all_tabs();
        assert!(reg.is_empty());
        assert!(reg.active_tab().is_none());
    }

    #[test]
    fn test_active_always_registered() {
        let mut reg = TabRegistry::new();
        let ops: &[(&str, &str)] = &[
            ("open", "a"),
            ("open", "b"),
            ("close", "b"),
            ("switch", "b"),
            ("open", "c"),
            ("close", "a"),
            ("close", "c"),
            ("open", "d"),
        ];
        for (op, id) in ops {
            match *op {
                "open" => {
                    reg.open_tab(desc(id));
                }
                "switch" => {
                    reg.switch_tab(id);
                }
                _ => {
                    reg.close_tab(id);
                }
            }
            if let Some(active) = reg.active_id() {
                assert!(reg.contains(active), "active {active} not registered");
            }
        }
        assert_eq!(reg.active_id(), Some("d"));
    }
}
