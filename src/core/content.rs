//! Content store: base content id to pre-rendered markup.

use std::collections::HashMap;

use crate::config::content;
use crate::utils::markdown_to_html;

/// Read-only lookup of displayable markup.
///
/// Keys are *base* ids: the part of a content id before the first `/`.
pub trait ContentStore {
    fn get(&self, base_id: &str) -> Option<&str>;
}

/// The five documents compiled into the binary.
///
/// `about` and `experience` are authored in Markdown and rendered once here;
/// the others are stored as HTML.
pub struct BuiltinContent {
    entries: HashMap<&'static str, String>,
}

impl BuiltinContent {
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        entries.insert("about", markdown_section(content::ABOUT));
        entries.insert("projects", content::PROJECTS.to_string());
        entries.insert("skills", content::SKILLS.to_string());
        entries.insert("experience", markdown_section(content::EXPERIENCE));
        entries.insert("contact", content::CONTACT.to_string());
        Self { entries }
    }

    /// Known base ids, sorted.
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.entries.keys().copied().collect();
        keys.sort_unstable();
        keys
    }
}

/// Render Markdown into the same section wrapper the HTML documents use.
fn markdown_section(source: &str) -> String {
    format!(
        r#"<div class="content-section">{}</div>"#,
        markdown_to_html(source)
    )
}

impl Default for BuiltinContent {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentStore for BuiltinContent {
    fn get(&self, base_id: &str) -> Option<&str> {
        self.entries.get(base_id).map(String::as_str)
    }
}

/// In-memory store, handy for tests and previews.
impl ContentStore for HashMap<String, String> {
    fn get(&self, base_id: &str) -> Option<&str> {
        HashMap::get(self, base_id).map(String::as_str)
    }
}

/// Segment of a content id used for store lookup.
///
/// `"projects/web-server.go"` resolves as `"projects"`.
pub fn base_id(content_id: &str) -> &str {
    content_id.split('/').next().unwrap_or(content_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_id() {
        assert_eq!(base_id("about"), "about");
        assert_eq!(base_id("projects/web-server.go"), "projects");
        assert_eq!(base_id("skills/backend.rs"), "skills");
        assert_eq!(base_id(""), "");
        assert_eq!(base_id("/leading"), "");
    }

    #[test]
    fn test_builtin_keys() {
        let store = BuiltinContent::new();
        assert_eq!(
            store.keys(),
            vec!["about", "contact", "experience", "projects", "skills"]
        );
    }

    #[test]
    fn test_builtin_markdown_is_rendered() {
        let store = BuiltinContent::new();
        let about = store.get("about").expect("about should exist");
        assert!(about.contains("<h1>"));
        assert!(!about.trim_start().starts_with('#'));
    }

    #[test]
    fn test_unknown_key() {
        let store = BuiltinContent::new();
        assert!(store.get("nonexistent").is_none());
        assert!(store.get("doc:cv.pdf").is_none());
    }
}
