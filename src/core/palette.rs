use crate::models::FlatFile;

/// Quick-open command palette state.
///
/// Results are recomputed on every keystroke from the flattened tree. The
/// filter is a case-insensitive substring match on the file *name* only, in
/// tree order, with the first result pre-selected.
#[derive(Clone, Debug, Default)]
pub struct CommandPalette {
    open: bool,
    query: String,
    results: Vec<FlatFile>,
    selected: usize,
}

impl CommandPalette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Show the palette, keeping any previous query and its results.
    pub fn open(&mut self, files: &[FlatFile]) {
        self.open = true;
        let query = std::mem::take(&mut self.query);
        self.set_query(&query, files);
    }

    /// Hide the palette and reset the query.
    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
        self.results.clear();
        self.selected = 0;
    }

    /// Open if closed, close if open. Returns the new open state.
    pub fn toggle(&mut self, files: &[FlatFile]) -> bool {
        if self.open {
            self.close();
        } else {
            self.open(files);
        }
        self.open
    }

    /// Replace the query and refilter.
    pub fn set_query(&mut self, query: &str, files: &[FlatFile]) {
        self.query = query.to_string();
        self.results = filter_files(query, files);
        self.selected = 0;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[FlatFile] {
        &self.results
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&FlatFile> {
        self.results.get(self.selected)
    }

    /// Move the selection by `delta`, wrapping at both ends.
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.results.len();
        if len == 0 {
            return;
        }
        let len = len as isize;
        self.selected = (self.selected as isize + delta).rem_euclid(len) as usize;
    }

    /// Take the result at `index` and close the palette.
    pub fn commit(&mut self, index: usize) -> Option<FlatFile> {
        let file = self.results.get(index).cloned()?;
        self.close();
        Some(file)
    }

    /// Take the selected result and close the palette.
    pub fn commit_selected(&mut self) -> Option<FlatFile> {
        self.commit(self.selected)
    }
}

/// Files whose name contains `query`, ignoring case. Empty query matches nothing.
pub fn filter_files(query: &str, files: &[FlatFile]) -> Vec<FlatFile> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    files
        .iter()
        .filter(|f| f.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FileTree;
    use crate::models::{DocumentEntry, DocumentManifest, FileNode, Language};

    fn file(path: &str) -> FlatFile {
        let name = path.rsplit('/').next().unwrap_or(path);
        FlatFile {
            name: name.to_string(),
            path: path.to_string(),
            content_id: name.to_string(),
            language: Language::from_label(name.rsplit('.').next().unwrap_or("")),
            url: None,
        }
    }

    fn files() -> Vec<FlatFile> {
        vec![
            file("about.md"),
            file("documents/cv.pdf"),
            file("projects/web-server.go"),
            file("skills/backend.rs"),
            file("experience.md"),
            file("contacts.go"),
        ]
    }

    fn names(results: &[FlatFile]) -> Vec<&str> {
        results.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_filter_by_name_in_order() {
        let results = filter_files("GO", &files());
        assert_eq!(names(&results), vec!["web-server.go", "contacts.go"]);
    }

    #[test]
    fn test_filter_ignores_folder_path() {
        // "projects" only appears in the folder part of the path
        assert!(filter_files("projects", &files()).is_empty());
    }

    #[test]
    fn test_filter_empty_query() {
        assert!(filter_files("", &files()).is_empty());
    }

    #[test]
    fn test_filter_matches_exact_set() {
        let all = files();
        for q in ["a", "e", ".md", "x", "zzz"] {
            let expected: Vec<_> = all
                .iter()
                .filter(|f| f.name.to_lowercase().contains(&q.to_lowercase()))
                .cloned()
                .collect();
            assert_eq!(filter_files(q, &all), expected, "query {q}");
        }
    }

    /// Leaf names of `nodes` in pre-order, walked independently of `flatten`.
    fn preorder_names(nodes: &[FileNode], out: &mut Vec<String>) {
        for node in nodes {
            match node {
                FileNode::File(leaf) => out.push(leaf.name.clone()),
                FileNode::Folder(folder) => preorder_names(&folder.children, out),
            }
        }
    }

    #[test]
    fn test_filter_over_portfolio_tree() {
        let manifest = DocumentManifest {
            documents: vec![DocumentEntry {
                name: "cv.pdf".to_string(),
                url: None,
            }],
        };
        let tree = FileTree::portfolio(&manifest);
        let mut leaves = Vec::new();
        preorder_names(tree.roots(), &mut leaves);

        for q in ["o", "GO", ".md", "pdf", "S", "-", "zzz"] {
            let expected: Vec<_> = leaves
                .iter()
                .filter(|name| name.to_lowercase().contains(&q.to_lowercase()))
                .map(String::as_str)
                .collect();
            let results = filter_files(q, &tree.flatten());
            assert_eq!(names(&results), expected, "query {q}");
        }
    }

    #[test]
    fn test_first_result_preselected() {
        let mut p = CommandPalette::new();
        p.open(&files());
        p.set_query("md", &files());
        assert_eq!(p.selected_index(), 0);
        assert_eq!(p.selected().unwrap().name, "about.md");
    }

    #[test]
    fn test_no_results() {
        let mut p = CommandPalette::new();
        p.open(&files());
        p.set_query("nothing-here", &files());
        assert!(p.results().is_empty());
        assert!(p.selected().is_none());
        assert!(p.commit_selected().is_none());
        assert!(p.is_open());
    }

    #[test]
    fn test_move_selection_wraps() {
        let mut p = CommandPalette::new();
        p.open(&files());
        p.set_query("md", &files());
        assert_eq!(p.results().len(), 2);

        p.move_selection(1);
        assert_eq!(p.selected().unwrap().name, "experience.md");
        p.move_selection(1);
        assert_eq!(p.selected().unwrap().name, "about.md");
        p.move_selection(-1);
        assert_eq!(p.selected().unwrap().name, "experience.md");
    }

    #[test]
    fn test_move_selection_without_results() {
        let mut p = CommandPalette::new();
        p.move_selection(3);
        assert_eq!(p.selected_index(), 0);
    }

    #[test]
    fn test_commit_closes() {
        let mut p = CommandPalette::new();
        p.open(&files());
        p.set_query("rs", &files());
        let picked = p.commit_selected().unwrap();
        assert_eq!(picked.path, "skills/backend.rs");
        assert!(!p.is_open());
        assert!(p.query().is_empty());
        assert!(p.results().is_empty());
    }

    #[test]
    fn test_commit_by_index() {
        let mut p = CommandPalette::new();
        p.open(&files());
        p.set_query("go", &files());
        assert_eq!(p.commit(1).unwrap().name, "contacts.go");
        assert!(p.commit(0).is_none());
    }

    #[test]
    fn test_toggle() {
        let mut p = CommandPalette::new();
        assert!(p.toggle(&files()));
        assert!(!p.toggle(&files()));
        assert!(!p.is_open());
    }

    #[test]
    fn test_reset_selection_on_new_query() {
        let mut p = CommandPalette::new();
        p.open(&files());
        p.set_query("o", &files());
        p.move_selection(2);
        p.set_query("go", &files());
        assert_eq!(p.selected_index(), 0);
    }
}
