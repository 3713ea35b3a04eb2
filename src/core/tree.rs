use crate::config::{DOCUMENTS_BASE_URL, DOCUMENTS_FOLDER, DOCUMENT_ID_PREFIX};
use crate::core::error::ManifestError;
use crate::models::{
    DocumentEntry, DocumentManifest, FileLeaf, FileNode, FlatFile, Folder, Language,
    TabDescriptor,
};
use crate::utils::log;

/// Virtual file tree shown in the explorer.
///
/// Built once at startup and never rescanned. Only folder expansion and the
/// highlighted leaf change afterwards.
///
/// # Path Convention
///
/// Nodes are addressed by their names joined with `/`, from a root node:
/// - Root file: `"about.md"`
/// - Folder: `"projects"`
/// - Nested file: `"projects/web-server.go"`
///
/// Paths are for addressing only; content resolution goes through the
/// leaf's `content_id`.
#[derive(Clone, Debug, Default)]
pub struct FileTree {
    roots: Vec<FileNode>,
    /// Path of the leaf marked as active in the explorer
    highlighted: Option<String>,
}

impl FileTree {
    /// Create a tree from prebuilt root nodes.
    pub fn new(roots: Vec<FileNode>) -> Self {
        Self {
            roots,
            highlighted: None,
        }
    }

    /// Portfolio tree: the fixed manifest with the discovered documents folder.
    pub fn portfolio(documents: &DocumentManifest) -> Self {
        Self::new(vec![
            leaf("about.md", "about", "markdown"),
            discover_documents(documents),
            FileNode::folder(
                "projects",
                vec![leaf("web-server.go", "projects/web-server.go", "go")],
            ),
            FileNode::folder("skills", vec![leaf("backend.rs", "skills/backend.rs", "rust")]),
            leaf("experience.md", "experience", "markdown"),
            leaf("contacts.go", "contact", "go"),
        ])
    }

    pub fn roots(&self) -> &[FileNode] {
        &self.roots
    }

    /// Get a node by path.
    pub fn get_node(&self, path: &str) -> Option<&FileNode> {
        let mut parts = path.split('/').filter(|s| !s.is_empty());
        let first = parts.next()?;
        let mut current = self.roots.iter().find(|n| n.name() == first)?;

        for part in parts {
            match current {
                FileNode::Folder(folder) => {
                    current = folder.children.iter().find(|n| n.name() == part)?;
                }
                FileNode::File(_) => return None,
            }
        }

        Some(current)
    }

    fn get_folder_mut(&mut self, path: &str) -> Option<&mut Folder> {
        let mut parts = path.split('/').filter(|s| !s.is_empty());
        let first = parts.next()?;
        let mut current = self.roots.iter_mut().find(|n| n.name() == first)?;

        for part in parts {
            match current {
                FileNode::Folder(folder) => {
                    current = folder.children.iter_mut().find(|n| n.name() == part)?;
                }
                FileNode::File(_) => return None,
            }
        }

        match current {
            FileNode::Folder(folder) => Some(folder),
            FileNode::File(_) => None,
        }
    }

    /// Flip a folder between expanded and collapsed.
    ///
    /// Returns the new `expanded` state, or `None` if `path` is not a folder.
    pub fn toggle_folder(&mut self, path: &str) -> Option<bool> {
        let folder = self.get_folder_mut(path)?;
        folder.expanded = !folder.expanded;
        Some(folder.expanded)
    }

    /// Whether the folder at `path` is expanded.
    pub fn is_expanded(&self, path: &str) -> bool {
        matches!(self.get_node(path), Some(FileNode::Folder(f)) if f.expanded)
    }

    /// Resolve a leaf into the descriptor needed to open its tab.
    ///
    /// Does not touch the tab registry; the caller opens the tab. Tree clicks
    /// and palette commits both come through here.
    pub fn select_file(&self, path: &str) -> Option<TabDescriptor> {
        match self.get_node(path)? {
            FileNode::File(leaf) => Some(leaf.descriptor()),
            FileNode::Folder(_) => None,
        }
    }

    /// Every file leaf with its full path, pre-order, children in order.
    pub fn flatten(&self) -> Vec<FlatFile> {
        let mut files = Vec::new();
        for node in &self.roots {
            Self::collect_files(node, "", &mut files);
        }
        files
    }

    fn collect_files(node: &FileNode, parent: &str, out: &mut Vec<FlatFile>) {
        match node {
            FileNode::File(leaf) => out.push(FlatFile {
                name: leaf.name.clone(),
                path: format!("{}{}", parent, leaf.name),
                content_id: leaf.content_id.clone(),
                language: leaf.language,
                url: leaf.url.clone(),
            }),
            FileNode::Folder(folder) => {
                let prefix = format!("{}{}/", parent, folder.name);
                for child in &folder.children {
                    Self::collect_files(child, &prefix, out);
                }
            }
        }
    }

    /// Mark the leaf belonging to the active tab.
    ///
    /// Matches by content id first, then by display name (tabs whose id does
    /// not correspond to any leaf). Clears the highlight when nothing matches.
    /// Returns the highlighted path.
    pub fn highlight_by_content_id(
        &mut self,
        content_id: &str,
        fallback_label: Option<&str>,
    ) -> Option<&str> {
        let files = self.flatten();
        let target = files
            .iter()
            .find(|f| f.content_id == content_id)
            .or_else(|| fallback_label.and_then(|label| files.iter().find(|f| f.name == label)));

        self.highlighted = target.map(|f| f.path.clone());
        self.highlighted.as_deref()
    }

    pub fn clear_highlight(&mut self) {
        self.highlighted = None;
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }
}

// =============================================================================
// Document Discovery
// =============================================================================

/// Parse the embedded documents manifest.
pub fn parse_documents(json: &str) -> Result<DocumentManifest, ManifestError> {
    Ok(serde_json::from_str(json)?)
}

/// Manifest leaf with a language label.
fn leaf(name: &str, content_id: &str, label: &str) -> FileNode {
    FileNode::file(name, content_id, Language::from_label(label))
}

/// Whether a manifest entry names a PDF (`.pdf`, any case).
fn is_pdf_entry(entry: &DocumentEntry) -> bool {
    entry
        .name
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && ext.eq_ignore_ascii_case("pdf"))
}

/// Build the `documents` folder from the shipped PDFs.
///
/// Entries that are not PDFs are skipped with a warning. The rest are sorted
/// by file name. Each leaf gets the synthetic content id `doc:<name>` and the
/// manifest url, or the documents directory by default.
pub fn discover_documents(manifest: &DocumentManifest) -> FileNode {
    let mut entries: Vec<_> = manifest
        .documents
        .iter()
        .filter(|doc| {
            let keep = is_pdf_entry(doc);
            if !keep {
                log::warn(&format!("documents: skipping non-PDF entry '{}'", doc.name));
            }
            keep
        })
        .collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    let children = entries
        .into_iter()
        .map(|doc| {
            FileNode::File(FileLeaf {
                name: doc.name.clone(),
                content_id: format!("{}{}", DOCUMENT_ID_PREFIX, doc.name),
                language: Language::Pdf,
                url: Some(
                    doc.url
                        .clone()
                        .unwrap_or_else(|| format!("{}/{}", DOCUMENTS_BASE_URL, doc.name)),
                ),
            })
        })
        .collect();

    FileNode::folder(DOCUMENTS_FOLDER, children)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(names: &[&str]) -> DocumentManifest {
        DocumentManifest {
            documents: names
                .iter()
                .map(|n| DocumentEntry {
                    name: n.to_string(),
                    url: None,
                })
                .collect(),
        }
    }

    fn create_test_tree() -> FileTree {
        FileTree::portfolio(&manifest(&["resume.pdf", "cv.pdf"]))
    }

    #[test]
    fn test_discover_documents_sorted() {
        let folder = discover_documents(&manifest(&["zeta.pdf", "alpha.pdf", "cv.pdf"]));
        let FileNode::Folder(folder) = folder else {
            panic!("expected folder");
        };
        let names: Vec<_> = folder.children.iter().map(|n| n.name()).collect();
        assert_eq!(names, vec!["alpha.pdf", "cv.pdf", "zeta.pdf"]);
        assert!(!folder.expanded);
    }

    #[test]
    fn test_discover_documents_ids_and_urls() {
        let mut m = manifest(&["cv.pdf"]);
        m.documents.push(DocumentEntry {
            name: "paper.pdf".into(),
            url: Some("https://example.org/paper.pdf".into()),
        });
        let tree = FileTree::new(vec![discover_documents(&m)]);

        let cv = tree.select_file("documents/cv.pdf").unwrap();
        assert_eq!(cv.id, "doc:cv.pdf");
        assert_eq!(cv.language, Language::Pdf);
        assert_eq!(cv.url.as_deref(), Some("/documents/cv.pdf"));

        let paper = tree.select_file("documents/paper.pdf").unwrap();
        assert_eq!(paper.url.as_deref(), Some("https://example.org/paper.pdf"));
    }

    #[test]
    fn test_discover_documents_skips_non_pdf() {
        let folder = discover_documents(&manifest(&[
            "notes.txt",
            "cv.pdf",
            "SLIDES.PDF",
            "pdf",
            ".pdf",
            "archive.pdf.zip",
        ]));
        let FileNode::Folder(folder) = folder else {
            panic!("expected folder");
        };
        let names: Vec<_> = folder.children.iter().map(|n| n.name()).collect();
        assert_eq!(names, vec!["SLIDES.PDF", "cv.pdf"]);

        let m = parse_documents(r#"{"documents":[{"name":"notes.txt"}]}"#).unwrap();
        let tree = FileTree::portfolio(&m);
        assert!(tree.select_file("documents/notes.txt").is_none());
        assert!(tree.flatten().iter().all(|f| f.name != "notes.txt"));
    }

    #[test]
    fn test_parse_documents() {
        let m = parse_documents(r#"{"documents":[{"name":"cv.pdf"}]}"#).unwrap();
        assert_eq!(m.documents[0].name, "cv.pdf");
        assert!(parse_documents("not json").is_err());
    }

    #[test]
    fn test_get_node() {
        let tree = create_test_tree();
        assert!(tree.get_node("about.md").is_some());
        assert!(matches!(
            tree.get_node("projects"),
            Some(FileNode::Folder(_))
        ));
        assert!(tree.get_node("projects/web-server.go").is_some());
        assert!(tree.get_node("about.md/child").is_none());
        assert!(tree.get_node("nonexistent").is_none());
        assert!(tree.get_node("").is_none());
    }

    #[test]
    fn test_toggle_folder() {
        let mut tree = create_test_tree();
        assert!(!tree.is_expanded("projects"));

        assert_eq!(tree.toggle_folder("projects"), Some(true));
        assert!(tree.is_expanded("projects"));

        assert_eq!(tree.toggle_folder("projects"), Some(false));
        assert!(!tree.is_expanded("projects"));
    }

    #[test]
    fn test_toggle_folder_is_independent() {
        let mut tree = create_test_tree();
        tree.toggle_folder("projects");
        tree.toggle_folder("skills");
        tree.toggle_folder("documents");
        assert!(tree.is_expanded("projects"));
        assert!(tree.is_expanded("skills"));
        assert!(tree.is_expanded("documents"));
    }

    #[test]
    fn test_toggle_folder_rejects_files() {
        let mut tree = create_test_tree();
        assert_eq!(tree.toggle_folder("about.md"), None);
        assert_eq!(tree.toggle_folder("missing"), None);
    }

    #[test]
    fn test_select_file() {
        let tree = create_test_tree();

        let desc = tree.select_file("contacts.go").unwrap();
        assert_eq!(desc.id, "contact");
        assert_eq!(desc.content_id, "contact");
        assert_eq!(desc.label, "contacts.go");
        assert_eq!(desc.language, Language::Go);

        assert!(tree.select_file("projects").is_none());
        assert!(tree.select_file("missing.md").is_none());
    }

    #[test]
    fn test_portfolio_languages() {
        let tree = create_test_tree();
        let language = |path: &str| tree.select_file(path).map(|d| d.language);
        assert_eq!(language("about.md"), Some(Language::Markdown));
        assert_eq!(language("projects/web-server.go"), Some(Language::Go));
        assert_eq!(language("skills/backend.rs"), Some(Language::Rust));
        assert_eq!(language("documents/cv.pdf"), Some(Language::Pdf));
    }

    #[test]
    fn test_flatten_preorder() {
        let tree = create_test_tree();
        let paths: Vec<_> = tree.flatten().into_iter().map(|f| f.path).collect();
        assert_eq!(
            paths,
            vec![
                "about.md",
                "documents/cv.pdf",
                "documents/resume.pdf",
                "projects/web-server.go",
                "skills/backend.rs",
                "experience.md",
                "contacts.go",
            ]
        );
    }

    #[test]
    fn test_flatten_ignores_expansion() {
        let mut tree = create_test_tree();
        let before = tree.flatten();
        tree.toggle_folder("projects");
        assert_eq!(tree.flatten(), before);
    }

    #[test]
    fn test_flatten_nested_folders() {
        let tree = FileTree::new(vec![FileNode::folder(
            "a",
            vec![
                FileNode::folder("b", vec![FileNode::file("c.rs", "c", Language::Rust)]),
                FileNode::file("d.md", "d", Language::Markdown),
            ],
        )]);
        let paths: Vec<_> = tree.flatten().into_iter().map(|f| f.path).collect();
        assert_eq!(paths, vec!["a/b/c.rs", "a/d.md"]);
    }

    #[test]
    fn test_highlight_by_content_id() {
        let mut tree = create_test_tree();
        assert_eq!(
            tree.highlight_by_content_id("projects/web-server.go", Some("web-server.go")),
            Some("projects/web-server.go")
        );
        assert_eq!(tree.highlighted(), Some("projects/web-server.go"));
    }

    #[test]
    fn test_highlight_falls_back_to_label() {
        let mut tree = create_test_tree();
        let hit = tree.highlight_by_content_id("doc:renamed", Some("cv.pdf"));
        assert_eq!(hit, Some("documents/cv.pdf"));
    }

    #[test]
    fn test_highlight_clears_on_miss() {
        let mut tree = create_test_tree();
        tree.highlight_by_content_id("about", None);
        assert!(tree.highlighted().is_some());

        assert_eq!(tree.highlight_by_content_id("nope", Some("nope.md")), None);
        assert!(tree.highlighted().is_none());
    }

    #[test]
    fn test_clear_highlight() {
        let mut tree = create_test_tree();
        tree.highlight_by_content_id("about", None);
        tree.clear_highlight();
        assert!(tree.highlighted().is_none());
    }
}
