//! Virtual file tree types.

use serde::{Deserialize, Serialize};

use super::{Language, TabDescriptor};

// =============================================================================
// Tree Nodes
// =============================================================================

/// A file leaf in the virtual tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileLeaf {
    /// Display label (e.g. `about.md`)
    pub name: String,
    /// Key into the content store; may carry a subpath (`projects/web-server.go`)
    pub content_id: String,
    /// Declared language, drives icon and highlighter grammar
    pub language: Language,
    /// Direct resource link (PDF documents)
    pub url: Option<String>,
}

impl FileLeaf {
    /// Tab descriptor for opening this leaf.
    pub fn descriptor(&self) -> TabDescriptor {
        TabDescriptor {
            id: self.content_id.clone(),
            label: self.name.clone(),
            language: self.language,
            content_id: self.content_id.clone(),
            url: self.url.clone(),
        }
    }
}

/// A folder in the virtual tree. Owns its children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Folder {
    pub name: String,
    pub expanded: bool,
    pub children: Vec<FileNode>,
}

/// Represents an entry in the virtual tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileNode {
    File(FileLeaf),
    Folder(Folder),
}

impl FileNode {
    /// Create a file leaf.
    pub fn file(name: &str, content_id: &str, language: Language) -> Self {
        FileNode::File(FileLeaf {
            name: name.to_string(),
            content_id: content_id.to_string(),
            language,
            url: None,
        })
    }

    /// Create a collapsed folder.
    pub fn folder(name: &str, children: Vec<FileNode>) -> Self {
        FileNode::Folder(Folder {
            name: name.to_string(),
            expanded: false,
            children,
        })
    }

    pub fn name(&self) -> &str {
        match self {
            FileNode::File(leaf) => &leaf.name,
            FileNode::Folder(folder) => &folder.name,
        }
    }
}

// =============================================================================
// Flattened View
// =============================================================================

/// A file leaf together with its full tree path.
///
/// Produced by [`crate::core::FileTree::flatten`] for the command palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlatFile {
    pub name: String,
    /// Folder names and the file name joined by `/`
    pub path: String,
    pub content_id: String,
    pub language: Language,
    pub url: Option<String>,
}

// =============================================================================
// Documents Manifest
// =============================================================================

/// Root of `assets/documents/manifest.json`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct DocumentManifest {
    pub documents: Vec<DocumentEntry>,
}

/// A shipped document.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DocumentEntry {
    /// File name including extension (e.g. `cv.pdf`)
    pub name: String,
    /// Served location; defaults to the documents directory when absent
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_descriptor_uses_content_id_as_tab_id() {
        let node = FileNode::file("web-server.go", "projects/web-server.go", Language::Go);
        let FileNode::File(leaf) = node else {
            panic!("expected a file");
        };

        let desc = leaf.descriptor();
        assert_eq!(desc.id, "projects/web-server.go");
        assert_eq!(desc.content_id, "projects/web-server.go");
        assert_eq!(desc.label, "web-server.go");
        assert_eq!(desc.language, Language::Go);
        assert!(desc.url.is_none());
    }

    #[test]
    fn test_folder_starts_collapsed() {
        let node = FileNode::folder("projects", vec![]);
        assert_eq!(node.name(), "projects");
        match node {
            FileNode::Folder(f) => assert!(!f.expanded),
            FileNode::File(_) => panic!("expected a folder"),
        }
    }

    #[test]
    fn test_manifest_url_is_optional() {
        let manifest: DocumentManifest =
            serde_json::from_str(r#"{"documents":[{"name":"cv.pdf"},{"name":"a.pdf","url":"/x/a.pdf"}]}"#)
                .unwrap();
        assert_eq!(manifest.documents.len(), 2);
        assert!(manifest.documents[0].url.is_none());
        assert_eq!(manifest.documents[1].url.as_deref(), Some("/x/a.pdf"));
    }
}
