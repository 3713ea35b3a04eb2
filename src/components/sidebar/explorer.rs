//! Explorer view: the portfolio file tree.
//!
//! The tree is rendered as a flat list of visible rows, indented by depth.
//! Children of collapsed folders are not emitted.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::TREE_INDENT_PX;
use crate::core::FileTree;
use crate::models::{FileNode, Language};

stylance::import_crate_style!(css, "src/components/sidebar/sidebar.module.css");

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum RowKind {
    Folder { expanded: bool },
    File { language: Language },
}

/// One visible line of the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
struct TreeRow {
    path: String,
    name: String,
    depth: usize,
    kind: RowKind,
}

/// Pre-order rows for every node whose ancestors are all expanded.
fn visible_rows(tree: &FileTree) -> Vec<TreeRow> {
    fn walk(
        tree: &FileTree,
        nodes: &[FileNode],
        prefix: &str,
        depth: usize,
        out: &mut Vec<TreeRow>,
    ) {
        for node in nodes {
            let path = if prefix.is_empty() {
                node.name().to_string()
            } else {
                format!("{}/{}", prefix, node.name())
            };
            match node {
                FileNode::Folder(folder) => {
                    let expanded = tree.is_expanded(&path);
                    out.push(TreeRow {
                        path: path.clone(),
                        name: folder.name.clone(),
                        depth,
                        kind: RowKind::Folder { expanded },
                    });
                    if expanded {
                        walk(tree, &folder.children, &path, depth + 1, out);
                    }
                }
                FileNode::File(leaf) => out.push(TreeRow {
                    path,
                    name: leaf.name.clone(),
                    depth,
                    kind: RowKind::File {
                        language: leaf.language,
                    },
                }),
            }
        }
    }

    let mut rows = Vec::new();
    walk(tree, tree.roots(), "", 0, &mut rows);
    rows
}

#[component]
pub fn Explorer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let rows = Memo::new(move |_| ctx.workbench.with(|w| visible_rows(w.tree())));

    view! {
        <div class=css::tree role="tree" aria-label="Files">
            <For
                each=move || rows.get()
                key=|row| (row.path.clone(), row.kind.clone())
                children=move |row| view! { <TreeItem row=row /> }
            />
        </div>
    }
}

#[component]
fn TreeItem(row: TreeRow) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let indent = format!("padding-left: {}px", 8 + row.depth * TREE_INDENT_PX);
    let path = row.path.clone();

    match row.kind {
        RowKind::Folder { expanded } => {
            let on_click = move |_: leptos::ev::MouseEvent| {
                ctx.workbench.update(|w| {
                    w.toggle_folder(&path);
                });
            };
            let (chevron, icon) = if expanded {
                (ic::CHEVRON_DOWN, ic::FOLDER_OPEN)
            } else {
                (ic::CHEVRON_RIGHT, ic::FOLDER)
            };

            view! {
                <div
                    class=format!("{} {}", css::item, css::folder)
                    style=indent
                    role="treeitem"
                    aria-expanded=expanded.to_string()
                    on:click=on_click
                >
                    <span class=css::chevron><Icon icon=chevron /></span>
                    <span class=css::icon><Icon icon=icon /></span>
                    <span class=css::name>{row.name}</span>
                </div>
            }
            .into_any()
        }
        RowKind::File { language } => {
            let path_for_active = path.clone();
            let is_active = Signal::derive(move || {
                ctx.workbench
                    .with(|w| w.tree().highlighted() == Some(path_for_active.as_str()))
            });
            let on_click = move |_: leptos::ev::MouseEvent| {
                ctx.open_file(&path);
                if ctx.ui.is_mobile.get_untracked() {
                    ctx.ui.sidebar_open.set(false);
                }
            };

            view! {
                <div
                    class=move || {
                        if is_active.get() {
                            format!("{} {}", css::item, css::active)
                        } else {
                            css::item.to_string()
                        }
                    }
                    style=indent
                    role="treeitem"
                    on:click=on_click
                >
                    <span class=css::chevron></span>
                    <span class=format!("{} {}", css::icon, language.icon_class())>
                        <Icon icon=ic::language_icon(language) />
                    </span>
                    <span class=css::name>{row.name}</span>
                </div>
            }
            .into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentManifest;

    fn paths(rows: &[TreeRow]) -> Vec<&str> {
        rows.iter().map(|r| r.path.as_str()).collect()
    }

    #[test]
    fn test_collapsed_folders_hide_children() {
        let tree = FileTree::portfolio(&DocumentManifest::default());
        let rows = visible_rows(&tree);
        assert_eq!(
            paths(&rows),
            vec![
                "about.md",
                "documents",
                "projects",
                "skills",
                "experience.md",
                "contacts.go"
            ]
        );
        assert!(rows.iter().all(|r| r.depth == 0));
    }

    #[test]
    fn test_expanded_folder_shows_children_indented() {
        let mut tree = FileTree::portfolio(&DocumentManifest::default());
        tree.toggle_folder("projects");
        let rows = visible_rows(&tree);

        let idx = rows.iter().position(|r| r.path == "projects").unwrap();
        assert_eq!(rows[idx].kind, RowKind::Folder { expanded: true });
        assert_eq!(rows[idx + 1].path, "projects/web-server.go");
        assert_eq!(rows[idx + 1].depth, 1);
        assert_eq!(
            rows[idx + 1].kind,
            RowKind::File {
                language: Language::Go
            }
        );
    }
}
