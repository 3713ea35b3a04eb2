//! Editor shell coordination.
//!
//! The [`Workbench`] owns the file tree, tab registry, content renderer and
//! command palette, and is the only place that sequences side effects between
//! them. Every transition of a tab into the active state performs exactly one
//! content load followed by at most one tree-highlight update.

use super::content::ContentStore;
use super::palette::CommandPalette;
use super::renderer::ContentRenderer;
use super::tabs::TabRegistry;
use super::tree::FileTree;
use crate::models::{CloseOutcome, FlatFile, SearchHit, Surface, TabDescriptor};
use crate::utils::log;

pub struct Workbench {
    tree: FileTree,
    tabs: TabRegistry,
    renderer: ContentRenderer,
    palette: CommandPalette,
}

impl Workbench {
    /// Wire up the shell from a content store and a prebuilt tree.
    pub fn new(store: Box<dyn ContentStore + Send + Sync>, tree: FileTree) -> Self {
        Self {
            tree,
            tabs: TabRegistry::new(),
            renderer: ContentRenderer::new(store),
            palette: CommandPalette::new(),
        }
    }

    pub fn tree(&self) -> &FileTree {
        &self.tree
    }

    pub fn tabs(&self) -> &TabRegistry {
        &self.tabs
    }

    pub fn renderer(&self) -> &ContentRenderer {
        &self.renderer
    }

    pub fn palette(&self) -> &CommandPalette {
        &self.palette
    }

    pub fn surface(&self) -> &Surface {
        self.renderer.surface()
    }

    // =========================================================================
    // Tree
    // =========================================================================

    /// Expand or collapse a folder. No content side effect.
    pub fn toggle_folder(&mut self, path: &str) -> Option<bool> {
        self.tree.toggle_folder(path)
    }

    /// Open the file at a tree path (tree click or palette commit).
    ///
    /// Returns `false` if the path is not a file.
    pub fn open_file(&mut self, path: &str) -> bool {
        match self.tree.select_file(path) {
            Some(descriptor) => {
                self.open_tab(descriptor);
                true
            }
            None => {
                log::warn(&format!("open_file: no file at '{}'", path));
                false
            }
        }
    }

    // =========================================================================
    // Tabs
    // =========================================================================

    /// Open (or re-activate) a tab, then load its content.
    pub fn open_tab(&mut self, descriptor: TabDescriptor) {
        let id = descriptor.id.clone();
        if self.tabs.open_tab(descriptor) {
            log::debug(&format!("opened tab '{}'", id));
        }
        self.activate_current();
    }

    /// Switch to an open tab. Unknown ids are ignored.
    pub fn switch_tab(&mut self, id: &str) -> bool {
        if !self.tabs.switch_tab(id) {
            return false;
        }
        self.activate_current();
        true
    }

    /// Close a tab. Unknown ids are ignored.
    pub fn close_tab(&mut self, id: &str) -> CloseOutcome {
        let outcome = self.tabs.close_tab(id);
        match &outcome {
            CloseOutcome::Missing | CloseOutcome::Closed => {}
            CloseOutcome::Activated(_) => self.activate_current(),
            CloseOutcome::Emptied => self.show_empty(),
        }
        outcome
    }

    /// Close every tab and show the welcome screen.
    pub fn close_all_tabs(&mut self) {
        self.tabs.close_all_tabs();
        self.show_empty();
    }

    /// Load the active tab, then highlight its tree leaf.
    fn activate_current(&mut self) {
        let Some(tab) = self.tabs.active_tab() else {
            return;
        };
        self.renderer.load_content(&tab.content_id, tab.language, Some(tab));
        self.tree.highlight_by_content_id(&tab.content_id, Some(&tab.label));
    }

    fn show_empty(&mut self) {
        self.renderer.show_welcome();
        self.tree.clear_highlight();
    }

    // =========================================================================
    // Palette
    // =========================================================================

    pub fn toggle_palette(&mut self) -> bool {
        let files = self.tree.flatten();
        self.palette.toggle(&files)
    }

    pub fn open_palette(&mut self) {
        let files = self.tree.flatten();
        self.palette.open(&files);
    }

    pub fn close_palette(&mut self) {
        self.palette.close();
    }

    pub fn set_palette_query(&mut self, query: &str) {
        let files = self.tree.flatten();
        self.palette.set_query(query, &files);
    }

    pub fn move_palette_selection(&mut self, delta: isize) {
        self.palette.move_selection(delta);
    }

    /// Open the palette result at `index` and close the palette.
    pub fn commit_palette(&mut self, index: usize) -> Option<FlatFile> {
        let file = self.palette.commit(index)?;
        self.open_file(&file.path);
        Some(file)
    }

    /// Open the selected palette result and close the palette.
    pub fn commit_palette_selection(&mut self) -> Option<FlatFile> {
        let file = self.palette.commit_selected()?;
        self.open_file(&file.path);
        Some(file)
    }

    // =========================================================================
    // Search
    // =========================================================================

    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        self.renderer.search(query)
    }
}
