//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::components::Layout;
use crate::config::{DOCUMENTS_MANIFEST, MOBILE_MEDIA_QUERY};
use crate::core::{
    BuiltinContent, FileTree, NoopHighlighter, PrismHighlighter, SyntaxHighlighter, Workbench,
};
use crate::core::{theme, tree};
use crate::models::{ClosingTabs, SidebarView, Theme};
use crate::utils::log;

// ============================================================================
// UiState
// ============================================================================

/// Cosmetic UI state that lives outside the workbench.
///
/// Nothing here affects which tabs are open or what content is shown; it only
/// tracks chrome (sidebar, transitions) that deferred callbacks toggle.
#[derive(Clone, Copy)]
pub struct UiState {
    /// Sidebar visibility (Ctrl/Cmd+B).
    pub sidebar_open: RwSignal<bool>,
    /// View shown in the sidebar.
    pub sidebar_view: RwSignal<SidebarView>,
    /// Tabs playing their close animation.
    pub closing_tabs: RwSignal<ClosingTabs>,
    /// Editor content is fading in after a load.
    pub content_fading: RwSignal<bool>,
    /// Palette fully hidden (after its close transition).
    pub palette_hidden: RwSignal<bool>,
    /// Narrow viewport; the sidebar overlays the editor.
    pub is_mobile: Signal<bool>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            sidebar_open: RwSignal::new(true),
            sidebar_view: RwSignal::new(SidebarView::default()),
            closing_tabs: RwSignal::new(ClosingTabs::default()),
            content_fading: RwSignal::new(false),
            palette_hidden: RwSignal::new(true),
            is_mobile: use_media_query(MOBILE_MEDIA_QUERY),
        }
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }

    pub fn is_closing(&self, id: &str) -> bool {
        self.closing_tabs.with(|c| c.contains(id))
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// The [`AppContext`] separates concerns into independent domains:
/// - **Workbench**: file tree, tabs, rendered content, palette
/// - **Theme**: the persisted colour theme
/// - **UI**: sidebar and transition state
/// - **Highlighter**: the syntax highlighter collaborator
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Editor shell state. All tab and content transitions go through here.
    pub workbench: RwSignal<Workbench>,

    /// Active colour theme.
    pub theme: RwSignal<Theme>,

    /// Chrome state.
    pub ui: UiState,

    /// Syntax highlighter run over mounted content.
    pub highlighter: StoredValue<Arc<dyn SyntaxHighlighter + Send + Sync>>,
}

impl AppContext {
    /// Build the context from its collaborators.
    pub fn new(
        workbench: Workbench,
        theme: Theme,
        highlighter: Arc<dyn SyntaxHighlighter + Send + Sync>,
    ) -> Self {
        Self {
            workbench: RwSignal::new(workbench),
            theme: RwSignal::new(theme),
            ui: UiState::new(),
            highlighter: StoredValue::new(highlighter),
        }
    }

    /// Open the file at a tree path (tree clicks, welcome links).
    pub fn open_file(&self, path: &str) {
        let opened = self
            .workbench
            .try_update(|w| w.open_file(path))
            .unwrap_or(false);
        if opened {
            self.keep_active_open();
        }
    }

    /// Cancel a pending close of the active tab, which was just reopened.
    pub fn keep_active_open(&self) {
        let active = self
            .workbench
            .with_untracked(|w| w.tabs().active_id().map(str::to_string));
        if let Some(id) = active {
            self.ui.closing_tabs.update(|c| {
                c.cancel(&id);
            });
        }
    }

    /// Switch to a theme, apply it to the page and persist it.
    pub fn set_theme(&self, next: Theme) {
        self.theme.set(next);
        theme::switch_theme(next);
    }
}

/// Build the workbench: content store, documents discovery, file tree.
fn build_workbench() -> Workbench {
    let documents = tree::parse_documents(DOCUMENTS_MANIFEST).unwrap_or_else(|e| {
        log::error(&e.to_string());
        Default::default()
    });
    let tree = FileTree::portfolio(&documents);
    let store = BuiltinContent::new();
    log::debug(&format!("content store: {}", store.keys().join(", ")));
    Workbench::new(Box::new(store), tree)
}

/// Prism when the page loaded it, otherwise highlighting is skipped.
fn build_highlighter() -> Arc<dyn SyntaxHighlighter + Send + Sync> {
    if PrismHighlighter::is_available() {
        Arc::new(PrismHighlighter)
    } else {
        log::warn("Prism not loaded, code blocks will not be highlighted");
        Arc::new(NoopHighlighter)
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Wires the workbench, theme and highlighter together
/// - Provides the AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let initial_theme = theme::restore_theme();
    if let Err(e) = theme::apply_theme(initial_theme) {
        log::warn(&format!("theme apply: {}", e));
    }

    let ctx = AppContext::new(build_workbench(), initial_theme, build_highlighter());
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #1e1e1e;
                    color: #d4d4d4;
                    font-family: 'Consolas', 'Courier New', monospace;
                ">
                    <h1 style="color: #f48771; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #f48771; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #0e639c;
                            color: white;
                            border: none;
                            padding: 0.75rem 2rem;
                            cursor: pointer;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Layout />
        </ErrorBoundary>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_workbench() {
        let wb = build_workbench();
        let paths: Vec<_> = wb.tree().flatten().into_iter().map(|f| f.path).collect();
        assert_eq!(paths.first().map(String::as_str), Some("about.md"));
        assert!(paths.contains(&"documents/cv.pdf".to_string()));
        assert!(paths.contains(&"contacts.go".to_string()));
        assert!(wb.tabs().is_empty());
    }

    #[test]
    fn test_every_builtin_leaf_resolves() {
        let mut wb = build_workbench();
        for file in wb.tree().flatten() {
            wb.open_file(&file.path);
            assert!(
                !matches!(wb.surface(), crate::models::Surface::NotFound { .. }),
                "{} did not resolve",
                file.path
            );
        }
    }
}
