//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`FileNode`], [`FileLeaf`], [`Folder`], [`FlatFile`] - Virtual file tree
//! - [`Tab`], [`TabDescriptor`], [`CloseOutcome`], [`ClosingTabs`] - Open documents
//! - [`Language`] - Declared language of a file
//! - [`Surface`], [`SearchHit`] - Rendered content
//! - [`Theme`], [`SidebarView`] - UI chrome state

mod language;
mod surface;
mod tab;
mod theme;
mod tree;
mod view;

pub use language::Language;
pub use surface::{SearchHit, Surface};
pub use tab::{CloseOutcome, ClosingTabs, Tab, TabDescriptor};
pub use theme::Theme;
pub use tree::{DocumentEntry, DocumentManifest, FileLeaf, FileNode, FlatFile, Folder};
pub use view::SidebarView;
