//! Core editor-shell logic.
//!
//! This module provides:
//! - [`FileTree`] virtual file tree with folder and highlight state
//! - `TabRegistry` open tabs and the active selection
//! - `ContentRenderer` content resolution and in-document search
//! - `CommandPalette` quick-open filtering
//! - [`Workbench`] the coordinator wiring them together
//! - `ContentStore` and [`SyntaxHighlighter`] external collaborators

pub mod content;
pub mod error;
pub mod highlight;
mod palette;
mod renderer;
mod tabs;
pub mod theme;
pub mod tree;
mod workbench;

pub use content::BuiltinContent;
pub use highlight::{NoopHighlighter, PrismHighlighter, SyntaxHighlighter};
pub use tree::FileTree;
pub use workbench::Workbench;
