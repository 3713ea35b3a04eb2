//! UI components built with Leptos.
//!
//! - [`Layout`] - Workbench shell and global shortcuts (main entry point)
//! - [`editor`] - Editor surface and welcome screen
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`palette`] - Quick-open command palette
//! - [`sidebar`] - Activity bar, explorer tree and search view
//! - [`status`] - Status bar with the theme switcher
//! - [`tabs`] - Editor tab strip

pub mod editor;
pub mod icons;
pub mod layout;
pub mod palette;
pub mod sidebar;
pub mod status;
pub mod tabs;

pub use layout::Layout;
