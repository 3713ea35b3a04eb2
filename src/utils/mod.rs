//! Utility modules for DOM access, logging and markup.
//!
//! Provides:
//! - [`dom`] - Browser object access and element queries
//! - [`log`] - Console logging (no-op off wasm32)
//! - [`markdown_to_html`] - Markdown rendering

pub mod dom;
pub mod log;
mod markdown;

pub use markdown::markdown_to_html;
