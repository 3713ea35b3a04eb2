//! Declared languages for files and tabs.
//!
//! A declared language picks the icon, colour class and highlighter grammar
//! for a file. It is a label only and says nothing about the real format of
//! the content behind it.

use std::fmt;

/// Language label attached to a file leaf or an open tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    Go,
    Python,
    Rust,
    C,
    Pdf,
    Markdown,
    Json,
    Html,
    Css,
    /// Fallback for labels we don't recognize.
    #[default]
    PlainText,
}

impl Language {
    /// Parse a language label (case-insensitive).
    ///
    /// Unknown labels fall back to [`Language::PlainText`].
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "go" => Self::Go,
            "python" | "py" => Self::Python,
            "rust" | "rs" => Self::Rust,
            "c" => Self::C,
            "pdf" => Self::Pdf,
            "markdown" | "md" => Self::Markdown,
            "json" => Self::Json,
            "html" => Self::Html,
            "css" => Self::Css,
            _ => Self::PlainText,
        }
    }

    /// Canonical label, also used as the Prism grammar name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Python => "python",
            Self::Rust => "rust",
            Self::C => "c",
            Self::Pdf => "pdf",
            Self::Markdown => "markdown",
            Self::Json => "json",
            Self::Html => "html",
            Self::Css => "css",
            Self::PlainText => "plaintext",
        }
    }

    /// Human-readable name shown in the status bar.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Go => "Go",
            Self::Python => "Python",
            Self::Rust => "Rust",
            Self::C => "C",
            Self::Pdf => "PDF",
            Self::Markdown => "Markdown",
            Self::Json => "JSON",
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::PlainText => "Plain Text",
        }
    }

    /// Colour class name for the file icon (see `components/icons.rs`).
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Go => "file-icon-go",
            Self::Python => "file-icon-python",
            Self::Rust => "file-icon-rust",
            Self::C => "file-icon-c",
            Self::Markdown => "file-icon-md",
            Self::Json => "file-icon-json",
            Self::Html => "file-icon-html",
            Self::Css => "file-icon-css",
            Self::Pdf | Self::PlainText => "",
        }
    }

    pub fn is_pdf(self) -> bool {
        matches!(self, Self::Pdf)
    }

    /// Whether content in this language goes through the syntax highlighter.
    pub fn highlights(self) -> bool {
        !self.is_pdf()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
