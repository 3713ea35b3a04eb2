//! What the editor surface currently shows.

use super::Language;

/// The single display surface of the editor.
///
/// Mounting is a full replace: the previous surface is dropped, never diffed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Surface {
    /// No tab open.
    #[default]
    Welcome,
    /// Markup resolved from the content store.
    Document {
        content_id: String,
        language: Language,
        markup: String,
    },
    /// Synthesized PDF viewer.
    Pdf {
        file_name: String,
        url: String,
        markup: String,
    },
    /// Content id that the store does not know.
    NotFound { content_id: String, markup: String },
}

impl Surface {
    /// Markup to mount, `None` for the welcome screen.
    pub fn markup(&self) -> Option<&str> {
        match self {
            Surface::Welcome => None,
            Surface::Document { markup, .. }
            | Surface::Pdf { markup, .. }
            | Surface::NotFound { markup, .. } => Some(markup),
        }
    }

    /// Whether the highlighter should run over this surface once mounted.
    pub fn wants_highlight(&self) -> bool {
        match self {
            Surface::Document { language, .. } => language.highlights(),
            Surface::NotFound { .. } => true,
            Surface::Welcome | Surface::Pdf { .. } => false,
        }
    }

    pub fn is_pdf(&self) -> bool {
        matches!(self, Surface::Pdf { .. })
    }
}

/// One line of the rendered content that matched a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchHit {
    /// 1-indexed line number
    pub line: usize,
    /// The trimmed line
    pub text: String,
    /// `text` truncated for display
    pub preview: String,
}
