//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Content assets are loaded at compile time using `include_str!`.

// =============================================================================
// Content Assets (loaded at compile time)
// =============================================================================

/// Portfolio documents, keyed by base content id in the content store.
pub mod content {
    /// `about`, authored in Markdown.
    pub const ABOUT: &str = include_str!("../assets/content/about.md");
    /// `projects`, pre-rendered HTML.
    pub const PROJECTS: &str = include_str!("../assets/content/projects.html");
    /// `skills`, pre-rendered HTML.
    pub const SKILLS: &str = include_str!("../assets/content/skills.html");
    /// `experience`, authored in Markdown.
    pub const EXPERIENCE: &str = include_str!("../assets/content/experience.md");
    /// `contact`, pre-rendered HTML.
    pub const CONTACT: &str = include_str!("../assets/content/contact.html");
}

/// Shipped PDF documents (see `assets/documents/`).
pub const DOCUMENTS_MANIFEST: &str = include_str!("../assets/documents/manifest.json");

// =============================================================================
// Application Metadata
// =============================================================================

/// Owner name shown in the title bar and welcome screen.
pub const APP_NAME: &str = "Stepan Postnov";

/// Subtitle on the welcome screen.
pub const APP_TAGLINE: &str = "Backend Developer";

/// Id of the mount point in `index.html`.
pub const APP_ROOT_ID: &str = "app";

/// Title bar text.
pub const WINDOW_TITLE: &str = "portfolio - Visual Studio Code";

// =============================================================================
// Tree Configuration
// =============================================================================

/// Name of the discovered documents folder.
pub const DOCUMENTS_FOLDER: &str = "documents";

/// Served location of the documents folder (Trunk copies it there).
pub const DOCUMENTS_BASE_URL: &str = "/documents";

/// Content id prefix for discovered documents.
pub const DOCUMENT_ID_PREFIX: &str = "doc:";

/// Indentation per tree level in pixels.
pub const TREE_INDENT_PX: usize = 12;

// =============================================================================
// Content Rendering
// =============================================================================

/// PDF name used when no tab supplies one.
pub const DEFAULT_PDF_NAME: &str = "cv.pdf";

/// Fixed payload for unresolvable content ids.
pub const NOT_FOUND_MARKUP: &str = r#"<div class="content-section"><h1>Content not found</h1><p>The requested content could not be loaded.</p></div>"#;

/// Maximum characters in a search hit preview.
pub const SEARCH_PREVIEW_LEN: usize = 100;

/// Selector for code blocks the highlighter decorates.
pub const CODE_BLOCK_SELECTOR: &str = r#"code[class*="language-"]"#;

// =============================================================================
// Persistence
// =============================================================================

/// localStorage key for the selected theme.
pub const THEME_STORAGE_KEY: &str = "theme";

// =============================================================================
// Animation Timing
// =============================================================================

/// Cosmetic delays (milliseconds). Must match `--transition-*` in CSS.
pub mod delays {
    /// Tab close animation before the tab is removed.
    pub const TAB_CLOSE: u32 = 200;
    /// Content fade-in after a load.
    pub const CONTENT_FADE: u32 = 50;
    /// Highlighter pass after mount.
    pub const HIGHLIGHT: u32 = 10;
    /// Palette deactivation before it is hidden.
    pub const PALETTE_HIDE: u32 = 260;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Media query below which the sidebar becomes an overlay.
pub const MOBILE_MEDIA_QUERY: &str = "(max-width: 768px)";

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
