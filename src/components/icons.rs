//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::Language;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBookOpen as FilePdf, LuCheck as Check, LuChevronDown as ChevronDown,
        LuChevronRight as ChevronRight, LuFileCode as FileCode,
        LuFileJson as FileJson, LuFileText as FileText, LuFileText as Markdown,
        LuFiles as Explorer, LuFolder as Folder, LuFolderOpen as FolderOpen, LuList as Menu,
        LuPalette as Palette, LuSearch as Search, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsCheck2 as Check, BsChevronDown as ChevronDown, BsChevronRight as ChevronRight,
        BsFileEarmarkCode as FileCode, BsFileEarmarkPdf as FilePdf,
        BsFileEarmarkText as FileText, BsFiles as Explorer, BsFiletypeJson as FileJson,
        BsFolder2Open as FolderOpen, BsFolderFill as Folder, BsListUl as Menu,
        BsMarkdown as Markdown, BsPalette as Palette, BsSearch as Search, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(FOLDER, Folder);
themed_icon!(FOLDER_OPEN, FolderOpen);
themed_icon!(FILE_CODE, FileCode);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_JSON, FileJson);
themed_icon!(MARKDOWN, Markdown);
themed_icon!(EXPLORER, Explorer);
themed_icon!(SEARCH, Search);
themed_icon!(PALETTE, Palette);
themed_icon!(CHECK, Check);
themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);

/// Icon for a file of the given language.
pub fn language_icon(language: Language) -> Icon {
    match language {
        Language::Go | Language::Python | Language::Rust | Language::C => FILE_CODE,
        Language::Html | Language::Css => FILE_CODE,
        Language::Pdf => FILE_PDF,
        Language::Markdown => MARKDOWN,
        Language::Json => FILE_JSON,
        Language::PlainText => FILE_TEXT,
    }
}
