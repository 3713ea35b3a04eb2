//! Theme persistence and application.
//!
//! The selected theme is the only state that survives a reload. It lives in
//! localStorage under [`THEME_STORAGE_KEY`] and is applied as the
//! `data-theme` attribute on the root element.

use crate::config::THEME_STORAGE_KEY;
use crate::core::error::{DomError, StorageError};
use crate::models::Theme;
use crate::utils::{dom, log};

/// Read the persisted theme id.
pub fn load_theme_id() -> Result<Option<String>, StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
    storage
        .get_item(THEME_STORAGE_KEY)
        .map_err(|_| StorageError::ReadFailed(THEME_STORAGE_KEY.to_string()))
}

/// Persist a theme.
pub fn save_theme(theme: Theme) -> Result<(), StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
    storage
        .set_item(THEME_STORAGE_KEY, theme.id())
        .map_err(|_| StorageError::WriteFailed(THEME_STORAGE_KEY.to_string()))
}

/// Theme to start with: the persisted one, or the default if absent,
/// unreadable or unrecognized.
pub fn restore_theme() -> Theme {
    match load_theme_id() {
        Ok(id) => Theme::from_id_or_default(id.as_deref()),
        Err(e) => {
            log::warn(&format!("theme restore: {}", e));
            Theme::default()
        }
    }
}

/// Set `data-theme` on `<html>`.
pub fn apply_theme(theme: Theme) -> Result<(), DomError> {
    let root = dom::document_element()?;
    root.set_attribute("data-theme", theme.id())
        .map_err(|_| DomError::MissingElement("html".to_string()))
}

/// Apply and persist a theme. Failures are logged, never raised.
pub fn switch_theme(theme: Theme) {
    if let Err(e) = apply_theme(theme) {
        log::warn(&format!("theme apply: {}", e));
    }
    if let Err(e) = save_theme(theme) {
        log::warn(&format!("theme save: {}", e));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn data_theme() -> Option<String> {
        dom::document_element().ok()?.get_attribute("data-theme")
    }

    #[wasm_bindgen_test]
    fn test_apply_sets_data_theme() {
        apply_theme(Theme::Nord).unwrap();
        assert_eq!(data_theme().as_deref(), Some("nord"));
    }

    #[wasm_bindgen_test]
    fn test_switch_persists_and_restores() {
        switch_theme(Theme::Dracula);
        assert_eq!(data_theme().as_deref(), Some("dracula"));
        assert_eq!(load_theme_id().unwrap().as_deref(), Some("dracula"));
        assert_eq!(restore_theme(), Theme::Dracula);
    }

    #[wasm_bindgen_test]
    fn test_unknown_stored_id_falls_back_to_default() {
        let storage = dom::local_storage().unwrap();
        storage.set_item(THEME_STORAGE_KEY, "solarized-light").unwrap();
        assert_eq!(restore_theme(), Theme::default());
    }
}
