//! Syntax highlighter collaborator.
//!
//! The highlighter decorates code blocks in the mounted surface. It keeps no
//! state the workbench reads back. The browser implementation drives Prism.js,
//! which `index.html` loads with the Go, C, Python, Rust and Markdown grammars.

use web_sys::Element;

pub trait SyntaxHighlighter {
    /// Scan the whole page and decorate every recognized code block.
    fn highlight_all(&self);
    /// Decorate a single code element.
    fn highlight_one(&self, element: &Element);
}

/// Highlighter that does nothing. Used off-browser and when Prism is absent.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHighlighter;

impl SyntaxHighlighter for NoopHighlighter {
    fn highlight_all(&self) {}
    fn highlight_one(&self, _element: &Element) {}
}

#[cfg(target_arch = "wasm32")]
mod prism {
    use js_sys::Reflect;
    use wasm_bindgen::prelude::*;
    use web_sys::Element;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = Prism, js_name = highlightAll)]
        pub fn highlight_all();

        #[wasm_bindgen(js_namespace = Prism, js_name = highlightElement)]
        pub fn highlight_element(element: &Element);
    }

    /// Whether `window.Prism` is defined.
    pub fn is_loaded() -> bool {
        web_sys::window()
            .and_then(|w| Reflect::get(&w, &"Prism".into()).ok())
            .is_some_and(|v| !v.is_undefined())
    }
}

/// Prism.js highlighter.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrismHighlighter;

impl PrismHighlighter {
    /// Whether Prism.js is present on the page.
    pub fn is_available() -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            prism::is_loaded()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            false
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl SyntaxHighlighter for PrismHighlighter {
    fn highlight_all(&self) {
        if prism::is_loaded() {
            prism::highlight_all();
        } else {
            crate::utils::log::warn("Prism not loaded, skipping highlight");
        }
    }

    fn highlight_one(&self, element: &Element) {
        if prism::is_loaded() {
            prism::highlight_element(element);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SyntaxHighlighter for PrismHighlighter {
    fn highlight_all(&self) {}
    fn highlight_one(&self, _element: &Element) {}
}
