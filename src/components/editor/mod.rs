//! Editor surface.
//!
//! Mounts whatever the renderer last produced. Every mount bumps the
//! renderer generation; the fade-in and highlight passes are scheduled
//! against that generation and skip themselves if a newer mount happened
//! before they fired.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use web_sys::Element;

use crate::app::AppContext;
use crate::config::{APP_NAME, APP_TAGLINE, CODE_BLOCK_SELECTOR, delays};
use crate::core::SyntaxHighlighter;
use crate::models::{Language, Surface};
use crate::utils::{dom, log};

stylance::import_crate_style!(css, "src/components/editor/editor.module.css");

/// Prism's line-numbers plugin keys off this class on `<pre>`.
const LINE_NUMBERS_CLASS: &str = "line-numbers";
/// Containers that opt out of line numbers.
const NO_LINE_NUMBERS: &str = ".no-line-numbers";

/// Label exposed as `data-language` on the mounted surface.
fn surface_language(surface: &Surface) -> &'static str {
    match surface {
        Surface::Document { language, .. } => language.label(),
        Surface::Pdf { .. } => Language::Pdf.label(),
        Surface::Welcome | Surface::NotFound { .. } => "",
    }
}

/// Only `<pre>` blocks wrapping language-tagged code get a gutter.
fn wants_line_numbers(has_language_code: bool, opted_out: bool) -> bool {
    has_language_code && !opted_out
}

fn tag_line_numbers(pre: &Element) {
    let has_language_code = pre
        .query_selector(CODE_BLOCK_SELECTOR)
        .ok()
        .flatten()
        .is_some();
    let opted_out = pre.closest(NO_LINE_NUMBERS).ok().flatten().is_some();

    let classes = pre.class_list();
    let result = if wants_line_numbers(has_language_code, opted_out) {
        classes.add_1(LINE_NUMBERS_CLASS)
    } else {
        classes.remove_1(LINE_NUMBERS_CLASS)
    };
    if let Err(e) = result {
        log::debug(&format!("line numbers: {:?}", e));
    }
}

/// Decorate the code blocks under `root`.
///
/// Every language-tagged block is handed to the highlighter, which skips
/// grammars it has not loaded. Falls back to a page-wide pass when the
/// surface element is gone.
fn highlight_surface(highlighter: &dyn SyntaxHighlighter, root: Option<&Element>) {
    let Some(root) = root else {
        highlighter.highlight_all();
        return;
    };

    for pre in dom::query_all(root, "pre") {
        tag_line_numbers(&pre);
    }
    for block in dom::query_all(root, CODE_BLOCK_SELECTOR) {
        highlighter.highlight_one(&block);
    }
}

#[component]
pub fn Editor() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let scroll_ref = NodeRef::<leptos::html::Div>::new();
    let content_ref = NodeRef::<leptos::html::Div>::new();

    let mounted = Memo::new(move |_| {
        ctx.workbench
            .with(|w| (w.renderer().generation(), w.surface().clone()))
    });

    let is_current = move |generation: u64| {
        ctx.workbench
            .with_untracked(|w| w.renderer().generation() == generation)
    };

    // Post-mount passes, run once per generation.
    Effect::new(move |_| {
        let (generation, wants_highlight) = mounted.with(|(g, s)| (*g, s.wants_highlight()));

        if let Some(el) = scroll_ref.get_untracked() {
            el.set_scroll_top(0);
        }

        ctx.ui.content_fading.set(true);
        Timeout::new(delays::CONTENT_FADE, move || {
            if is_current(generation) {
                ctx.ui.content_fading.set(false);
            }
        })
        .forget();

        if wants_highlight {
            Timeout::new(delays::HIGHLIGHT, move || {
                if !is_current(generation) {
                    return;
                }
                let root: Option<Element> = content_ref.get_untracked().map(Element::from);
                ctx.highlighter
                    .with_value(|h| highlight_surface(&**h, root.as_ref()));
            })
            .forget();
        }
    });

    let surface_class = move || {
        let mut class = css::surface.to_string();
        if mounted.with(|(_, s)| s.is_pdf()) {
            class.push(' ');
            class.push_str(css::pdf);
        }
        if ctx.ui.content_fading.get() {
            class.push(' ');
            class.push_str(css::fading);
        }
        class
    };

    view! {
        <div node_ref=scroll_ref class=format!("{} scrollbar-thin", css::editor)>
            {move || match mounted.with(|(_, s)| s.markup().map(str::to_string)) {
                None => view! { <Welcome /> }.into_any(),
                Some(markup) => view! {
                    <div
                        node_ref=content_ref
                        class=surface_class
                        data-language=move || mounted.with(|(_, s)| surface_language(s))
                        inner_html=markup
                    ></div>
                }
                .into_any(),
            }}
        </div>
    }
}

/// Shown while no tab is open.
#[component]
fn Welcome() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let open = move |path: &'static str| move |_: leptos::ev::MouseEvent| ctx.open_file(path);

    view! {
        <div class=css::welcome>
            <h1 class=css::welcomeTitle>{APP_NAME}</h1>
            <p class=css::welcomeTagline>{APP_TAGLINE}</p>
            <div class=css::welcomeActions>
                <button class=css::welcomeLink on:click=open("about.md")>"about.md"</button>
                <button class=css::welcomeLink on:click=open("experience.md")>
                    "experience.md"
                </button>
                <button class=css::welcomeLink on:click=open("contacts.go")>"contacts.go"</button>
            </div>
            <dl class=css::shortcuts>
                <dt>"Quick Open"</dt>
                <dd><kbd>"Ctrl"</kbd>"+"<kbd>"P"</kbd></dd>
                <dt>"Toggle Sidebar"</dt>
                <dd><kbd>"Ctrl"</kbd>"+"<kbd>"B"</kbd></dd>
                <dt>"Close Palette"</dt>
                <dd><kbd>"Esc"</kbd></dd>
            </dl>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_numbers_need_language_code() {
        assert!(wants_line_numbers(true, false));
        assert!(!wants_line_numbers(false, false));
        assert!(!wants_line_numbers(true, true));
        assert!(!wants_line_numbers(false, true));
    }

    #[test]
    fn test_surface_language() {
        let doc = Surface::Document {
            content_id: "contact".to_string(),
            language: Language::Go,
            markup: String::new(),
        };
        assert_eq!(surface_language(&doc), "go");
        assert_eq!(surface_language(&Surface::Welcome), "");
    }
}
