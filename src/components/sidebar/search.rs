//! Search view: find lines in the document currently shown in the editor.

use leptos::{ev, prelude::*};

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/sidebar/sidebar.module.css");

#[component]
pub fn Search() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let (query, set_query) = signal(String::new());

    // Re-runs when either the query or the mounted surface changes.
    let hits = Memo::new(move |_| {
        let query = query.get();
        if query.is_empty() {
            return Vec::new();
        }
        ctx.workbench.with(|w| w.search(&query))
    });

    let summary = move || match hits.with(Vec::len) {
        0 if query.with(String::is_empty) => String::new(),
        0 => "No results".to_string(),
        1 => "1 result".to_string(),
        n => format!("{} results", n),
    };

    view! {
        <div class=css::search>
            <input
                id="sidebar-search-input"
                class=css::searchInput
                type="text"
                placeholder="Search in current file"
                autocomplete="off"
                spellcheck="false"
                prop:value=query
                on:input=move |ev: ev::Event| set_query.set(event_target_value(&ev))
            />
            <div class=css::searchSummary>{summary}</div>
            <ul class=css::searchResults>
                <For
                    each=move || hits.get()
                    key=|hit| (hit.line, hit.text.clone())
                    children=move |hit| {
                        view! {
                            <li class=css::searchHit title=hit.text.clone()>
                                <span class=css::searchLine>{hit.line}</span>
                                <span class=css::searchPreview>{hit.preview}</span>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
