//! Sidebar and activity bar.
//!
//! The activity bar selects which view the sidebar shows. Clicking the icon
//! of the view already shown toggles the sidebar instead, as in VS Code.

mod explorer;
mod search;

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::SidebarView;
use crate::utils::dom;

use explorer::Explorer;
use search::Search;

stylance::import_crate_style!(css, "src/components/sidebar/sidebar.module.css");

#[component]
pub fn ActivityBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let ui = ctx.ui;

    let select = move |view: SidebarView| {
        if ui.sidebar_open.get_untracked() && ui.sidebar_view.get_untracked() == view {
            ui.sidebar_open.set(false);
            return;
        }
        ui.sidebar_view.set(view);
        ui.sidebar_open.set(true);
        if view == SidebarView::Search {
            request_animation_frame(|| {
                dom::focus_element("#sidebar-search-input");
            });
        }
    };

    let button_class = move |view: SidebarView| {
        move || {
            if ui.sidebar_open.get() && ui.sidebar_view.get() == view {
                format!("{} {}", css::activityButton, css::activityActive)
            } else {
                css::activityButton.to_string()
            }
        }
    };

    view! {
        <nav class=css::activityBar aria-label="Views">
            <button
                class=button_class(SidebarView::Explorer)
                title="Explorer (Ctrl+B)"
                on:click=move |_| select(SidebarView::Explorer)
            >
                <Icon icon=ic::EXPLORER />
            </button>
            <button
                class=button_class(SidebarView::Search)
                title="Search"
                on:click=move |_| select(SidebarView::Search)
            >
                <Icon icon=ic::SEARCH />
            </button>
        </nav>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let ui = ctx.ui;

    let sidebar_class = move || {
        let mut class = css::sidebar.to_string();
        if !ui.sidebar_open.get() {
            class.push(' ');
            class.push_str(css::collapsed);
        }
        if ui.is_mobile.get() {
            class.push(' ');
            class.push_str(css::overlay);
        }
        class
    };

    view! {
        <aside class=sidebar_class>
            <div class=css::header>{move || ui.sidebar_view.get().title()}</div>
            <div class=format!("{} scrollbar-thin", css::body)>
                {move || match ui.sidebar_view.get() {
                    SidebarView::Explorer => view! { <Explorer /> }.into_any(),
                    SidebarView::Search => view! { <Search /> }.into_any(),
                }}
            </div>
        </aside>
        <Show when=move || ui.is_mobile.get() && ui.sidebar_open.get()>
            <div class=css::backdrop on:click=move |_| ui.sidebar_open.set(false)></div>
        </Show>
    }
}
