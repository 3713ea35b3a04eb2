//! Editor tab strip.
//!
//! Closing a tab plays a short animation first. The close itself is issued
//! when the timer fires, and only if the tab is still marked as closing:
//! reopening it from the tree or palette clears the mark.

use gloo_timers::callback::Timeout;
use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::delays;
use crate::models::Tab;

stylance::import_crate_style!(css, "src/components/tabs/tabs.module.css");

/// Start the close animation for `id`, then close it.
fn close_with_animation(ctx: AppContext, id: String) {
    let started = ctx
        .ui
        .closing_tabs
        .try_update(|c| c.begin(&id))
        .unwrap_or(false);
    if !started {
        return;
    }

    Timeout::new(delays::TAB_CLOSE, move || {
        let pending = ctx
            .ui
            .closing_tabs
            .try_update(|c| c.cancel(&id))
            .unwrap_or(false);
        if !pending {
            return;
        }
        ctx.workbench.update(|w| {
            w.close_tab(&id);
        });
    })
    .forget();
}

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let tabs = Memo::new(move |_| ctx.workbench.with(|w| w.tabs().tabs().to_vec()));

    view! {
        <div class=format!("{} scrollbar-none", css::bar) role="tablist">
            <For
                each=move || tabs.get()
                key=|tab| tab.id.clone()
                children=move |tab| view! { <TabItem tab=tab /> }
            />
        </div>
    }
}

#[component]
fn TabItem(tab: Tab) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let id = StoredValue::new(tab.id.clone());
    let is_active =
        Signal::derive(move || ctx.workbench.with(|w| id.with_value(|id| w.tabs().is_active(id))));
    let is_closing = Signal::derive(move || id.with_value(|id| ctx.ui.is_closing(id)));

    let class = move || {
        let mut class = css::tab.to_string();
        if is_active.get() {
            class.push(' ');
            class.push_str(css::active);
        }
        if is_closing.get() {
            class.push(' ');
            class.push_str(css::closing);
        }
        class
    };

    let on_select = move |_: ev::MouseEvent| {
        ctx.workbench.update(|w| {
            id.with_value(|id| w.switch_tab(id));
        });
    };

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        close_with_animation(ctx, id.get_value());
    };

    // Middle click closes, as in most editors.
    let on_auxclick = move |ev: ev::MouseEvent| {
        if ev.button() == 1 {
            ev.prevent_default();
            close_with_animation(ctx, id.get_value());
        }
    };

    view! {
        <div
            class=class
            role="tab"
            aria-selected=move || is_active.get().to_string()
            title=tab.url.clone().unwrap_or_else(|| tab.content_id.clone())
            on:click=on_select
            on:auxclick=on_auxclick
        >
            <span class=format!("{} {}", css::icon, tab.language.icon_class())>
                <Icon icon=ic::language_icon(tab.language) />
            </span>
            <span class=css::label>{tab.label.clone()}</span>
            <button class=css::close title="Close" on:click=on_close>
                <Icon icon=ic::CLOSE />
            </button>
        </div>
    }
}
