//! Command palette (quick open).
//!
//! Open/closed and the result list live in the workbench; this component
//! only adds the show/hide transition and keyboard handling. Closing
//! deactivates the overlay immediately and hides it once the transition has
//! finished, unless it was reopened in between.

use gloo_timers::callback::Timeout;
use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::delays;
use crate::models::FlatFile;
use crate::utils::{dom, log};

stylance::import_crate_style!(css, "src/components/palette/palette.module.css");

const INPUT_ID: &str = "palette-input";
const SELECTED_SELECTOR: &str = "[data-palette-selected=\"true\"]";

fn is_open(ctx: AppContext) -> bool {
    ctx.workbench.with_untracked(|w| w.palette().is_open())
}

fn after_open(ctx: AppContext) {
    ctx.ui.palette_hidden.set(false);
    request_animation_frame(|| {
        if !dom::focus_element(&format!("#{}", INPUT_ID)) {
            log::debug("palette input not mounted yet");
        }
    });
}

fn after_close(ctx: AppContext) {
    Timeout::new(delays::PALETTE_HIDE, move || {
        if !is_open(ctx) {
            ctx.ui.palette_hidden.set(true);
        }
    })
    .forget();
}

/// Ctrl/Cmd+P.
pub fn toggle_palette(ctx: AppContext) {
    let opened = ctx
        .workbench
        .try_update(|w| w.toggle_palette())
        .unwrap_or(false);
    if opened {
        after_open(ctx);
    } else {
        after_close(ctx);
    }
}

/// Title bar search button.
pub fn open_palette(ctx: AppContext) {
    if is_open(ctx) {
        return;
    }
    ctx.workbench.update(|w| w.open_palette());
    after_open(ctx);
}

/// Escape and backdrop click.
pub fn close_palette(ctx: AppContext) {
    if !is_open(ctx) {
        return;
    }
    ctx.workbench.update(|w| w.close_palette());
    after_close(ctx);
}

fn commit(ctx: AppContext, index: Option<usize>) {
    let opened = ctx
        .workbench
        .try_update(|w| match index {
            Some(i) => w.commit_palette(i),
            None => w.commit_palette_selection(),
        })
        .flatten();
    // Nothing to open leaves the palette as it was.
    if let Some(file) = opened {
        log::debug(&format!("quick open: {}", file.path));
        ctx.keep_active_open();
        after_close(ctx);
    }
}

#[component]
pub fn CommandPalette() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let open = Signal::derive(move || ctx.workbench.with(|w| w.palette().is_open()));
    let query = Signal::derive(move || ctx.workbench.with(|w| w.palette().query().to_string()));
    let selected = Signal::derive(move || ctx.workbench.with(|w| w.palette().selected_index()));
    let results = Memo::new(move |_| ctx.workbench.with(|w| w.palette().results().to_vec()));

    let overlay_class = move || {
        let mut class = css::overlay.to_string();
        if open.get() {
            class.push(' ');
            class.push_str(css::active);
        }
        if ctx.ui.palette_hidden.get() {
            class.push(' ');
            class.push_str(css::hidden);
        }
        class
    };

    let handle_input = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        ctx.workbench.update(|w| w.set_palette_query(&value));
    };

    let move_selection = move |delta: isize| {
        ctx.workbench.update(|w| w.move_palette_selection(delta));
        request_animation_frame(|| dom::scroll_into_view(SELECTED_SELECTOR));
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            commit(ctx, None);
        }
        "ArrowDown" => {
            ev.prevent_default();
            move_selection(1);
        }
        "ArrowUp" => {
            ev.prevent_default();
            move_selection(-1);
        }
        "Escape" => {
            ev.prevent_default();
            close_palette(ctx);
        }
        _ => {}
    };

    let empty_message = move || {
        if query.with(String::is_empty) {
            "Type to search files by name"
        } else {
            "No matching files"
        }
    };

    view! {
        <div class=overlay_class on:click=move |_| close_palette(ctx)>
            <div
                class=css::palette
                role="dialog"
                aria-label="Quick Open"
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                <div class=css::inputRow>
                    <span class=css::inputIcon><Icon icon=ic::SEARCH /></span>
                    <input
                        id=INPUT_ID
                        class=css::input
                        type="text"
                        placeholder="Search files by name"
                        autocomplete="off"
                        spellcheck="false"
                        prop:value=query
                        on:input=handle_input
                        on:keydown=handle_keydown
                    />
                </div>
                <ul class=format!("{} scrollbar-thin", css::results) role="listbox">
                    <Show
                        when=move || results.with(|r| !r.is_empty())
                        fallback=move || view! { <li class=css::empty>{empty_message}</li> }
                    >
                        <For
                            each=move || results.get().into_iter().enumerate()
                            key=|(index, file)| (*index, file.path.clone())
                            children=move |(index, file)| {
                                let is_selected = Signal::derive(move || selected.get() == index);
                                view! {
                                    <PaletteItem
                                        file=file
                                        selected=is_selected
                                        on_pick=Callback::new(move |_| commit(ctx, Some(index)))
                                    />
                                }
                            }
                        />
                    </Show>
                </ul>
            </div>
        </div>
    }
}

#[component]
fn PaletteItem(
    file: FlatFile,
    #[prop(into)] selected: Signal<bool>,
    on_pick: Callback<()>,
) -> impl IntoView {
    let class = move || {
        if selected.get() {
            format!("{} {}", css::item, css::selected)
        } else {
            css::item.to_string()
        }
    };

    view! {
        <li
            class=class
            role="option"
            aria-selected=move || selected.get().to_string()
            data-palette-selected=move || selected.get().to_string()
            on:click=move |_| on_pick.run(())
        >
            <span class=format!("{} {}", css::icon, file.language.icon_class())>
                <Icon icon=ic::language_icon(file.language) />
            </span>
            <span class=css::name>{file.name.clone()}</span>
            <span class=css::path>{file.path.clone()}</span>
        </li>
    }
}
