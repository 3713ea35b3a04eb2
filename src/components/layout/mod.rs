//! Workbench layout and global keyboard shortcuts.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::editor::Editor;
use crate::components::icons as ic;
use crate::components::palette::{self, CommandPalette};
use crate::components::sidebar::{ActivityBar, Sidebar};
use crate::components::status::Status;
use crate::components::tabs::TabBar;
use crate::config::WINDOW_TITLE;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

/// Global shortcut recognized by the workbench.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Shortcut {
    QuickOpen,
    ToggleSidebar,
    Dismiss,
}

/// Map a key press to a shortcut. Ctrl and Cmd are interchangeable.
fn shortcut_for(key: &str, ctrl_or_meta: bool) -> Option<Shortcut> {
    match key {
        "Escape" => Some(Shortcut::Dismiss),
        "p" | "P" if ctrl_or_meta => Some(Shortcut::QuickOpen),
        "b" | "B" if ctrl_or_meta => Some(Shortcut::ToggleSidebar),
        _ => None,
    }
}

#[component]
pub fn Layout() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let ui = ctx.ui;

    // Narrow viewports start with the sidebar tucked away.
    Effect::new(move |prev: Option<bool>| {
        let mobile = ui.is_mobile.get();
        if prev != Some(mobile) {
            ui.sidebar_open.set(!mobile);
        }
        mobile
    });

    let handle = window_event_listener(ev::keydown, move |ev: ev::KeyboardEvent| {
        let Some(shortcut) = shortcut_for(&ev.key(), ev.ctrl_key() || ev.meta_key()) else {
            return;
        };
        match shortcut {
            Shortcut::QuickOpen => {
                ev.prevent_default();
                palette::toggle_palette(ctx);
            }
            Shortcut::ToggleSidebar => {
                ev.prevent_default();
                ui.toggle_sidebar();
            }
            Shortcut::Dismiss => palette::close_palette(ctx),
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class=css::workbench>
            <header class=css::titleBar>
                <button
                    class=css::menuButton
                    title="Toggle Sidebar (Ctrl+B)"
                    on:click=move |_| ui.toggle_sidebar()
                >
                    <Icon icon=ic::MENU />
                </button>
                <span class=css::title>{WINDOW_TITLE}</span>
                <button
                    class=css::quickOpen
                    title="Quick Open (Ctrl+P)"
                    on:click=move |_| palette::open_palette(ctx)
                >
                    <Icon icon=ic::SEARCH />
                    <span class=css::quickOpenLabel>"Search files"</span>
                </button>
            </header>

            <div class=css::main>
                <ActivityBar />
                <Sidebar />
                <section class=css::editorGroup>
                    <TabBar />
                    <Editor />
                </section>
            </div>

            <Status />
            <CommandPalette />
        </div>
    }
}
