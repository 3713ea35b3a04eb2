//! Status bar component.
//!
//! Displays the active theme (with the theme switcher) on the left and the
//! cursor position, encoding and language of the active tab on the right.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::Theme;

stylance::import_crate_style!(css, "src/components/status/status.module.css");

/// Position readout for the mounted surface.
fn position_label(line_count: usize) -> String {
    match line_count {
        0 => "Ln 1, Col 1".to_string(),
        1 => "Ln 1, Col 1 (1 line)".to_string(),
        n => format!("Ln 1, Col 1 ({} lines)", n),
    }
}

/// Status bar component.
///
/// ## Responsive behavior
///
/// | Breakpoint | Display |
/// |------------|---------|
/// | Desktop (> 768px) | `Theme \| Ln 1, Col 1 (N lines) \| UTF-8 \| Language` |
/// | Mobile (<= 768px) | `Theme \| Language` (position and encoding hidden) |
#[component]
pub fn Status() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let language = Signal::derive(move || {
        ctx.workbench.with(|w| {
            w.tabs()
                .active_tab()
                .map(|t| t.language.display_name())
                .unwrap_or_default()
        })
    });
    let has_tab = Signal::derive(move || ctx.workbench.with(|w| !w.tabs().is_empty()));
    let position = Signal::derive(move || {
        ctx.workbench
            .with(|w| position_label(w.renderer().line_count()))
    });

    view! {
        <footer class=css::bar>
            <div class=css::section>
                <ThemeSwitcher />
            </div>

            <Show when=move || has_tab.get()>
                <div class=css::section>
                    <span class=format!("{} {}", css::item, css::secondary)>{position}</span>
                    <span class=format!("{} {}", css::item, css::secondary)>"UTF-8"</span>
                    <span class=css::item>{language}</span>
                </div>
            </Show>
        </footer>
    }
}

/// Theme picker opened from the status bar.
#[component]
fn ThemeSwitcher() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let (menu_open, set_menu_open) = signal(false);

    let toggle_menu = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        set_menu_open.update(|open| *open = !*open);
    };

    // Any click elsewhere closes the menu.
    let handle = window_event_listener(ev::click, move |_| {
        if menu_open.get_untracked() {
            set_menu_open.set(false);
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class=css::themeSwitcher>
            <button class=css::themeButton title="Color Theme" on:click=toggle_menu>
                <Icon icon=ic::PALETTE />
                <span>{move || ctx.theme.get().display_name()}</span>
            </button>
            <Show when=move || menu_open.get()>
                <ul class=css::themeMenu role="menu">
                    {Theme::ALL
                        .into_iter()
                        .map(|theme| {
                            let is_current = move || ctx.theme.get() == theme;
                            view! {
                                <li
                                    class=move || {
                                        if is_current() {
                                            format!("{} {}", css::themeOption, css::themeCurrent)
                                        } else {
                                            css::themeOption.to_string()
                                        }
                                    }
                                    role="menuitemradio"
                                    aria-checked=move || is_current().to_string()
                                    on:click=move |ev: ev::MouseEvent| {
                                        ev.stop_propagation();
                                        ctx.set_theme(theme);
                                        set_menu_open.set(false);
                                    }
                                >
                                    <span class=css::themeCheck>
                                        <Show when=is_current>
                                            <Icon icon=ic::CHECK />
                                        </Show>
                                    </span>
                                    {theme.display_name()}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}
