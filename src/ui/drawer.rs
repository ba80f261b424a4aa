use dioxus::prelude::*;

use crate::state::drawer::DrawerState;
use crate::state::i18n;
use crate::state::locale::Locale;

const LINKS: &[(&str, &str)] = &[
    ("organizations", "nav.organizations"),
    ("domains", "nav.domains"),
    ("guidance", "nav.guidance"),
    ("feedback", "nav.feedback"),
];

#[component]
pub fn MenuButton(drawer: Signal<DrawerState>, locale: Locale) -> Element {
    let label = i18n::tr(locale, "nav.menu");
    let expanded = drawer.read().is_open().to_string();

    rsx! {
        button {
            class: "menu-btn",
            id: "menu-btn",
            "aria-controls": "menu-content",
            "aria-expanded": "{expanded}",
            onclick: move |evt| {
                evt.prevent_default();
                let mut drawer = drawer;
                drawer.with_mut(|state| state.toggle());
            },
            "{label}"
        }
    }
}

#[component]
pub fn Drawer(drawer: Signal<DrawerState>, locale: Locale) -> Element {
    let state = *drawer.read();
    let visibility = state.visibility_class();
    let tabindex = state.link_tabindex().to_string();
    let close_label = i18n::tr(locale, "nav.close");

    rsx! {
        div {
            class: "overlay {visibility}",
            onclick: move |evt| {
                evt.prevent_default();
                let mut drawer = drawer;
                drawer.with_mut(|state| state.toggle());
            },
        }
        nav {
            class: "sliding-panel-content {visibility}",
            id: "menu-content",
            button {
                class: "sliding-panel-close",
                tabindex: "{tabindex}",
                onclick: move |evt| {
                    evt.prevent_default();
                    let mut drawer = drawer;
                    drawer.with_mut(|state| state.toggle());
                },
                "{close_label}"
            }
            ul {
                for (page, key) in LINKS.iter().copied() {
                    li {
                        a {
                            href: "/{locale.code()}/{page}/",
                            tabindex: "{tabindex}",
                            "{i18n::tr(locale, key)}"
                        }
                    }
                }
            }
        }
    }
}
