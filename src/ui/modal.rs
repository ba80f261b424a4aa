use std::rc::Rc;

use dioxus::prelude::*;

use crate::state::i18n;
use crate::state::locale::Locale;
use crate::state::modal::{ModalEvent, ModalState};
use crate::ui::actions;

#[component]
pub fn Modal(
    modal: Signal<ModalState>,
    focus_target: Signal<Option<Rc<MountedData>>>,
    locale: Locale,
) -> Element {
    let visible = modal.read().is_visible();
    let class = if visible { "modal flex" } else { "modal hidden" };
    let aria_hidden = (!visible).to_string();
    let title = i18n::tr(locale, "modal.title");
    let body = i18n::tr(locale, "modal.body");
    let close_label = i18n::tr(locale, "modal.close");

    rsx! {
        div {
            class: "{class}",
            id: "modal",
            role: "dialog",
            "aria-modal": "true",
            "aria-labelledby": "modal-title",
            "aria-hidden": "{aria_hidden}",
            onfocusin: move |evt| {
                let mut modal = modal;
                let effects = modal.with_mut(|state| state.handle(ModalEvent::Focus { inside_dialog: true }));
                actions::apply_modal_effects(&effects, focus_target, Some(&evt));
                evt.stop_propagation();
            },
            div { class: "modal-content",
                h2 {
                    id: "modal-title",
                    tabindex: "-1",
                    onmounted: move |evt| {
                        let mut focus_target = focus_target;
                        focus_target.set(Some(evt.data()));
                    },
                    "{title}"
                }
                p { "{body}" }
                button {
                    class: "modal-close",
                    id: "close-btn",
                    onclick: move |evt| {
                        evt.prevent_default();
                        let mut modal = modal;
                        let effects = modal.with_mut(|state| state.handle(ModalEvent::CloseTrigger));
                        actions::apply_modal_effects(&effects, focus_target, None);
                    },
                    "{close_label}"
                }
            }
        }
    }
}
