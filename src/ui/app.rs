use std::rc::Rc;

use dioxus::prelude::{Key, *};
use tracing::{info, warn};

use crate::config::{DashboardConfig, Environment};
use crate::state::drawer::DrawerState;
use crate::state::i18n;
use crate::state::locale::{ContainerAttributes, Locale, LocaleSource};
use crate::state::modal::{ModalEvent, ModalKey, ModalState};
use crate::state::table_state::TableHandle;
use crate::ui::actions;
use crate::ui::drawer::{Drawer, MenuButton};
use crate::ui::modal::Modal;
use crate::ui::table::DataTable;

const STYLES: Asset = asset!("/assets/styles.css");

#[component]
pub fn App() -> Element {
    let environment = use_hook(Environment::from_env);
    let config = use_hook(|| DashboardConfig::embedded().map_err(|err| err.to_string()));

    let container = use_signal({
        let language = environment.language.clone();
        move || ContainerAttributes { language }
    });
    let modal = use_signal({
        let regions = config
            .as_ref()
            .map(|config| config.background_regions.clone())
            .unwrap_or_default();
        move || ModalState::new(regions)
    });
    let drawer = use_signal(DrawerState::default);
    let focus_target = use_signal::<Option<Rc<MountedData>>>(|| None);
    let table = use_signal::<Option<TableHandle>>(|| None);
    let loading = use_signal(|| true);

    use_future({
        let environment = environment.clone();
        let config = config.clone();
        move || {
            let environment = environment.clone();
            let config = config.clone();
            let mut table = table;
            let mut loading = loading;
            async move {
                let Ok(config) = config else {
                    loading.set(false);
                    return;
                };
                let selected = config.select(environment.table.as_deref());
                let (id, settings) = match selected {
                    Ok(selected) => selected,
                    Err(err) => {
                        warn!(error = %err, "no table to load");
                        loading.set(false);
                        return;
                    }
                };
                let hint = environment.language.as_deref().map(|code| Locale::resolve(Some(code)));
                match actions::load_table(&environment.data_dir, settings, hint).await {
                    Ok(handle) => {
                        info!(table = id, rows = handle.data().len(), "table ready");
                        table.set(Some(handle));
                    }
                    Err(err) => warn!(table = id, error = %err, "table failed to load"),
                }
                loading.set(false);
            }
        }
    });

    let locale = container.read().resolve_locale();
    let modal_state = modal.read().clone();
    let language_label = i18n::tr(locale, "language.label");
    let open_label = i18n::tr(locale, "modal.open");
    let loading_label = i18n::tr(locale, "table.loading");

    if let Err(message) = config.as_ref() {
        return rsx! {
            p { class: "error-message", "{message}" }
        };
    }

    rsx! {
        document::Stylesheet { href: STYLES }
        div {
            class: "app",
            onkeyup: move |evt| {
                let key = match evt.key() {
                    Key::Escape => ModalKey::Escape,
                    _ => ModalKey::Other,
                };
                let mut modal = modal;
                let effects = modal.with_mut(|state| state.handle(ModalEvent::KeyUp(key)));
                actions::apply_modal_effects(&effects, focus_target, None);
            },
            onfocusin: move |evt| {
                let mut modal = modal;
                let effects = modal.with_mut(|state| state.handle(ModalEvent::Focus { inside_dialog: false }));
                actions::apply_modal_effects(&effects, focus_target, Some(&evt));
            },
            header {
                class: "site-header",
                id: "site-header",
                "aria-hidden": modal_state.background_aria_hidden("site-header"),
                MenuButton { drawer, locale }
                label { r#for: "select-language", "{language_label}" }
                select {
                    id: "select-language",
                    value: "{locale.code()}",
                    onchange: move |evt| {
                        let mut container = container;
                        container.with_mut(|attrs| attrs.language = Some(evt.value()));
                    },
                    for option_locale in Locale::all().iter().copied() {
                        option { value: "{option_locale.code()}", "{i18n::tr(locale, option_locale.label_key())}" }
                    }
                }
                button {
                    class: "modal-btn",
                    id: "modal-btn",
                    onclick: move |evt| {
                        evt.prevent_default();
                        let mut modal = modal;
                        let effects = modal.with_mut(|state| state.handle(ModalEvent::OpenTrigger));
                        actions::apply_modal_effects(&effects, focus_target, None);
                    },
                    "{open_label}"
                }
            }
            Drawer { drawer, locale }
            main {
                id: "main-content",
                "aria-hidden": modal_state.background_aria_hidden("main-content"),
                if table.read().is_some() {
                    DataTable { table, container }
                } else if *loading.read() {
                    p { class: "loading-message", "{loading_label}" }
                }
            }
            footer {
                class: "site-footer",
                id: "site-footer",
                "aria-hidden": modal_state.background_aria_hidden("site-footer"),
            }
            Modal { modal, focus_target, locale }
        }
    }
}
