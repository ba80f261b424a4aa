use std::path::Path;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use dioxus::prelude::*;
use thiserror::Error;
use tracing::warn;

use crate::config::TableSettings;
use crate::io::dataset::{self, DatasetError};
use crate::state::locale::Locale;
use crate::state::modal::ModalEffect;
use crate::state::table_state::{self, BindError, TableHandle};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Bind(#[from] BindError),
}

/// Loads a table's dataset and binds it to the table's columns.
pub async fn load_table(
    data_dir: &Path,
    settings: &TableSettings,
    locale_hint: Option<Locale>,
) -> Result<TableHandle, LoadError> {
    let stamp = settings.cache_bust.then(cache_stamp).flatten();
    let url = dataset::dataset_url(&settings.dataset, stamp);
    let rows = dataset::fetch_dataset(data_dir, &url).await?;
    let handle = table_state::bind(rows, settings.table_config(locale_hint))?;
    Ok(handle)
}

fn cache_stamp() -> Option<u128> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .ok()
        .map(|elapsed| elapsed.as_millis())
}

/// Performs the imperative part of a modal transition. Visibility and
/// `aria-hidden` follow from the state itself when the tree re-renders.
pub fn apply_modal_effects(
    effects: &[ModalEffect],
    focus_target: Signal<Option<Rc<MountedData>>>,
    event: Option<&FocusEvent>,
) {
    for effect in effects {
        match effect {
            ModalEffect::StopPropagation => {
                if let Some(event) = event {
                    event.stop_propagation();
                }
            }
            ModalEffect::FocusDialogTarget => {
                let target = focus_target.read().clone();
                spawn(async move {
                    let Some(target) = target else {
                        warn!("modal focus target is not mounted");
                        return;
                    };
                    if let Err(err) = target.set_focus(true).await {
                        warn!(error = ?err, "failed to focus modal");
                    }
                });
            }
            ModalEffect::RevealDialog
            | ModalEffect::HideDialog
            | ModalEffect::SetBackgroundHidden(_) => {}
        }
    }
}
