//! Dialog visibility and focus containment.
//!
//! Transitions are pure and return the DOM effects to apply; the UI layer
//! performs them. Opening an open dialog or closing a closed one yields no
//! effects.

use tracing::trace;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Hidden,
    Visible,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKey {
    Escape,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalEvent {
    OpenTrigger,
    CloseTrigger,
    KeyUp(ModalKey),
    /// Focus landed somewhere; `inside_dialog` tells whether the target is in
    /// the dialog subtree.
    Focus { inside_dialog: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalEffect {
    RevealDialog,
    HideDialog,
    FocusDialogTarget,
    SetBackgroundHidden(bool),
    StopPropagation,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalState {
    phase: ModalPhase,
    background: Vec<String>,
}

impl ModalState {
    /// `background` lists the regions hidden from assistive technology while
    /// the dialog is open. The list is fixed for the session.
    pub fn new<I, S>(background: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phase: ModalPhase::Hidden,
            background: background.into_iter().map(Into::into).collect(),
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase == ModalPhase::Visible
    }

    pub fn background_regions(&self) -> &[String] {
        &self.background
    }

    /// Value of `aria-hidden` for a background region, if it should carry one.
    pub fn background_aria_hidden(&self, region: &str) -> Option<&'static str> {
        (self.is_visible() && self.background.iter().any(|r| r == region)).then_some("true")
    }

    pub fn open(&mut self) -> Vec<ModalEffect> {
        if self.is_visible() {
            return Vec::new();
        }
        self.phase = ModalPhase::Visible;
        vec![
            ModalEffect::RevealDialog,
            ModalEffect::FocusDialogTarget,
            ModalEffect::SetBackgroundHidden(true),
        ]
    }

    pub fn close(&mut self) -> Vec<ModalEffect> {
        if !self.is_visible() {
            return Vec::new();
        }
        self.phase = ModalPhase::Hidden;
        vec![
            ModalEffect::HideDialog,
            ModalEffect::SetBackgroundHidden(false),
        ]
    }

    pub fn handle(&mut self, event: ModalEvent) -> Vec<ModalEffect> {
        trace!(?event, phase = ?self.phase, "modal event");
        match event {
            ModalEvent::OpenTrigger => self.open(),
            ModalEvent::CloseTrigger | ModalEvent::KeyUp(ModalKey::Escape) => self.close(),
            ModalEvent::KeyUp(ModalKey::Other) => Vec::new(),
            ModalEvent::Focus { inside_dialog } => {
                if self.is_visible() && !inside_dialog {
                    vec![ModalEffect::StopPropagation, ModalEffect::FocusDialogTarget]
                } else {
                    Vec::new()
                }
            }
        }
    }
}

impl Default for ModalState {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}
