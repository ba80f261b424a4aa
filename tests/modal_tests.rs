use pulseboard::state::modal::{ModalEffect, ModalEvent, ModalKey, ModalPhase, ModalState};

fn modal() -> ModalState {
    ModalState::new(["site-header", "main-content", "site-footer"])
}

#[test]
fn test_modal_starts_hidden() {
    let state = modal();
    assert_eq!(state.phase(), ModalPhase::Hidden);
    assert_eq!(state.background_aria_hidden("main-content"), None);
}

#[test]
fn test_open_reveals_focuses_and_hides_background() {
    let mut state = modal();
    let effects = state.handle(ModalEvent::OpenTrigger);

    assert_eq!(state.phase(), ModalPhase::Visible);
    assert_eq!(
        effects,
        vec![
            ModalEffect::RevealDialog,
            ModalEffect::FocusDialogTarget,
            ModalEffect::SetBackgroundHidden(true),
        ]
    );
    assert_eq!(state.background_aria_hidden("site-header"), Some("true"));
    assert_eq!(state.background_aria_hidden("main-content"), Some("true"));
    assert_eq!(state.background_aria_hidden("sidebar"), None);
}

#[test]
fn test_open_twice_is_noop() {
    let mut state = modal();
    state.open();
    let effects = state.open();

    assert!(effects.is_empty());
    assert_eq!(state.phase(), ModalPhase::Visible);
}

#[test]
fn test_close_twice_is_noop() {
    let mut state = modal();
    state.open();

    let effects = state.close();
    assert_eq!(
        effects,
        vec![ModalEffect::HideDialog, ModalEffect::SetBackgroundHidden(false)]
    );
    assert!(state.close().is_empty());
    assert_eq!(state.phase(), ModalPhase::Hidden);
    assert_eq!(state.background_aria_hidden("main-content"), None);
}

#[test]
fn test_escape_closes_visible_modal() {
    let mut state = modal();
    state.handle(ModalEvent::OpenTrigger);

    assert!(state.handle(ModalEvent::KeyUp(ModalKey::Other)).is_empty());
    assert!(state.is_visible());

    let effects = state.handle(ModalEvent::KeyUp(ModalKey::Escape));
    assert!(effects.contains(&ModalEffect::HideDialog));
    assert_eq!(state.phase(), ModalPhase::Hidden);
}

#[test]
fn test_escape_while_hidden_does_nothing() {
    let mut state = modal();
    assert!(state.handle(ModalEvent::KeyUp(ModalKey::Escape)).is_empty());
    assert_eq!(state.phase(), ModalPhase::Hidden);
}

#[test]
fn test_focus_outside_is_redirected_and_modal_stays_open() {
    let mut state = modal();
    state.handle(ModalEvent::OpenTrigger);

    let effects = state.handle(ModalEvent::Focus {
        inside_dialog: false,
    });
    assert_eq!(
        effects,
        vec![ModalEffect::StopPropagation, ModalEffect::FocusDialogTarget]
    );
    assert_eq!(state.phase(), ModalPhase::Visible);
}

#[test]
fn test_focus_inside_or_while_hidden_is_left_alone() {
    let mut state = modal();
    assert!(state
        .handle(ModalEvent::Focus {
            inside_dialog: false
        })
        .is_empty());

    state.handle(ModalEvent::OpenTrigger);
    assert!(state
        .handle(ModalEvent::Focus {
            inside_dialog: true
        })
        .is_empty());
    assert!(state.is_visible());
}

#[test]
fn test_close_trigger_and_reopen() {
    let mut state = modal();
    state.handle(ModalEvent::OpenTrigger);
    state.handle(ModalEvent::CloseTrigger);
    assert_eq!(state.phase(), ModalPhase::Hidden);

    assert!(!state.handle(ModalEvent::OpenTrigger).is_empty());
    assert_eq!(state.phase(), ModalPhase::Visible);
    assert_eq!(state.background_regions().len(), 3);
}
