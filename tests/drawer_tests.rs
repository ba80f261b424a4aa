use pulseboard::state::drawer::{DrawerState, VISIBLE_CLASS};

#[test]
fn test_drawer_starts_closed_with_links_out_of_tab_order() {
    let drawer = DrawerState::default();
    assert!(!drawer.is_open());
    assert_eq!(drawer.link_tabindex(), -1);
    assert_eq!(drawer.visibility_class(), "");
}

#[test]
fn test_toggle_opens_and_closes() {
    let mut drawer = DrawerState::default();

    assert!(drawer.toggle());
    assert_eq!(drawer.link_tabindex(), 0);
    assert_eq!(drawer.visibility_class(), VISIBLE_CLASS);

    assert!(!drawer.toggle());
    assert_eq!(drawer.link_tabindex(), -1);
}

#[test]
fn test_explicit_open_close_are_idempotent() {
    let mut drawer = DrawerState::default();

    assert!(drawer.open());
    assert!(!drawer.open());
    assert!(drawer.is_open());

    assert!(drawer.close());
    assert!(!drawer.close());
    assert!(!drawer.is_open());
}
