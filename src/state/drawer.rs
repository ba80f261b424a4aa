pub const VISIBLE_CLASS: &str = "is-visible";

/// Mobile navigation drawer: open or closed, links tabbable only while open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawerState {
    open: bool,
}

impl DrawerState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Menu button, overlay and close button all toggle.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn open(&mut self) -> bool {
        let changed = !self.open;
        self.open = true;
        changed
    }

    pub fn close(&mut self) -> bool {
        let changed = self.open;
        self.open = false;
        changed
    }

    pub fn visibility_class(&self) -> &'static str {
        if self.open {
            VISIBLE_CLASS
        } else {
            ""
        }
    }

    pub fn link_tabindex(&self) -> i32 {
        if self.open {
            0
        } else {
            -1
        }
    }
}
