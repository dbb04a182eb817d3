/// Mobile navigation drawer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    open: bool,
}

impl NavState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// `Escape` closes an open menu. Returns whether the key was consumed.
    pub fn on_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.open {
            self.open = false;
            true
        } else {
            false
        }
    }

    /// Dictionary key for the toggle button's label.
    pub fn toggle_label_key(&self) -> &'static str {
        if self.open {
            "header.menuToggle.close"
        } else {
            "header.menuToggle.open"
        }
    }
}
