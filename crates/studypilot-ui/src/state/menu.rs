//! Collapsible navigation panel for narrow viewports

/// Open/closed flag for the mobile navigation overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Menu button press
    pub const fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Any navigation action closes the overlay
    pub const fn close(&mut self) {
        self.open = false;
    }
}
