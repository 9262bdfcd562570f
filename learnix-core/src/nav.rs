/// Something that may close (or open) the mobile navigation overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuEvent {
    /// The hamburger button was activated.
    ButtonClicked,
    /// A link inside the overlay was followed.
    LinkClicked,
    /// A click landed outside both the overlay and its button.
    OutsideClick,
    Escape,
    Resize { width: f64 },
}

/// Open/closed flag for the mobile navigation overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Apply an event, returning the new open flag if it changed.
    ///
    /// `breakpoint` is the viewport width at which the overlay no longer
    /// makes sense and is force-closed.
    pub fn handle(&mut self, event: MenuEvent, breakpoint: f64) -> Option<bool> {
        let next = match event {
            MenuEvent::ButtonClicked => !self.open,
            MenuEvent::LinkClicked | MenuEvent::OutsideClick | MenuEvent::Escape => false,
            MenuEvent::Resize { width } if width >= breakpoint => false,
            MenuEvent::Resize { .. } => self.open,
        };
        self.set(next).then_some(next)
    }

    /// Open the overlay; `true` if it was closed.
    pub fn open(&mut self) -> bool {
        self.set(true)
    }

    /// Close the overlay; `true` if it was open.
    pub fn close(&mut self) -> bool {
        self.set(false)
    }

    /// Flip the overlay and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    fn set(&mut self, open: bool) -> bool {
        let changed = self.open != open;
        self.open = open;
        changed
    }
}
