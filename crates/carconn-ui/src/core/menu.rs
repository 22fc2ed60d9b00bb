//! Mobile navigation panel toggled in lock-step with its control.

/// Where a document click landed relative to the menu elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickSite {
    /// Inside the toggler control.
    Toggler,
    /// Inside the navigation panel.
    Panel,
    /// Anywhere else on the page.
    Outside,
}

/// Shared `active` flag for the toggler and navigation panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    /// Whether both elements carry the active marker.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Toggler click; returns the new open flag for both elements.
    pub const fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Document click; returns `true` when the click closed the menu.
    ///
    /// Clicks outside both elements always close; a closed menu reports `true`
    /// as well since both elements must end up inactive.
    pub const fn document_click(&mut self, site: ClickSite) -> bool {
        match site {
            ClickSite::Outside => {
                self.open = false;
                true
            }
            ClickSite::Toggler | ClickSite::Panel => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ClickSite, MobileMenu};

    #[test]
    fn toggler_flips_both() {
        let mut menu = MobileMenu::default();
        assert!(menu.toggle());
        assert!(menu.is_open());
        assert!(!menu.toggle());
    }

    #[test]
    fn inside_clicks_are_ignored() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert!(!menu.document_click(ClickSite::Panel));
        assert!(!menu.document_click(ClickSite::Toggler));
        assert!(menu.is_open());
    }

    #[test]
    fn outside_click_closes() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert!(menu.document_click(ClickSite::Outside));
        assert!(!menu.is_open());
    }
}
