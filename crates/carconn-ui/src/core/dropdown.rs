//! Per-dropdown open/close state with generation tokens for deferred effects.
//!
//! # Design
//! - Every transition bumps a generation counter.
//! - Deferred show/hide callbacks carry the generation they were scheduled under
//!   and act only if it is still current, so a stale hide never stomps a reopen.

/// Delay before the transition class is added after opening.
pub const SHOW_DELAY_MS: u32 = 10;
/// Delay before a closed submenu is removed from layout.
pub const HIDE_DELAY_MS: u32 = 300;

/// Token for a scheduled "add transition class" callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShowTicket(u64);

/// Token for a scheduled "remove from layout" callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HideTicket(u64);

/// Open/closed state of a single navigation dropdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropdownState {
    open: bool,
    generation: u64,
}

impl DropdownState {
    /// Whether the dropdown is currently open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Hover-enter: open and invalidate any pending hide.
    pub const fn pointer_enter(&mut self) -> ShowTicket {
        self.open = true;
        self.generation += 1;
        ShowTicket(self.generation)
    }

    /// Hover-leave: close and schedule a hide under a fresh generation.
    pub const fn pointer_leave(&mut self) -> HideTicket {
        self.open = false;
        self.generation += 1;
        HideTicket(self.generation)
    }

    /// Whether a deferred show callback should still add the transition class.
    #[must_use]
    pub const fn should_show(&self, ticket: ShowTicket) -> bool {
        self.open && self.generation == ticket.0
    }

    /// Whether a deferred hide callback should still remove the submenu from layout.
    #[must_use]
    pub const fn should_hide(&self, ticket: HideTicket) -> bool {
        !self.open && self.generation == ticket.0
    }

    /// Click toggle used on narrow viewports; returns the new open flag.
    pub const fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.generation += 1;
        self.open
    }
}
