//! Responsive breakpoint used to pick dropdown interaction mode.

/// Minimum viewport width, in CSS pixels, treated as a desktop layout.
pub const DESKTOP_MIN_WIDTH: u16 = 768;

/// Viewport class measured once at initialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Breakpoint {
    /// Narrow viewport; dropdowns open on click.
    Mobile,
    /// Wide viewport; dropdowns open on hover.
    Desktop,
}

impl Breakpoint {
    /// Classify a viewport width against an inclusive desktop minimum.
    #[must_use]
    pub fn for_width(width: f64, desktop_min: u16) -> Self {
        if width >= f64::from(desktop_min) {
            Self::Desktop
        } else {
            Self::Mobile
        }
    }

    /// Stable name for diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Breakpoint, DESKTOP_MIN_WIDTH};

    #[test]
    fn breakpoint_selection_matches_ranges() {
        assert_eq!(Breakpoint::for_width(0.0, DESKTOP_MIN_WIDTH), Breakpoint::Mobile);
        assert_eq!(Breakpoint::for_width(767.9, DESKTOP_MIN_WIDTH), Breakpoint::Mobile);
        assert_eq!(Breakpoint::for_width(768.0, DESKTOP_MIN_WIDTH), Breakpoint::Desktop);
        assert_eq!(Breakpoint::for_width(2000.0, DESKTOP_MIN_WIDTH), Breakpoint::Desktop);
    }

    #[test]
    fn names_are_stable() {
        assert_eq!(Breakpoint::Mobile.name(), "mobile");
        assert_eq!(Breakpoint::Desktop.name(), "desktop");
    }
}
