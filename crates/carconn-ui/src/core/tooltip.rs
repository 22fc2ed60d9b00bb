//! Floating tooltip geometry and per-trigger ownership.
//!
//! # Design
//! - Each trigger owns at most one live tooltip handle.
//! - `show` evicts any existing handle before tracking a new one; the caller
//!   removes the evicted node from the document.

/// Vertical gap between the popup's bottom edge and the trigger's top edge.
pub const TOOLTIP_GAP: f64 = 8.0;

/// Axis-aligned box in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Rect {
    /// Build a rect from its left/top corner and size.
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Right edge.
    #[must_use]
    pub const fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Horizontal center.
    #[must_use]
    pub const fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// Computed popup offsets, applied as `left`/`top` style values in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipPlacement {
    /// Popup left edge.
    pub left: f64,
    /// Popup top edge.
    pub top: f64,
}

impl TooltipPlacement {
    /// CSS `left` value.
    #[must_use]
    pub fn left_px(&self) -> String {
        format!("{}px", self.left)
    }

    /// CSS `top` value.
    #[must_use]
    pub fn top_px(&self) -> String {
        format!("{}px", self.top)
    }
}

/// Center a popup of `popup_width` x `popup_height` above `trigger`, `gap` units clear.
#[must_use]
pub const fn place_above(
    trigger: Rect,
    popup_width: f64,
    popup_height: f64,
    gap: f64,
) -> TooltipPlacement {
    TooltipPlacement {
        left: trigger.center_x() - popup_width / 2.0,
        top: trigger.top - popup_height - gap,
    }
}

/// Mapping from trigger identity to its single live tooltip handle.
#[derive(Debug)]
pub struct TooltipRegistry<K, H> {
    live: Vec<(K, H)>,
}

impl<K, H> Default for TooltipRegistry<K, H> {
    fn default() -> Self {
        Self { live: Vec::new() }
    }
}

impl<K: PartialEq, H> TooltipRegistry<K, H> {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `handle` for `trigger`, returning any handle it replaces.
    pub fn show(&mut self, trigger: K, handle: H) -> Option<H> {
        let evicted = self.hide(&trigger);
        self.live.push((trigger, handle));
        evicted
    }

    /// Stop tracking the handle for `trigger`, returning it for removal.
    pub fn hide(&mut self, trigger: &K) -> Option<H> {
        let index = self.live.iter().position(|(key, _)| key == trigger)?;
        Some(self.live.swap_remove(index).1)
    }

    /// Live handle for `trigger`.
    #[must_use]
    pub fn get(&self, trigger: &K) -> Option<&H> {
        self.live
            .iter()
            .find(|(key, _)| key == trigger)
            .map(|(_, handle)| handle)
    }

    /// Number of live tooltips.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Whether no tooltip is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_is_centered_above_trigger() {
        let trigger = Rect::new(100.0, 200.0, 60.0, 20.0);
        let placement = place_above(trigger, 40.0, 30.0, TOOLTIP_GAP);
        assert!((placement.left - 110.0).abs() < f64::EPSILON);
        assert!((placement.top - 162.0).abs() < f64::EPSILON);
        assert!((placement.top + 30.0 - (trigger.top - TOOLTIP_GAP)).abs() < f64::EPSILON);
        assert_eq!(placement.left_px(), "110px");
        assert_eq!(placement.top_px(), "162px");
    }

    #[test]
    fn wide_popup_extends_past_left_edge() {
        let placement = place_above(Rect::new(0.0, 50.0, 10.0, 10.0), 100.0, 20.0, TOOLTIP_GAP);
        assert!((placement.left + 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rect_edges() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert!((rect.right() - 4.0).abs() < f64::EPSILON);
        assert!((rect.bottom() - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn show_then_hide_leaves_nothing() {
        let mut registry = TooltipRegistry::new();
        assert_eq!(registry.show("row", 1), None);
        assert_eq!(registry.hide(&"row"), Some(1));
        assert!(registry.is_empty());
        assert_eq!(registry.hide(&"row"), None);
    }

    #[test]
    fn double_show_keeps_exactly_one() {
        let mut registry = TooltipRegistry::new();
        registry.show("row", 1);
        assert_eq!(registry.show("row", 2), Some(1));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&"row"), Some(&2));
    }

    #[test]
    fn triggers_are_independent() {
        let mut registry = TooltipRegistry::new();
        registry.show("a", 1);
        registry.show("b", 2);
        assert_eq!(registry.hide(&"a"), Some(1));
        assert_eq!(registry.get(&"b"), Some(&2));
    }
}
