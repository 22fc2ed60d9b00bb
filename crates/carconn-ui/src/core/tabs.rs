//! Tab trigger and pane activation.
//!
//! # Design
//! - Triggers are scoped to their enclosing group; panes are deactivated page-wide.
//!   Two groups on one page therefore clear each other's panes. This mirrors the
//!   markup contract the page styles depend on and is pinned by a test.
//! - A click whose target pane cannot be resolved changes nothing.
//! - The wasm layer snapshots the DOM into a board, applies the click, and writes
//!   the resulting flags back.

/// Outcome of a trigger click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabClick {
    /// Trigger and pane were activated.
    Activated,
    /// Target pane was not found; state untouched.
    MissingTarget,
    /// Clicked element is not a known trigger; state untouched.
    UnknownTrigger,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Trigger<K> {
    key: K,
    group: usize,
    active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Pane<K> {
    key: K,
    active: bool,
}

/// Page-level snapshot of tab triggers and panes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabBoard<K> {
    triggers: Vec<Trigger<K>>,
    panes: Vec<Pane<K>>,
}

impl<K> Default for TabBoard<K> {
    fn default() -> Self {
        Self {
            triggers: Vec::new(),
            panes: Vec::new(),
        }
    }
}

impl<K: PartialEq> TabBoard<K> {
    /// Empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a trigger within a group. Duplicate keys are ignored.
    pub fn add_trigger(&mut self, key: K, group: usize, active: bool) {
        if self.triggers.iter().all(|trigger| trigger.key != key) {
            self.triggers.push(Trigger { key, group, active });
        }
    }

    /// Register a pane. Duplicate keys are ignored.
    pub fn add_pane(&mut self, key: K, active: bool) {
        if self.panes.iter().all(|pane| pane.key != key) {
            self.panes.push(Pane { key, active });
        }
    }

    /// Apply a click on `trigger` whose target resolved to `target`.
    pub fn click(&mut self, trigger: &K, target: Option<&K>) -> TabClick {
        let Some(group) = self
            .triggers
            .iter()
            .find(|candidate| &candidate.key == trigger)
            .map(|candidate| candidate.group)
        else {
            return TabClick::UnknownTrigger;
        };
        let Some(target) = target else {
            return TabClick::MissingTarget;
        };
        if self.panes.iter().all(|pane| &pane.key != target) {
            return TabClick::MissingTarget;
        }

        for candidate in &mut self.triggers {
            if candidate.group == group {
                candidate.active = &candidate.key == trigger;
            }
        }
        for pane in &mut self.panes {
            pane.active = &pane.key == target;
        }
        TabClick::Activated
    }

    /// Whether a trigger is marked active.
    #[must_use]
    pub fn is_trigger_active(&self, key: &K) -> bool {
        self.triggers
            .iter()
            .any(|trigger| &trigger.key == key && trigger.active)
    }

    /// Whether a pane is marked active.
    #[must_use]
    pub fn is_pane_active(&self, key: &K) -> bool {
        self.panes.iter().any(|pane| &pane.key == key && pane.active)
    }

    /// Active triggers within one group.
    pub fn active_triggers(&self, group: usize) -> impl Iterator<Item = &K> {
        self.triggers
            .iter()
            .filter(move |trigger| trigger.group == group && trigger.active)
            .map(|trigger| &trigger.key)
    }

    /// Active panes across the page.
    pub fn active_panes(&self) -> impl Iterator<Item = &K> {
        self.panes
            .iter()
            .filter(|pane| pane.active)
            .map(|pane| &pane.key)
    }

    /// Every trigger with its active flag, for syncing back to the DOM.
    pub fn trigger_flags(&self) -> impl Iterator<Item = (&K, bool)> {
        self.triggers
            .iter()
            .map(|trigger| (&trigger.key, trigger.active))
    }

    /// Every pane with its active flag, for syncing back to the DOM.
    pub fn pane_flags(&self) -> impl Iterator<Item = (&K, bool)> {
        self.panes.iter().map(|pane| (&pane.key, pane.active))
    }
}

#[cfg(test)]
mod tests {
    use super::{TabBoard, TabClick};

    fn two_groups() -> TabBoard<&'static str> {
        let mut board = TabBoard::new();
        board.add_trigger("a1", 0, true);
        board.add_trigger("a2", 0, false);
        board.add_trigger("b1", 1, true);
        board.add_trigger("b2", 1, false);
        board.add_pane("#a1", true);
        board.add_pane("#a2", false);
        board.add_pane("#b1", true);
        board.add_pane("#b2", false);
        board
    }

    #[test]
    fn valid_clicks_keep_single_active_trigger_and_pane() {
        let mut board = two_groups();
        for (trigger, pane) in [("a2", "#a2"), ("a1", "#a1"), ("a2", "#a2")] {
            assert_eq!(board.click(&trigger, Some(&pane)), TabClick::Activated);
            assert_eq!(board.active_triggers(0).collect::<Vec<_>>(), vec![&trigger]);
            assert_eq!(board.active_panes().collect::<Vec<_>>(), vec![&pane]);
        }
    }

    #[test]
    fn missing_target_leaves_state_unchanged() {
        let mut board = two_groups();
        board.click(&"a2", Some(&"#a2"));
        let before = board.clone();
        assert_eq!(board.click(&"a1", None), TabClick::MissingTarget);
        assert_eq!(board.click(&"a1", Some(&"#nowhere")), TabClick::MissingTarget);
        assert_eq!(board, before);
        assert!(board.is_trigger_active(&"a2"));
    }

    #[test]
    fn unknown_trigger_is_ignored() {
        let mut board = two_groups();
        let before = board.clone();
        assert_eq!(board.click(&"zz", Some(&"#a2")), TabClick::UnknownTrigger);
        assert_eq!(board, before);
    }

    #[test]
    fn triggers_in_other_groups_keep_their_state() {
        let mut board = two_groups();
        board.click(&"a2", Some(&"#a2"));
        assert!(board.is_trigger_active(&"b1"));
        assert!(!board.is_trigger_active(&"a1"));
    }

    #[test]
    fn pane_deactivation_crosses_groups() {
        // Clicking in group A hides group B's pane as well; panes are cleared page-wide.
        let mut board = two_groups();
        board.click(&"a2", Some(&"#a2"));
        assert!(!board.is_pane_active(&"#b1"));
        assert_eq!(board.active_panes().count(), 1);
    }

    #[test]
    fn duplicate_registration_is_ignored() {
        let mut board = TabBoard::new();
        board.add_trigger(1, 0, false);
        board.add_trigger(1, 0, true);
        board.add_pane(9, false);
        board.add_pane(9, true);
        assert_eq!(board.trigger_flags().count(), 1);
        assert_eq!(board.pane_flags().collect::<Vec<_>>(), vec![(&9, false)]);
    }
}
