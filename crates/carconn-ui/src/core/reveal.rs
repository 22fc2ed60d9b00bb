//! One-way scroll reveal bookkeeping.

/// Observer options for the shared reveal watcher.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element's area that must be visible.
    pub threshold: f64,
    /// Shrinkage applied to the viewport's bottom edge, in CSS pixels.
    pub bottom_margin: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: 50.0,
        }
    }
}

impl RevealOptions {
    /// `rootMargin` string for the intersection observer.
    #[must_use]
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin)
    }
}

/// Result of feeding one intersection change into the set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Element just transitioned to revealed; mark it and stop watching.
    Revealed,
    /// Element was already revealed; nothing to do.
    AlreadyRevealed,
    /// Element is still outside the visible band.
    Hidden,
    /// Element was never registered.
    Unwatched,
}

/// Elements pending reveal plus those already revealed.
#[derive(Debug)]
pub struct RevealSet<K> {
    pending: Vec<K>,
    revealed: Vec<K>,
}

impl<K> Default for RevealSet<K> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            revealed: Vec::new(),
        }
    }
}

impl<K: PartialEq> RevealSet<K> {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching `key`. Already-known keys are ignored.
    pub fn watch(&mut self, key: K) {
        if !self.pending.contains(&key) && !self.revealed.contains(&key) {
            self.pending.push(key);
        }
    }

    /// Feed an intersection change for `key`.
    pub fn observe(&mut self, key: &K, intersecting: bool) -> RevealOutcome {
        if self.revealed.contains(key) {
            return RevealOutcome::AlreadyRevealed;
        }
        let Some(index) = self.pending.iter().position(|candidate| candidate == key) else {
            return RevealOutcome::Unwatched;
        };
        if !intersecting {
            return RevealOutcome::Hidden;
        }
        let key = self.pending.swap_remove(index);
        self.revealed.push(key);
        RevealOutcome::Revealed
    }

    /// Whether `key` has been revealed.
    #[must_use]
    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }

    /// Number of elements still waiting.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}
