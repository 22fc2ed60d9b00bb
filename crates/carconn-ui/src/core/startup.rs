//! Document lifecycle gate for attaching behaviors.

/// `document.readyState` as reported by the browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadyState {
    /// Markup is still being parsed.
    Loading,
    /// Markup is parsed; subresources may still load.
    Interactive,
    /// Document and subresources are loaded.
    Complete,
}

impl ReadyState {
    /// Classify the string from `document.readyState`.
    ///
    /// Unknown values count as parsed so behaviors still attach.
    #[must_use]
    pub fn from_dom(value: &str) -> Self {
        match value {
            "loading" => Self::Loading,
            "interactive" => Self::Interactive,
            _ => Self::Complete,
        }
    }

    /// Whether behaviors must wait for `DOMContentLoaded`.
    #[must_use]
    pub const fn awaits_parse(self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::ReadyState;

    #[test]
    fn only_loading_defers_start() {
        assert!(ReadyState::from_dom("loading").awaits_parse());
        assert!(!ReadyState::from_dom("interactive").awaits_parse());
        assert!(!ReadyState::from_dom("complete").awaits_parse());
    }

    #[test]
    fn unknown_state_starts_immediately() {
        assert_eq!(ReadyState::from_dom(""), ReadyState::Complete);
        assert!(!ReadyState::from_dom("prerender").awaits_parse());
    }
}
