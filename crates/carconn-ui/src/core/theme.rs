//! Theme preference model and the explicit-over-system resolution rule.
//!
//! # Design
//! - Only explicit user choices are persisted; the resolved startup theme is not.
//! - A stored preference always wins over system preference changes.
//! - Storage access goes through [`PreferenceStore`] so the precedence rule is testable natively.

use crate::core::error::{UiError, UiResult};

/// Glyph shown on toggle controls while the dark theme is applied.
pub const SUN_GLYPH: &str = "\u{2600}\u{fe0f}";
/// Glyph shown on toggle controls while the light theme is applied.
pub const MOON_GLYPH: &str = "\u{1f319}";

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light theme mode.
    #[default]
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used in CSS datasets and storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored or caller-supplied theme name.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidTheme`] for anything other than `light` or `dark`.
    pub fn parse(value: &str) -> UiResult<Self> {
        match value.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UiError::InvalidTheme {
                value: other.to_string(),
            }),
        }
    }

    /// The opposite theme.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Toggle icon glyph for a control once this theme is applied.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Dark => SUN_GLYPH,
            Self::Light => MOON_GLYPH,
        }
    }

    /// Map a `prefers-color-scheme: dark` match result onto a theme.
    #[must_use]
    pub const fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

/// Durable slot holding the explicit theme preference.
pub trait PreferenceStore {
    /// Read the stored preference; `None` means "follow the system".
    fn load(&self) -> Option<ThemeMode>;
    /// Persist an explicit preference.
    fn save(&mut self, mode: ThemeMode);
    /// Forget the explicit preference.
    fn clear(&mut self);
}

/// In-memory store used for native tests and storage-less environments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    raw: Option<String>,
}

impl MemoryStore {
    /// Store pre-seeded with a raw string, mirroring whatever a browser slot may hold.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    /// Raw stored string, if any.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<ThemeMode> {
        self.raw.as_deref().and_then(|raw| ThemeMode::parse(raw).ok())
    }

    fn save(&mut self, mode: ThemeMode) {
        self.raw = Some(mode.as_str().to_string());
    }

    fn clear(&mut self) {
        self.raw = None;
    }
}

/// Resolve the theme to apply: explicit preference, then system preference, then light.
#[must_use]
pub fn resolve_theme(stored: Option<ThemeMode>, system_prefers_dark: Option<bool>) -> ThemeMode {
    stored
        .or_else(|| system_prefers_dark.map(ThemeMode::from_system))
        .unwrap_or_default()
}

/// Applied-theme state machine bound to a preference store.
#[derive(Debug)]
pub struct ThemeController<S> {
    store: S,
    applied: ThemeMode,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Resolve the startup theme without persisting it.
    pub fn init(store: S, system_prefers_dark: Option<bool>) -> Self {
        let applied = resolve_theme(store.load(), system_prefers_dark);
        Self { store, applied }
    }

    /// Currently applied theme.
    #[must_use]
    pub const fn current(&self) -> ThemeMode {
        self.applied
    }

    /// Apply and persist an explicit choice.
    pub fn set(&mut self, mode: ThemeMode) -> ThemeMode {
        self.store.save(mode);
        self.applied = mode;
        mode
    }

    /// Flip the applied theme and persist the result explicitly.
    pub fn toggle(&mut self) -> ThemeMode {
        self.set(self.applied.flipped())
    }

    /// React to a system preference change.
    ///
    /// Returns the newly applied theme, or `None` when an explicit preference is stored.
    pub fn on_system_change(&mut self, prefers_dark: bool) -> Option<ThemeMode> {
        if self.store.load().is_some() {
            return None;
        }
        self.applied = ThemeMode::from_system(prefers_dark);
        Some(self.applied)
    }

    /// Backing preference store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the backing store (e.g. to clear the preference).
    pub const fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_round_trips_names() {
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
        assert_eq!(ThemeMode::parse(" dark ").ok(), Some(ThemeMode::Dark));
        assert!(matches!(
            ThemeMode::parse("sepia"),
            Err(UiError::InvalidTheme { value }) if value == "sepia"
        ));
    }

    #[test]
    fn icon_reflects_new_theme() {
        assert_eq!(ThemeMode::Dark.icon(), SUN_GLYPH);
        assert_eq!(ThemeMode::Light.icon(), MOON_GLYPH);
    }

    #[test]
    fn resolution_prefers_stored_then_system_then_light() {
        assert_eq!(resolve_theme(Some(ThemeMode::Light), Some(true)), ThemeMode::Light);
        assert_eq!(resolve_theme(None, Some(true)), ThemeMode::Dark);
        assert_eq!(resolve_theme(None, Some(false)), ThemeMode::Light);
        assert_eq!(resolve_theme(None, None), ThemeMode::Light);
    }

    #[test]
    fn unknown_stored_value_counts_as_unset() {
        let controller = ThemeController::init(MemoryStore::with_raw("neon"), Some(true));
        assert_eq!(controller.current(), ThemeMode::Dark);
    }

    #[test]
    fn init_does_not_persist_resolved_theme() {
        let controller = ThemeController::init(MemoryStore::default(), Some(true));
        assert_eq!(controller.current(), ThemeMode::Dark);
        assert_eq!(controller.store().raw(), None);
    }

    #[test]
    fn explicit_choice_survives_system_changes() {
        let mut controller = ThemeController::init(MemoryStore::default(), Some(false));
        let sequence = [true, false, true, true, false];
        let mut expected = controller.current();
        for (step, system_dark) in sequence.into_iter().enumerate() {
            if step % 2 == 0 {
                expected = controller.toggle();
            }
            assert_eq!(controller.on_system_change(system_dark), None);
            assert_eq!(controller.current(), expected);
            assert_eq!(controller.store().load(), Some(expected));
        }
    }

    #[test]
    fn set_overrides_regardless_of_previous_state() {
        let mut controller = ThemeController::init(MemoryStore::with_raw("dark"), Some(true));
        assert_eq!(controller.set(ThemeMode::Light), ThemeMode::Light);
        assert_eq!(controller.on_system_change(true), None);
        assert_eq!(controller.current(), ThemeMode::Light);
        assert_eq!(controller.store().raw(), Some("light"));
    }

    #[test]
    fn cleared_preference_follows_system_again() {
        let mut controller = ThemeController::init(MemoryStore::default(), Some(false));
        controller.toggle();
        controller.store_mut().clear();
        assert_eq!(controller.on_system_change(false), Some(ThemeMode::Light));
        assert_eq!(controller.current(), ThemeMode::Light);
        assert_eq!(controller.on_system_change(true), Some(ThemeMode::Dark));
        assert_eq!(controller.current(), ThemeMode::Dark);
    }
}
