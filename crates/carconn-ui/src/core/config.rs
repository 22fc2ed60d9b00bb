//! Markup contract and timing configuration for the behavior layer.
//!
//! # Design
//! - Defaults reproduce the class names and attributes the server templates emit.
//! - A page may override any field through a JSON block; omitted fields keep defaults.
//! - Overrides are validated once; an invalid payload falls back to defaults.

use crate::core::ancillary::FADE_OUT_MS;
use crate::core::breakpoints::DESKTOP_MIN_WIDTH;
use crate::core::dropdown::{HIDE_DELAY_MS, SHOW_DELAY_MS};
use crate::core::error::{UiError, UiResult};
use crate::core::reveal::RevealOptions;
use crate::core::tooltip::TOOLTIP_GAP;
use serde::Deserialize;

/// Element id of the optional `<script type="application/json">` override block.
pub const CONFIG_ELEMENT_ID: &str = "carconn-ui-config";

/// Complete behavior configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BehaviorConfig {
    /// Theme controller settings.
    pub theme: ThemeConfig,
    /// Dropdown navigation settings.
    pub navigation: NavigationConfig,
    /// Mobile menu settings.
    pub mobile_menu: MobileMenuConfig,
    /// Tab controller settings.
    pub tabs: TabsConfig,
    /// Time localization settings.
    pub time: TimeConfig,
    /// Tooltip settings.
    pub tooltip: TooltipConfig,
    /// Scroll reveal settings.
    pub reveal: RevealConfig,
    /// Row, alert, and autofocus settings.
    pub ancillary: AncillaryConfig,
}

/// Theme controller settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Storage key holding the explicit preference.
    pub storage_key: String,
    /// Toggle controls.
    pub toggle_selector: String,
    /// Icon element inside each toggle control.
    pub icon_selector: String,
    /// Attribute set on the document element.
    pub attribute: String,
    /// Media query describing the system dark preference.
    pub media_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            toggle_selector: ".theme-toggle".to_string(),
            icon_selector: ".theme-icon".to_string(),
            attribute: "data-theme".to_string(),
            media_query: "(prefers-color-scheme: dark)".to_string(),
        }
    }
}

/// Dropdown navigation settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavigationConfig {
    /// Dropdown containers.
    pub dropdown_selector: String,
    /// Submenu inside a container.
    pub menu_selector: String,
    /// Clickable label used on narrow viewports.
    pub label_selector: String,
    /// Class marking an open submenu.
    pub open_class: String,
    /// Inclusive minimum width for hover behavior.
    pub desktop_min_width: u16,
    /// Delay before the open class is added.
    pub show_delay_ms: u32,
    /// Delay before a closed submenu is hidden.
    pub hide_delay_ms: u32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            dropdown_selector: ".dropdown".to_string(),
            menu_selector: ".dropdown-menu".to_string(),
            label_selector: ".nav-link".to_string(),
            open_class: "show".to_string(),
            desktop_min_width: DESKTOP_MIN_WIDTH,
            show_delay_ms: SHOW_DELAY_MS,
            hide_delay_ms: HIDE_DELAY_MS,
        }
    }
}

/// Mobile menu settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MobileMenuConfig {
    /// Toggle control.
    pub toggler_selector: String,
    /// Navigation panel.
    pub nav_selector: String,
    /// Class shared by both while open.
    pub active_class: String,
}

impl Default for MobileMenuConfig {
    fn default() -> Self {
        Self {
            toggler_selector: ".navbar-toggler".to_string(),
            nav_selector: ".navbar-nav".to_string(),
            active_class: "active".to_string(),
        }
    }
}

/// Tab controller settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TabsConfig {
    /// Tab triggers; their `href` is the pane selector.
    pub trigger_selector: String,
    /// Enclosing tab group.
    pub group_selector: String,
    /// Triggers deactivated within a group.
    pub group_trigger_selector: String,
    /// Panes deactivated page-wide.
    pub pane_selector: String,
    /// Active marker class.
    pub active_class: String,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            trigger_selector: r#"[data-bs-toggle="tab"]"#.to_string(),
            group_selector: ".nav-tabs".to_string(),
            group_trigger_selector: ".nav-link".to_string(),
            pane_selector: ".tab-pane".to_string(),
            active_class: "active".to_string(),
        }
    }
}

/// Time localization settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimeConfig {
    /// Elements whose text is a raw timestamp.
    pub text_selector: String,
    /// Elements whose title embeds marker spans.
    pub title_selector: String,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            text_selector: ".js-convert-time".to_string(),
            title_selector: ".js-convert-time-title".to_string(),
        }
    }
}

/// Tooltip settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TooltipConfig {
    /// Elements flagged for custom tooltips.
    pub trigger_selector: String,
    /// Class of the floating popup.
    pub popup_class: String,
    /// Gap between popup and trigger.
    pub gap: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            trigger_selector: r#"[data-toggle="tooltip"]"#.to_string(),
            popup_class: "tooltip-popup".to_string(),
            gap: TOOLTIP_GAP,
        }
    }
}

/// Scroll reveal settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Elements watched for reveal.
    pub selector: String,
    /// One-way marker class.
    pub revealed_class: String,
    /// Visible fraction required.
    pub threshold: f64,
    /// Bottom shrinkage in pixels.
    pub bottom_margin: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        let options = RevealOptions::default();
        Self {
            selector: ".scroll-reveal".to_string(),
            revealed_class: "revealed".to_string(),
            threshold: options.threshold,
            bottom_margin: options.bottom_margin,
        }
    }
}

impl RevealConfig {
    /// Observer options derived from this section.
    #[must_use]
    pub const fn options(&self) -> RevealOptions {
        RevealOptions {
            threshold: self.threshold,
            bottom_margin: self.bottom_margin,
        }
    }
}

/// Row, alert, and autofocus settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AncillaryConfig {
    /// Attribute carrying a row's navigation target.
    pub row_attribute: String,
    /// Class marking dismiss controls.
    pub dismiss_class: String,
    /// Alert container closed by a dismiss control.
    pub alert_selector: String,
    /// Delay before a dismissed alert is removed.
    pub fade_ms: u32,
    /// Form attribute opting out of autofocus.
    pub no_autofocus_attribute: String,
}

impl Default for AncillaryConfig {
    fn default() -> Self {
        Self {
            row_attribute: "data-href".to_string(),
            dismiss_class: "btn-close".to_string(),
            alert_selector: ".alert".to_string(),
            fade_ms: FADE_OUT_MS,
            no_autofocus_attribute: "data-no-autofocus".to_string(),
        }
    }
}

impl AncillaryConfig {
    /// Selector matching the nearest clickable row.
    #[must_use]
    pub fn row_selector(&self) -> String {
        format!("[{}]", self.row_attribute)
    }
}

impl BehaviorConfig {
    /// Parse a JSON override, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::ConfigDecode`] for malformed JSON or unknown fields and
    /// [`UiError::Config`] when a value fails validation.
    pub fn from_json(raw: &str) -> UiResult<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|source| UiError::ConfigDecode { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that selectors are non-empty and numeric settings are in range.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`] naming the first offending field.
    pub fn validate(&self) -> UiResult<()> {
        let required = [
            ("theme.storage_key", &self.theme.storage_key),
            ("theme.toggle_selector", &self.theme.toggle_selector),
            ("theme.attribute", &self.theme.attribute),
            ("navigation.dropdown_selector", &self.navigation.dropdown_selector),
            ("navigation.menu_selector", &self.navigation.menu_selector),
            ("navigation.open_class", &self.navigation.open_class),
            ("mobile_menu.toggler_selector", &self.mobile_menu.toggler_selector),
            ("mobile_menu.nav_selector", &self.mobile_menu.nav_selector),
            ("mobile_menu.active_class", &self.mobile_menu.active_class),
            ("tabs.trigger_selector", &self.tabs.trigger_selector),
            ("tabs.pane_selector", &self.tabs.pane_selector),
            ("tabs.active_class", &self.tabs.active_class),
            ("tooltip.trigger_selector", &self.tooltip.trigger_selector),
            ("reveal.selector", &self.reveal.selector),
            ("reveal.revealed_class", &self.reveal.revealed_class),
            ("ancillary.row_attribute", &self.ancillary.row_attribute),
            ("ancillary.dismiss_class", &self.ancillary.dismiss_class),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(UiError::Config {
                field: *field,
                reason: "empty",
            });
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(UiError::Config {
                field: "reveal.threshold",
                reason: "out_of_range",
            });
        }
        if self.reveal.bottom_margin < 0.0 || !self.reveal.bottom_margin.is_finite() {
            return Err(UiError::Config {
                field: "reveal.bottom_margin",
                reason: "out_of_range",
            });
        }
        if self.navigation.desktop_min_width == 0 {
            return Err(UiError::Config {
                field: "navigation.desktop_min_width",
                reason: "zero",
            });
        }
        if !self.tooltip.gap.is_finite() {
            return Err(UiError::Config {
                field: "tooltip.gap",
                reason: "not_finite",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_markup_contract() {
        let config = BehaviorConfig::default();
        assert_eq!(config.theme.storage_key, "theme");
        assert_eq!(config.navigation.desktop_min_width, 768);
        assert_eq!(config.navigation.show_delay_ms, 10);
        assert_eq!(config.navigation.hide_delay_ms, 300);
        assert_eq!(config.tabs.trigger_selector, r#"[data-bs-toggle="tab"]"#);
        assert_eq!(config.reveal.options().root_margin(), "0px 0px -50px 0px");
        assert_eq!(config.ancillary.row_selector(), "[data-href]");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = BehaviorConfig::from_json(
            r#"{"theme":{"storage_key":"cc.theme"},"reveal":{"threshold":0.25}}"#,
        )
        .unwrap();
        assert_eq!(config.theme.storage_key, "cc.theme");
        assert_eq!(config.theme.toggle_selector, ".theme-toggle");
        assert!((config.reveal.threshold - 0.25).abs() < f64::EPSILON);
        assert_eq!(config.mobile_menu, MobileMenuConfig::default());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = BehaviorConfig::from_json(r#"{"theme":{"storage":"x"}}"#).unwrap_err();
        assert!(matches!(err, UiError::ConfigDecode { .. }));
    }

    #[test]
    fn invalid_values_name_the_field() {
        let err = BehaviorConfig::from_json(r#"{"reveal":{"threshold":1.5}}"#).unwrap_err();
        assert!(matches!(
            err,
            UiError::Config {
                field: "reveal.threshold",
                ..
            }
        ));
        let err = BehaviorConfig::from_json(r#"{"tabs":{"active_class":" "}}"#).unwrap_err();
        assert!(matches!(
            err,
            UiError::Config {
                field: "tabs.active_class",
                reason: "empty"
            }
        ));
    }
}
