//! Page-level configuration override loading.

use crate::app::dom::document;
use crate::core::config::{BehaviorConfig, CONFIG_ELEMENT_ID};
use gloo::console;

/// Read the optional JSON override block, falling back to defaults when it is absent or invalid.
pub(crate) fn load_config() -> BehaviorConfig {
    let Some(raw) = document()
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content())
        .filter(|raw| !raw.trim().is_empty())
    else {
        return BehaviorConfig::default();
    };
    BehaviorConfig::from_json(&raw).unwrap_or_else(|err| {
        console::error!("invalid behavior configuration; using defaults", err.to_string());
        BehaviorConfig::default()
    })
}
