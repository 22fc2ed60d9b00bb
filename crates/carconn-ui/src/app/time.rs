//! One-shot timestamp localization pass.

use crate::app::dom::{document, query_all};
use crate::core::config::TimeConfig;
use crate::core::time::{MarkerPattern, TimeFormatter, Timestamp, localize_text};
use gloo::console;
use gloo::utils::window;
use js_sys::Date;
use wasm_bindgen::JsValue;

const FALLBACK_LOCALE: &str = "en-US";

/// Renders through `Date.prototype.toLocaleString` in the browser's language.
struct BrowserFormatter {
    locale: String,
}

impl BrowserFormatter {
    fn detect() -> Self {
        let locale = window()
            .navigator()
            .language()
            .filter(|tag| !tag.is_empty())
            .unwrap_or_else(|| FALLBACK_LOCALE.to_string());
        Self { locale }
    }
}

impl TimeFormatter for BrowserFormatter {
    fn format(&self, timestamp: Timestamp) -> String {
        let source = match timestamp {
            Timestamp::Instant(instant) => JsValue::from_f64(instant.timestamp_millis() as f64),
            // An offset-free ISO string is read by `Date` in the browser's zone.
            Timestamp::Wall(wall) => {
                JsValue::from_str(&wall.format("%Y-%m-%dT%H:%M:%S%.3f").to_string())
            }
        };
        Date::new(&source)
            .to_locale_string(&self.locale, &JsValue::UNDEFINED)
            .into()
    }
}

pub(crate) fn init_time_conversion(config: &TimeConfig) {
    let Some(document) = document() else {
        return;
    };
    let formatter = BrowserFormatter::detect();

    for element in query_all(&document, &config.text_selector) {
        let raw = element.text_content().unwrap_or_default();
        match localize_text(&raw, &formatter) {
            Ok(rendered) => element.set_text_content(Some(&rendered)),
            Err(err) => console::warn!("failed to parse time", raw.trim(), err.to_string()),
        }
    }

    let titled = query_all(&document, &config.title_selector);
    if titled.is_empty() {
        return;
    }
    let pattern = match MarkerPattern::new() {
        Ok(pattern) => pattern,
        Err(err) => {
            console::error!("timestamp marker pattern unavailable", err.to_string());
            return;
        }
    };
    for element in titled {
        let Some(title) = element.get_attribute("title").filter(|title| !title.is_empty()) else {
            continue;
        };
        if !pattern.has_markers(&title) {
            continue;
        }
        let rewrite = pattern.localize(&title, &formatter);
        for failure in &rewrite.failures {
            console::warn!("failed to parse time", failure.as_str());
        }
        if let Err(err) = element.set_attribute("title", &rewrite.text) {
            console::error!("title update failed", err);
        }
    }
}
