//! DOM bindings for the behavior layer.
//!
//! # Design
//! - Every module initializes once, after the markup is parsed, against its own subtree.
//! - Listeners live for the page lifetime and are intentionally leaked with `forget`.
//! - Only the theme and tooltip handles are shared, and only with the page-level API.

use crate::core::config::BehaviorConfig;
use crate::core::startup::ReadyState;
use ancillary::{init_alert_dismissal, init_autofocus, init_clickable_rows};
use bridge::install_global_api;
use config::load_config;
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::window;
use mobile_menu::init_mobile_menu;
use navigation::init_navigation;
use reveal::init_scroll_reveal;
use tabs::init_tabs;
use theme::init_theme;
use time::init_time_conversion;
use tooltip::init_tooltips;

mod ancillary;
mod bridge;
mod config;
mod dom;
mod mobile_menu;
mod navigation;
mod preferences;
mod reveal;
mod tabs;
mod theme;
mod time;
mod tooltip;

/// Attach all behaviors once the document has been parsed.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let Some(document) = window().document() else {
        return;
    };
    if ReadyState::from_dom(&document.ready_state()).awaits_parse() {
        EventListener::once(&document, "DOMContentLoaded", |_event| start(&load_config()))
            .forget();
    } else {
        start(&load_config());
    }
}

fn start(config: &BehaviorConfig) {
    let theme = init_theme(&config.theme);
    init_navigation(&config.navigation);
    init_tabs(&config.tabs);
    init_time_conversion(&config.time);
    let tooltips = init_tooltips(&config.tooltip);
    init_scroll_reveal(&config.reveal);
    init_mobile_menu(&config.mobile_menu);
    init_clickable_rows(&config.ancillary);
    init_alert_dismissal(&config.ancillary);
    init_autofocus(&config.ancillary);
    install_global_api(&theme, &tooltips);
    console::debug!("behavior layer ready");
}
