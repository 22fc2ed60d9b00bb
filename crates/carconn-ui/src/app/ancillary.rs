//! Page-scoped handlers: clickable rows, alert dismissal, form autofocus.

use crate::app::dom::{document, event_element, has_class, query_all, query_all_in, set_style};
use crate::core::ancillary::{FADE_OUT_ANIMATION, first_autofocus_index, row_target};
use crate::core::config::AncillaryConfig;
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::window;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub(crate) fn init_clickable_rows(config: &AncillaryConfig) {
    let Some(document) = document() else {
        return;
    };
    let selector = config.row_selector();
    let attribute = config.row_attribute.clone();
    EventListener::new(&document, "click", move |event| {
        let Some(row) = event_element(event).and_then(|target| target.closest(&selector).ok().flatten())
        else {
            return;
        };
        let href = row.get_attribute(&attribute);
        if let Some(href) = row_target(href.as_deref())
            && let Err(err) = window().location().set_href(href)
        {
            console::error!("row navigation failed", err);
        }
    })
    .forget();
}

pub(crate) fn init_alert_dismissal(config: &AncillaryConfig) {
    let Some(document) = document() else {
        return;
    };
    let config = config.clone();
    EventListener::new(&document, "click", move |event| {
        let Some(control) = event_element(event) else {
            return;
        };
        if !has_class(&control, &config.dismiss_class) {
            return;
        }
        let Some(alert) = control
            .closest(&config.alert_selector)
            .ok()
            .flatten()
            .and_then(|alert| alert.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        set_style(&alert, "animation", FADE_OUT_ANIMATION);
        Timeout::new(config.fade_ms, move || alert.remove()).forget();
    })
    .forget();
}

pub(crate) fn init_autofocus(config: &AncillaryConfig) {
    let Some(document) = document() else {
        return;
    };
    for form in query_all(&document, "form") {
        if form.has_attribute(&config.no_autofocus_attribute) {
            continue;
        }
        let inputs = query_all_in(&form, "input");
        let types: Vec<Option<String>> = inputs
            .iter()
            .map(|input| input.get_attribute("type"))
            .collect();
        let Some(index) = first_autofocus_index(types.iter().map(Option::as_deref)) else {
            continue;
        };
        if let Some(input) = inputs.get(index).and_then(|input| input.dyn_ref::<HtmlElement>())
            && let Err(err) = input.focus()
        {
            console::error!("autofocus failed", err);
        }
    }
}
