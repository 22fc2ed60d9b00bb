//! `window.CarConnectivity` surface for other scripts on the page.

use crate::app::theme::ThemeHandle;
use crate::app::tooltip::TooltipHandle;
use crate::core::theme::ThemeMode;
use gloo::console;
use gloo::utils::window;
use js_sys::{Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

const NAMESPACE: &str = "CarConnectivity";

pub(crate) fn install_global_api(theme: &ThemeHandle, tooltips: &TooltipHandle) {
    let api = Object::new();

    let get_theme = {
        let theme = theme.clone();
        Closure::<dyn Fn() -> JsValue>::wrap(Box::new(move || {
            JsValue::from_str(theme.current().as_str())
        }))
    };
    let set_theme = {
        let theme = theme.clone();
        Closure::<dyn Fn(JsValue)>::wrap(Box::new(move |value: JsValue| {
            let name = value.as_string().unwrap_or_default();
            match ThemeMode::parse(&name) {
                Ok(mode) => theme.set(mode),
                Err(err) => console::warn!("ignoring theme request", name, err.to_string()),
            }
        }))
    };
    let toggle_theme = {
        let theme = theme.clone();
        Closure::<dyn Fn()>::wrap(Box::new(move || theme.toggle()))
    };
    let show_tooltip = {
        let tooltips = tooltips.clone();
        Closure::<dyn Fn(JsValue)>::wrap(Box::new(move |value: JsValue| {
            if let Some(element) = value.dyn_ref::<Element>() {
                tooltips.show(element);
            }
        }))
    };
    let hide_tooltip = {
        let tooltips = tooltips.clone();
        Closure::<dyn Fn(JsValue)>::wrap(Box::new(move |value: JsValue| {
            if let Some(element) = value.dyn_ref::<Element>() {
                tooltips.hide(element);
            }
        }))
    };

    let members = [
        ("getTheme", get_theme.into_js_value()),
        ("setTheme", set_theme.into_js_value()),
        ("toggleTheme", toggle_theme.into_js_value()),
        ("showTooltip", show_tooltip.into_js_value()),
        ("hideTooltip", hide_tooltip.into_js_value()),
    ];
    for (name, function) in members {
        if let Err(err) = Reflect::set(&api, &JsValue::from_str(name), &function) {
            console::error!("api member install failed", name, err);
        }
    }
    if let Err(err) = Reflect::set(&window(), &JsValue::from_str(NAMESPACE), &api) {
        console::error!("api install failed", err);
    }
}
