//! Dropdown navigation: hover on desktop, click on narrow viewports.

use crate::app::dom::{document, query_all, set_class, set_style};
use crate::core::breakpoints::Breakpoint;
use crate::core::config::NavigationConfig;
use crate::core::dropdown::DropdownState;
use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::utils::window;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

const FALLBACK_WIDTH: f64 = 1280.0;

pub(crate) fn init_navigation(config: &NavigationConfig) {
    let Some(document) = document() else {
        return;
    };
    let breakpoint = Breakpoint::for_width(viewport_width(), config.desktop_min_width);
    let config = Rc::new(config.clone());
    let mut bound = 0_u32;
    for dropdown in query_all(&document, &config.dropdown_selector) {
        let Some(menu) = dropdown
            .query_selector(&config.menu_selector)
            .ok()
            .flatten()
            .and_then(|menu| menu.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        match breakpoint {
            Breakpoint::Desktop => bind_hover(&dropdown, menu, &config),
            Breakpoint::Mobile => bind_click(&dropdown, menu, &config),
        }
        bound += 1;
    }
    console::debug!("dropdowns bound", bound, breakpoint.name());
}

fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(FALLBACK_WIDTH)
}

fn bind_hover(dropdown: &Element, menu: HtmlElement, config: &Rc<NavigationConfig>) {
    let state = Rc::new(RefCell::new(DropdownState::default()));

    {
        let state = state.clone();
        let menu = menu.clone();
        let config = config.clone();
        EventListener::new(dropdown, "mouseenter", move |_event| {
            let ticket = state.borrow_mut().pointer_enter();
            set_style(&menu, "display", "block");
            let state = state.clone();
            let menu = menu.clone();
            let config = config.clone();
            Timeout::new(config.show_delay_ms, move || {
                if state.borrow().should_show(ticket) {
                    set_class(&menu, &config.open_class, true);
                }
            })
            .forget();
        })
        .forget();
    }

    let config = config.clone();
    EventListener::new(dropdown, "mouseleave", move |_event| {
        let ticket = state.borrow_mut().pointer_leave();
        set_class(&menu, &config.open_class, false);
        let state = state.clone();
        let menu = menu.clone();
        Timeout::new(config.hide_delay_ms, move || {
            if state.borrow().should_hide(ticket) {
                set_style(&menu, "display", "none");
            }
        })
        .forget();
    })
    .forget();
}

fn bind_click(dropdown: &Element, menu: HtmlElement, config: &Rc<NavigationConfig>) {
    let Some(label) = dropdown.query_selector(&config.label_selector).ok().flatten() else {
        return;
    };
    let state = Rc::new(RefCell::new(DropdownState::default()));
    let config = config.clone();
    EventListener::new_with_options(
        &label,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            let open = state.borrow_mut().toggle();
            set_class(&menu, &config.open_class, open);
        },
    )
    .forget();
}
