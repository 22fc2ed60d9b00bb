//! Floating tooltip popups for `[data-toggle="tooltip"]` triggers.

use crate::app::dom::{document, query_all, set_style};
use crate::core::config::TooltipConfig;
use crate::core::tooltip::{Rect, TooltipRegistry, place_above};
use gloo::console;
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

const POPUP_STYLE: [(&str, &str); 9] = [
    ("white-space", "pre-line"),
    ("position", "absolute"),
    ("background", "var(--color-surface-elevated)"),
    ("padding", "var(--space-sm) var(--space-md)"),
    ("border-radius", "var(--border-radius-sm)"),
    ("box-shadow", "var(--shadow-lg)"),
    ("font-size", "var(--font-size-sm)"),
    ("z-index", "9999"),
    ("pointer-events", "none"),
];

/// Shared registry of live popups, one per trigger.
#[derive(Clone)]
pub(crate) struct TooltipHandle {
    registry: Rc<RefCell<TooltipRegistry<Element, HtmlElement>>>,
    config: Rc<TooltipConfig>,
}

impl TooltipHandle {
    fn new(config: &TooltipConfig) -> Self {
        Self {
            registry: Rc::new(RefCell::new(TooltipRegistry::new())),
            config: Rc::new(config.clone()),
        }
    }

    pub(crate) fn show(&self, trigger: &Element) {
        let Some(title) = trigger.get_attribute("title").filter(|title| !title.is_empty()) else {
            return;
        };
        self.hide(trigger);
        let Some(document) = document() else {
            return;
        };
        let Some(body) = document.body() else {
            return;
        };
        let popup = match document
            .create_element("div")
            .map(|element| element.unchecked_into::<HtmlElement>())
        {
            Ok(popup) => popup,
            Err(err) => {
                console::error!("tooltip creation failed", err);
                return;
            }
        };
        popup.set_class_name(&self.config.popup_class);
        popup.set_text_content(Some(&title));
        for (property, value) in POPUP_STYLE {
            set_style(&popup, property, value);
        }
        if let Err(err) = body.append_child(&popup) {
            console::error!("tooltip attach failed", err);
            return;
        }

        let bounds = trigger.get_bounding_client_rect();
        let placement = place_above(
            Rect::new(bounds.left(), bounds.top(), bounds.width(), bounds.height()),
            f64::from(popup.offset_width()),
            f64::from(popup.offset_height()),
            self.config.gap,
        );
        set_style(&popup, "top", &placement.top_px());
        set_style(&popup, "left", &placement.left_px());

        let evicted = self.registry.borrow_mut().show(trigger.clone(), popup);
        if let Some(stale) = evicted {
            stale.remove();
        }
    }

    pub(crate) fn hide(&self, trigger: &Element) {
        let removed = self.registry.borrow_mut().hide(trigger);
        if let Some(popup) = removed {
            popup.remove();
        }
    }
}

pub(crate) fn init_tooltips(config: &TooltipConfig) -> TooltipHandle {
    let handle = TooltipHandle::new(config);
    let Some(document) = document() else {
        return handle;
    };
    for trigger in query_all(&document, &config.trigger_selector) {
        {
            let handle = handle.clone();
            let element = trigger.clone();
            EventListener::new(&trigger, "mouseenter", move |_event| handle.show(&element))
                .forget();
        }
        let handle = handle.clone();
        let element = trigger.clone();
        EventListener::new(&trigger, "mouseleave", move |_event| handle.hide(&element)).forget();
    }
    handle
}
