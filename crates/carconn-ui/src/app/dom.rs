//! Thin DOM helpers shared by the behavior bindings.

use gloo::console;
use gloo::utils::window;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, NodeList};

pub(crate) fn document() -> Option<Document> {
    window().document()
}

/// All elements matching `selector` in the document; invalid selectors yield none.
pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(err) => {
            console::warn!("invalid selector", selector, err);
            Vec::new()
        }
    }
}

/// All descendants of `root` matching `selector`.
pub(crate) fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(err) => {
            console::warn!("invalid selector", selector, err);
            Vec::new()
        }
    }
}

pub(crate) fn query_one(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Element the event was dispatched to, if it is an element.
pub(crate) fn event_element(event: &Event) -> Option<Element> {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
}

pub(crate) fn set_class(element: &Element, class: &str, present: bool) {
    let classes = element.class_list();
    let _ = if present {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
}

pub(crate) fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub(crate) fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        console::warn!("style update failed", property, err);
    }
}
