//! Shared intersection observer that marks elements revealed once.

use crate::app::dom::{document, query_all, set_class};
use crate::core::config::RevealConfig;
use crate::core::reveal::{RevealOutcome, RevealSet};
use gloo::console;
use js_sys::Array;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub(crate) fn init_scroll_reveal(config: &RevealConfig) {
    let Some(document) = document() else {
        return;
    };
    let elements = query_all(&document, &config.selector);
    if elements.is_empty() {
        return;
    }

    let set = Rc::new(RefCell::new(RevealSet::new()));
    for element in &elements {
        set.borrow_mut().watch(element.clone());
    }

    let revealed_class = config.revealed_class.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let outcome = set.borrow_mut().observe(&target, entry.is_intersecting());
                if outcome == RevealOutcome::Revealed {
                    set_class(&target, &revealed_class, true);
                    observer.unobserve(&target);
                }
            }
        },
    ));

    let options = config.options();
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin());
    let observer = match IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &init,
    ) {
        Ok(observer) => observer,
        Err(err) => {
            console::error!("intersection observer unavailable", err);
            return;
        }
    };
    callback.forget();
    for element in &elements {
        observer.observe(element);
    }
}
