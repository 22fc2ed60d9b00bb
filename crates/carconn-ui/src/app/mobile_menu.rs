//! Mobile navigation toggler and outside-click close.

use crate::app::dom::{document, query_one, set_class};
use crate::core::config::MobileMenuConfig;
use crate::core::menu::{ClickSite, MobileMenu};
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, Node};

pub(crate) fn init_mobile_menu(config: &MobileMenuConfig) {
    let Some(document) = document() else {
        return;
    };
    let (Some(toggler), Some(nav)) = (
        query_one(&document, &config.toggler_selector),
        query_one(&document, &config.nav_selector),
    ) else {
        return;
    };
    let state = Rc::new(RefCell::new(MobileMenu::default()));
    let active_class: Rc<str> = Rc::from(config.active_class.as_str());

    {
        let state = state.clone();
        let active_class = active_class.clone();
        let (toggler_el, nav_el) = (toggler.clone(), nav.clone());
        EventListener::new(&toggler, "click", move |_event| {
            let open = state.borrow_mut().toggle();
            sync(&toggler_el, &nav_el, &active_class, open);
        })
        .forget();
    }

    EventListener::new(&document, "click", move |event| {
        let target = event
            .target()
            .and_then(|target| target.dyn_into::<Node>().ok());
        let site = match target.as_ref() {
            Some(node) if toggler.contains(Some(node)) => ClickSite::Toggler,
            Some(node) if nav.contains(Some(node)) => ClickSite::Panel,
            _ => ClickSite::Outside,
        };
        if state.borrow_mut().document_click(site) {
            sync(&toggler, &nav, &active_class, false);
        }
    })
    .forget();
}

fn sync(toggler: &Element, nav: &Element, class: &str, open: bool) {
    set_class(nav, class, open);
    set_class(toggler, class, open);
}
