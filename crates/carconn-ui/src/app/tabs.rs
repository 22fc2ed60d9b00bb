//! Tab trigger bindings.
//!
//! Each click snapshots the enclosing group's triggers and the page's panes into a
//! [`TabBoard`], applies the click, and writes the resulting flags back.

use crate::app::dom::{document, has_class, query_all, query_all_in, set_class};
use crate::core::config::TabsConfig;
use crate::core::tabs::{TabBoard, TabClick};
use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use std::rc::Rc;
use web_sys::{Document, Element};

const GROUP: usize = 0;

pub(crate) fn init_tabs(config: &TabsConfig) {
    let Some(document) = document() else {
        return;
    };
    let config = Rc::new(config.clone());
    for trigger in query_all(&document, &config.trigger_selector) {
        let config = config.clone();
        let document = document.clone();
        let element = trigger.clone();
        EventListener::new_with_options(
            &trigger,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let outcome = activate(&document, &element, &config);
                if outcome != TabClick::Activated {
                    console::debug!("tab click ignored", format!("{outcome:?}"));
                }
            },
        )
        .forget();
    }
}

fn activate(document: &Document, trigger: &Element, config: &TabsConfig) -> TabClick {
    let target = trigger
        .get_attribute("href")
        .and_then(|selector| document.query_selector(&selector).ok().flatten());
    let Some(group) = trigger.closest(&config.group_selector).ok().flatten() else {
        return TabClick::UnknownTrigger;
    };

    let mut board = TabBoard::new();
    for link in query_all_in(&group, &config.group_trigger_selector) {
        let active = has_class(&link, &config.active_class);
        board.add_trigger(link, GROUP, active);
    }
    board.add_trigger(trigger.clone(), GROUP, has_class(trigger, &config.active_class));
    for pane in query_all(document, &config.pane_selector) {
        let active = has_class(&pane, &config.active_class);
        board.add_pane(pane, active);
    }
    if let Some(target) = target.as_ref() {
        board.add_pane(target.clone(), has_class(target, &config.active_class));
    }

    let outcome = board.click(trigger, target.as_ref());
    if outcome == TabClick::Activated {
        for (element, active) in board.trigger_flags() {
            set_class(element, &config.active_class, active);
        }
        for (element, active) in board.pane_flags() {
            set_class(element, &config.active_class, active);
        }
    }
    outcome
}
