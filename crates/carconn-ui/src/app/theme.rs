//! Theme controller bindings: document marker, toggle controls, system preference.

use crate::app::dom::{document, query_all};
use crate::app::preferences::BrowserPreferenceStore;
use crate::core::config::ThemeConfig;
use crate::core::theme::{ThemeController, ThemeMode};
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::window;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::MediaQueryListEvent;

struct ThemeInner {
    controller: RefCell<ThemeController<BrowserPreferenceStore>>,
    config: ThemeConfig,
}

/// Shared handle used by listeners and the page-level API.
#[derive(Clone)]
pub(crate) struct ThemeHandle {
    inner: Rc<ThemeInner>,
}

impl ThemeHandle {
    pub(crate) fn current(&self) -> ThemeMode {
        self.inner.controller.borrow().current()
    }

    pub(crate) fn set(&self, mode: ThemeMode) {
        let applied = self.inner.controller.borrow_mut().set(mode);
        self.apply(applied);
    }

    pub(crate) fn toggle(&self) {
        let applied = self.inner.controller.borrow_mut().toggle();
        self.apply(applied);
    }

    fn on_system_change(&self, prefers_dark: bool) {
        let applied = self
            .inner
            .controller
            .borrow_mut()
            .on_system_change(prefers_dark);
        if let Some(mode) = applied {
            self.apply(mode);
        }
    }

    fn apply(&self, mode: ThemeMode) {
        let Some(document) = document() else {
            return;
        };
        let config = &self.inner.config;
        if let Some(root) = document.document_element()
            && let Err(err) = root.set_attribute(&config.attribute, mode.as_str())
        {
            console::error!("theme attribute update failed", err);
        }
        for toggle in query_all(&document, &config.toggle_selector) {
            if let Ok(Some(icon)) = toggle.query_selector(&config.icon_selector) {
                icon.set_text_content(Some(mode.icon()));
            }
        }
    }
}

/// Resolve and apply the startup theme, then wire toggles and the system listener.
pub(crate) fn init_theme(config: &ThemeConfig) -> ThemeHandle {
    let media = window().match_media(&config.media_query).ok().flatten();
    let system_prefers_dark = media.as_ref().map(web_sys::MediaQueryList::matches);
    let controller = ThemeController::init(
        BrowserPreferenceStore::new(config.storage_key.clone()),
        system_prefers_dark,
    );
    let handle = ThemeHandle {
        inner: Rc::new(ThemeInner {
            controller: RefCell::new(controller),
            config: config.clone(),
        }),
    };
    handle.apply(handle.current());

    if let Some(document) = document() {
        for toggle in query_all(&document, &config.toggle_selector) {
            let handle = handle.clone();
            EventListener::new(&toggle, "click", move |_event| handle.toggle()).forget();
        }
    }

    if let Some(media) = media {
        let handle = handle.clone();
        EventListener::new(&media, "change", move |event| {
            if let Some(change) = event.dyn_ref::<MediaQueryListEvent>() {
                handle.on_system_change(change.matches());
            }
        })
        .forget();
    }

    handle
}
