use std::rc::Rc;

use folio_core::PreferenceStore;
use gloo::events::EventListener;
use web_sys as web;

use crate::view::View;

pub fn wire(view: &Rc<View>) -> Vec<EventListener> {
    let weak = Rc::downgrade(view);
    let language = EventListener::new(&view.nodes.language_button, "click", move |_| {
        let Some(view) = weak.upgrade() else {
            return;
        };
        let locale = {
            let mut state = view.state.borrow_mut();
            state.prefs.toggle_language();
            state.prefs.flags().locale()
        };
        log::info!("[prefs] language -> {:?}", locale);
        view.queue_render();
    });

    let weak = Rc::downgrade(view);
    let theme = EventListener::new(&view.nodes.theme_button, "click", move |_| {
        let Some(view) = weak.upgrade() else {
            return;
        };
        let dark = {
            let mut state = view.state.borrow_mut();
            state.prefs.toggle_dark_mode();
            state.prefs.dark_mode()
        };
        log::info!("[prefs] dark mode -> {}", dark);
        view.queue_render();
    });

    let weak = Rc::downgrade(view);
    let logo = EventListener::new(&view.nodes.logo_link, "click", move |ev: &web::Event| {
        ev.prevent_default();
        if let Some(view) = weak.upgrade() {
            view.follow_logo();
        }
    });

    vec![language, theme, logo]
}
