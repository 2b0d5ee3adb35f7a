use std::rc::Rc;

use folio_core::HeroName;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::view::View;

pub fn wire(view: &Rc<View>, window: &web::Window) -> Vec<EventListener> {
    let mut listeners = vec![wire_pointermove(view, window)];
    for name in [HeroName::Name, HeroName::Nickname] {
        listeners.extend(wire_hover(view, name));
    }
    listeners
}

fn wire_pointermove(view: &Rc<View>, window: &web::Window) -> EventListener {
    let weak = Rc::downgrade(view);
    EventListener::new(window, "pointermove", move |ev: &web::Event| {
        let Some(view) = weak.upgrade() else {
            return;
        };
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let changed = view
            .state
            .borrow_mut()
            .pointer
            .update(ev.client_x() as f32, ev.client_y() as f32);
        if changed {
            view.queue_render();
        }
    })
}

fn wire_hover(view: &Rc<View>, name: HeroName) -> [EventListener; 2] {
    let target = match name {
        HeroName::Name => view.nodes.name.root.clone(),
        HeroName::Nickname => view.nodes.nickname_value.root.clone(),
    };
    let set_hover = |hovered: Option<HeroName>| {
        let weak = Rc::downgrade(view);
        move |_: &web::Event| {
            if let Some(view) = weak.upgrade() {
                view.state.borrow_mut().hovered = hovered;
                view.queue_render();
            }
        }
    };
    [
        EventListener::new(&target, "mouseenter", set_hover(Some(name))),
        EventListener::new(&target, "mouseleave", set_hover(None)),
    ]
}
