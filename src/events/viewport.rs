use std::rc::Rc;

use gloo::events::EventListener;
use web_sys as web;

use crate::dom;
use crate::view::View;

pub fn wire(view: &Rc<View>, window: &web::Window) -> EventListener {
    let weak = Rc::downgrade(view);
    EventListener::new(window, "resize", move |_: &web::Event| {
        let (Some(view), Some(window)) = (weak.upgrade(), web::window()) else {
            return;
        };
        let size = dom::viewport_size(&window);
        let flipped = {
            let mut state = view.state.borrow_mut();
            let flipped = state.viewport.resize(size);
            flipped.then(|| state.viewport.class())
        };
        if let Some(class) = flipped {
            log::info!("[viewport] now {:?} at {}x{}", class, size.width, size.height);
        }
        // size alone moves the parallax origin, so always re-render
        view.queue_render();
    })
}
