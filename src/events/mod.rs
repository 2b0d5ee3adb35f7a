pub mod controls;
pub mod pointer;
pub mod viewport;

use std::rc::Rc;

use gloo::events::EventListener;
use web_sys as web;

use crate::view::View;

/// Install every handler the page needs. The returned guards own the
/// subscriptions; dropping them removes the listeners.
pub fn subscribe(view: &Rc<View>, window: &web::Window) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    listeners.extend(pointer::wire(view, window));
    listeners.push(viewport::wire(view, window));
    listeners.extend(controls::wire(view));
    listeners
}
