use std::cell::RefCell;

use gloo::render::{request_animation_frame, AnimationFrame};

/// Coalesces render requests to at most one per animation frame.
///
/// State updates happen immediately in the event handlers; only the DOM
/// write is deferred to the next frame, which then reads the latest state.
#[derive(Default)]
pub struct FrameScheduler {
    pending: RefCell<Option<AnimationFrame>>,
}

impl FrameScheduler {
    pub fn request(&self, render: impl FnOnce() + 'static) {
        if self.pending.borrow().is_some() {
            return;
        }
        let handle = request_animation_frame(move |_timestamp| render());
        *self.pending.borrow_mut() = Some(handle);
    }

    /// Mark the pending frame as delivered. Called first thing in the frame callback.
    pub fn complete(&self) {
        self.pending.borrow_mut().take();
    }

    /// Drop a pending frame without running it.
    pub fn cancel(&self) {
        if self.pending.borrow_mut().take().is_some() {
            log::debug!("[frame] cancelled pending render");
        }
    }
}
