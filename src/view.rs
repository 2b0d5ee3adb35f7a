use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{
    compose, HeroName, NavigationOutcome, NavigatorSlot, PointerTracker, PreferenceStore,
    SceneInput, ViewportTracker,
};
use gloo::events::EventListener;
use web_sys as web;

use crate::dom;
use crate::events;
use crate::frame::FrameScheduler;
use crate::navigation::{JsNavigator, WindowScroller};
use crate::render::Nodes;
use crate::root_attrs::RootAttributes;
use crate::storage::{self, SessionPreferences};

/// Everything the scene is derived from. Each field has a single writer: the
/// event handler that owns it.
pub struct LandingState {
    pub pointer: PointerTracker,
    pub viewport: ViewportTracker,
    pub prefs: SessionPreferences,
    pub hovered: Option<HeroName>,
}

impl LandingState {
    pub fn scene_input(&self) -> SceneInput {
        SceneInput {
            pointer: self.pointer.position(),
            viewport: self.viewport.size(),
            class: self.viewport.class(),
            flags: self.prefs.flags(),
            hovered: self.hovered,
        }
    }
}

/// A mounted landing page. Dropping the listeners it holds unsubscribes every
/// handler it installed.
pub struct View {
    document: web::Document,
    pub state: RefCell<LandingState>,
    pub nodes: Nodes,
    navigator: NavigatorSlot<JsNavigator>,
    root_attrs: RootAttributes,
    frame: FrameScheduler,
    listeners: RefCell<Vec<EventListener>>,
}

impl View {
    pub fn mount(
        window: &web::Window,
        document: &web::Document,
        root: &web::Element,
    ) -> anyhow::Result<Rc<Self>> {
        let root_attrs = dom::root_attributes(document);
        let nodes = Nodes::build(document, root)?;
        let viewport = ViewportTracker::new(dom::viewport_size(window));
        log::info!(
            "[mount] viewport {}x{} ({:?})",
            viewport.size().width,
            viewport.size().height,
            viewport.class()
        );
        let state = LandingState {
            pointer: PointerTracker::new(),
            viewport,
            prefs: storage::load(window, document),
            hovered: None,
        };
        let view = Rc::new(Self {
            document: document.clone(),
            state: RefCell::new(state),
            nodes,
            navigator: NavigatorSlot::default(),
            root_attrs,
            frame: FrameScheduler::default(),
            listeners: RefCell::new(Vec::new()),
        });
        view.render();
        *view.listeners.borrow_mut() = events::subscribe(&view, window);
        Ok(view)
    }

    /// Schedule a render on the next animation frame; repeated calls before
    /// then collapse into one.
    pub fn queue_render(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        self.frame.request(move || {
            if let Some(view) = weak.upgrade() {
                view.frame.complete();
                view.render();
            }
        });
    }

    pub fn render(&self) {
        let input = self.state.borrow().scene_input();
        let scene = compose(&input);
        self.nodes.apply(&self.document, &scene);
    }

    pub fn set_navigator(&self, navigator: Option<JsNavigator>) {
        self.navigator.set(navigator);
    }

    pub fn follow_logo(&self) -> NavigationOutcome {
        let outcome = self.navigator.follow_logo(&WindowScroller);
        log::info!("[nav] logo -> {:?}", outcome);
        outcome
    }

    pub fn unmount(&self) {
        let n = {
            let mut listeners = self.listeners.borrow_mut();
            let n = listeners.len();
            listeners.clear();
            n
        };
        self.frame.cancel();
        self.nodes.remove();
        dom::restore_root_attributes(&self.document, &self.root_attrs);
        log::info!("[mount] unmounted, {} listeners removed", n);
    }
}
