use std::cell::RefCell;

/// Section the logo links back to.
pub const MAIN_SECTION_ID: &str = "main";
pub const MAIN_SECTION_HREF: &str = "#main";

/// Host-supplied section navigation.
pub trait Navigator {
    fn scroll_to_section(&self, id: &str);
}

/// Page-level fallback when no [`Navigator`] is installed.
pub trait PageScroller {
    fn scroll_to_top(&self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationOutcome {
    Section(&'static str),
    ScrolledToTop,
}

/// Logo click: hand off to the navigator when present, otherwise scroll to top.
pub fn follow_logo(navigator: Option<&dyn Navigator>, page: &dyn PageScroller) -> NavigationOutcome {
    match navigator {
        Some(nav) => {
            nav.scroll_to_section(MAIN_SECTION_ID);
            NavigationOutcome::Section(MAIN_SECTION_ID)
        }
        None => {
            page.scroll_to_top();
            NavigationOutcome::ScrolledToTop
        }
    }
}

/// Replaceable navigator. The handler is cloned out before it runs, so a
/// handler may replace or clear the slot from inside its own callback.
#[derive(Debug)]
pub struct NavigatorSlot<N> {
    current: RefCell<Option<N>>,
}

impl<N> Default for NavigatorSlot<N> {
    fn default() -> Self {
        Self {
            current: RefCell::new(None),
        }
    }
}

impl<N: Navigator + Clone> NavigatorSlot<N> {
    pub fn set(&self, navigator: Option<N>) {
        *self.current.borrow_mut() = navigator;
    }

    pub fn is_set(&self) -> bool {
        self.current.borrow().is_some()
    }

    pub fn follow_logo(&self, page: &dyn PageScroller) -> NavigationOutcome {
        let navigator = self.current.borrow().clone();
        follow_logo(navigator.as_ref().map(|n| n as &dyn Navigator), page)
    }
}
