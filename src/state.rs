use std::rc::Rc;

use yew::prelude::*;

/// How long a page entry transition runs, matching the CSS transition on
/// `.page-enter-active`.
pub const TRANSITION_MS: u32 = 300;

/// Session storage key holding the last active page slug.
pub const STORAGE_KEY: &str = "mvtalc_current_page";

/// The seven top-level sections of the site. Exactly one is visible once a
/// transition settles.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Page {
    Home,
    About,
    Products,
    Services,
    Team,
    Media,
    Contact,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::About,
        Page::Products,
        Page::Services,
        Page::Team,
        Page::Media,
        Page::Contact,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Products => "products",
            Page::Services => "services",
            Page::Team => "team",
            Page::Media => "media",
            Page::Contact => "contact",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.slug() == slug)
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About Us",
            Page::Products => "Products",
            Page::Services => "Services",
            Page::Team => "Our Team",
            Page::Media => "Media",
            Page::Contact => "Contact",
        }
    }
}

/// Navigation state for the whole app: the settled page plus the transition
/// that is currently in flight, if any. Owned by one reducer at the app root
/// and handed to consumers through context.
#[derive(Clone, PartialEq, Debug)]
pub struct NavState {
    pub current: Page,
    pub pending: Option<Page>,
}

impl Default for NavState {
    fn default() -> Self {
        NavState { current: Page::Home, pending: None }
    }
}

impl NavState {
    pub fn transitioning(&self) -> bool {
        self.pending.is_some()
    }

    /// Re-entrancy guard for click navigation: returns the target only when
    /// no transition is in flight and the target differs from the settled
    /// page. Browser back/forward bypasses this on purpose.
    pub fn begin(&self, target: Page) -> Option<Page> {
        if self.transitioning() || target == self.current {
            None
        } else {
            Some(target)
        }
    }
}

pub enum NavAction {
    /// A page subtree has mounted and started its entry animation.
    Begin(Page),
    /// The entry animation finished; the page is the sole visible subtree.
    Settle(Page),
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: NavAction) -> Rc<Self> {
        match action {
            NavAction::Begin(page) => Rc::new(NavState {
                current: self.current,
                pending: Some(page),
            }),
            NavAction::Settle(page) => Rc::new(NavState {
                current: page,
                pending: None,
            }),
        }
    }
}

/// Declarative animation state of the mounted page subtree, rendered as CSS
/// classes instead of inline style mutation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum VisualState {
    /// Mounted, still at the off-screen start of the entry animation.
    Entering,
    /// Entry transition running (fade + horizontal slide).
    Animating,
    /// Transition settled, no residual transform or opacity.
    Visible,
}

impl VisualState {
    pub fn class(self) -> &'static str {
        match self {
            VisualState::Entering => "page page-enter",
            VisualState::Animating => "page page-enter page-enter-active",
            VisualState::Visible => "page",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(state: Rc<NavState>, page: Page) -> Rc<NavState> {
        state.reduce(NavAction::Settle(page))
    }

    #[test]
    fn defaults_to_home_and_idle() {
        let state = NavState::default();
        assert_eq!(state.current, Page::Home);
        assert!(!state.transitioning());
    }

    #[test]
    fn begin_is_noop_for_current_page() {
        let state = NavState::default();
        assert_eq!(state.begin(Page::Home), None);
        assert_eq!(state.begin(Page::Media), Some(Page::Media));
    }

    #[test]
    fn begin_is_noop_while_transition_in_flight() {
        let state = Rc::new(NavState::default()).reduce(NavAction::Begin(Page::About));
        assert!(state.transitioning());
        assert_eq!(state.begin(Page::Products), None);
        assert_eq!(state.begin(Page::About), None);
    }

    #[test]
    fn settle_makes_target_the_sole_current_page() {
        let state = Rc::new(NavState::default()).reduce(NavAction::Begin(Page::Contact));
        let state = settle(state, Page::Contact);
        assert_eq!(state.current, Page::Contact);
        assert!(!state.transitioning());
        // Navigation is re-enabled afterwards.
        assert_eq!(state.begin(Page::Home), Some(Page::Home));
    }

    #[test]
    fn slugs_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_slug(page.slug()), Some(page));
        }
        assert_eq!(Page::from_slug("gallery"), None);
        assert_eq!(Page::from_slug(""), None);
    }
}
