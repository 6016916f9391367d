use std::time::Instant;

use crate::schedule::{Scheduled, TransitionTiming};
use crate::store::{SIDEBAR_OPEN_KEY, SessionStore};
use crate::transition::Transition;

const OPEN: f32 = 1.0;
const CLOSED: f32 = 0.0;

/// Open/closed state of the navigation sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarState {
    Open,
    Closed,
}

impl SidebarState {
    /// Decode the persisted flag. Only the literal `"false"` means closed.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("false") => SidebarState::Closed,
            _ => SidebarState::Open,
        }
    }

    pub fn stored_value(self) -> &'static str {
        match self {
            SidebarState::Open => "true",
            SidebarState::Closed => "false",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SidebarState::Open => SidebarState::Closed,
            SidebarState::Closed => SidebarState::Open,
        }
    }

    pub fn icon(self) -> ToggleIcon {
        match self {
            SidebarState::Open => ToggleIcon::ChevronsLeft,
            SidebarState::Closed => ToggleIcon::ChevronsRight,
        }
    }

    fn openness(self) -> f32 {
        match self {
            SidebarState::Open => OPEN,
            SidebarState::Closed => CLOSED,
        }
    }
}

/// Orientation of the toggle icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    /// `bx-chevrons-left`, shown while the sidebar is open.
    ChevronsLeft,
    /// `bx-chevrons-right`, shown while the sidebar is closed.
    ChevronsRight,
}

impl ToggleIcon {
    pub fn class_name(self) -> &'static str {
        match self {
            ToggleIcon::ChevronsLeft => "bx-chevrons-left",
            ToggleIcon::ChevronsRight => "bx-chevrons-right",
        }
    }
}

/// Element that can carry the animation-suppression marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuppressionTarget {
    Sidebar,
    HomeSection,
    NavLink(usize),
}

/// Deferred sidebar steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarStep {
    /// Remove the suppression marker from every target.
    ReleaseSuppression,
}

#[derive(Debug, Clone, Copy)]
struct Animated {
    suppressed: bool,
    openness: Transition,
}

impl Animated {
    fn suppressed_at(value: f32) -> Self {
        Self {
            suppressed: true,
            openness: Transition::new(value),
        }
    }

    fn retarget(&mut self, value: f32, now: Instant, timing: TransitionTiming) {
        if self.suppressed {
            self.openness.jump(value);
        } else {
            self.openness.set(value, now, timing.duration);
        }
    }
}

/// Snapshot of the sidebar's visual properties at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarProjection {
    /// The collapsed class is applied.
    pub collapsed: bool,
    pub icon: ToggleIcon,
    /// `1.0` fully open, `0.0` fully closed.
    pub sidebar_openness: f32,
    pub home_section_openness: f32,
    pub nav_link_openness: Vec<f32>,
    /// Targets still carrying the suppression marker.
    pub suppressed: Vec<SuppressionTarget>,
}

/// Collapsible sidebar whose state survives page loads through a
/// [`SessionStore`].
#[derive(Debug)]
pub struct SidebarController<S> {
    store: S,
    timing: TransitionTiming,
    state: SidebarState,
    sidebar: Animated,
    home_section: Animated,
    nav_links: Vec<Animated>,
}

impl<S: SessionStore> SidebarController<S> {
    /// Restore the sidebar for a fresh page load.
    ///
    /// Every target starts suppressed so the restored state appears without
    /// animating; the returned step releases the markers on the next turn.
    pub fn init(
        store: S,
        nav_link_count: usize,
        timing: TransitionTiming,
    ) -> (Self, Scheduled<SidebarStep>) {
        let mut controller = Self {
            store,
            timing,
            state: SidebarState::Open,
            sidebar: Animated::suppressed_at(OPEN),
            home_section: Animated::suppressed_at(OPEN),
            nav_links: vec![Animated::suppressed_at(OPEN); nav_link_count],
        };

        let release = controller.reload();
        (controller, release)
    }

    /// Run the page-load sequence again against the same store.
    pub fn reload(&mut self) -> Scheduled<SidebarStep> {
        let stored = self.store.get(SIDEBAR_OPEN_KEY);
        self.state = SidebarState::from_stored(stored.as_deref());
        log::debug!(
            "sidebar restored as {:?} from stored value {stored:?}",
            self.state
        );

        let openness = self.state.openness();
        self.sidebar = Animated::suppressed_at(openness);
        self.home_section = Animated::suppressed_at(openness);
        for link in &mut self.nav_links {
            *link = Animated::suppressed_at(openness);
        }

        Scheduled::now(SidebarStep::ReleaseSuppression)
    }

    pub fn state(&self) -> SidebarState {
        self.state
    }

    pub fn icon(&self) -> ToggleIcon {
        self.state.icon()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Hand the session store over to the next page load.
    pub fn into_store(self) -> S {
        self.store
    }

    pub fn apply(&mut self, step: SidebarStep) {
        match step {
            SidebarStep::ReleaseSuppression => {
                self.sidebar.suppressed = false;
                self.home_section.suppressed = false;
                for link in &mut self.nav_links {
                    link.suppressed = false;
                }
            },
        }
    }

    /// Flip the sidebar and persist the new state.
    pub fn toggle(&mut self, now: Instant) -> SidebarState {
        self.state = self.state.toggled();
        self.store.set(SIDEBAR_OPEN_KEY, self.state.stored_value());

        let openness = self.state.openness();
        let timing = self.timing;
        self.sidebar.retarget(openness, now, timing);
        self.home_section.retarget(openness, now, timing);
        for link in &mut self.nav_links {
            link.retarget(openness, now, timing);
        }

        self.state
    }

    pub fn is_suppressed(&self, target: SuppressionTarget) -> bool {
        match target {
            SuppressionTarget::Sidebar => self.sidebar.suppressed,
            SuppressionTarget::HomeSection => self.home_section.suppressed,
            SuppressionTarget::NavLink(index) => self
                .nav_links
                .get(index)
                .is_some_and(|link| link.suppressed),
        }
    }

    /// Whether any tween is still running at `now`.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.animated().any(|(_, item)| item.openness.is_animating(now))
    }

    /// Sample every visual property at `now`.
    pub fn projection(&self, now: Instant) -> SidebarProjection {
        SidebarProjection {
            collapsed: self.state == SidebarState::Closed,
            icon: self.icon(),
            sidebar_openness: self.sidebar.openness.value_at(now),
            home_section_openness: self.home_section.openness.value_at(now),
            nav_link_openness: self
                .nav_links
                .iter()
                .map(|link| link.openness.value_at(now))
                .collect(),
            suppressed: self
                .animated()
                .filter(|(_, item)| item.suppressed)
                .map(|(target, _)| target)
                .collect(),
        }
    }

    fn animated(
        &self,
    ) -> impl Iterator<Item = (SuppressionTarget, &Animated)> + '_ {
        [
            (SuppressionTarget::Sidebar, &self.sidebar),
            (SuppressionTarget::HomeSection, &self.home_section),
        ]
        .into_iter()
        .chain(
            self.nav_links
                .iter()
                .enumerate()
                .map(|(index, link)| (SuppressionTarget::NavLink(index), link)),
        )
    }
}
