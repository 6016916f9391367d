use std::time::Instant;

use midify_ui_controls::{
    MemorySessionStore, Scheduled, SidebarController, SidebarProjection,
    SidebarState, SidebarStep, TransitionTiming,
};

use crate::pages::Page;

/// Sidebar widget state: the controller and the session store it owns.
#[derive(Debug)]
pub(crate) struct SidebarWidgetState {
    controller: SidebarController<MemorySessionStore>,
}

impl SidebarWidgetState {
    /// Build the state for the first page load of the session.
    pub(crate) fn new(
        store: MemorySessionStore,
        timing: TransitionTiming,
    ) -> (Self, Scheduled<SidebarStep>) {
        let (controller, release) =
            SidebarController::init(store, Page::ALL.len(), timing);
        (Self { controller }, release)
    }

    pub(crate) fn reload(&mut self) -> Scheduled<SidebarStep> {
        self.controller.reload()
    }

    pub(crate) fn apply(&mut self, step: SidebarStep) {
        self.controller.apply(step);
    }

    pub(crate) fn toggle(&mut self, now: Instant) -> SidebarState {
        self.controller.toggle(now)
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> SidebarState {
        self.controller.state()
    }

    pub(crate) fn is_animating(&self, now: Instant) -> bool {
        self.controller.is_animating(now)
    }

    pub(crate) fn projection(&self, now: Instant) -> SidebarProjection {
        self.controller.projection(now)
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &MemorySessionStore {
        self.controller.store()
    }
}
