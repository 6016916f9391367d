pub(crate) mod event;
pub(crate) mod model;
pub(crate) mod reducer;
pub(crate) mod state;
pub(crate) mod view;

use std::time::Instant;

pub(crate) use event::{SidebarEffect, SidebarEvent, SidebarIntent};
use iced::Task;
use midify_ui_controls::{MemorySessionStore, TransitionTiming};
pub(crate) use reducer::SidebarCtx;
use state::SidebarWidgetState;

use crate::pages::Page;

/// Sidebar widget: collapsible navigation whose open state survives page
/// loads through the session store.
pub(crate) struct SidebarWidget {
    state: SidebarWidgetState,
}

impl SidebarWidget {
    /// Create the widget. Suppression stays on until the first page load
    /// schedules its release.
    pub(crate) fn new(
        store: MemorySessionStore,
        timing: TransitionTiming,
    ) -> Self {
        let (state, _release) = SidebarWidgetState::new(store, timing);
        Self { state }
    }

    /// Reduce an intent into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        intent: SidebarIntent,
        ctx: &SidebarCtx,
    ) -> Task<SidebarEffect> {
        reducer::reduce(&mut self.state, intent, ctx)
    }

    pub(crate) fn is_animating(&self, now: Instant) -> bool {
        self.state.is_animating(now)
    }

    /// Return a view model sampled at `now`.
    pub(crate) fn vm(
        &self,
        active_page: Page,
        now: Instant,
    ) -> model::SidebarViewModel {
        model::SidebarViewModel {
            active_page,
            projection: self.state.projection(now),
        }
    }
}
