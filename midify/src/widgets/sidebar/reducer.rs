use std::time::Instant;

use iced::Task;

use super::event::{SidebarEffect, SidebarIntent};
use super::state::SidebarWidgetState;

/// Runtime context for the sidebar reducer.
pub(crate) struct SidebarCtx {
    pub(crate) now: Instant,
}

/// Reduce a sidebar intent into state updates and effects.
pub(crate) fn reduce(
    state: &mut SidebarWidgetState,
    intent: SidebarIntent,
    ctx: &SidebarCtx,
) -> Task<SidebarEffect> {
    match intent {
        SidebarIntent::PageLoaded => {
            let release = state.reload();
            Task::done(SidebarEffect::Schedule(release))
        },
        SidebarIntent::Step(step) => {
            state.apply(step);
            Task::none()
        },
        SidebarIntent::TogglePressed => {
            let toggled = state.toggle(ctx.now);
            log::debug!("sidebar toggled to {toggled:?}");
            Task::none()
        },
        SidebarIntent::NavLinkPressed(page) => {
            Task::done(SidebarEffect::Navigate(page))
        },
    }
}
