use iced::Task;

use crate::app::{App, AppEvent};
use crate::routers;
use crate::widgets::sidebar::{
    SidebarCtx, SidebarEffect, SidebarEvent, SidebarIntent,
};

/// Route a sidebar event to the widget reducer or to app-level tasks.
pub(crate) fn route_event(
    app: &mut App,
    event: SidebarEvent,
) -> Task<AppEvent> {
    match event {
        SidebarEvent::Intent(intent) => route_intent(app, intent),
        SidebarEvent::Effect(effect) => route_effect(effect),
    }
}

/// Route a sidebar intent through the widget reducer.
pub(crate) fn route_intent(
    app: &mut App,
    intent: SidebarIntent,
) -> Task<AppEvent> {
    let ctx = SidebarCtx { now: app.now };
    app.widgets
        .sidebar
        .reduce(intent, &ctx)
        .map(|effect| AppEvent::Sidebar(SidebarEvent::Effect(effect)))
}

fn route_effect(effect: SidebarEffect) -> Task<AppEvent> {
    match effect {
        SidebarEffect::Schedule(scheduled) => routers::after(
            scheduled.delay,
            AppEvent::Sidebar(SidebarEvent::Intent(SidebarIntent::Step(
                scheduled.step,
            ))),
        ),
        SidebarEffect::Navigate(page) => Task::done(AppEvent::Navigate(page)),
    }
}
