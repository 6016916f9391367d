use std::time::Instant;

use iced::Task;

use super::{App, AppEvent};
use crate::pages::Page;
use crate::routers;

/// Thin dispatch: advance the frame clock, then route each event to its
/// owning router.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    app.now = match &event {
        AppEvent::Frame(now) => *now,
        _ => Instant::now(),
    };
    route(app, event)
}

fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::IcedReady => {
            routers::navigation::navigate(app, Page::default())
        },
        AppEvent::Navigate(page) => routers::navigation::navigate(app, page),
        AppEvent::Frame(_) => Task::none(),
        AppEvent::Sidebar(event) => routers::sidebar::route_event(app, event),
        AppEvent::Popup(event) => routers::popup::route_event(app, event),
        AppEvent::Files(event) => routers::files::route_event(app, event),
    }
}
