pub(crate) mod files;
pub(crate) mod navigation;
pub(crate) mod popup;
pub(crate) mod sidebar;

use std::time::Duration;

use iced::Task;

use crate::app::AppEvent;

/// Deliver `event` once `delay` has elapsed.
pub(crate) fn after(delay: Duration, event: AppEvent) -> Task<AppEvent> {
    Task::perform(async move { tokio::time::sleep(delay).await }, move |()| {
        event
    })
}
