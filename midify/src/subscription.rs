use std::time::Duration;

use iced::Subscription;

use crate::app::{App, AppEvent};

const FRAME_INTERVAL_MS: u64 = 16;

/// Tick animation frames only while a tween is running.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    if !app.is_animating() {
        return Subscription::none();
    }

    iced::time::every(Duration::from_millis(FRAME_INTERVAL_MS))
        .map(AppEvent::Frame)
}
