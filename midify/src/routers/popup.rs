use iced::Task;

use crate::app::{App, AppEvent};
use crate::routers;
use crate::widgets::popup::{PopupCtx, PopupEffect, PopupEvent, PopupIntent};

/// Route a popup event to the widget reducer or to app-level tasks.
pub(crate) fn route_event(app: &mut App, event: PopupEvent) -> Task<AppEvent> {
    match event {
        PopupEvent::Intent(intent) => route_intent(app, intent),
        PopupEvent::Effect(effect) => route_effect(effect),
    }
}

/// Route a popup intent through the widget reducer.
pub(crate) fn route_intent(
    app: &mut App,
    intent: PopupIntent,
) -> Task<AppEvent> {
    let ctx = PopupCtx { now: app.now };
    app.widgets
        .popup
        .reduce(intent, &ctx)
        .map(|effect| AppEvent::Popup(PopupEvent::Effect(effect)))
}

fn route_effect(effect: PopupEffect) -> Task<AppEvent> {
    match effect {
        PopupEffect::Schedule {
            generation,
            scheduled,
        } => routers::after(
            scheduled.delay,
            AppEvent::Popup(PopupEvent::Intent(PopupIntent::Step {
                generation,
                step: scheduled.step,
            })),
        ),
    }
}
