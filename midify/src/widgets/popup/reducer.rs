use std::time::Instant;

use iced::Task;
use midify_ui_controls::{PopupStep, Scheduled};

use super::event::{PopupEffect, PopupIntent};
use super::state::PopupWidgetState;

/// Runtime context for the popup reducer.
pub(crate) struct PopupCtx {
    pub(crate) now: Instant,
}

/// Reduce a popup intent into state updates and effects.
pub(crate) fn reduce(
    state: &mut PopupWidgetState,
    intent: PopupIntent,
    ctx: &PopupCtx,
) -> Task<PopupEffect> {
    match intent {
        PopupIntent::PageLoaded => {
            state.reset();
            Task::none()
        },
        PopupIntent::Step { generation, step } => {
            if generation != state.generation() {
                log::debug!("dropping stale popup step {step:?}");
                return Task::none();
            }
            let next = state.apply(step, ctx.now);
            schedule(state.generation(), next)
        },
        PopupIntent::TriggerPressed(trigger) => {
            let next = state.press(trigger, ctx.now);
            log::debug!(
                "popup trigger {trigger:?} pressed in {:?}",
                state.popup_state()
            );
            schedule(state.generation(), next)
        },
        PopupIntent::TextChanged(value) => {
            state.set_text_value(value);
            Task::none()
        },
        PopupIntent::SubmitText => {
            let acknowledgment = state.submit_text();
            log::info!("{acknowledgment}");
            Task::none()
        },
        PopupIntent::SubmitFile => {
            let acknowledgment = state.submit_file();
            log::info!("{acknowledgment}");
            Task::none()
        },
        PopupIntent::DismissAcknowledgment => {
            state.dismiss_acknowledgment();
            Task::none()
        },
    }
}

fn schedule(
    generation: u64,
    steps: Vec<Scheduled<PopupStep>>,
) -> Task<PopupEffect> {
    Task::batch(steps.into_iter().map(|scheduled| {
        Task::done(PopupEffect::Schedule {
            generation,
            scheduled,
        })
    }))
}
