pub(crate) mod event;
pub(crate) mod model;
pub(crate) mod reducer;
pub(crate) mod state;
pub(crate) mod view;

use std::time::Instant;

pub(crate) use event::{PopupEffect, PopupEvent, PopupIntent};
use iced::Task;
use midify_ui_controls::TransitionTiming;
pub(crate) use reducer::PopupCtx;
use state::PopupWidgetState;

/// Popup widget: the Home page half-buttons, the two-pane input popup and
/// the acknowledgment overlay.
pub(crate) struct PopupWidget {
    state: PopupWidgetState,
}

impl PopupWidget {
    pub(crate) fn new(timing: TransitionTiming) -> Self {
        Self {
            state: PopupWidgetState::new(timing),
        }
    }

    /// Reduce an intent into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        intent: PopupIntent,
        ctx: &PopupCtx,
    ) -> Task<PopupEffect> {
        reducer::reduce(&mut self.state, intent, ctx)
    }

    pub(crate) fn is_animating(&self, now: Instant) -> bool {
        self.state.is_animating(now)
    }

    /// Return a view model sampled at `now`.
    pub(crate) fn vm(&self, now: Instant) -> model::PopupViewModel<'_> {
        model::PopupViewModel {
            projection: self.state.projection(now),
            active_tab: self.state.tabs().active(),
            text_value: self.state.text_value(),
            acknowledgment: self.state.acknowledgment(),
        }
    }
}
