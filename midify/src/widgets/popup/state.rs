use std::time::Instant;

use midify_ui_controls::{
    Acknowledgment, PopupProjection, PopupState, PopupStep, PopupSwitcher,
    Scheduled, TabSelector, TransitionTiming, Trigger,
};

/// Popup widget state for one Home page load.
#[derive(Debug)]
pub(crate) struct PopupWidgetState {
    switcher: PopupSwitcher,
    tabs: TabSelector,
    text_value: String,
    acknowledgment: Option<Acknowledgment>,
    generation: u64,
}

impl PopupWidgetState {
    pub(crate) fn new(timing: TransitionTiming) -> Self {
        Self {
            switcher: PopupSwitcher::new(timing),
            tabs: TabSelector::new(Trigger::ALL.len()),
            text_value: String::new(),
            acknowledgment: None,
            generation: 0,
        }
    }

    /// Discard everything from the previous page load.
    pub(crate) fn reset(&mut self) {
        let generation = self.generation.wrapping_add(1);
        *self = Self::new(self.switcher.timing());
        self.generation = generation;
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    /// Mark the half-button for `trigger` and drive the switcher.
    pub(crate) fn press(
        &mut self,
        trigger: Trigger,
        now: Instant,
    ) -> Vec<Scheduled<PopupStep>> {
        self.tabs.select(trigger.index());
        self.switcher.trigger(trigger, now)
    }

    pub(crate) fn apply(
        &mut self,
        step: PopupStep,
        now: Instant,
    ) -> Vec<Scheduled<PopupStep>> {
        self.switcher.apply(step, now)
    }

    pub(crate) fn set_text_value(&mut self, value: String) {
        self.text_value = value;
    }

    pub(crate) fn text_value(&self) -> &str {
        &self.text_value
    }

    pub(crate) fn submit_text(&mut self) -> &Acknowledgment {
        self.acknowledgment
            .insert(self.switcher.submit_text(&self.text_value))
    }

    pub(crate) fn submit_file(&mut self) -> &Acknowledgment {
        self.acknowledgment.insert(self.switcher.submit_file())
    }

    pub(crate) fn dismiss_acknowledgment(&mut self) {
        self.acknowledgment = None;
    }

    pub(crate) fn acknowledgment(&self) -> Option<&Acknowledgment> {
        self.acknowledgment.as_ref()
    }

    pub(crate) fn popup_state(&self) -> PopupState {
        self.switcher.state()
    }

    pub(crate) fn tabs(&self) -> &TabSelector {
        &self.tabs
    }

    pub(crate) fn is_animating(&self, now: Instant) -> bool {
        self.switcher.is_animating(now)
    }

    pub(crate) fn projection(&self, now: Instant) -> PopupProjection {
        self.switcher.projection(now)
    }
}
