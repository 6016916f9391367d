use std::fmt;
use std::time::Instant;

use crate::schedule::{Scheduled, TransitionTiming};
use crate::transition::Transition;

const EXPANDED_WIDTH_PCT: f32 = 65.0;
const EXPANDED_LEFT_PCT: f32 = 17.5;
const COLLAPSED_WIDTH_PCT: f32 = 0.0;
const COLLAPSED_LEFT_PCT: f32 = 50.0;

/// Content pane hosted by the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PopupPane {
    TextInput,
    FileUpload,
}

impl PopupPane {
    pub const ALL: [PopupPane; 2] =
        [PopupPane::TextInput, PopupPane::FileUpload];

    /// Element id the pane is addressed by.
    pub fn element_id(self) -> &'static str {
        match self {
            PopupPane::TextInput => "textInputContent",
            PopupPane::FileUpload => "fileUploadContent",
        }
    }

    fn index(self) -> usize {
        match self {
            PopupPane::TextInput => 0,
            PopupPane::FileUpload => 1,
        }
    }
}

/// Element that opens the popup on a given pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Left,
    Right,
}

impl Trigger {
    pub const ALL: [Trigger; 2] = [Trigger::Left, Trigger::Right];

    /// Position of the matching half-button, left to right.
    pub fn index(self) -> usize {
        match self {
            Trigger::Left => 0,
            Trigger::Right => 1,
        }
    }

    pub fn pane(self) -> PopupPane {
        match self {
            Trigger::Left => PopupPane::TextInput,
            Trigger::Right => PopupPane::FileUpload,
        }
    }
}

/// Visibility and expansion state of the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupState {
    Collapsed,
    Expanding,
    ExpandedShowingTextInput,
    ExpandedShowingFileUpload,
}

impl PopupState {
    fn showing(pane: PopupPane) -> Self {
        match pane {
            PopupPane::TextInput => PopupState::ExpandedShowingTextInput,
            PopupPane::FileUpload => PopupState::ExpandedShowingFileUpload,
        }
    }

    /// Pane shown while expanded.
    pub fn shown_pane(self) -> Option<PopupPane> {
        match self {
            PopupState::ExpandedShowingTextInput => Some(PopupPane::TextInput),
            PopupState::ExpandedShowingFileUpload => {
                Some(PopupPane::FileUpload)
            },
            PopupState::Collapsed | PopupState::Expanding => None,
        }
    }

    pub fn is_expanded(self) -> bool {
        self.shown_pane().is_some()
    }
}

/// Deferred choreography steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupStep {
    /// Grow the popup to its expanded geometry and lay out the requested pane.
    Expand,
    /// Fade a pane in.
    RevealPane(PopupPane),
    /// Take a faded-out pane out of layout.
    HidePane(PopupPane),
}

/// Acknowledgment surfaced by the submit actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acknowledgment {
    Text(String),
    File,
}

impl fmt::Display for Acknowledgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Acknowledgment::Text(value) => write!(f, "You entered: {value}"),
            Acknowledgment::File => f.write_str("File will be uploaded!"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PaneLayer {
    displayed: bool,
    opacity: Transition,
}

impl Default for PaneLayer {
    fn default() -> Self {
        Self {
            displayed: false,
            opacity: Transition::new(0.0),
        }
    }
}

/// Snapshot of a pane's visual properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneProjection {
    /// Pane takes part in layout.
    pub displayed: bool,
    pub opacity: f32,
    /// Pane is displayed and fully opaque.
    pub visible: bool,
}

/// Snapshot of the popup's visual properties at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupProjection {
    pub displayed: bool,
    pub width_pct: f32,
    pub left_pct: f32,
    pub opacity: f32,
    panes: [PaneProjection; 2],
}

impl PopupProjection {
    pub fn pane(&self, pane: PopupPane) -> PaneProjection {
        self.panes[pane.index()]
    }
}

/// Two-pane popup: expansion on first trigger, crossfade afterwards.
#[derive(Debug, Clone)]
pub struct PopupSwitcher {
    timing: TransitionTiming,
    state: PopupState,
    requested: PopupPane,
    displayed: bool,
    width: Transition,
    left: Transition,
    opacity: Transition,
    panes: [PaneLayer; 2],
}

impl PopupSwitcher {
    pub fn new(timing: TransitionTiming) -> Self {
        Self {
            timing,
            state: PopupState::Collapsed,
            requested: PopupPane::TextInput,
            displayed: false,
            width: Transition::new(COLLAPSED_WIDTH_PCT),
            left: Transition::new(COLLAPSED_LEFT_PCT),
            opacity: Transition::new(0.0),
            panes: [PaneLayer::default(); 2],
        }
    }

    pub fn state(&self) -> PopupState {
        self.state
    }

    pub fn timing(&self) -> TransitionTiming {
        self.timing
    }

    /// Handle a click on one of the expansion triggers.
    pub fn trigger(
        &mut self,
        trigger: Trigger,
        now: Instant,
    ) -> Vec<Scheduled<PopupStep>> {
        let pane = trigger.pane();
        match self.state {
            PopupState::Collapsed => {
                self.requested = pane;
                self.displayed = true;
                self.state = PopupState::Expanding;
                vec![Scheduled::after(
                    self.timing.reflow_delay,
                    PopupStep::Expand,
                )]
            },
            PopupState::Expanding => {
                self.requested = pane;
                Vec::new()
            },
            PopupState::ExpandedShowingTextInput
            | PopupState::ExpandedShowingFileUpload => {
                self.switch_content(pane, now)
            },
        }
    }

    /// Apply a step previously returned by this switcher.
    pub fn apply(
        &mut self,
        step: PopupStep,
        now: Instant,
    ) -> Vec<Scheduled<PopupStep>> {
        match step {
            PopupStep::Expand => self.expand(now),
            PopupStep::RevealPane(pane) => {
                let duration = self.timing.duration;
                self.layer_mut(pane).opacity.set(1.0, now, duration);
                Vec::new()
            },
            PopupStep::HidePane(pane) => {
                if self.state.shown_pane() == Some(pane) {
                    log::debug!(
                        "skipping hide of re-selected pane {}",
                        pane.element_id()
                    );
                } else {
                    self.layer_mut(pane).displayed = false;
                }
                Vec::new()
            },
        }
    }

    /// Whether any tween is still running at `now`.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.width.is_animating(now)
            || self.left.is_animating(now)
            || self.opacity.is_animating(now)
            || self
                .panes
                .iter()
                .any(|layer| layer.opacity.is_animating(now))
    }

    /// Sample every visual property at `now`.
    pub fn projection(&self, now: Instant) -> PopupProjection {
        let pane = |layer: &PaneLayer| {
            let opacity = layer.opacity.value_at(now);
            PaneProjection {
                displayed: layer.displayed,
                opacity,
                visible: layer.displayed && opacity >= 1.0,
            }
        };

        PopupProjection {
            displayed: self.displayed,
            width_pct: self.width.value_at(now),
            left_pct: self.left.value_at(now),
            opacity: self.opacity.value_at(now),
            panes: [pane(&self.panes[0]), pane(&self.panes[1])],
        }
    }

    /// Read the text field value and acknowledge it.
    pub fn submit_text(&self, value: &str) -> Acknowledgment {
        Acknowledgment::Text(value.to_string())
    }

    /// Acknowledge an upload request without reading any file.
    pub fn submit_file(&self) -> Acknowledgment {
        Acknowledgment::File
    }

    fn expand(&mut self, now: Instant) -> Vec<Scheduled<PopupStep>> {
        let duration = self.timing.duration;
        let pane = self.requested;

        self.opacity.set(1.0, now, duration);
        self.width.set(EXPANDED_WIDTH_PCT, now, duration);
        self.left.set(EXPANDED_LEFT_PCT, now, duration);
        self.layer_mut(pane).displayed = true;
        self.state = PopupState::showing(pane);

        vec![Scheduled::after(duration, PopupStep::RevealPane(pane))]
    }

    fn switch_content(
        &mut self,
        pane: PopupPane,
        now: Instant,
    ) -> Vec<Scheduled<PopupStep>> {
        let duration = self.timing.duration;
        let mut scheduled = Vec::new();

        for other in PopupPane::ALL.into_iter().filter(|p| *p != pane) {
            self.layer_mut(other).opacity.set(0.0, now, duration);
            scheduled.push(Scheduled::after(
                duration,
                PopupStep::HidePane(other),
            ));
        }

        self.layer_mut(pane).displayed = true;
        self.state = PopupState::showing(pane);
        scheduled.push(Scheduled::after(duration, PopupStep::RevealPane(pane)));
        scheduled
    }

    fn layer_mut(&mut self, pane: PopupPane) -> &mut PaneLayer {
        &mut self.panes[pane.index()]
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;

    /// Fire every pending step in delay order, including steps scheduled by
    /// the steps themselves, advancing the clock as timers elapse.
    fn run_timers(
        popup: &mut PopupSwitcher,
        start: Instant,
        pending: Vec<Scheduled<PopupStep>>,
    ) -> Instant {
        let mut queue: Vec<(Instant, PopupStep)> = pending
            .into_iter()
            .map(|scheduled| (start + scheduled.delay, scheduled.step))
            .collect();
        let mut clock = start;

        while !queue.is_empty() {
            queue.sort_by_key(|(at, _)| *at);
            let (at, step) = queue.remove(0);
            clock = clock.max(at);
            for next in popup.apply(step, clock) {
                queue.push((clock + next.delay, next.step));
            }
        }

        clock + popup.timing().duration
    }

    #[test]
    fn given_collapsed_popup_when_left_clicked_then_expanding_with_reflow_delay()
     {
        let timing = TransitionTiming::default();
        let mut popup = PopupSwitcher::new(timing);

        let pending = popup.trigger(Trigger::Left, Instant::now());

        assert_eq!(popup.state(), PopupState::Expanding);
        assert_eq!(
            pending,
            vec![Scheduled::after(timing.reflow_delay, PopupStep::Expand)]
        );
        assert!(popup.projection(Instant::now()).displayed);
    }

    #[test]
    fn given_collapsed_popup_when_left_clicked_and_timers_fire_then_text_pane_is_visible()
     {
        let mut popup = PopupSwitcher::new(TransitionTiming::default());
        let start = Instant::now();

        let pending = popup.trigger(Trigger::Left, start);
        let settled = run_timers(&mut popup, start, pending);

        let projection = popup.projection(settled);
        assert_eq!(popup.state(), PopupState::ExpandedShowingTextInput);
        assert!(projection.displayed);
        assert_eq!(projection.width_pct, 65.0);
        assert_eq!(projection.left_pct, 17.5);
        assert_eq!(projection.opacity, 1.0);
        assert!(projection.pane(PopupPane::TextInput).visible);
        assert!(!projection.pane(PopupPane::FileUpload).displayed);
    }

    #[test]
    fn given_expansion_when_width_is_still_growing_then_pane_is_not_yet_opaque()
     {
        let timing = TransitionTiming::default();
        let mut popup = PopupSwitcher::new(timing);
        let start = Instant::now();

        let _ = popup.trigger(Trigger::Left, start);
        let expand_at = start + timing.reflow_delay;
        let reveal = popup.apply(PopupStep::Expand, expand_at);

        let midway = popup.projection(expand_at + timing.duration / 2);
        assert!(midway.width_pct > 0.0 && midway.width_pct < 65.0);
        assert_eq!(midway.pane(PopupPane::TextInput).opacity, 0.0);
        assert_eq!(
            reveal,
            vec![Scheduled::after(
                timing.duration,
                PopupStep::RevealPane(PopupPane::TextInput)
            )]
        );
    }

    #[test]
    fn given_expanded_popup_when_reveal_step_applied_then_pane_fades_in_over_duration()
     {
        let timing = TransitionTiming::default();
        let mut popup = PopupSwitcher::new(timing);
        let start = Instant::now();
        let _ = popup.trigger(Trigger::Left, start);
        let _ = popup.apply(PopupStep::Expand, start);
        let reveal_at = start + timing.duration;

        let next = popup
            .apply(PopupStep::RevealPane(PopupPane::TextInput), reveal_at);

        assert!(next.is_empty());
        assert!(popup.is_animating(reveal_at));
        let midway = popup
            .projection(reveal_at + timing.duration / 2)
            .pane(PopupPane::TextInput);
        assert!(midway.opacity > 0.0 && midway.opacity < 1.0);
        assert!(!midway.visible);
        let settled = popup
            .projection(reveal_at + timing.duration)
            .pane(PopupPane::TextInput);
        assert!(settled.visible);
    }

    #[test]
    fn given_text_pane_shown_when_right_clicked_then_file_pane_replaces_it() {
        let mut popup = PopupSwitcher::new(TransitionTiming::default());
        let start = Instant::now();
        let pending = popup.trigger(Trigger::Left, start);
        let clock = run_timers(&mut popup, start, pending);

        let pending = popup.trigger(Trigger::Right, clock);
        let settled = run_timers(&mut popup, clock, pending);

        let projection = popup.projection(settled);
        assert_eq!(popup.state(), PopupState::ExpandedShowingFileUpload);
        assert!(!projection.pane(PopupPane::TextInput).displayed);
        assert!(projection.pane(PopupPane::FileUpload).visible);
        assert_eq!(projection.width_pct, 65.0);
    }

    #[test]
    fn given_switch_in_progress_when_sampled_then_both_panes_are_in_layout() {
        let timing = TransitionTiming::default();
        let mut popup = PopupSwitcher::new(timing);
        let start = Instant::now();
        let pending = popup.trigger(Trigger::Left, start);
        let clock = run_timers(&mut popup, start, pending);

        let _ = popup.trigger(Trigger::Right, clock);

        let crossfade = popup.projection(clock + timing.duration / 2);
        assert!(crossfade.pane(PopupPane::TextInput).displayed);
        assert!(crossfade.pane(PopupPane::FileUpload).displayed);
        assert!(!crossfade.pane(PopupPane::TextInput).visible);
        assert!(!crossfade.pane(PopupPane::FileUpload).visible);
    }

    #[test]
    fn given_rapid_retoggle_when_timers_fire_then_panes_are_never_both_opaque()
    {
        let timing = TransitionTiming::default();
        let mut popup = PopupSwitcher::new(timing);
        let start = Instant::now();
        let pending = popup.trigger(Trigger::Left, start);
        let clock = run_timers(&mut popup, start, pending);

        let mut pending = popup.trigger(Trigger::Right, clock);
        let retoggle_at = clock + Duration::from_millis(100);
        pending.extend(
            popup
                .trigger(Trigger::Left, retoggle_at)
                .into_iter()
                .map(|scheduled| {
                    Scheduled::after(
                        scheduled.delay + Duration::from_millis(100),
                        scheduled.step,
                    )
                }),
        );
        let settled = run_timers(&mut popup, clock, pending);

        let projection = popup.projection(settled);
        assert_eq!(popup.state(), PopupState::ExpandedShowingTextInput);
        assert!(projection.pane(PopupPane::TextInput).visible);
        assert!(!projection.pane(PopupPane::FileUpload).visible);
    }

    #[test]
    fn given_expanding_popup_when_other_trigger_clicked_then_expansion_is_retargeted()
     {
        let mut popup = PopupSwitcher::new(TransitionTiming::immediate());
        let now = Instant::now();
        let pending = popup.trigger(Trigger::Left, now);

        let extra = popup.trigger(Trigger::Right, now);
        let settled = run_timers(&mut popup, now, pending);

        assert!(extra.is_empty());
        assert_eq!(popup.state(), PopupState::ExpandedShowingFileUpload);
        let projection = popup.projection(settled);
        assert!(projection.pane(PopupPane::FileUpload).visible);
        assert!(!projection.pane(PopupPane::TextInput).displayed);
    }

    #[test]
    fn given_same_trigger_twice_when_expanded_then_pane_stays_visible() {
        let mut popup = PopupSwitcher::new(TransitionTiming::immediate());
        let now = Instant::now();
        let pending = popup.trigger(Trigger::Right, now);
        run_timers(&mut popup, now, pending);

        let pending = popup.trigger(Trigger::Right, now);
        let settled = run_timers(&mut popup, now, pending);

        assert!(popup.projection(settled).pane(PopupPane::FileUpload).visible);
    }

    #[test]
    fn given_submissions_when_acknowledged_then_messages_match_actions() {
        let popup = PopupSwitcher::new(TransitionTiming::immediate());

        assert_eq!(
            popup.submit_text("hello").to_string(),
            "You entered: hello"
        );
        assert_eq!(popup.submit_text("").to_string(), "You entered: ");
        assert_eq!(popup.submit_file().to_string(), "File will be uploaded!");
    }

    #[test]
    fn given_pane_ids_when_listed_then_match_element_contract() {
        assert_eq!(PopupPane::TextInput.element_id(), "textInputContent");
        assert_eq!(PopupPane::FileUpload.element_id(), "fileUploadContent");
    }
}
