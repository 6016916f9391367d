use std::time::Duration;

const DEFAULT_TRANSITION_MS: u64 = 500;
const DEFAULT_REFLOW_DELAY_MS: u64 = 10;

/// A controller step the host must apply after `delay` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled<S> {
    pub delay: Duration,
    pub step: S,
}

impl<S> Scheduled<S> {
    pub fn after(delay: Duration, step: S) -> Self {
        Self { delay, step }
    }

    pub fn now(step: S) -> Self {
        Self::after(Duration::ZERO, step)
    }
}

/// Timing shared by every tween and every scheduled step.
///
/// The same `duration` drives the width/opacity tweens and the delay before
/// the follow-up steps, so content never fades in before its container has
/// finished growing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTiming {
    /// Length of a visual transition.
    pub duration: Duration,
    /// Pause between making the popup visible and starting its expansion.
    pub reflow_delay: Duration,
}

impl TransitionTiming {
    pub fn new(duration: Duration, reflow_delay: Duration) -> Self {
        Self {
            duration,
            reflow_delay,
        }
    }

    /// Timing with every delay set to zero.
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(DEFAULT_TRANSITION_MS),
            Duration::from_millis(DEFAULT_REFLOW_DELAY_MS),
        )
    }
}
