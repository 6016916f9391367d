use std::time::{Duration, Instant};

/// Scalar property animated toward a target over a fixed duration.
///
/// Setting a new target mid-flight starts the next tween from the value
/// currently on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: f32,
    to: f32,
    started_at: Option<Instant>,
    duration: Duration,
}

impl Transition {
    /// Create a transition resting at `value`.
    pub fn new(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            started_at: None,
            duration: Duration::ZERO,
        }
    }

    /// Value the transition settles on.
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Tween toward `target`, starting at `now`.
    pub fn set(&mut self, target: f32, now: Instant, duration: Duration) {
        if duration.is_zero() {
            self.jump(target);
            return;
        }

        self.from = self.value_at(now);
        self.to = target;
        self.started_at = Some(now);
        self.duration = duration;
    }

    /// Move to `target` without animating.
    pub fn jump(&mut self, target: f32) {
        self.from = target;
        self.to = target;
        self.started_at = None;
        self.duration = Duration::ZERO;
    }

    /// Sample the value at `now`.
    pub fn value_at(&self, now: Instant) -> f32 {
        let Some(progress) = self.progress(now) else {
            return self.to;
        };

        self.from + (self.to - self.from) * ease(progress)
    }

    /// Whether the tween is still running at `now`.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.progress(now).is_some_and(|progress| progress < 1.0)
    }

    fn progress(&self, now: Instant) -> Option<f32> {
        let started_at = self.started_at?;
        if self.duration.is_zero() {
            return None;
        }

        let elapsed = now.saturating_duration_since(started_at);
        Some((elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0))
    }
}

/// Smoothstep, close enough to the CSS `ease` curve.
fn ease(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}
