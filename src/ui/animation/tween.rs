//! Scalar tween over an `iced_anim` transition with restart-from-current
//! retargeting

use iced::time::{Duration, Instant};
use iced_anim::Animated;

use super::EasingPreset;

/// Whether an interpolation is in flight
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenState {
    Idle,
    Animating { from: f32, to: f32, started: Instant },
}

/// A scalar that interpolates toward a target over a fixed duration
///
/// The transition is only moved forward by [`advance`](Self::advance) and
/// [`animate_to`](Self::animate_to), both of which take the frame time.
#[derive(Debug)]
pub struct ProgressTween {
    animation: Animated<f32>,
    state: TweenState,
    duration: Duration,
    easing: EasingPreset,
}

impl ProgressTween {
    pub fn new(initial: f32, duration: Duration, easing: EasingPreset) -> Self {
        Self {
            animation: Animated::transition(initial, easing.easing(duration)),
            state: TweenState::Idle,
            duration,
            easing,
        }
    }

    /// Last sampled value
    pub fn value(&self) -> f32 {
        *self.animation.value()
    }

    /// Value the tween is heading to (the current value when idle)
    #[cfg(test)]
    pub fn target(&self) -> f32 {
        *self.animation.target()
    }

    #[cfg(test)]
    pub fn state(&self) -> TweenState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, TweenState::Animating { .. })
    }

    /// Start interpolating toward `target`
    ///
    /// The value is sampled at `now` first and a fresh transition starts from
    /// it, so a retarget in flight continues from where the previous run got
    /// to instead of snapping back.
    pub fn animate_to(&mut self, target: f32, now: Instant) {
        let current = self.advance(now);

        if current == target {
            self.settle(current);
            return;
        }

        if self.duration.is_zero() {
            self.settle(target);
            return;
        }

        self.animation = Animated::transition(current, self.easing.easing(self.duration));
        self.animation.update(target.into());
        self.animation.tick(now);
        self.state = TweenState::Animating {
            from: current,
            to: target,
            started: now,
        };
    }

    /// Move the tween to `now` and return the new value
    ///
    /// Once the transition stops, or its duration has elapsed, the value is
    /// set to exactly the target and the tween returns to
    /// [`TweenState::Idle`].
    pub fn advance(&mut self, now: Instant) -> f32 {
        let TweenState::Animating { from, to, started } = self.state else {
            return self.value();
        };

        self.animation.tick(now);

        let elapsed = now.saturating_duration_since(started);
        if !self.animation.is_animating() || elapsed >= self.duration {
            tracing::trace!("Tween {} -> {} settled after {:?}", from, to, elapsed);
            self.settle(to);
        }

        self.value()
    }

    /// Jump to `value` and stop any running transition
    fn settle(&mut self, value: f32) {
        self.animation = Animated::transition(value, self.easing.easing(self.duration));
        self.state = TweenState::Idle;
    }
}
