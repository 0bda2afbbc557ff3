//! Time-based value transitions.
//!
//! A [`Transition`] interpolates a single `f32` from one value to another
//! over a fixed duration. The sidebar drives its panel offset and overlay
//! opacity from one shared transition so both move in lockstep.

use std::time::{Duration, Instant};

/// Easing curve applied to linear progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Slow start, fast middle, slow finish.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` through the curve.
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => linear(t),
            Easing::EaseInOut => ease_in_out_cubic(t),
        }
    }
}

/// Linear interpolation (no easing)
#[inline]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Cubic ease-in-out. Symmetric: `f(1 - t) == 1 - f(t)`.
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// An animated value moving from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
    easing: Easing,
}

impl Transition {
    /// A transition already resting at `value`.
    pub fn settled(value: f32, now: Instant) -> Self {
        Self {
            from: value,
            to: value,
            started: now,
            duration: Duration::ZERO,
            easing: Easing::default(),
        }
    }

    /// Start a new transition.
    pub fn start(from: f32, to: f32, now: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            started: now,
            duration,
            easing,
        }
    }

    /// Move toward `to`, starting from wherever the value currently is.
    ///
    /// Reversing mid-flight continues from the current position instead of
    /// jumping.
    pub fn retarget(&mut self, to: f32, now: Instant, duration: Duration) {
        let current = self.value_at(now);
        *self = Self::start(current, to, now, duration, self.easing);
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Interpolated value at `now`.
    pub fn value_at(&self, now: Instant) -> f32 {
        let eased = self.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    /// Whether the value is still changing at `now`.
    pub fn is_running(&self, now: Instant) -> bool {
        self.progress(now) < 1.0 && self.from != self.to
    }
}
