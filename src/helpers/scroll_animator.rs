//! Time-based tween for smooth scrolling to a target offset

use std::time::{Duration, Instant};

/// Easing curve applied to the animation progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    active: bool,
    start: f32,
    target: f32,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self {
            active: false,
            start: 0.0,
            target: 0.0,
            started_at: Instant::now(),
            duration: Duration::from_millis(350),
            easing: Easing::EaseOut,
        }
    }
}

impl ScrollAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn start(&mut self, current: f32, target: f32, duration: Duration, easing: Easing) {
        self.start_at(current, target, duration, easing, Instant::now());
    }

    pub fn start_at(
        &mut self,
        current: f32,
        target: f32,
        duration: Duration,
        easing: Easing,
        now: Instant,
    ) {
        self.active = true;
        self.start = current;
        self.target = target;
        self.started_at = now;
        self.duration = duration;
        self.easing = easing;
    }

    /// Returns Some(next_offset) when animating, or None when finished/inactive
    pub fn tick(&mut self) -> Option<f32> {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration || self.duration.is_zero() {
            self.active = false;
            return Some(self.target);
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        let eased = self.easing.apply(t);
        Some(self.start + (self.target - self.start) * eased)
    }

    /// Cancel the current animation immediately.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}
