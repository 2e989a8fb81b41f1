use glam::Vec2;

/// Per-step blend factor for exponential smoothing with time constant `tau`.
///
/// Frame-rate independent: two steps of `dt` equal one step of `2 * dt`.
#[inline]
pub fn smoothing_alpha(dt: f32, tau: f32) -> f32 {
    if !dt.is_finite() || dt <= 0.0 {
        return 0.0;
    }
    if tau <= 0.0 {
        return 1.0;
    }
    1.0 - (-dt / tau).exp()
}

/// A value that eases toward a moving goal. Used for scroll scrub and the
/// cursor ring.
#[derive(Clone, Copy, Debug)]
pub struct Follower {
    pub value: Vec2,
    pub tau: f32,
}

impl Follower {
    pub fn new(value: Vec2, tau: f32) -> Self {
        Self { value, tau }
    }

    pub fn step(&mut self, goal: Vec2, dt: f32) -> Vec2 {
        if goal.is_finite() {
            self.value += (goal - self.value) * smoothing_alpha(dt, self.tau);
        }
        self.value
    }

    pub fn snap(&mut self, goal: Vec2) {
        self.value = goal;
    }
}
