//! Eased values advanced once per frame tick.
//!
//! A [`Tween`] carries its own duration and easing curve; retargeting restarts
//! the curve from the current value, so an in-flight tween toward an old
//! target is superseded rather than queued.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    QuadOut,
    CubicOut,
    CubicInOut,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::CubicOut => 1.0 - (1.0 - t).powi(3),
            Ease::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct Tween {
    start: f32,
    target: f32,
    duration: f32,
    elapsed: f32,
    ease: Ease,
}

impl Tween {
    /// Create a tween already settled at `value`.
    pub fn new(value: f32, duration: f32, ease: Ease) -> Self {
        Self {
            start: value,
            target: value,
            duration,
            elapsed: duration,
            ease,
        }
    }

    /// Begin easing toward `target` from the current value. Overwrites any
    /// in-flight motion; never queues.
    pub fn retarget(&mut self, target: f32) {
        self.start = self.value();
        self.target = target;
        self.elapsed = 0.0;
    }

    pub fn advance(&mut self, dt: f32) {
        if dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.duration);
        }
    }

    pub fn value(&self) -> f32 {
        if self.duration <= 0.0 || self.elapsed >= self.duration {
            return self.target;
        }
        let t = self.elapsed / self.duration;
        self.start + (self.target - self.start) * self.ease.apply(t)
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn settled(&self) -> bool {
        self.duration <= 0.0 || self.elapsed >= self.duration
    }
}
