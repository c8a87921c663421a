//! Scroll position to animation parameter mapping.
//!
//! The coordinator is purely reactive: event handlers call [`ScrollCoordinator::observe`]
//! with the latest scroll offset, the frame loop calls
//! [`ScrollCoordinator::advance`] once per tick, and the renderer reads the
//! eased outputs. Continuous motion (rotation easing, velocity decay, the
//! progress rail) is expressed entirely through [`Tween`]s, so there are no
//! host timers to cancel at teardown.

use crate::constants::*;
use crate::ease::{Ease, Tween};

/// Geometry of the scroll container, in document pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub container_top: f32,
    pub container_height: f32,
    pub viewport_height: f32,
}

/// Fraction of the container traversed: 0 when the container top is aligned
/// with the viewport top, 1 when the container bottom is aligned with the
/// viewport bottom. Clamped, so out-of-order or overscrolled events stay in
/// bounds.
pub fn progress_for(scroll_y: f32, metrics: &ScrollMetrics) -> f32 {
    let span = metrics.container_height - metrics.viewport_height;
    if span <= 0.0 {
        return 0.0;
    }
    ((scroll_y - metrics.container_top) / span).clamp(0.0, 1.0)
}

/// Mesh rotation targets derived from progress. Pure.
pub fn rotation_for_progress(progress: f32) -> (f32, f32) {
    (
        progress * std::f32::consts::PI * ROTATION_X_TURNS,
        progress * std::f32::consts::PI * ROTATION_Y_TURNS,
    )
}

pub struct ScrollCoordinator {
    progress: f32,
    velocity: f32,
    last_y: Option<f32>,
    idle_secs: f32,
    decay: Option<Tween>,
    rot_x: Tween,
    rot_y: Tween,
    rail: Tween,
}

impl ScrollCoordinator {
    pub fn new() -> Self {
        Self {
            progress: 0.0,
            velocity: 0.0,
            last_y: None,
            idle_secs: 0.0,
            decay: None,
            rot_x: Tween::new(0.0, ROTATION_EASE_SEC, Ease::CubicOut),
            rot_y: Tween::new(0.0, ROTATION_EASE_SEC, Ease::CubicOut),
            rail: Tween::new(0.0, RAIL_EASE_SEC, Ease::QuadOut),
        }
    }

    /// Record a scroll event. Retargets rotation and the rail, resets the
    /// velocity idle timer.
    pub fn observe(&mut self, scroll_y: f32, metrics: &ScrollMetrics) {
        self.progress = progress_for(scroll_y, metrics);
        if let Some(last) = self.last_y {
            self.velocity = ((scroll_y - last) * VELOCITY_SCALE).clamp(-1.0, 1.0);
        }
        self.last_y = Some(scroll_y);
        self.idle_secs = 0.0;
        self.decay = None;

        let (rx, ry) = rotation_for_progress(self.progress);
        self.rot_x.retarget(rx);
        self.rot_y.retarget(ry);
        self.rail.retarget(self.progress);
    }

    /// Step eased values by `dt` seconds. After the idle delay the velocity
    /// eases back to zero; the curve is monotonic and never crosses zero.
    pub fn advance(&mut self, dt: f32) {
        self.rot_x.advance(dt);
        self.rot_y.advance(dt);
        self.rail.advance(dt);
        self.idle_secs += dt;
        if let Some(decay) = &mut self.decay {
            decay.advance(dt);
            self.velocity = decay.value();
        } else if self.idle_secs >= VELOCITY_IDLE_DELAY_SEC && self.velocity != 0.0 {
            let mut decay = Tween::new(self.velocity, VELOCITY_DECAY_SEC, Ease::CubicOut);
            decay.retarget(0.0);
            self.decay = Some(decay);
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Current eased mesh rotation (x, y) in radians.
    pub fn rotation(&self) -> (f32, f32) {
        (self.rot_x.value(), self.rot_y.value())
    }

    /// Current eased scale factor for the progress rail.
    pub fn rail_scale(&self) -> f32 {
        self.rail.value()
    }
}

impl Default for ScrollCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
