//! Flight planning: the curved path a thrown cake follows.
//!
//! Positions are interpolated along an authored curve; nothing here
//! integrates velocity. The curve is a quadratic Bézier whose control point
//! is chosen so the path passes through the waypoint at its midpoint.

use crate::constants::{LAUNCH_BACK_OVERSHOOT, SPIN_Y_DEG};
use crate::ease::Ease;
use crate::params::SceneParams;
use glam::Vec2;
use rand::Rng;

/// Progress along the curve accelerates into the target.
pub const PATH_EASE: Ease = Ease::InCubic;
/// Tumble advances evenly over the flight.
pub const TUMBLE_EASE: Ease = Ease::Linear;
/// Scale/opacity pop when the cake leaves the template.
pub const LAUNCH_EASE: Ease = Ease::OutBack(LAUNCH_BACK_OVERSHOOT);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightPlan {
    pub start: Vec2,
    pub waypoint: Vec2,
    pub end: Vec2,
    pub duration: f32,
    /// Total tumble around the vertical axis, degrees.
    pub spin_y: f32,
    /// Total tumble around the horizontal axis, degrees.
    pub spin_x: f32,
}

impl FlightPlan {
    /// Bézier control point that puts `waypoint` on the curve at `t = 0.5`.
    pub fn control(&self) -> Vec2 {
        self.waypoint * 2.0 - (self.start + self.end) * 0.5
    }

    /// Point on the curve for an already-eased parameter `t`.
    pub fn point_at(&self, t: f32) -> Vec2 {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        self.start * (u * u) + self.control() * (2.0 * u * t) + self.end * (t * t)
    }

    /// Position after `elapsed` seconds of flight.
    pub fn position(&self, elapsed: f32) -> Vec2 {
        self.point_at(PATH_EASE.apply(self.progress(elapsed)))
    }

    /// Linear time fraction of the flight.
    pub fn progress(&self, elapsed: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Tumble angles `(x, y)` in degrees, independent of the path ease.
    pub fn tumble(&self, elapsed: f32) -> (f32, f32) {
        let p = TUMBLE_EASE.apply(self.progress(elapsed));
        (self.spin_x * p, self.spin_y * p)
    }
}

/// Plan a throw from `start` towards `target`.
///
/// The end point is fixed here: if the target moves mid-flight the cake
/// still lands where the target was at throw time.
pub fn plan_flight<R: Rng + ?Sized>(
    start: Vec2,
    target: Vec2,
    params: &SceneParams,
    rng: &mut R,
) -> FlightPlan {
    let end = target
        + Vec2::new(
            params.end_jitter_x.sample(rng),
            params.end_jitter_y.sample(rng),
        );
    let waypoint = Vec2::new(
        (start.x + end.x) * 0.5 + params.arc_lateral.sample(rng),
        start.y.min(end.y) - params.arc_lift.sample(rng),
    );
    let duration = params.flight_duration.sample(rng);
    let spin_y = if rng.gen_bool(0.5) { SPIN_Y_DEG } else { -SPIN_Y_DEG };
    let spin_x = params.spin_x.sample(rng);
    log::debug!(
        "[flight] start=({:.1},{:.1}) via=({:.1},{:.1}) end=({:.1},{:.1}) dur={:.2}s",
        start.x,
        start.y,
        waypoint.x,
        waypoint.y,
        end.x,
        end.y,
        duration
    );
    FlightPlan {
        start,
        waypoint,
        end,
        duration,
        spin_y,
        spin_x,
    }
}
