//! Scene parameters handed to the planners and stores.
//!
//! Defaults come from [`crate::constants`]; tests and alternative pages can
//! build their own values.

use crate::constants::*;

/// Half-open `[min, max)` range sampled uniformly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v < self.max
    }

    pub fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.max > self.min {
            rng.gen_range(self.min..self.max)
        } else {
            self.min
        }
    }
}

impl From<(f32, f32)> for Span {
    fn from((min, max): (f32, f32)) -> Self {
        Self::new(min, max)
    }
}

#[derive(Clone, Debug)]
pub struct SceneParams {
    pub trail_capacity: usize,
    pub trail_life_step: f32,
    pub max_in_flight: usize,
    pub flight_duration: Span,
    pub end_jitter_x: Span,
    pub end_jitter_y: Span,
    pub arc_lateral: Span,
    pub arc_lift: Span,
    pub spin_x: Span,
    pub impact_blobs_min: usize,
    pub impact_blobs_span: usize,
    pub impact_max_radius: f32,
    pub music_volume: f32,
    pub sfx_volume: f32,
    pub sfx_cleanup_timeout_sec: f64,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            trail_capacity: TRAIL_CAPACITY,
            trail_life_step: TRAIL_LIFE_STEP,
            max_in_flight: MAX_IN_FLIGHT,
            flight_duration: Span::new(
                FLIGHT_DURATION_MIN,
                FLIGHT_DURATION_MIN + FLIGHT_DURATION_SPAN,
            ),
            end_jitter_x: END_JITTER_X.into(),
            end_jitter_y: END_JITTER_Y.into(),
            arc_lateral: ARC_LATERAL.into(),
            arc_lift: Span::new(ARC_LIFT_MIN, ARC_LIFT_MIN + ARC_LIFT_SPAN),
            spin_x: SPIN_X_DEG.into(),
            impact_blobs_min: IMPACT_BLOBS_MIN,
            impact_blobs_span: IMPACT_BLOBS_SPAN,
            impact_max_radius: IMPACT_MAX_RADIUS,
            music_volume: MUSIC_VOLUME,
            sfx_volume: SFX_VOLUME,
            sfx_cleanup_timeout_sec: SFX_CLEANUP_TIMEOUT_SEC,
        }
    }
}
