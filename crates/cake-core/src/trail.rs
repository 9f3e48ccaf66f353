//! Motion trail: a capped, insertion-ordered sequence of fading samples.

use crate::constants::{
    TRAIL_ALPHA_SCALE, TRAIL_BASE_RADIUS, TRAIL_FILL_ALPHA_SCALE, TRAIL_RADIUS_GROWTH,
};
use crate::params::SceneParams;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub x: f32,
    pub y: f32,
    pub life: f32,
}

/// Paint parameters for one live trail point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailDot {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub alpha: f32,
    pub fill_alpha: f32,
}

impl TrailPoint {
    pub fn is_live(&self) -> bool {
        self.life > 0.0
    }

    /// Radius grows and alpha fades as life drains.
    pub fn dot(&self) -> TrailDot {
        let life = self.life.clamp(0.0, 1.0);
        TrailDot {
            x: self.x,
            y: self.y,
            radius: TRAIL_BASE_RADIUS + (1.0 - life) * TRAIL_RADIUS_GROWTH,
            alpha: (life * TRAIL_ALPHA_SCALE).max(0.0),
            fill_alpha: TRAIL_FILL_ALPHA_SCALE * life,
        }
    }
}

#[derive(Clone, Debug)]
pub struct TrailStore {
    points: VecDeque<TrailPoint>,
    capacity: usize,
    life_step: f32,
}

impl Default for TrailStore {
    fn default() -> Self {
        Self::from_params(&SceneParams::default())
    }
}

impl TrailStore {
    pub fn new(capacity: usize, life_step: f32) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
            life_step,
        }
    }

    pub fn from_params(params: &SceneParams) -> Self {
        Self::new(params.trail_capacity, params.trail_life_step)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a fresh sample, evicting the oldest beyond capacity.
    pub fn push(&mut self, x: f32, y: f32) {
        self.points.push_back(TrailPoint { x, y, life: 1.0 });
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    /// Dots to paint this frame, oldest first. Dead points are skipped.
    pub fn dots(&self) -> impl Iterator<Item = TrailDot> + '_ {
        self.points.iter().filter(|p| p.is_live()).map(TrailPoint::dot)
    }

    /// Age every point by one frame and drop expired points from the front.
    pub fn decay(&mut self) {
        for p in self.points.iter_mut() {
            p.life -= self.life_step;
        }
        while self.points.front().is_some_and(|p| !p.is_live()) {
            self.points.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}
