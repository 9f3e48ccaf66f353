//! Procedural splat blobs painted onto the persistent splat surface.
//!
//! A blob is a closed outline that alternates, per angular sector, between a
//! randomised inner radius (on-curve points) and a randomised outer radius
//! (quadratic control points). All randomness is drawn when the blob is
//! built, so its outline is a pure function of the record.

use crate::constants::*;
use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lobe {
    /// On-curve radius as a fraction of the blob radius.
    pub inner: f32,
    /// Control-point radius as a fraction of the blob radius.
    pub outer: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Blob {
    pub center: Vec2,
    pub radius: f32,
    pub rotation: f32,
    pub color: &'static str,
    pub alpha: f32,
    pub lobes: SmallVec<[Lobe; 8]>,
}

/// One `quadraticCurveTo` segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadSegment {
    pub control: Vec2,
    pub to: Vec2,
}

impl Blob {
    pub fn random<R: Rng + ?Sized>(center: Vec2, max_radius: f32, rng: &mut R) -> Self {
        let color = SPLAT_PALETTE.choose(rng).copied().unwrap_or(SPLAT_PALETTE[0]);
        let radius = rng.gen::<f32>() * max_radius * BLOB_RADIUS_SCALE + BLOB_MIN_RADIUS;
        let spikes = BLOB_SPIKES_MIN + rng.gen_range(0..BLOB_SPIKES_SPAN);
        let rotation = rng.gen::<f32>() * TAU;
        let offset = Vec2::new(
            rng.gen_range(-BLOB_OFFSET_X..BLOB_OFFSET_X),
            rng.gen_range(-BLOB_OFFSET_Y..BLOB_OFFSET_Y),
        );
        let alpha = BLOB_ALPHA_MIN + rng.gen::<f32>() * BLOB_ALPHA_SPAN;
        let lobes = (0..spikes)
            .map(|_| Lobe {
                inner: LOBE_INNER.0 + rng.gen::<f32>() * LOBE_INNER.1,
                outer: LOBE_OUTER.0 + rng.gen::<f32>() * LOBE_OUTER.1,
            })
            .collect();
        Self {
            center: center + offset,
            radius,
            rotation,
            color,
            alpha,
            lobes,
        }
    }

    pub fn spikes(&self) -> usize {
        self.lobes.len()
    }

    fn step(&self) -> f32 {
        TAU / self.lobes.len().max(1) as f32
    }

    fn inner_point(&self, i: usize) -> Vec2 {
        let angle = i as f32 * self.step() + self.rotation;
        self.center + Vec2::from_angle(angle) * (self.radius * self.lobes[i].inner)
    }

    fn outer_point(&self, i: usize) -> Vec2 {
        let angle = (i as f32 + 0.5) * self.step() + self.rotation;
        self.center + Vec2::from_angle(angle) * (self.radius * self.lobes[i].outer)
    }

    /// Where the path starts (`moveTo`).
    pub fn start(&self) -> Vec2 {
        if self.lobes.is_empty() {
            return self.center;
        }
        self.inner_point(0)
    }

    /// Closed outline: each sector curves through its outer control point
    /// to the next sector's inner point, ending back at [`Blob::start`].
    pub fn outline(&self) -> impl Iterator<Item = QuadSegment> + '_ {
        let n = self.lobes.len();
        (0..n).map(move |i| QuadSegment {
            control: self.outer_point(i),
            to: self.inner_point((i + 1) % n),
        })
    }
}

/// `count` blobs scattered around `center`.
pub fn splat_burst<R: Rng + ?Sized>(
    center: Vec2,
    count: usize,
    max_radius: f32,
    rng: &mut R,
) -> Vec<Blob> {
    (0..count)
        .map(|_| Blob::random(center, max_radius, rng))
        .collect()
}

/// Blob count for one impact: `min + [0, span)`.
pub fn impact_blob_count<R: Rng + ?Sized>(min: usize, span: usize, rng: &mut R) -> usize {
    if span == 0 {
        min
    } else {
        min + rng.gen_range(0..span)
    }
}
