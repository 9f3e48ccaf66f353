//! Transient decorations: randomised specs and the timelines that animate them.
//!
//! Each recipe returns a [`Timeline`]; the front-end attaches it to a fresh
//! element and removes the element once the timeline completes.

use crate::constants::*;
use crate::ease::Ease;
use crate::tween::{Pose, Prop, Timeline, Tween};
use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;

const BACK: Ease = Ease::OutBack(1.4);

fn pick_color<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    DECOR_PALETTE.choose(rng).copied().unwrap_or(DECOR_PALETTE[0])
}

/// A soft blob element that scales in, lingers, then fades.
#[derive(Clone, Debug)]
pub struct DomSplat {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub border_radius_pct: f32,
    pub color: &'static str,
    pub blur_px: f32,
    pub timeline: Timeline,
}

impl DomSplat {
    pub fn random<R: Rng + ?Sized>(at: Vec2, rng: &mut R) -> Self {
        let width = 18.0 + rng.gen::<f32>() * 70.0;
        let left = at.x + rng.gen_range(-70.0..70.0);
        let top = at.y + rng.gen_range(-40.0..40.0);
        let border_radius_pct = 30.0 + rng.gen::<f32>() * 60.0;
        let color = pick_color(rng);
        let base = Pose {
            rotation: rng.gen::<f32>() * 360.0,
            scale: 0.4 + rng.gen::<f32>() * 1.1,
            ..Pose::default()
        };
        let blur_px = rng.gen::<f32>() * 1.2;
        let grow = 0.9 + rng.gen::<f32>() * 0.8;
        let settle_y = 6.0 + rng.gen::<f32>() * 30.0;
        let linger = grow + 1.2 + rng.gen::<f32>() * 0.6;
        let timeline = Timeline::new(base)
            .with(Prop::Scale, Tween::new(0.2, 1.0, grow).ease(BACK))
            .with(Prop::Y, Tween::new(-12.0, settle_y, grow).ease(BACK))
            .with(Prop::Opacity, Tween::new(0.0, 0.95, grow).ease(BACK))
            .with(Prop::Opacity, Tween::new(0.95, 0.0, 0.9).delay(linger))
            .with(Prop::Scale, Tween::new(1.0, 1.2, 0.9).delay(linger));
        Self {
            left,
            top,
            width,
            height: width * 0.6,
            border_radius_pct,
            color,
            blur_px,
            timeline,
        }
    }
}

/// A confetti strip flung outward and down.
#[derive(Clone, Debug)]
pub struct Confetti {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub color: &'static str,
    pub timeline: Timeline,
}

impl Confetti {
    pub fn random<R: Rng + ?Sized>(at: Vec2, rng: &mut R) -> Self {
        let left = at.x + rng.gen_range(-100.0..100.0);
        let top = at.y + rng.gen_range(-50.0..50.0);
        let width = 6.0 + rng.gen::<f32>() * 12.0;
        let height = 10.0 + rng.gen::<f32>() * 20.0;
        let color = pick_color(rng);
        let rotation = rng.gen::<f32>() * 360.0;
        let duration = 1.6 + rng.gen::<f32>() * 1.4;
        let fall = 220.0 + rng.gen::<f32>() * 600.0;
        let drift = rng.gen_range(-200.0..200.0);
        let spin = rng.gen_range(-540.0..540.0);
        let base = Pose {
            rotation,
            ..Pose::default()
        };
        let timeline = Timeline::new(base)
            .with(Prop::Y, Tween::new(0.0, fall, duration).ease(Ease::InCubic))
            .with(Prop::X, Tween::new(0.0, drift, duration).ease(Ease::InCubic))
            .with(
                Prop::Rotation,
                Tween::new(rotation, spin, duration).ease(Ease::InCubic),
            )
            .with(Prop::Opacity, Tween::new(1.0, 0.0, duration).ease(Ease::InCubic));
        Self {
            left,
            top,
            width,
            height,
            color,
            timeline,
        }
    }
}

pub fn dom_splats<R: Rng + ?Sized>(at: Vec2, rng: &mut R) -> Vec<DomSplat> {
    (0..DOM_SPLAT_COUNT)
        .map(|_| DomSplat::random(at, rng))
        .collect()
}

pub fn confetti<R: Rng + ?Sized>(at: Vec2, rng: &mut R) -> Vec<Confetti> {
    (0..CONFETTI_COUNT)
        .map(|_| Confetti::random(at, rng))
        .collect()
}

/// Sticker on the target label: pop in, wiggle, linger, drift away.
pub fn sticker() -> Timeline {
    let leave = Ease::InCubic;
    Timeline::new(Pose::default())
        .with(Prop::Scale, Tween::new(0.0, 1.0, 0.45).ease(BACK))
        .with(Prop::Rotation, Tween::new(-30.0, 0.0, 0.45).ease(BACK))
        .with(Prop::Opacity, Tween::new(0.0, 1.0, 0.45).ease(BACK))
        .with(
            Prop::Rotation,
            Tween::new(0.0, 6.0, 0.22)
                .ease(Ease::InOutSine)
                .delay(0.2)
                .yoyo(3),
        )
        .with(
            Prop::Y,
            Tween::new(0.0, -40.0, 0.9).delay(STICKER_LINGER_SEC).ease(leave),
        )
        .with(
            Prop::X,
            Tween::new(0.0, 40.0, 0.9).delay(STICKER_LINGER_SEC).ease(leave),
        )
        .with(
            Prop::Rotation,
            Tween::new(0.0, 30.0, 0.9).delay(STICKER_LINGER_SEC).ease(leave),
        )
        .with(
            Prop::Opacity,
            Tween::new(1.0, 0.0, 0.9).delay(STICKER_LINGER_SEC).ease(leave),
        )
}

/// Target label bounce on impact.
pub fn label_nudge() -> Timeline {
    let elastic = Ease::OutElastic {
        amplitude: 1.0,
        period: 0.6,
    };
    Timeline::new(Pose::default())
        .with(Prop::Y, Tween::new(0.0, -6.0, 0.9).ease(elastic))
        .with(Prop::Rotation, Tween::new(0.0, 2.0, 0.9).ease(elastic))
        .with(Prop::Y, Tween::new(-6.0, 0.0, 0.45).delay(0.9))
        .with(Prop::Rotation, Tween::new(2.0, 0.0, 0.45).delay(0.9))
}

/// Brief scale pulse, used on the label when clicked.
pub fn pulse(scale: f32, duration: f32) -> Timeline {
    Timeline::new(Pose::default()).with(Prop::Scale, Tween::new(1.0, scale, duration).yoyo(1))
}

/// "Can't throw" feedback on the throw control.
pub fn shake() -> Timeline {
    Timeline::new(Pose::default()).with(
        Prop::Scale,
        Tween::new(1.0, SHAKE_SCALE, SHAKE_SEC).yoyo(1),
    )
}

pub fn subtitle_pulse() -> Timeline {
    Timeline::new(Pose::default())
        .with(Prop::Scale, Tween::new(1.0, 1.02, 0.6).yoyo(1))
        .with(Prop::Opacity, Tween::new(1.0, 0.95, 0.6).yoyo(1))
}

/// Full-screen flash overlay fade.
pub fn overlay_fade() -> Timeline {
    Timeline::new(Pose::default()).with(
        Prop::Opacity,
        Tween::new(1.0, 0.0, OVERLAY_FADE_SEC).ease(Ease::OutCubic),
    )
}

/// Endless float and tilt of the cake template.
pub fn idle_float() -> Timeline {
    Timeline::new(Pose::default())
        .with(
            Prop::Y,
            Tween::new(0.0, -10.0, 2.4)
                .ease(Ease::InOutSine)
                .yoyo(1)
                .forever(),
        )
        .with(
            Prop::RotationY,
            Tween::new(0.0, 6.0, 3.2)
                .ease(Ease::InOutSine)
                .yoyo(1)
                .forever(),
        )
        .with(
            Prop::RotationX,
            Tween::new(0.0, 4.0, 3.2)
                .ease(Ease::InOutSine)
                .yoyo(1)
                .forever(),
        )
}

/// Dismissal of a lingering splat or confetti piece during reset.
/// `order` staggers successive elements.
pub fn dismiss<R: Rng + ?Sized>(current: Pose, order: usize, rng: &mut R) -> Timeline {
    let delay = order as f32 * RESET_DECOR_STAGGER_SEC;
    let d = RESET_DECOR_SEC;
    let ease = Ease::InCubic;
    let spin = rng.gen_range(-60.0..60.0);
    Timeline::new(current)
        .with(
            Prop::Opacity,
            Tween::new(current.opacity, 0.0, d).delay(delay).ease(ease),
        )
        .with(
            Prop::Scale,
            Tween::new(current.scale, 0.6, d).delay(delay).ease(ease),
        )
        .with(Prop::Y, Tween::new(current.y, -30.0, d).delay(delay).ease(ease))
        .with(
            Prop::Rotation,
            Tween::new(current.rotation, spin, d).delay(delay).ease(ease),
        )
}
