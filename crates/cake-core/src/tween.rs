//! Minimal tween engine: scalar tweens, element poses and per-element timelines.
//!
//! A [`Tween`] maps elapsed seconds to a value. A [`Timeline`] layers several
//! tweens over a base [`Pose`]; the web front-end samples it once per frame
//! and writes the pose into the element's inline style.

use crate::ease::Ease;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Count(u32),
    Forever,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub duration: f32,
    pub delay: f32,
    pub ease: Ease,
    pub yoyo: bool,
    pub repeat: Repeat,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            duration,
            delay: 0.0,
            ease: Ease::OutQuad,
            yoyo: false,
            repeat: Repeat::Count(0),
        }
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Play forward then backward, `repeats` extra times in total.
    pub fn yoyo(mut self, repeats: u32) -> Self {
        self.yoyo = true;
        self.repeat = Repeat::Count(repeats);
        self
    }

    pub fn forever(mut self) -> Self {
        self.repeat = Repeat::Forever;
        self
    }

    /// Delay plus every iteration; `None` for endless tweens.
    pub fn total(&self) -> Option<f32> {
        match self.repeat {
            Repeat::Count(n) => Some(self.delay + self.duration.max(0.0) * (n + 1) as f32),
            Repeat::Forever => None,
        }
    }

    pub fn has_started(&self, elapsed: f32) -> bool {
        elapsed >= self.delay
    }

    pub fn is_done(&self, elapsed: f32) -> bool {
        self.total().is_some_and(|t| elapsed >= t)
    }

    /// Eased progress in `[0, 1]` (outside for overshooting eases).
    pub fn progress(&self, elapsed: f32) -> f32 {
        let local = elapsed - self.delay;
        if local <= 0.0 {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return match self.repeat {
                Repeat::Count(n) if self.yoyo && n % 2 == 1 => 0.0,
                _ => 1.0,
            };
        }
        let cycles = local / self.duration;
        let (cycle, frac) = match self.repeat {
            Repeat::Count(n) if cycles >= (n + 1) as f32 => (n as u64, 1.0),
            _ => {
                let whole = cycles.floor();
                (whole as u64, cycles - whole)
            }
        };
        if self.yoyo && cycle % 2 == 1 {
            self.ease.apply(1.0 - frac)
        } else {
            self.ease.apply(frac)
        }
    }

    pub fn value(&self, elapsed: f32) -> f32 {
        self.from + (self.to - self.from) * self.progress(elapsed)
    }
}

/// Visual state of an element: translation, rotation, scale and opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub x_percent: f32,
    pub y_percent: f32,
    pub scale: f32,
    pub rotation: f32,
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub opacity: f32,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            x_percent: 0.0,
            y_percent: 0.0,
            scale: 1.0,
            rotation: 0.0,
            rotation_x: 0.0,
            rotation_y: 0.0,
            opacity: 1.0,
        }
    }
}

impl Pose {
    /// Centre the element on `(x, y)` instead of anchoring its top-left corner.
    pub fn centered(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            x_percent: -50.0,
            y_percent: -50.0,
            ..Self::default()
        }
    }

    pub fn get(&self, prop: Prop) -> f32 {
        match prop {
            Prop::X => self.x,
            Prop::Y => self.y,
            Prop::Scale => self.scale,
            Prop::Rotation => self.rotation,
            Prop::RotationX => self.rotation_x,
            Prop::RotationY => self.rotation_y,
            Prop::Opacity => self.opacity,
        }
    }

    pub fn set(&mut self, prop: Prop, value: f32) {
        match prop {
            Prop::X => self.x = value,
            Prop::Y => self.y = value,
            Prop::Scale => self.scale = value,
            Prop::Rotation => self.rotation = value,
            Prop::RotationX => self.rotation_x = value,
            Prop::RotationY => self.rotation_y = value,
            Prop::Opacity => self.opacity = value,
        }
    }

    pub fn css_transform(&self) -> String {
        format!(
            "translate({:.2}%, {:.2}%) translate3d({:.2}px, {:.2}px, 0px) rotate({:.2}deg) rotateY({:.2}deg) rotateX({:.2}deg) scale({:.4})",
            self.x_percent,
            self.y_percent,
            self.x,
            self.y,
            self.rotation,
            self.rotation_y,
            self.rotation_x,
            self.scale
        )
    }

    pub fn css_opacity(&self) -> String {
        format!("{:.3}", self.opacity.clamp(0.0, 1.0))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prop {
    X,
    Y,
    Scale,
    Rotation,
    RotationX,
    RotationY,
    Opacity,
}

impl Prop {
    const COUNT: usize = 7;

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Track {
    pub prop: Prop,
    pub tween: Tween,
}

/// Tweens layered over a base pose.
///
/// For each property the first track always renders (so `from` values show
/// before a delay elapses); later tracks on the same property take over once
/// their delay has passed.
#[derive(Clone, Debug)]
pub struct Timeline {
    pub base: Pose,
    tracks: SmallVec<[Track; 6]>,
}

impl Timeline {
    pub fn new(base: Pose) -> Self {
        Self {
            base,
            tracks: SmallVec::new(),
        }
    }

    pub fn with(mut self, prop: Prop, tween: Tween) -> Self {
        self.tracks.push(Track { prop, tween });
        self
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn sample(&self, elapsed: f32) -> Pose {
        let mut pose = self.base;
        let mut seen = [false; Prop::COUNT];
        for track in &self.tracks {
            let slot = &mut seen[track.prop.index()];
            if !*slot || track.tween.has_started(elapsed) {
                pose.set(track.prop, track.tween.value(elapsed));
            }
            *slot = true;
        }
        pose
    }

    /// `None` when any track repeats forever.
    pub fn duration(&self) -> Option<f32> {
        self.tracks
            .iter()
            .try_fold(0.0_f32, |acc, t| t.tween.total().map(|d| acc.max(d)))
    }

    pub fn is_done(&self, elapsed: f32) -> bool {
        self.duration().is_some_and(|d| elapsed >= d)
    }
}
