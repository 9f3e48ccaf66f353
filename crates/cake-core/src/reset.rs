//! Reset choreography for the two drawing surfaces.
//!
//! Fade both surfaces out, clear them (and the trail) once fully
//! transparent, then fade back in after a short pause. In-flight throws are
//! not cancelled.

use crate::constants::{RESET_FADE_IN_DELAY_SEC, RESET_FADE_IN_SEC, RESET_FADE_OUT_SEC};
use crate::ease::Ease;
use crate::tween::Tween;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResetStep {
    /// Opacity to apply to both surfaces this frame.
    pub opacity: f32,
    /// Clear both surfaces and the trail now (reported once per sequence).
    pub clear_now: bool,
    pub finished: bool,
}

#[derive(Clone, Debug, Default)]
pub struct ResetSequence {
    elapsed: Option<f32>,
    cleared: bool,
}

impl ResetSequence {
    pub fn begin(&mut self) {
        self.elapsed = Some(0.0);
        self.cleared = false;
    }

    pub fn is_active(&self) -> bool {
        self.elapsed.is_some()
    }

    pub fn total() -> f32 {
        RESET_FADE_OUT_SEC + RESET_FADE_IN_DELAY_SEC + RESET_FADE_IN_SEC
    }

    /// Advance the sequence; `None` when idle.
    pub fn tick(&mut self, dt: Duration) -> Option<ResetStep> {
        let elapsed = self.elapsed.as_mut()?;
        *elapsed += dt.as_secs_f32();
        let t = *elapsed;

        let fade_out = Tween::new(1.0, 0.0, RESET_FADE_OUT_SEC).ease(Ease::InCubic);
        let fade_in = Tween::new(0.0, 1.0, RESET_FADE_IN_SEC)
            .delay(RESET_FADE_OUT_SEC + RESET_FADE_IN_DELAY_SEC)
            .ease(Ease::OutCubic);

        let clear_now = !self.cleared && fade_out.is_done(t);
        if clear_now {
            self.cleared = true;
        }
        let opacity = if fade_out.is_done(t) {
            fade_in.value(t)
        } else {
            fade_out.value(t)
        };
        let finished = fade_in.is_done(t);
        if finished {
            self.elapsed = None;
        }
        Some(ResetStep {
            opacity: if finished { 1.0 } else { opacity },
            clear_now,
            finished,
        })
    }
}
