use std::f32::consts::PI;

/// Easing curves used by the throw and the decorations.
///
/// Every curve maps `0 -> 0` and `1 -> 1`; `OutBack` and `OutElastic`
/// overshoot in between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    InCubic,
    OutQuad,
    OutCubic,
    InOutSine,
    OutBack(f32),
    OutElastic { amplitude: f32, period: f32 },
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InCubic => t * t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutSine => -((PI * t).cos() - 1.0) / 2.0,
            Self::OutBack(overshoot) => {
                let u = t - 1.0;
                1.0 + (overshoot + 1.0) * u * u * u + overshoot * u * u
            }
            Self::OutElastic { amplitude, period } => {
                if t <= 0.0 || t >= 1.0 {
                    return t;
                }
                let amplitude = amplitude.max(1.0);
                let shift = period / (2.0 * PI) * (1.0 / amplitude).asin();
                amplitude * 2f32.powf(-10.0 * t) * ((t - shift) * (2.0 * PI) / period).sin() + 1.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 7] = [
        Ease::Linear,
        Ease::InCubic,
        Ease::OutQuad,
        Ease::OutCubic,
        Ease::InOutSine,
        Ease::OutBack(1.4),
        Ease::OutElastic {
            amplitude: 1.0,
            period: 0.6,
        },
    ];

    #[test]
    fn endpoints_are_stable() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-6, "{ease:?} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-6, "{ease:?} at 1");
        }
    }

    #[test]
    fn ease_in_lags_linear() {
        assert!(Ease::InCubic.apply(0.5) < 0.5);
        assert!(Ease::OutCubic.apply(0.5) > 0.5);
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Ease::OutBack(1.4).apply(i as f32 / 100.0))
            .fold(0.0_f32, f32::max);
        assert!(peak > 1.0);
    }
}
