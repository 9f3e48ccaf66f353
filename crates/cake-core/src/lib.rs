//! Platform-independent core of the cake toss page: trail, flights,
//! splats, decorations, reset sequencing and audio bookkeeping.

pub mod constants;
pub mod decor;
pub mod ease;
pub mod error;
pub mod flight;
pub mod music;
pub mod params;
pub mod projectile;
pub mod reset;
pub mod sfx;
pub mod splat;
pub mod trail;
pub mod tween;

pub use constants::*;
pub use ease::Ease;
pub use error::AudioError;
pub use flight::{plan_flight, FlightPlan};
pub use music::{BackgroundMusic, DecodeState, MusicSink, Playback};
pub use params::{SceneParams, Span};
pub use projectile::{FlightEvent, Launch, Phase, ProjectileArena, ProjectileId};
pub use reset::{ResetSequence, ResetStep};
pub use sfx::{SfxId, SfxState, SfxVoices};
pub use splat::{splat_burst, Blob, QuadSegment};
pub use trail::{TrailDot, TrailPoint, TrailStore};
pub use tween::{Pose, Prop, Repeat, Timeline, Tween};
