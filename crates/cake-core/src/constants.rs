// Shared tuning constants for the throw, trail, impact and audio behaviour.
// Times are seconds, distances are CSS pixels, angles are degrees unless noted.

// Trail
pub const TRAIL_CAPACITY: usize = 140; // oldest points evicted beyond this
pub const TRAIL_LIFE_STEP: f32 = 0.018; // life lost per rendered frame
pub const TRAIL_BASE_RADIUS: f32 = 4.0;
pub const TRAIL_RADIUS_GROWTH: f32 = 8.0; // added as life drains
pub const TRAIL_ALPHA_SCALE: f32 = 0.9;
pub const TRAIL_FILL_ALPHA_SCALE: f32 = 0.5;
pub const TRAIL_RGB: [u8; 3] = [255, 197, 235];

// Projectiles
pub const MAX_IN_FLIGHT: usize = 8;
pub const FLIGHT_DURATION_MIN: f32 = 0.95;
pub const FLIGHT_DURATION_SPAN: f32 = 0.5;
pub const END_JITTER_X: (f32, f32) = (-18.0, 18.0);
pub const END_JITTER_Y: (f32, f32) = (-12.0, 14.0);
pub const ARC_LATERAL: (f32, f32) = (-110.0, 110.0);
pub const ARC_LIFT_MIN: f32 = 120.0; // waypoint always sits at least this far above both ends
pub const ARC_LIFT_SPAN: f32 = 180.0;
pub const SPIN_Y_DEG: f32 = 360.0; // sign picked per throw
pub const SPIN_X_DEG: (f32, f32) = (-12.0, 18.0);

pub const LAUNCH_SCALE_FROM: f32 = 0.72;
pub const LAUNCH_OPACITY_FROM: f32 = 0.98;
pub const LAUNCH_POP_SEC: f32 = 0.26;
pub const LAUNCH_BACK_OVERSHOOT: f32 = 1.2;

pub const SQUASH_SCALE: f32 = 1.04;
pub const SQUASH_ROTATION_DEG: f32 = -10.0;
pub const SQUASH_SEC: f32 = 0.12;
pub const FADE_DELAY_SEC: f32 = 0.6;
pub const FADE_SEC: f32 = 0.9;

// Capacity feedback on the throw control
pub const SHAKE_SCALE: f32 = 0.96;
pub const SHAKE_SEC: f32 = 0.08;

// Canvas splats
pub const SPLAT_PALETTE: [&str; 5] = ["#ff7aa2", "#ffd166", "#7afcff", "#a3ffa6", "#ffd1ff"];
pub const IMPACT_BLOBS_MIN: usize = 9;
pub const IMPACT_BLOBS_SPAN: usize = 7; // count is MIN + [0, SPAN)
pub const IMPACT_MAX_RADIUS: f32 = 110.0;
pub const BLOB_MIN_RADIUS: f32 = 12.0;
pub const BLOB_RADIUS_SCALE: f32 = 0.8;
pub const BLOB_SPIKES_MIN: usize = 3;
pub const BLOB_SPIKES_SPAN: usize = 6;
pub const BLOB_OFFSET_X: f32 = 80.0;
pub const BLOB_OFFSET_Y: f32 = 40.0;
pub const BLOB_ALPHA_MIN: f32 = 0.45;
pub const BLOB_ALPHA_SPAN: f32 = 0.55;
pub const LOBE_INNER: (f32, f32) = (0.4, 0.6); // base, random span
pub const LOBE_OUTER: (f32, f32) = (0.7, 0.6);

// Intro burst shown shortly after load
pub const INTRO_BURST_DELAY_MS: i32 = 900;
pub const INTRO_BLOBS: usize = 6;
pub const INTRO_MAX_RADIUS: f32 = 60.0;

// DOM decorations
pub const DECOR_PALETTE: [&str; 6] = [
    "#ff7aa2", "#ffd166", "#7afcff", "#a3ffa6", "#ffd1ff", "#ffd7e0",
];
pub const DOM_SPLAT_COUNT: usize = 10;
pub const CONFETTI_COUNT: usize = 16;
pub const STICKER_LINGER_SEC: f32 = 3.2;
pub const GLOW_MS: i32 = 1200;
pub const OVERLAY_FADE_SEC: f32 = 1.2;

// Reset
pub const RESET_FADE_OUT_SEC: f32 = 0.5;
pub const RESET_FADE_IN_DELAY_SEC: f32 = 0.06;
pub const RESET_FADE_IN_SEC: f32 = 0.35;
pub const RESET_DECOR_SEC: f32 = 0.48;
pub const RESET_DECOR_STAGGER_SEC: f32 = 0.02;

// Audio
pub const MUSIC_VOLUME: f32 = 0.55;
pub const SFX_VOLUME: f32 = 0.9;
pub const SFX_CLEANUP_TIMEOUT_SEC: f64 = 1.2;

// Presentation
pub const DPR_POLL_MS: i32 = 800;
pub const PANEL_PADDING_BOTTOM: &str = "40px";
pub const VIBRATE_MS: u32 = 30;
