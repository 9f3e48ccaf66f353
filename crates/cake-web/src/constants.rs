// Element ids, class names and control labels the page markup provides.

pub const ID_THROW_BTN: &str = "throwBtn";
pub const ID_RESET_BTN: &str = "resetBtn";
pub const ID_CAKE: &str = "cake";
pub const ID_TARGET: &str = "targetName";
pub const ID_PANEL: &str = "celebratePanel";
pub const ID_SUBTITLE: &str = "subtitle";
pub const ID_SPLAT_CANVAS: &str = "splatCanvas";
pub const ID_TRAIL_CANVAS: &str = "trailCanvas";
pub const ID_BG_MUSIC: &str = "bgMusic";
pub const ID_SFX_CLICK: &str = "sfxClick";
pub const ID_SFX_POP: &str = "sfxPop";
pub const ID_MUSIC_TOGGLE: &str = "musicToggle";

pub const CLASS_SPLAT: &str = "splat";
pub const CLASS_CONFETTI: &str = "confetti";
pub const CLASS_STICKER: &str = "mini-sticker";
pub const CLASS_GLOW: &str = "glow";
pub const STICKER_HTML: &str = r#"<div class="mini-cake" aria-hidden="true"></div>"#;

pub const LABEL_PLAY: &str = "Play Music";
pub const LABEL_PAUSE: &str = "Pause Music";

// Stacking order for fixed-position layers
pub const Z_OVERLAY: &str = "285";
pub const Z_PROJECTILE: &str = "300";
