use crate::constants::{LABEL_PAUSE, LABEL_PLAY};
use web_sys as web;

/// Reflect the music state on the toggle control.
pub fn set_music_label(toggle: &web::HtmlElement, playing: bool) {
    toggle.set_text_content(Some(if playing { LABEL_PAUSE } else { LABEL_PLAY }));
    let _ = toggle.set_attribute("aria-pressed", if playing { "true" } else { "false" });
}
