//! Impact effects: canvas splats, DOM splats and confetti, label feedback,
//! flash overlay, sticker and the impact sound.

use crate::anim::{Animator, Done};
use crate::audio::{self, SharedSfx};
use crate::constants::*;
use crate::dom::{self, Page};
use crate::frame::FrameContext;
use crate::render::{self, Surface};
use cake_core::{decor, splat, SceneParams, GLOW_MS, INTRO_BLOBS, INTRO_MAX_RADIUS};
use glam::Vec2;
use rand::rngs::StdRng;
use web_sys as web;

/// Everything an impact touches, borrowed from the frame context.
pub struct ImpactTargets<'a> {
    pub page: &'a Page,
    pub splats: &'a Surface,
    pub animator: &'a mut Animator,
    pub rng: &'a mut StdRng,
    pub params: &'a SceneParams,
    pub sfx: &'a SharedSfx,
    pub now: f64,
}

pub fn draw_splats(surface: &Surface, at: Vec2, count: usize, max_radius: f32, rng: &mut StdRng) {
    for blob in splat::splat_burst(at, count, max_radius, rng) {
        render::draw_blob(surface, &blob);
    }
}

/// DOM splats and confetti around `at`; each removes itself when done.
pub fn spawn_dom_decor(
    document: &web::Document,
    animator: &mut Animator,
    at: Vec2,
    rng: &mut StdRng,
    now: f64,
) {
    for s in decor::dom_splats(at, rng) {
        let Some(el) = dom::create_div(document, CLASS_SPLAT) else {
            continue;
        };
        dom::set_style(&el, "width", &format!("{:.1}px", s.width));
        dom::set_style(&el, "height", &format!("{:.1}px", s.height));
        dom::set_style(&el, "left", &format!("{:.1}px", s.left));
        dom::set_style(&el, "top", &format!("{:.1}px", s.top));
        dom::set_style(&el, "border-radius", &format!("{:.0}%", s.border_radius_pct));
        dom::set_style(&el, "background", s.color);
        dom::set_style(&el, "filter", &format!("blur({:.2}px)", s.blur_px));
        dom::append_to_body(document, &el);
        animator.add(el, s.timeline, now, Done::Remove);
    }
    for c in decor::confetti(at, rng) {
        let Some(el) = dom::create_div(document, CLASS_CONFETTI) else {
            continue;
        };
        dom::set_style(&el, "left", &format!("{:.1}px", c.left));
        dom::set_style(&el, "top", &format!("{:.1}px", c.top));
        dom::set_style(&el, "width", &format!("{:.1}px", c.width));
        dom::set_style(&el, "height", &format!("{:.1}px", c.height));
        dom::set_style(&el, "background", c.color);
        dom::append_to_body(document, &el);
        animator.add(el, c.timeline, now, Done::Remove);
    }
}

fn flash_overlay(document: &web::Document, animator: &mut Animator, at: Vec2, now: f64) {
    let Some(overlay) = dom::create_div(document, "") else {
        return;
    };
    let (w, h) = dom::viewport_size();
    let (px, py) = if w > 0.0 && h > 0.0 {
        (at.x as f64 / w * 100.0, at.y as f64 / h * 100.0)
    } else {
        (50.0, 50.0)
    };
    for (prop, value) in [
        ("position", "fixed"),
        ("left", "0"),
        ("top", "0"),
        ("width", "100%"),
        ("height", "100%"),
        ("z-index", Z_OVERLAY),
        ("pointer-events", "none"),
    ] {
        dom::set_style(&overlay, prop, value);
    }
    dom::set_style(
        &overlay,
        "background",
        &format!(
            "radial-gradient(circle at {:.2}% {:.2}%, rgba(255,250,240,0.12), rgba(0,0,0,0))",
            px, py
        ),
    );
    dom::append_to_body(document, &overlay);
    animator.add(overlay, decor::overlay_fade(), now, Done::Remove);
}

fn attach_sticker(page: &Page, animator: &mut Animator, now: f64) {
    if let Ok(Some(existing)) = page
        .target
        .query_selector(&format!(".{}", CLASS_STICKER))
    {
        animator.cancel(&existing);
        existing.remove();
    }
    let Some(sticker) = dom::create_div(&page.document, CLASS_STICKER) else {
        return;
    };
    sticker.set_inner_html(STICKER_HTML);
    _ = page.target.append_child(&sticker);
    animator.add(sticker, decor::sticker(), now, Done::Remove);
}

fn glow_label(target: &web::HtmlElement) {
    _ = target.class_list().add_1(CLASS_GLOW);
    let target = target.clone();
    dom::set_timeout(GLOW_MS, move || {
        _ = target.class_list().remove_1(CLASS_GLOW);
    });
}

/// Fired exactly once per projectile, at its landing point.
pub fn on_impact(t: ImpactTargets<'_>, at: Vec2) {
    let count = splat::impact_blob_count(
        t.params.impact_blobs_min,
        t.params.impact_blobs_span,
        &mut *t.rng,
    );
    draw_splats(t.splats, at, count, t.params.impact_max_radius, &mut *t.rng);
    spawn_dom_decor(&t.page.document, &mut *t.animator, at, &mut *t.rng, t.now);

    audio::play_sfx(t.sfx, t.page.sfx_pop.as_ref(), t.params.sfx_volume);

    glow_label(&t.page.target);
    t.animator.replace(
        t.page.target.clone(),
        |_| decor::label_nudge(),
        t.now,
        Done::Keep,
    );
    if let Some(subtitle) = &t.page.subtitle {
        t.animator
            .replace(subtitle.clone(), |_| decor::subtitle_pulse(), t.now, Done::Keep);
    }
    flash_overlay(&t.page.document, t.animator, at, t.now);
    attach_sticker(t.page, t.animator, t.now);
    log::debug!("[impact] at ({:.1},{:.1}) blobs={}", at.x, at.y, count);
}

/// Welcome burst at the target label shortly after load.
pub fn intro_burst(c: &mut FrameContext) {
    let at = dom::center_of(&c.page.target);
    let now = dom::now_secs();
    draw_splats(&c.splat_surface, at, INTRO_BLOBS, INTRO_MAX_RADIUS, &mut c.rng);
    spawn_dom_decor(&c.page.document, &mut c.animator, at, &mut c.rng, now);
}
