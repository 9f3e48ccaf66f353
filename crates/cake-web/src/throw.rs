use crate::anim::{self, Done};
use crate::audio;
use crate::constants::Z_PROJECTILE;
use crate::dom;
use crate::frame::FrameContext;
use cake_core::{decor, plan_flight, Launch};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

fn clone_template(template: &web::HtmlElement) -> Option<web::HtmlElement> {
    let cake = template
        .clone_node_with_deep(true)
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    cake.remove_attribute("id").ok()?;
    for (prop, value) in [
        ("position", "fixed"),
        ("pointer-events", "none"),
        ("left", "0px"),
        ("top", "0px"),
        ("z-index", Z_PROJECTILE),
        ("transform-origin", "50% 50%"),
    ] {
        dom::set_style(&cake, prop, value);
    }
    Some(cake)
}

/// Throw one cake at the target label.
///
/// At capacity the throw control shakes and nothing else happens.
pub fn throw(ctx: &Rc<RefCell<FrameContext>>) {
    let mut guard = ctx.borrow_mut();
    let c = &mut *guard;
    let now = dom::now_secs();

    if !c.arena.has_room() {
        log::debug!("[throw] at capacity ({} in flight)", c.arena.in_flight());
        c.animator
            .replace(c.page.throw_btn.clone(), |_| decor::shake(), now, Done::Keep);
        return;
    }

    audio::play_sfx(&c.sfx, c.page.sfx_click.as_ref(), c.params.sfx_volume);
    let music = c.music.clone();
    spawn_local(async move {
        audio::start_once(&music).await;
    });

    let Some(cake) = clone_template(&c.page.cake_template) else {
        log::warn!("[throw] could not clone the cake template");
        return;
    };
    let start = dom::center_of(&c.page.cake_template);
    let target = dom::center_of(&c.page.target);
    let plan = plan_flight(start, target, &c.params, &mut c.rng);

    match c.arena.launch(plan) {
        Launch::Accepted(id) => {
            if let Some(pose) = c.arena.pose(id) {
                anim::write_pose(&cake, &pose);
            }
            dom::append_to_body(&c.page.document, &cake);
            c.cakes.insert(id, cake);
            log::info!("[throw] launched, {} in flight", c.arena.in_flight());
        }
        Launch::AtCapacity => {
            c.animator
                .replace(c.page.throw_btn.clone(), |_| decor::shake(), now, Done::Keep);
        }
    }
}

/// Short haptic tick where the platform supports it.
pub fn vibrate() {
    if let Some(w) = web::window() {
        _ = w.navigator().vibrate_with_duration(cake_core::VIBRATE_MS);
    }
}
