#![cfg(target_arch = "wasm32")]
//! Browser front-end of the cake toss page.

mod anim;
mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod impact;
mod render;
mod throw;
mod ui;

pub use anim::{Animator, Done};
pub use events::listen_once;
pub use render::{draw_blob, draw_trail, Surface};

use crate::constants::{ID_SPLAT_CANVAS, ID_TRAIL_CANVAS};
use cake_core::{decor, SceneParams, SfxVoices, INTRO_BURST_DELAY_MS};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cake-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let page = dom::Page::locate(&document)?;

    let trail_surface = Surface::new(dom::required::<web::HtmlCanvasElement>(
        &document,
        ID_TRAIL_CANVAS,
    )?)?;
    let splat_surface = Surface::new(dom::required::<web::HtmlCanvasElement>(
        &document,
        ID_SPLAT_CANVAS,
    )?)?;
    trail_surface.resize();
    splat_surface.resize();
    page.apply_panel_padding();

    let params = SceneParams::default();
    let music = Rc::new(RefCell::new(audio::WebMusic::new(
        page.bg_music.clone(),
        params.music_volume,
    )));
    let sfx = Rc::new(RefCell::new(SfxVoices::new(params.sfx_cleanup_timeout_sec)));
    audio::init(&music);

    let mut ctx = frame::FrameContext::new(
        page.clone(),
        trail_surface,
        splat_surface,
        params,
        StdRng::from_entropy(),
        music.clone(),
        sfx.clone(),
    );
    ctx.animator.add(
        page.cake_template.clone(),
        decor::idle_float(),
        dom::now_secs(),
        Done::Keep,
    );
    let ctx = Rc::new(RefCell::new(ctx));

    events::wire_throw(&ctx);
    events::wire_target(&ctx);
    events::wire_reset(&ctx);
    events::wire_music(&page, &music);
    events::wire_resize(&ctx);
    events::watch_dpr(&ctx);
    events::wire_unload(&music, &sfx);

    if let Some(toggle) = &page.music_toggle {
        ui::set_music_label(toggle, music.borrow().is_playing());
    }

    {
        let ctx = ctx.clone();
        dom::set_timeout(INTRO_BURST_DELAY_MS, move || {
            if let Ok(mut c) = ctx.try_borrow_mut() {
                impact::intro_burst(&mut c);
            }
        });
    }

    frame::start_loop(ctx);
    log::info!("cake-web ready");
    Ok(())
}
