use crate::anim::Done;
use crate::audio::{self, SharedMusic, SharedSfx};
use crate::constants::{CLASS_CONFETTI, CLASS_SPLAT};
use crate::dom;
use crate::frame::FrameContext;
use crate::throw;
use crate::ui;
use cake_core::{decor, DPR_POLL_MS};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[inline]
fn is_activation_key(ev: &web::KeyboardEvent) -> bool {
    matches!(ev.key().as_str(), "Enter" | " " | "Spacebar") || ev.code() == "Space"
}

fn listen<E: FromWasmAbi + 'static>(
    target: &web::EventTarget,
    kind: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_throw(ctx: &Rc<RefCell<FrameContext>>) {
    let btn = ctx.borrow().page.throw_btn.clone();
    {
        let ctx = ctx.clone();
        listen(&btn, "click", move |_: web::MouseEvent| {
            throw::throw(&ctx);
            throw::vibrate();
        });
    }
    // Swallow native activation so Enter/Space only throw once, on keyup.
    listen(&btn, "keydown", move |ev: web::KeyboardEvent| {
        if is_activation_key(&ev) {
            ev.prevent_default();
        }
    });
    let ctx = ctx.clone();
    listen(&btn, "keyup", move |ev: web::KeyboardEvent| {
        if is_activation_key(&ev) {
            ev.prevent_default();
            throw::throw(&ctx);
        }
    });
}

pub fn wire_target(ctx: &Rc<RefCell<FrameContext>>) {
    let target = ctx.borrow().page.target.clone();
    let ctx = ctx.clone();
    listen(&target, "click", move |_: web::MouseEvent| {
        throw::throw(&ctx);
        let mut c = ctx.borrow_mut();
        let el = c.page.target.clone();
        c.animator
            .replace(el, |_| decor::pulse(1.03, 0.12), dom::now_secs(), Done::Keep);
    });
}

/// Fade out the surfaces and dismiss every decoration still on screen.
pub fn reset(ctx: &Rc<RefCell<FrameContext>>) {
    let mut guard = ctx.borrow_mut();
    let c = &mut *guard;
    c.reset.begin();
    let now = dom::now_secs();
    let selector = format!(".{}, .{}", CLASS_SPLAT, CLASS_CONFETTI);
    let Ok(nodes) = c.page.document.query_selector_all(&selector) else {
        return;
    };
    let mut order = 0;
    for i in 0..nodes.length() {
        let Some(el) = nodes
            .item(i)
            .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
        else {
            continue;
        };
        let rng = &mut c.rng;
        c.animator
            .replace(el, |pose| decor::dismiss(pose, order, rng), now, Done::Remove);
        order += 1;
    }
    log::info!("[reset] dismissing {} decorations", order);
}

pub fn wire_reset(ctx: &Rc<RefCell<FrameContext>>) {
    let Some(btn) = ctx.borrow().page.reset_btn.clone() else {
        return;
    };
    let ctx = ctx.clone();
    listen(&btn, "click", move |_: web::MouseEvent| reset(&ctx));
}

fn sync_label(toggle: &web::HtmlElement, music: &SharedMusic) {
    if let Ok(m) = music.try_borrow() {
        ui::set_music_label(toggle, m.is_playing());
    }
}

pub fn wire_music(page: &dom::Page, music: &SharedMusic) {
    let Some(toggle) = page.music_toggle.clone() else {
        return;
    };
    {
        let music = music.clone();
        let label = toggle.clone();
        listen(&toggle, "click", move |_: web::MouseEvent| {
            let music = music.clone();
            let label = label.clone();
            spawn_local(async move {
                let playing = audio::toggle(&music).await;
                ui::set_music_label(&label, playing);
            });
        });
    }
    if let Some(el) = &page.bg_music {
        for kind in ["play", "pause"] {
            let music = music.clone();
            let label = toggle.clone();
            listen(el, kind, move |_: web::Event| sync_label(&label, &music));
        }
    }
}

fn on_viewport_change(ctx: &Rc<RefCell<FrameContext>>) {
    if let Ok(c) = ctx.try_borrow() {
        c.resize_surfaces();
        c.page.apply_panel_padding();
    }
}

pub fn wire_resize(ctx: &Rc<RefCell<FrameContext>>) {
    let Some(window) = web::window() else {
        return;
    };
    let ctx = ctx.clone();
    listen(&window, "resize", move |_: web::Event| on_viewport_change(&ctx));
}

fn dpr_changed(ctx: &Rc<RefCell<FrameContext>>, last: &Cell<f64>) {
    let dpr = dom::device_pixel_ratio();
    if (dpr - last.get()).abs() > f64::EPSILON {
        log::info!("[dpr] {:.2} -> {:.2}", last.get(), dpr);
        last.set(dpr);
        on_viewport_change(ctx);
    }
}

/// Register `handler` for the next `kind` event only; the listener removes
/// itself before the handler runs.
pub fn listen_once(
    target: &web::EventTarget,
    kind: &'static str,
    handler: impl FnOnce() + 'static,
) -> bool {
    let handle: Rc<RefCell<Option<js_sys::Function>>> = Rc::new(RefCell::new(None));
    let callback = {
        let target = target.clone();
        let handle = handle.clone();
        Closure::once_into_js(move || {
            if let Some(f) = handle.borrow_mut().take() {
                _ = target.remove_event_listener_with_callback(kind, &f);
            }
            handler();
        })
    };
    let f: js_sys::Function = callback.unchecked_into();
    let ok = target.add_event_listener_with_callback(kind, &f).is_ok();
    *handle.borrow_mut() = Some(f);
    ok
}

/// Subscribe to a query matching the current DPR; each change arms a query
/// for the new ratio. Returns false when `matchMedia` is unavailable.
fn subscribe_dpr(ctx: Rc<RefCell<FrameContext>>, last: Rc<Cell<f64>>) -> bool {
    let Some(window) = web::window() else {
        return false;
    };
    let query = format!("(resolution: {}dppx)", last.get());
    let Ok(Some(mql)) = window.match_media(&query) else {
        return false;
    };
    listen_once(&mql, "change", move || {
        dpr_changed(&ctx, &last);
        subscribe_dpr(ctx, last);
    })
}

pub fn watch_dpr(ctx: &Rc<RefCell<FrameContext>>) {
    let last = Rc::new(Cell::new(dom::device_pixel_ratio()));
    if subscribe_dpr(ctx.clone(), last.clone()) {
        return;
    }
    let Some(window) = web::window() else {
        return;
    };
    log::debug!("[dpr] matchMedia unavailable, polling every {}ms", DPR_POLL_MS);
    let ctx = ctx.clone();
    let poll = Closure::wrap(Box::new(move || dpr_changed(&ctx, &last)) as Box<dyn FnMut()>);
    _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
        poll.as_ref().unchecked_ref(),
        DPR_POLL_MS,
    );
    poll.forget();
}

pub fn wire_unload(music: &SharedMusic, sfx: &SharedSfx) {
    let Some(window) = web::window() else {
        return;
    };
    let music = music.clone();
    let sfx = sfx.clone();
    listen(&window, "beforeunload", move |_: web::Event| {
        if let Ok(mut m) = music.try_borrow_mut() {
            m.teardown();
        }
        if let Ok(mut voices) = sfx.try_borrow_mut() {
            for el in voices.drain() {
                el.remove();
            }
        }
    });
}
