//! Background music and overlapping sound effects.
//!
//! [`WebMusic`] is the owned music context handed to UI handlers: it pairs
//! the [`BackgroundMusic`] state machine with a sink that drives an
//! `AudioContext` (decoded buffer loop) or the `<audio>` element.
//! Everything here is best-effort: failures are logged and swallowed.

use crate::dom;
use cake_core::{music, AudioError, BackgroundMusic, MusicSink, Playback, SfxVoices};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn js_err(e: JsValue) -> String {
    format!("{:?}", e)
}

pub struct WebMusicSink {
    ctx: Option<web::AudioContext>,
    buffer: Option<web::AudioBuffer>,
    source: Option<web::AudioBufferSourceNode>,
    element: Option<web::HtmlAudioElement>,
}

impl WebMusicSink {
    pub fn new(element: Option<web::HtmlAudioElement>) -> Self {
        Self {
            ctx: None,
            buffer: None,
            source: None,
            element,
        }
    }

    fn context(&mut self) -> Result<web::AudioContext, AudioError> {
        if let Some(ctx) = &self.ctx {
            return Ok(ctx.clone());
        }
        let ctx = web::AudioContext::new().map_err(|e| AudioError::Context(js_err(e)))?;
        self.ctx = Some(ctx.clone());
        Ok(ctx)
    }

    fn resume_if_suspended(&self) {
        if let Some(ctx) = &self.ctx {
            if ctx.state() == web::AudioContextState::Suspended {
                if let Ok(p) = ctx.resume() {
                    spawn_local(async move {
                        if let Err(e) = JsFuture::from(p).await {
                            log::warn!("[music] resume failed: {:?}", e);
                        }
                    });
                }
            }
        }
    }

    /// URL of the background track as the element resolved it.
    fn track_url(&self) -> Option<String> {
        let el = self.element.as_ref()?;
        let src = el.current_src();
        let src = if src.is_empty() { el.src() } else { src };
        (!src.is_empty()).then(|| String::from(js_sys::encode_uri(&src)))
    }
}

impl MusicSink for WebMusicSink {
    fn start_buffer_loop(&mut self, volume: f32) -> Result<(), AudioError> {
        let buffer = self.buffer.clone().ok_or(AudioError::NoBuffer)?;
        let ctx = self.context()?;
        self.resume_if_suspended();
        self.stop_buffer_loop();
        let source = ctx
            .create_buffer_source()
            .map_err(|e| AudioError::Playback(js_err(e)))?;
        source.set_buffer(Some(&buffer));
        source.set_loop(true);
        let gain = web::GainNode::new(&ctx).map_err(|e| AudioError::Playback(js_err(e)))?;
        gain.gain().set_value(volume);
        source
            .connect_with_audio_node(&gain)
            .and_then(|_| gain.connect_with_audio_node(&ctx.destination()))
            .map_err(|e| AudioError::Playback(js_err(e)))?;
        #[allow(deprecated)]
        let started = source.start();
        started.map_err(|e| AudioError::Playback(js_err(e)))?;
        self.source = Some(source);
        Ok(())
    }

    fn stop_buffer_loop(&mut self) {
        if let Some(source) = self.source.take() {
            #[allow(deprecated)]
            let _ = source.stop();
            _ = source.disconnect();
        }
    }

    fn play_element(&mut self, volume: f32) -> Result<(), AudioError> {
        let el = self
            .element
            .as_ref()
            .ok_or_else(|| AudioError::Playback("no background element".into()))?;
        el.set_muted(false);
        el.set_volume(volume as f64);
        let promise = el.play().map_err(|e| AudioError::Playback(js_err(e)))?;
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[music] media element play rejected: {:?}", e);
            }
        });
        Ok(())
    }

    fn pause_element(&mut self) {
        if let Some(el) = &self.element {
            _ = el.pause();
        }
    }

    fn element_audible(&self) -> bool {
        self.element
            .as_ref()
            .is_some_and(|el| !el.paused() && !el.ended() && el.current_time() > 0.0)
    }

    fn close(&mut self) {
        if let Some(ctx) = self.ctx.take() {
            _ = ctx.close();
        }
        self.buffer = None;
    }
}

/// Owned music context: `init`, `start`, `stop`, `toggle`, `teardown`.
pub struct WebMusic {
    pub state: BackgroundMusic,
    pub sink: WebMusicSink,
}

pub type SharedMusic = Rc<RefCell<WebMusic>>;

impl WebMusic {
    pub fn new(element: Option<web::HtmlAudioElement>, volume: f32) -> Self {
        Self {
            state: BackgroundMusic::new(volume),
            sink: WebMusicSink::new(element),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing(&self.sink)
    }

    pub fn stop(&mut self) {
        self.state.stop(&mut self.sink);
    }

    pub fn teardown(&mut self) {
        self.state.teardown(&mut self.sink);
    }
}

/// Begin decoding ahead of any interaction.
pub fn init(music: &SharedMusic) {
    let music = music.clone();
    spawn_local(async move {
        decode(&music).await;
    });
}

async fn fetch_and_decode(
    ctx: web::AudioContext,
    url: String,
) -> Result<web::AudioBuffer, AudioError> {
    let window = web::window().ok_or_else(|| AudioError::Fetch("no window".into()))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(|e| AudioError::Fetch(js_err(e)))?
        .dyn_into()
        .map_err(|e| AudioError::Fetch(js_err(e)))?;
    let headers = resp.headers();
    let content_type = headers.get("content-type").ok().flatten();
    let disposition = headers.get("content-disposition").ok().flatten();
    music::vet_track_response(
        resp.ok(),
        resp.status(),
        content_type.as_deref(),
        disposition.as_deref(),
    )?;
    let bytes = resp
        .array_buffer()
        .map_err(|e| AudioError::Fetch(js_err(e)))?;
    let bytes: js_sys::ArrayBuffer = JsFuture::from(bytes)
        .await
        .map_err(|e| AudioError::Fetch(js_err(e)))?
        .dyn_into()
        .map_err(|e| AudioError::Fetch(js_err(e)))?;
    let decoded = ctx
        .decode_audio_data(&bytes)
        .map_err(|e| AudioError::Decode(js_err(e)))?;
    JsFuture::from(decoded)
        .await
        .map_err(|e| AudioError::Decode(js_err(e)))?
        .dyn_into::<web::AudioBuffer>()
        .map_err(|e| AudioError::Decode(js_err(e)))
}

/// Fetch and decode the background track. Returns at once while a decode
/// is running, once a buffer is held, or when the server refused the track.
pub async fn decode(music: &SharedMusic) {
    let job = {
        let mut m = music.borrow_mut();
        if !m.state.begin_decode() {
            return;
        }
        let url = m.sink.track_url();
        match (m.sink.context(), url) {
            (Ok(ctx), Some(url)) => Ok((ctx, url)),
            (Err(e), _) => Err(e),
            (_, None) => Err(AudioError::Fetch("background track has no source".into())),
        }
    };
    let result = match job {
        Ok((ctx, url)) => fetch_and_decode(ctx, url).await,
        Err(e) => Err(e),
    };
    let mut m = music.borrow_mut();
    match result {
        Ok(buffer) => {
            log::info!(
                "[music] decoded {:.1}s of background audio",
                buffer.duration()
            );
            m.sink.buffer = Some(buffer);
            m.state.finish_decode(Ok(()));
        }
        Err(e) => m.state.finish_decode(Err(e)),
    }
}

/// Start playback, decoding on demand first. Must run inside a user gesture.
pub async fn start(music: &SharedMusic) -> Playback {
    if music.borrow().state.needs_decode() {
        decode(music).await;
    }
    let mut m = music.borrow_mut();
    let WebMusic { state, sink } = &mut *m;
    state.start(sink)
}

/// Toggle playback; resolves to whether music is now playing.
pub async fn toggle(music: &SharedMusic) -> bool {
    if music.borrow().is_playing() {
        music.borrow_mut().stop();
        return false;
    }
    let ctx = music.borrow().sink.ctx.clone();
    if let Some(ctx) = ctx {
        if ctx.state() == web::AudioContextState::Suspended {
            if let Ok(p) = ctx.resume() {
                _ = JsFuture::from(p).await;
            }
        }
    }
    start(music).await != Playback::Stopped
}

/// Start music on the first user gesture only.
pub async fn start_once(music: &SharedMusic) -> bool {
    if music.borrow().state.has_started() {
        return false;
    }
    if music.borrow().state.needs_decode() {
        decode(music).await;
    }
    let mut m = music.borrow_mut();
    let WebMusic { state, sink } = &mut *m;
    state.start_once(sink)
}

pub type SharedSfx = Rc<RefCell<SfxVoices<web::HtmlAudioElement>>>;

fn clone_audio(source: &web::HtmlAudioElement) -> Result<web::HtmlAudioElement, JsValue> {
    source
        .clone_node_with_deep(true)?
        .dyn_into::<web::HtmlAudioElement>()
        .map_err(JsValue::from)
}

/// Play `source` through a throwaway clone so triggers overlap freely.
pub fn play_sfx(voices: &SharedSfx, source: Option<&web::HtmlAudioElement>, volume: f32) {
    let Some(source) = source else {
        return;
    };
    let clone = match clone_audio(source) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("[sfx] clone failed, replaying source: {:?}", e);
            source.set_current_time(0.0);
            if let Ok(p) = source.play() {
                spawn_local(async move {
                    _ = JsFuture::from(p).await;
                });
            }
            return;
        }
    };
    clone.set_preload("auto");
    clone.set_volume(volume as f64);
    dom::set_style(&clone, "display", "none");
    if let Some(document) = dom::window_document() {
        dom::append_to_body(&document, &clone);
    }
    clone.set_current_time(0.0);
    let id = voices.borrow_mut().begin(clone.clone(), dom::now_secs());
    for kind in ["ended", "error"] {
        let voices = voices.clone();
        let release = Closure::once_into_js(move || {
            if let Some(el) = voices.borrow_mut().finish(id) {
                el.remove();
            }
        });
        _ = clone.add_event_listener_with_callback(kind, release.unchecked_ref());
    }
    match clone.play() {
        Ok(promise) => {
            let voices = voices.clone();
            spawn_local(async move {
                match JsFuture::from(promise).await {
                    Ok(_) => voices.borrow_mut().mark_playing(id),
                    Err(e) => {
                        log::debug!("[sfx] play rejected: {:?}", e);
                        voices.borrow_mut().mark_rejected(id, dom::now_secs());
                    }
                }
            });
        }
        Err(e) => {
            log::debug!("[sfx] play threw: {:?}", e);
            voices.borrow_mut().mark_rejected(id, dom::now_secs());
        }
    }
}

/// Remove clones whose cleanup deadline has passed.
pub fn reap_sfx(voices: &SharedSfx, now: f64) {
    for el in voices.borrow_mut().expire(now) {
        el.remove();
    }
}
