use crate::constants::*;
use glam::Vec2;
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up an element by id and cast it; `None` when missing or of another type.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

pub fn required<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    element_by_id(document, id).ok_or_else(|| anyhow::anyhow!("missing #{}", id))
}

/// Centre of an element's bounding box in viewport coordinates.
pub fn center_of(el: &web::Element) -> Vec2 {
    let r = el.get_bounding_client_rect();
    Vec2::new(
        (r.left() + r.width() / 2.0) as f32,
        (r.top() + r.height() / 2.0) as f32,
    )
}

pub fn viewport_size() -> (f64, f64) {
    web::window()
        .map(|w| {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            (width, height)
        })
        .unwrap_or((0.0, 0.0))
}

pub fn device_pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|d| *d > 0.0)
        .unwrap_or(1.0)
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
    }
}

thread_local! {
    static EPOCH: Instant = Instant::now();
}

/// Monotonic seconds since the module started.
pub fn now_secs() -> f64 {
    EPOCH.with(|e| e.elapsed().as_secs_f64())
}

pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn create_div(document: &web::Document, class: &str) -> Option<web::HtmlElement> {
    let el = document
        .create_element("div")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Some(el)
}

pub fn append_to_body(document: &web::Document, el: &web::Node) {
    if let Some(body) = document.body() {
        _ = body.append_child(el);
    }
}

/// Elements the page needs. Optional ones are skipped when absent.
#[derive(Clone)]
pub struct Page {
    pub document: web::Document,
    pub throw_btn: web::HtmlElement,
    pub reset_btn: Option<web::HtmlElement>,
    pub cake_template: web::HtmlElement,
    pub target: web::HtmlElement,
    pub panel: Option<web::HtmlElement>,
    pub subtitle: Option<web::HtmlElement>,
    pub music_toggle: Option<web::HtmlElement>,
    pub bg_music: Option<web::HtmlAudioElement>,
    pub sfx_click: Option<web::HtmlAudioElement>,
    pub sfx_pop: Option<web::HtmlAudioElement>,
}

impl Page {
    pub fn locate(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            document: document.clone(),
            throw_btn: required(document, ID_THROW_BTN)?,
            reset_btn: element_by_id(document, ID_RESET_BTN),
            cake_template: required(document, ID_CAKE)?,
            target: required(document, ID_TARGET)?,
            panel: element_by_id(document, ID_PANEL),
            subtitle: element_by_id(document, ID_SUBTITLE),
            music_toggle: element_by_id(document, ID_MUSIC_TOGGLE),
            bg_music: element_by_id(document, ID_BG_MUSIC),
            sfx_click: element_by_id(document, ID_SFX_CLICK),
            sfx_pop: element_by_id(document, ID_SFX_POP),
        })
    }

    /// Fixed bottom spacing of the celebrate panel.
    pub fn apply_panel_padding(&self) {
        if let Some(panel) = &self.panel {
            set_style(panel, "padding-bottom", cake_core::PANEL_PADDING_BOTTOM);
        }
    }
}
