//! Canvas 2D painting for the trail and splat surfaces.

use crate::dom;
use cake_core::{Blob, TrailStore, TRAIL_RGB};
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// A full-viewport canvas and its 2D context.
pub struct Surface {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
}

impl Surface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    /// Match the backing store to viewport × DPR and draw in CSS pixels.
    /// Resizing discards the current drawing.
    pub fn resize(&self) {
        let (w, h) = dom::viewport_size();
        let dpr = dom::device_pixel_ratio();
        self.canvas.set_width(((w * dpr).round() as u32).max(1));
        self.canvas.set_height(((h * dpr).round() as u32).max(1));
        dom::set_style(&self.canvas, "width", &format!("{}px", w));
        dom::set_style(&self.canvas, "height", &format!("{}px", h));
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.clear();
    }

    pub fn clear(&self) {
        let (w, h) = dom::viewport_size();
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    pub fn set_opacity(&self, opacity: f32) {
        dom::set_style(&self.canvas, "opacity", &format!("{:.3}", opacity));
    }
}

#[allow(deprecated)]
fn set_fill(ctx: &web::CanvasRenderingContext2d, color: &str) {
    ctx.set_fill_style(&JsValue::from_str(color));
}

/// Paint every live trail point as a soft circle.
pub fn draw_trail(surface: &Surface, trail: &TrailStore) {
    let ctx = &surface.ctx;
    let [r, g, b] = TRAIL_RGB;
    for dot in trail.dots() {
        ctx.set_global_alpha(dot.alpha as f64);
        set_fill(ctx, &format!("rgba({},{},{},{:.3})", r, g, b, dot.fill_alpha));
        ctx.begin_path();
        _ = ctx.arc(dot.x as f64, dot.y as f64, dot.radius as f64, 0.0, TAU);
        ctx.fill();
    }
    ctx.set_global_alpha(1.0);
}

pub fn draw_blob(surface: &Surface, blob: &Blob) {
    let ctx = &surface.ctx;
    ctx.save();
    ctx.set_global_alpha(blob.alpha as f64);
    set_fill(ctx, blob.color);
    ctx.begin_path();
    let start = blob.start();
    ctx.move_to(start.x as f64, start.y as f64);
    for seg in blob.outline() {
        ctx.quadratic_curve_to(
            seg.control.x as f64,
            seg.control.y as f64,
            seg.to.x as f64,
            seg.to.y as f64,
        );
    }
    ctx.close_path();
    ctx.fill();
    ctx.restore();
}
