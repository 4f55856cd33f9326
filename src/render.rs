use crate::core::{Rgba, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `Surface` over a canvas 2d context. Drawing happens in CSS pixels; the
/// device pixel ratio is applied through the context transform.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// `None` while the canvas cannot hand out a 2d context.
    pub fn from_canvas(canvas: &web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }

    pub fn begin_frame(&self, device_pixel_ratio: f64) {
        let s = device_pixel_ratio;
        _ = self.ctx.set_transform(s, 0.0, 0.0, s, 0.0, 0.0);
        self.ctx.set_shadow_blur(0.0);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn fill_diagonal_gradient(&mut self, size: Vec2, stops: &[(f32, Rgba)]) {
        let (w, h) = (size.x as f64, size.y as f64);
        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, w, h);
        for (offset, color) in stops {
            _ = gradient.add_color_stop(*offset, &color.to_string());
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, w, h);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, blur: f32) {
        let css = color.to_string();
        if blur > 0.0 {
            self.ctx.set_shadow_blur(blur as f64);
            self.ctx.set_shadow_color(&css);
        }
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(&css);
        self.ctx.fill();
        if blur > 0.0 {
            self.ctx.set_shadow_blur(0.0);
        }
    }
}
