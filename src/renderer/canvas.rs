//! Canvas 2D backend

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::scene::DrawCommand;

/// Executes draw lists on a 2D canvas context
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;
        Ok(Self { canvas, ctx })
    }

    /// Match the backing store to the window size
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    pub fn render(&self, commands: &[DrawCommand]) {
        for cmd in commands {
            match cmd {
                DrawCommand::Clear { width, height } => {
                    self.ctx.clear_rect(0.0, 0.0, *width as f64, *height as f64);
                }
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                    glow,
                } => self.fill_circle(center.x as f64, center.y as f64, *radius as f64, color, *glow),
                DrawCommand::Triangle {
                    points,
                    fill,
                    outline,
                    outline_width,
                } => {
                    let ctx = &self.ctx;
                    ctx.begin_path();
                    ctx.move_to(points[0].x as f64, points[0].y as f64);
                    ctx.line_to(points[1].x as f64, points[1].y as f64);
                    ctx.line_to(points[2].x as f64, points[2].y as f64);
                    ctx.close_path();
                    ctx.set_fill_style_str(fill);
                    ctx.fill();
                    ctx.set_stroke_style_str(outline);
                    ctx.set_line_width(*outline_width);
                    ctx.stroke();
                }
            }
        }
    }

    fn fill_circle(&self, x: f64, y: f64, radius: f64, color: &str, glow: Option<f64>) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(color);
        ctx.begin_path();
        if let Err(e) = ctx.arc(x, y, radius, 0.0, TAU) {
            log::warn!("arc failed: {e:?}");
            return;
        }
        ctx.fill();

        // Second pass with a blurred shadow for the halo
        if let Some(blur) = glow {
            ctx.set_shadow_blur(blur);
            ctx.set_shadow_color(color);
            ctx.fill();
            ctx.set_shadow_blur(0.0);
        }
    }
}
