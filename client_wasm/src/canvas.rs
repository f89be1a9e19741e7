//! `Canvas` over an HTML canvas 2D context

use game_core::{Canvas, Color, Params};
use web_sys::CanvasRenderingContext2d;

/// CSS `rgba()` string for a color
pub fn css(color: Color) -> String {
    format!(
        "rgba({}, {}, {}, {:.3})",
        color.r,
        color.g,
        color.b,
        color.a as f32 / 255.0
    )
}

pub struct CanvasFrame {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasFrame {
    pub fn new(ctx: CanvasRenderingContext2d, width: f32, height: f32) -> Self {
        ctx.set_font(&format!("{}px {}", Params::FONT_HEIGHT, Params::FONT_FACE));
        ctx.set_text_baseline("top");
        ctx.set_line_width(1.0);
        Self {
            ctx,
            width: width as f64,
            height: height as f64,
        }
    }

    /// Fill the whole frame with the background color
    pub fn clear(&self, color: Color) {
        self.ctx.set_fill_style_str(&css(color));
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }
}

impl Canvas for CanvasFrame {
    fn draw_line(&mut self, x0: f32, y0: f32, c0: Color, x1: f32, y1: f32, c1: Color) {
        let (x0, y0, x1, y1) = (x0 as f64, y0 as f64, x1 as f64, y1 as f64);
        if c0 == c1 {
            self.ctx.set_stroke_style_str(&css(c0));
        } else {
            let gradient = self.ctx.create_linear_gradient(x0, y0, x1, y1);
            if gradient.add_color_stop(0.0, &css(c0)).is_err()
                || gradient.add_color_stop(1.0, &css(c1)).is_err()
            {
                log::warn!("invalid line gradient, falling back to start color");
                self.ctx.set_stroke_style_str(&css(c0));
            } else {
                self.ctx.set_stroke_style_canvas_gradient(&gradient);
            }
        }

        self.ctx.begin_path();
        self.ctx.move_to(x0, y0);
        self.ctx.line_to(x1, y1);
        self.ctx.stroke();
    }

    fn draw_quad(
        &mut self,
        x0: f32,
        y0: f32,
        c0: Color,
        x1: f32,
        y1: f32,
        _c1: Color,
        x2: f32,
        y2: f32,
        _c2: Color,
        x3: f32,
        y3: f32,
        _c3: Color,
    ) {
        // Per-vertex colors are not interpolated; the game only draws flat quads.
        self.ctx.set_fill_style_str(&css(c0));
        self.ctx.begin_path();
        self.ctx.move_to(x0 as f64, y0 as f64);
        self.ctx.line_to(x1 as f64, y1 as f64);
        self.ctx.line_to(x3 as f64, y3 as f64);
        self.ctx.line_to(x2 as f64, y2 as f64);
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn text_width(&self, text: &str) -> f32 {
        match self.ctx.measure_text(text) {
            Ok(metrics) => metrics.width() as f32,
            Err(e) => {
                log::warn!("measure_text failed: {:?}", e);
                0.0
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, scale_x: f32, scale_y: f32, color: Color) {
        self.ctx.save();
        self.ctx.set_fill_style_str(&css(color));
        let placed = self
            .ctx
            .translate(x as f64, y as f64)
            .and_then(|_| self.ctx.scale(scale_x as f64, scale_y as f64))
            .and_then(|_| self.ctx.fill_text(text, 0.0, 0.0));
        if let Err(e) = placed {
            log::warn!("draw_text failed: {:?}", e);
        }
        self.ctx.restore();
    }
}
