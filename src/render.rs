use boxsplash_core::WorldSpace;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{BACKGROUND_CSS, BORDER_LINE_WIDTH};
use crate::input;

pub struct CanvasRenderer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("not a 2d context: {:?}", e))?;
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
        })
    }

    /// Paint every box back to front over a cleared background.
    ///
    /// The world is laid out in CSS pixels; `dpr` maps it onto the backing
    /// store.
    pub fn draw(&self, world: &WorldSpace, dpr: f64) {
        let (w, h) = input::css_size(self.canvas.width(), self.canvas.height(), dpr);
        let (w, h) = (w as f64, h as f64);
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.ctx.set_fill_style_str(BACKGROUND_CSS);
        self.ctx.fill_rect(0.0, 0.0, w, h);
        self.ctx.set_line_width(BORDER_LINE_WIDTH);
        for p in world.draw_order() {
            let b = &p.projected;
            if b.scale <= 0.0 {
                continue;
            }
            let (x, y, bw, bh) = (b.x as f64, b.y as f64, b.width as f64, b.height as f64);
            self.ctx.set_fill_style_str(&b.fill.to_string());
            self.ctx.fill_rect(x, y, bw, bh);
            self.ctx.set_stroke_style_str(&b.border.to_string());
            self.ctx.stroke_rect(x, y, bw, bh);
        }
    }
}
