use log::warn;
use web_sys::CanvasRenderingContext2d;

use slapper_core::Surface;

/// Draws frames onto a 2D canvas context.
pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(context: CanvasRenderingContext2d) -> Self {
        CanvasSurface { context }
    }
}

impl Surface for CanvasSurface {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str) {
        self.context.set_fill_style_str(color);
        self.context.fill_rect(x, y, width, height);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: &str, font: &str) {
        self.context.set_font(font);
        self.context.set_fill_style_str(color);
        if let Err(err) = self.context.fill_text(text, x, y) {
            warn!("fill_text failed: {:?}", err);
        }
    }
}
