//! HTML canvas 2D backend (wasm only)

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::{Color, Surface};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, context: CanvasRenderingContext2d) -> Self {
        Self { canvas, context }
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    type Image = HtmlImageElement;

    fn width(&self) -> f32 {
        self.canvas.width() as f32
    }

    fn height(&self) -> f32 {
        self.canvas.height() as f32
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.context.set_fill_style_str(color.as_css());
        self.context
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center_x: f32, center_y: f32, radius: f32, color: Color) {
        self.context.set_fill_style_str(color.as_css());
        self.context.begin_path();
        if let Err(e) = self.context.arc(
            center_x as f64,
            center_y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("arc failed: {:?}", e);
            return;
        }
        self.context.fill();
    }

    fn fill_text(&mut self, x: f32, y: f32, text: &str, color: Color) {
        self.context.set_fill_style_str(color.as_css());
        if let Err(e) = self.context.fill_text(text, x as f64, y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }

    fn draw_image(&mut self, image: &HtmlImageElement, x: f32, y: f32) {
        if let Err(e) = self
            .context
            .draw_image_with_html_image_element(image, x as f64, y as f64)
        {
            log::warn!("draw_image failed: {:?}", e);
        }
    }

    fn draw_image_rotated(&mut self, image: &HtmlImageElement, center_x: f32, center_y: f32, angle: f32) {
        let ctx = &self.context;
        ctx.save();
        let drawn = ctx
            .translate(center_x as f64, center_y as f64)
            .and_then(|_| ctx.rotate(angle as f64))
            .and_then(|_| {
                // (x, y) is the top-left corner, so offset by half the image
                ctx.draw_image_with_html_image_element(
                    image,
                    -(image.width() as f64) / 2.0,
                    -(image.height() as f64) / 2.0,
                )
            });
        if let Err(e) = drawn {
            log::warn!("draw_image_rotated failed: {:?}", e);
        }
        ctx.restore();
    }
}
