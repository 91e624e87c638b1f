//! Canvas 2D backend for the game renderer

use game_core::{Surface, TextAlign};
use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
    size: Vec2,
}

impl CanvasSurface {
    /// Size the canvas and grab its 2D context
    pub fn new(canvas: &HtmlCanvasElement, width: f32, height: f32) -> Result<Self, JsValue> {
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            context,
            size: Vec2::new(width, height),
        })
    }
}

impl Surface for CanvasSurface {
    type Error = JsValue;

    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear_rect(&mut self, pos: Vec2, size: Vec2) -> Result<(), JsValue> {
        self.context
            .clear_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
        Ok(())
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) -> Result<(), JsValue> {
        self.context.set_fill_style_str(color);
        self.context
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
        Ok(())
    }

    fn stroke_dashed_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        width: f32,
        dash: &[f32],
        color: &str,
    ) -> Result<(), JsValue> {
        let segments = js_sys::Array::new();
        for len in dash {
            segments.push(&JsValue::from_f64(*len as f64));
        }

        self.context.begin_path();
        self.context.set_line_dash(&segments)?;
        self.context.move_to(from.x as f64, from.y as f64);
        self.context.line_to(to.x as f64, to.y as f64);
        self.context.set_line_width(width as f64);
        self.context.set_stroke_style_str(color);
        self.context.stroke();
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        pos: Vec2,
        font: &str,
        align: TextAlign,
        color: &str,
    ) -> Result<(), JsValue> {
        self.context.set_font(font);
        self.context.set_fill_style_str(color);
        self.context.set_text_align(align.as_str());
        self.context.fill_text(text, pos.x as f64, pos.y as f64)
    }
}
