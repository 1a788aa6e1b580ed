use cgmath::*;
use wasm_bindgen::JsCast;
use web_sys::*;

use crate::backend::*;
use crate::context::*;
use crate::error::*;

/// A drawable pixel area that can produce a rendering context.
pub trait Surface {
    type Backend: Backend;

    /// Acquires a rendering context for the surface.
    fn context(&self) -> Result<Self::Backend>;

    /// Returns the current size of the surface in pixels.
    fn size(&self) -> Vector2<u32>;
}

/// A surface backed by an HTML canvas.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        CanvasSurface { canvas }
    }

    /// Looks up a canvas in the current document by its element id.
    pub fn from_element_id(canvas_id: &str) -> Result<Self> {
        let canvas = window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(canvas_id))
            .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or_else(|| Error::CanvasNotFound(canvas_id.to_string()))?;
        Ok(Self::new(canvas))
    }

    /// Resizes the canvas. The next rendered frame uses the new size for both
    /// `iResolution` and the viewport.
    pub fn set_size(&mut self, new_size: Vector2<u32>) {
        self.canvas.set_width(new_size.x);
        self.canvas.set_height(new_size.y);
    }

    /// Returns the canvas corresponding to this surface.
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    type Backend = GlContext;

    fn context(&self) -> Result<GlContext> {
        GlContext::from_canvas(&self.canvas)
    }

    fn size(&self) -> Vector2<u32> {
        vec2(self.canvas.width(), self.canvas.height())
    }
}
