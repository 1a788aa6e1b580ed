use log::*;

use crate::backend::*;
use crate::error::*;
use crate::program::*;

/// The name of the vertex attribute the quad is bound to.
pub const POSITION_ATTRIBUTE: &str = "position";

/// Corners of the viewport in normalized device coordinates, in triangle-strip order.
pub const QUAD_VERTICES: [f32; 8] = [1.0, 1.0, -1.0, 1.0, 1.0, -1.0, -1.0, -1.0];

const COMPONENTS_PER_VERTEX: i32 = 2;

/// A full-screen quad, drawn as a 4-vertex triangle strip.
pub struct FullScreenQuad<B: Backend> {
    vbo: B::Buffer,
}

impl<B: Backend> FullScreenQuad<B> {
    /// Uploads the quad and binds it to the program's `position` attribute.
    ///
    /// The program must be bound. If it has no active `position` attribute the
    /// buffer is still created, but nothing reads from it.
    pub fn new(backend: &B, program: &Program<B>) -> Result<Self> {
        let vbo = backend.create_buffer().ok_or(Error::BufferCreationFailed)?;
        backend.bind_array_buffer(&vbo);
        backend.buffer_data_f32(&QUAD_VERTICES, BufferUsage::StaticDraw);

        match backend.attrib_location(&program.program, POSITION_ATTRIBUTE) {
            Some(loc) => {
                backend.enable_vertex_attrib_array(loc);
                backend.vertex_attrib_pointer_f32(loc, COMPONENTS_PER_VERTEX, false, 0, 0);
            }
            None => warn!(
                "Vertex shader has no active `{}` attribute; the quad won't be bound",
                POSITION_ATTRIBUTE
            ),
        }

        Ok(FullScreenQuad { vbo })
    }

    pub fn vertex_count() -> i32 {
        QUAD_VERTICES.len() as i32 / COMPONENTS_PER_VERTEX
    }

    /// Draws the quad with the currently bound program.
    pub fn draw(&self, backend: &B) {
        backend.draw_arrays(Primitive::TriangleStrip, 0, Self::vertex_count());
    }

    pub(crate) fn delete(&self, backend: &B) {
        backend.delete_buffer(&self.vbo);
    }
}
