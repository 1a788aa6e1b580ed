use cgmath::*;
use log::*;

use crate::backend::*;
use crate::error::*;
use crate::options::*;
use crate::program::*;
use crate::quad::*;
use crate::surface::*;
use crate::uniforms::*;

/// Renders a fragment shader over the whole of a surface.
///
/// Example usage:
/// ```ignore
/// let surface = CanvasSurface::from_element_id("canvas")?;
/// let shader_surface = ShaderSurface::new(surface, Options {
///     fragment_shader: FRAG_SOURCE.to_string(),
///     ..Options::default()
/// })?;
/// shader_surface.render_frame(Some(timestamp));
/// ```
pub struct ShaderSurface<S: Surface> {
    surface: S,
    context: S::Backend,
    program: Program<S::Backend>,
    quad: FullScreenQuad<S::Backend>,
    uniforms: UniformTable<S::Backend>,
    options: Options<S::Backend>,
}

impl<S: Surface> Drop for ShaderSurface<S> {
    fn drop(&mut self) {
        self.quad.delete(&self.context);
        self.program.delete(&self.context);
    }
}

impl<S: Surface> ShaderSurface<S> {
    /// Creates a `ShaderSurface` with the default options.
    pub fn with_defaults(surface: S) -> Result<Self> {
        Self::new(surface, Options::default())
    }

    /// Compiles and links the shaders, uploads the full-screen quad and sets up
    /// blending. Renders one frame if `options.auto_render` is set.
    pub fn new(surface: S, options: Options<S::Backend>) -> Result<Self> {
        let context = surface.context()?;
        let program = Program::new(&context, &options.vertex_shader, &options.fragment_shader)?;

        let uniforms = UniformTable::resolve(
            &context,
            &program.program,
            DEFAULT_UNIFORMS.iter().copied().chain(options.uniforms.names()),
        );

        program.bind(&context);

        let quad = match FullScreenQuad::new(&context, &program) {
            Ok(quad) => quad,
            Err(err) => {
                program.delete(&context);
                return Err(err);
            }
        };

        context.blend_func(options.blend_func.src, options.blend_func.dst);
        context.enable(GlFlag::Blend);
        context.disable(GlFlag::DepthTest);

        debug!("Shader surface ready");
        let shader_surface = ShaderSurface { surface, context, program, quad, uniforms, options };
        if shader_surface.options.auto_render {
            shader_surface.render_frame(None);
        }
        Ok(shader_surface)
    }

    /// Renders one frame.
    ///
    /// `timestamp` is the elapsed time in milliseconds, as passed to a
    /// `requestAnimationFrame` callback; `None` is treated as 0 for `iTime`.
    pub fn render_frame(&self, timestamp: Option<f64>) {
        let size = self.surface.size();

        let time = (timestamp.unwrap_or(0.0) / 1000.0) as f32;
        self.uniforms.set(&self.context, TIME_UNIFORM, &time);
        self.uniforms.set(&self.context, RESOLUTION_UNIFORM, &vec2(size.x as f32, size.y as f32));

        for (name, callback) in self.options.uniforms.iter() {
            if let Some(location) = self.uniforms.get(name) {
                callback(&self.context, location, timestamp);
            }
        }

        self.context.viewport(0, 0, size.x as i32, size.y as i32);
        self.quad.draw(&self.context);
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, e.g. to resize it between frames.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn context(&self) -> &S::Backend {
        &self.context
    }

    /// Returns the uniform locations resolved at construction.
    pub fn uniforms(&self) -> &UniformTable<S::Backend> {
        &self.uniforms
    }

    pub fn options(&self) -> &Options<S::Backend> {
        &self.options
    }
}

impl<S: Surface> std::fmt::Debug for ShaderSurface<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShaderSurface")
            .field("uniforms", &self.uniforms.names().collect::<Vec<_>>())
            .field("auto_render", &self.options.auto_render)
            .field("blend_func", &self.options.blend_func)
            .finish()
    }
}

