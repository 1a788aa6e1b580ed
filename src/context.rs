use js_sys::Float32Array;
use std::convert::TryFrom;
use wasm_bindgen::JsCast;
use web_sys::*;

use crate::backend::*;
use crate::error::*;

pub(crate) type WebGl2 = WebGl2RenderingContext;

/// A WebGL 2 context.
#[derive(Clone)]
pub struct GlContext {
    pub(crate) inner: WebGl2RenderingContext,
}

impl ShaderStage {
    fn as_gl(self) -> u32 {
        match self {
            ShaderStage::Vertex => WebGl2::VERTEX_SHADER,
            ShaderStage::Fragment => WebGl2::FRAGMENT_SHADER,
        }
    }
}

impl GlFlag {
    fn as_gl(self) -> u32 {
        match self {
            GlFlag::Blend => WebGl2::BLEND,
            GlFlag::DepthTest => WebGl2::DEPTH_TEST,
        }
    }
}

impl BlendFactor {
    fn as_gl(self) -> u32 {
        match self {
            BlendFactor::Zero => WebGl2::ZERO,
            BlendFactor::One => WebGl2::ONE,
            BlendFactor::SrcColor => WebGl2::SRC_COLOR,
            BlendFactor::OneMinusSrcColor => WebGl2::ONE_MINUS_SRC_COLOR,
            BlendFactor::DstColor => WebGl2::DST_COLOR,
            BlendFactor::OneMinusDstColor => WebGl2::ONE_MINUS_DST_COLOR,
            BlendFactor::SrcAlpha => WebGl2::SRC_ALPHA,
            BlendFactor::OneMinusSrcAlpha => WebGl2::ONE_MINUS_SRC_ALPHA,
            BlendFactor::DstAlpha => WebGl2::DST_ALPHA,
            BlendFactor::OneMinusDstAlpha => WebGl2::ONE_MINUS_DST_ALPHA,
            BlendFactor::ConstantColor => WebGl2::CONSTANT_COLOR,
            BlendFactor::OneMinusConstantColor => WebGl2::ONE_MINUS_CONSTANT_COLOR,
            BlendFactor::ConstantAlpha => WebGl2::CONSTANT_ALPHA,
            BlendFactor::OneMinusConstantAlpha => WebGl2::ONE_MINUS_CONSTANT_ALPHA,
            BlendFactor::SrcAlphaSaturate => WebGl2::SRC_ALPHA_SATURATE,
        }
    }
}

impl BufferUsage {
    fn as_gl(self) -> u32 {
        match self {
            BufferUsage::StaticDraw => WebGl2::STATIC_DRAW,
        }
    }
}

impl Primitive {
    fn as_gl(self) -> u32 {
        match self {
            Primitive::TriangleStrip => WebGl2::TRIANGLE_STRIP,
        }
    }
}

/// `getAttribLocation` returns -1 when the attribute isn't active.
fn attrib_index(location: i32) -> Option<u32> {
    u32::try_from(location).ok()
}

impl GlContext {
    /// Creates a `GlContext` for the canvas.
    ///
    /// Returns an error if the WebGL 2 context couldn't be created.
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self> {
        let attributes = WebGlContextAttributes::new();
        attributes.set_antialias(true);
        let context = canvas
            .get_context_with_context_options("webgl2", attributes.as_ref())
            .ok()
            .flatten()
            .and_then(|context| context.dyn_into::<WebGl2RenderingContext>().ok())
            .ok_or(Error::ContextUnavailable)?;
        Ok(GlContext { inner: context })
    }

    /// Returns the underlying WebGL context, for uniform callbacks that need
    /// calls `Backend` doesn't cover.
    pub fn raw(&self) -> &WebGl2RenderingContext {
        &self.inner
    }
}

impl Backend for GlContext {
    type Program = WebGlProgram;
    type Shader = WebGlShader;
    type Buffer = WebGlBuffer;
    type UniformLocation = WebGlUniformLocation;

    fn create_program(&self) -> Option<WebGlProgram> {
        self.inner.create_program()
    }

    fn create_shader(&self, stage: ShaderStage) -> Option<WebGlShader> {
        self.inner.create_shader(stage.as_gl())
    }

    fn shader_source(&self, shader: &WebGlShader, source: &str) {
        self.inner.shader_source(shader, source);
    }

    fn compile_shader(&self, shader: &WebGlShader) {
        self.inner.compile_shader(shader);
    }

    fn shader_compile_status(&self, shader: &WebGlShader) -> bool {
        self.inner.get_shader_parameter(shader, WebGl2::COMPILE_STATUS).as_bool().unwrap_or(false)
    }

    fn shader_info_log(&self, shader: &WebGlShader) -> String {
        self.inner.get_shader_info_log(shader).unwrap_or_default()
    }

    fn attach_shader(&self, program: &WebGlProgram, shader: &WebGlShader) {
        self.inner.attach_shader(program, shader);
    }

    fn link_program(&self, program: &WebGlProgram) {
        self.inner.link_program(program);
    }

    fn program_link_status(&self, program: &WebGlProgram) -> bool {
        self.inner.get_program_parameter(program, WebGl2::LINK_STATUS).as_bool().unwrap_or(false)
    }

    fn program_info_log(&self, program: &WebGlProgram) -> String {
        self.inner.get_program_info_log(program).unwrap_or_default()
    }

    fn uniform_location(&self, program: &WebGlProgram, name: &str) -> Option<WebGlUniformLocation> {
        self.inner.get_uniform_location(program, name)
    }

    fn attrib_location(&self, program: &WebGlProgram, name: &str) -> Option<u32> {
        attrib_index(self.inner.get_attrib_location(program, name))
    }

    fn use_program(&self, program: &WebGlProgram) {
        self.inner.use_program(Some(program));
    }

    fn create_buffer(&self) -> Option<WebGlBuffer> {
        self.inner.create_buffer()
    }

    fn bind_array_buffer(&self, buffer: &WebGlBuffer) {
        self.inner.bind_buffer(WebGl2::ARRAY_BUFFER, Some(buffer));
    }

    fn buffer_data_f32(&self, data: &[f32], usage: BufferUsage) {
        let array = Float32Array::from(data);
        self.inner.buffer_data_with_array_buffer_view(WebGl2::ARRAY_BUFFER, &array, usage.as_gl());
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.inner.enable_vertex_attrib_array(index);
    }

    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        self.inner.vertex_attrib_pointer_with_i32(
            index,
            size,
            WebGl2::FLOAT,
            normalized,
            stride,
            offset,
        );
    }

    fn uniform1f(&self, location: &WebGlUniformLocation, x: f32) {
        self.inner.uniform1f(Some(location), x);
    }

    fn uniform2f(&self, location: &WebGlUniformLocation, x: f32, y: f32) {
        self.inner.uniform2f(Some(location), x, y);
    }

    fn uniform3f(&self, location: &WebGlUniformLocation, x: f32, y: f32, z: f32) {
        self.inner.uniform3f(Some(location), x, y, z);
    }

    fn uniform4f(&self, location: &WebGlUniformLocation, x: f32, y: f32, z: f32, w: f32) {
        self.inner.uniform4f(Some(location), x, y, z, w);
    }

    fn uniform1i(&self, location: &WebGlUniformLocation, x: i32) {
        self.inner.uniform1i(Some(location), x);
    }

    fn uniform_matrix4fv(&self, location: &WebGlUniformLocation, transpose: bool, data: &[f32; 16]) {
        self.inner.uniform_matrix4fv_with_f32_array(Some(location), transpose, data);
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.inner.viewport(x, y, width, height);
    }

    fn blend_func(&self, src: BlendFactor, dst: BlendFactor) {
        self.inner.blend_func(src.as_gl(), dst.as_gl());
    }

    fn enable(&self, flag: GlFlag) {
        self.inner.enable(flag.as_gl());
    }

    fn disable(&self, flag: GlFlag) {
        self.inner.disable(flag.as_gl());
    }

    fn draw_arrays(&self, primitive: Primitive, first: i32, count: i32) {
        self.inner.draw_arrays(primitive.as_gl(), first, count);
    }

    fn delete_program(&self, program: &WebGlProgram) {
        self.inner.delete_program(Some(program));
    }

    fn delete_shader(&self, shader: &WebGlShader) {
        self.inner.delete_shader(Some(shader));
    }

    fn delete_buffer(&self, buffer: &WebGlBuffer) {
        self.inner.delete_buffer(Some(buffer));
    }
}
