use serde::*;
use std::fmt;

/// A shader stage.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        })
    }
}

/// A capability that can be toggled with `enable`/`disable`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GlFlag {
    Blend,
    DepthTest,
}

/// A blend factor, as used by `blend_func`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendFactor {
    Zero,
    One,
    SrcColor,
    OneMinusSrcColor,
    DstColor,
    OneMinusDstColor,
    SrcAlpha,
    OneMinusSrcAlpha,
    DstAlpha,
    OneMinusDstAlpha,
    ConstantColor,
    OneMinusConstantColor,
    ConstantAlpha,
    OneMinusConstantAlpha,
    SrcAlphaSaturate,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BufferUsage {
    StaticDraw,
}

/// A primitive type for `draw_arrays`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Primitive {
    TriangleStrip,
}

/// The subset of a WebGL-style rendering context needed to set up and draw a
/// full-screen shader.
///
/// `GlContext` implements this for a real WebGL 2 context. Other
/// implementations (e.g. a recording mock in tests) can be substituted
/// without changing `ShaderSurface`.
///
/// All methods mirror the WebGL call of the same name. Object creation returns
/// `None` when the context refuses to allocate.
pub trait Backend {
    type Program;
    type Shader;
    type Buffer;
    type UniformLocation;

    fn create_program(&self) -> Option<Self::Program>;
    fn create_shader(&self, stage: ShaderStage) -> Option<Self::Shader>;
    fn shader_source(&self, shader: &Self::Shader, source: &str);
    fn compile_shader(&self, shader: &Self::Shader);
    fn shader_compile_status(&self, shader: &Self::Shader) -> bool;
    /// Returns the compiler's log for the shader, or an empty string.
    fn shader_info_log(&self, shader: &Self::Shader) -> String;
    fn attach_shader(&self, program: &Self::Program, shader: &Self::Shader);
    fn link_program(&self, program: &Self::Program);
    fn program_link_status(&self, program: &Self::Program) -> bool;
    /// Returns the linker's log for the program, or an empty string.
    fn program_info_log(&self, program: &Self::Program) -> String;

    /// Returns `None` if the program has no active uniform with that name.
    fn uniform_location(&self, program: &Self::Program, name: &str)
        -> Option<Self::UniformLocation>;
    /// Returns `None` if the program has no active attribute with that name.
    fn attrib_location(&self, program: &Self::Program, name: &str) -> Option<u32>;
    fn use_program(&self, program: &Self::Program);

    fn create_buffer(&self) -> Option<Self::Buffer>;
    fn bind_array_buffer(&self, buffer: &Self::Buffer);
    /// Uploads `data` into the currently bound array buffer.
    fn buffer_data_f32(&self, data: &[f32], usage: BufferUsage);
    fn enable_vertex_attrib_array(&self, index: u32);
    /// Describes a float attribute in the currently bound array buffer.
    /// `stride` and `offset` are in bytes.
    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        normalized: bool,
        stride: i32,
        offset: i32,
    );

    fn uniform1f(&self, location: &Self::UniformLocation, x: f32);
    fn uniform2f(&self, location: &Self::UniformLocation, x: f32, y: f32);
    fn uniform3f(&self, location: &Self::UniformLocation, x: f32, y: f32, z: f32);
    fn uniform4f(&self, location: &Self::UniformLocation, x: f32, y: f32, z: f32, w: f32);
    fn uniform1i(&self, location: &Self::UniformLocation, x: i32);
    fn uniform_matrix4fv(&self, location: &Self::UniformLocation, transpose: bool, data: &[f32; 16]);

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn blend_func(&self, src: BlendFactor, dst: BlendFactor);
    fn enable(&self, flag: GlFlag);
    fn disable(&self, flag: GlFlag);
    fn draw_arrays(&self, primitive: Primitive, first: i32, count: i32);

    fn delete_program(&self, program: &Self::Program);
    fn delete_shader(&self, shader: &Self::Shader);
    fn delete_buffer(&self, buffer: &Self::Buffer);
}
