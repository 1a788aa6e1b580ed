use serde::*;

use crate::backend::*;
use crate::shaders::*;
use crate::uniforms::*;

/// Source and destination factors for blending.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BlendFunc {
    pub src: BlendFactor,
    pub dst: BlendFactor,
}

impl BlendFunc {
    pub fn new(src: BlendFactor, dst: BlendFactor) -> Self {
        BlendFunc { src, dst }
    }
}

impl Default for BlendFunc {
    /// Additive blending weighted by the fragment's alpha.
    fn default() -> Self {
        BlendFunc::new(BlendFactor::SrcAlpha, BlendFactor::One)
    }
}

/// Options for a `ShaderSurface`.
///
/// Override only some fields with struct update syntax:
/// ```ignore
/// let options = Options { auto_render: false, ..Options::default() };
/// ```
pub struct Options<B: Backend> {
    pub fragment_shader: String,
    /// You probably don't need to change this; the default passes the quad's
    /// `position` attribute through unchanged.
    pub vertex_shader: String,
    /// Custom uniforms, set each frame by their callback.
    pub uniforms: UniformCallbacks<B>,
    /// Whether to render one frame as soon as the surface is created.
    pub auto_render: bool,
    pub blend_func: BlendFunc,
}

impl<B: Backend> Default for Options<B> {
    fn default() -> Self {
        Options {
            fragment_shader: DEFAULT_FRAGMENT_SHADER.to_string(),
            vertex_shader: DEFAULT_VERTEX_SHADER.to_string(),
            uniforms: UniformCallbacks::new(),
            auto_render: true,
            blend_func: BlendFunc::default(),
        }
    }
}

/// The data-only part of `Options`, for hosts that pass configuration as JSON.
///
/// Fields that are present replace the corresponding option wholesale.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OptionsOverlay {
    #[serde(default)]
    pub fragment_shader: Option<String>,
    #[serde(default)]
    pub vertex_shader: Option<String>,
    #[serde(default)]
    pub auto_render: Option<bool>,
    #[serde(default)]
    pub blend_func: Option<BlendFunc>,
}

impl OptionsOverlay {
    pub fn apply<B: Backend>(self, mut options: Options<B>) -> Options<B> {
        if let Some(fragment_shader) = self.fragment_shader {
            options.fragment_shader = fragment_shader;
        }
        if let Some(vertex_shader) = self.vertex_shader {
            options.vertex_shader = vertex_shader;
        }
        if let Some(auto_render) = self.auto_render {
            options.auto_render = auto_render;
        }
        if let Some(blend_func) = self.blend_func {
            options.blend_func = blend_func;
        }
        options
    }
}
