//! Renders a fragment shader over a whole canvas with WebGL.
//!
//! A `ShaderSurface` compiles a vertex/fragment shader pair, binds a full-screen quad and
//! updates the `iTime` and `iResolution` uniforms (plus any custom uniforms) each time a
//! frame is rendered. Driving frames is left to the host, or to `FrameLoop`.

#![deny(bare_trait_objects)]

mod backend;
mod context;
mod error;
mod frame_loop;
mod options;
mod program;
mod quad;
mod shader_surface;
pub mod shaders;
mod surface;
pub mod uniforms;

pub use crate::backend::*;
pub use crate::context::*;
pub use crate::error::*;
pub use crate::frame_loop::*;
pub use crate::options::*;
pub use crate::program::*;
pub use crate::quad::*;
pub use crate::shader_surface::*;
pub use crate::surface::*;
pub use uniforms::{UniformCallback, UniformCallbacks, UniformTable, UniformValue};
