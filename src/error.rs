use thiserror::Error;

use crate::backend::ShaderStage;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while setting up a `ShaderSurface` or driving it from the host.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to initialize WebGL")]
    ContextUnavailable,
    #[error("no canvas element with id `{0}`")]
    CanvasNotFound(String),
    #[error("failed to create shader program")]
    ProgramCreationFailed,
    #[error("failed to create {stage} shader object")]
    ShaderCreationFailed { stage: ShaderStage },
    /// `log` is the compiler's diagnostic text, unmodified.
    #[error("failed to compile {stage} shader:\n{log}")]
    ShaderCompile { stage: ShaderStage, log: String },
    #[error("failed to link shader program:\n{log}")]
    ProgramLink { log: String },
    #[error("failed to create vertex buffer")]
    BufferCreationFailed,
    #[error("no global `window` available")]
    WindowUnavailable,
    #[error("requestAnimationFrame failed: {0}")]
    AnimationFrame(String),
}
