use log::*;

use crate::backend::*;
use crate::error::*;

/// A linked vertex + fragment shader pair.
///
/// The program doesn't hold on to its context, so it has to be released with
/// `delete`; `ShaderSurface` does this when it's dropped.
pub struct Program<B: Backend> {
    pub(crate) program: B::Program,
    vert_shader: B::Shader,
    frag_shader: B::Shader,
}

impl<B: Backend> Program<B> {
    /// Creates a program, then compiles and attaches the vertex shader followed by the
    /// fragment shader, then links it.
    ///
    /// On failure every object created so far is deleted again.
    pub fn new(backend: &B, vert_shader_source: &str, frag_shader_source: &str) -> Result<Self> {
        let program = backend.create_program().ok_or(Error::ProgramCreationFailed)?;

        let vert_shader = match Self::load_shader(backend, ShaderStage::Vertex, vert_shader_source) {
            Ok(shader) => shader,
            Err(err) => {
                backend.delete_program(&program);
                return Err(err);
            }
        };
        backend.attach_shader(&program, &vert_shader);

        let frag_shader =
            match Self::load_shader(backend, ShaderStage::Fragment, frag_shader_source) {
                Ok(shader) => shader,
                Err(err) => {
                    backend.delete_shader(&vert_shader);
                    backend.delete_program(&program);
                    return Err(err);
                }
            };
        backend.attach_shader(&program, &frag_shader);

        backend.link_program(&program);
        if !backend.program_link_status(&program) {
            let log = backend.program_info_log(&program);
            backend.delete_shader(&vert_shader);
            backend.delete_shader(&frag_shader);
            backend.delete_program(&program);
            return Err(Error::ProgramLink { log });
        }
        debug!("Linked shader program");

        Ok(Program { program, vert_shader, frag_shader })
    }

    fn load_shader(backend: &B, stage: ShaderStage, source: &str) -> Result<B::Shader> {
        let shader = backend.create_shader(stage).ok_or(Error::ShaderCreationFailed { stage })?;
        backend.shader_source(&shader, source);
        backend.compile_shader(&shader);

        if !backend.shader_compile_status(&shader) {
            let log = backend.shader_info_log(&shader);
            backend.delete_shader(&shader);
            return Err(Error::ShaderCompile { stage, log });
        }

        Ok(shader)
    }

    pub(crate) fn bind(&self, backend: &B) {
        backend.use_program(&self.program);
    }

    pub(crate) fn delete(&self, backend: &B) {
        backend.delete_program(&self.program);
        backend.delete_shader(&self.vert_shader);
        backend.delete_shader(&self.frag_shader);
    }
}
