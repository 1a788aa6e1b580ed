//! A recording `Backend` that "compiles" GLSL just far enough to know which
//! uniforms and attributes a program declares.

#![allow(dead_code)]

use cgmath::*;
use fragment_canvas::*;
use std::cell::RefCell;
use std::rc::Rc;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    CreateProgram,
    CreateShader(ShaderStage),
    CompileShader(ShaderStage),
    AttachShader(ShaderStage),
    LinkProgram,
    UseProgram,
    CreateBuffer,
    BindArrayBuffer,
    BufferData(Vec<f32>, BufferUsage),
    EnableVertexAttribArray(u32),
    VertexAttribPointer { index: u32, size: i32, normalized: bool, stride: i32, offset: i32 },
    Uniform(String, Vec<f32>),
    Viewport(i32, i32, i32, i32),
    BlendFunc(BlendFactor, BlendFactor),
    Enable(GlFlag),
    Disable(GlFlag),
    DrawArrays(Primitive, i32, i32),
    DeleteProgram,
    DeleteShader(ShaderStage),
    DeleteBuffer,
}

struct ShaderState {
    stage: ShaderStage,
    source: String,
    compiled: bool,
    log: String,
}

#[derive(Default)]
struct ProgramState {
    shaders: Vec<usize>,
    linked: bool,
    log: String,
    uniforms: Vec<String>,
    attributes: Vec<String>,
}

#[derive(Default)]
pub struct MockState {
    pub calls: Vec<Call>,
    pub refuse_program: bool,
    pub refuse_shader: Option<ShaderStage>,
    pub refuse_buffer: bool,
    pub link_error: Option<String>,
    shaders: Vec<ShaderState>,
    programs: Vec<ProgramState>,
}

#[derive(Clone, Default)]
pub struct MockBackend {
    pub state: Rc<RefCell<MockState>>,
}

#[derive(Debug, PartialEq)]
pub struct MockProgram(usize);
#[derive(Debug, PartialEq)]
pub struct MockShader(usize);
#[derive(Debug, PartialEq)]
pub struct MockBuffer;
#[derive(Clone, Debug, PartialEq)]
pub struct MockLocation(pub String);

impl MockBackend {
    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    pub fn draw_count(&self) -> usize {
        self.state.borrow().calls.iter().filter(|call| matches!(call, Call::DrawArrays(..))).count()
    }

    /// The last value written to the uniform, if any.
    pub fn uniform(&self, name: &str) -> Option<Vec<f32>> {
        self.state.borrow().calls.iter().rev().find_map(|call| match call {
            Call::Uniform(uniform, values) if uniform == name => Some(values.clone()),
            _ => None,
        })
    }

    fn record(&self, call: Call) {
        self.state.borrow_mut().calls.push(call);
    }

    fn stage(&self, shader: &MockShader) -> ShaderStage {
        self.state.borrow().shaders[shader.0].stage
    }
}

/// Returns the names declared with `keyword` (`uniform`, `attribute`, ...).
fn declarations(source: &str, keyword: &str) -> Vec<String> {
    source
        .lines()
        .filter_map(|line| {
            let mut tokens = line.split_whitespace();
            if tokens.next()? != keyword {
                return None;
            }
            let _ty = tokens.next()?;
            let name = tokens.next()?.trim_end_matches(';');
            Some(name.split('[').next().unwrap_or(name).to_string())
        })
        .collect()
}

fn check_syntax(source: &str) -> std::result::Result<(), String> {
    let mut depth = 0i32;
    for (number, line) in source.lines().enumerate() {
        if line.trim_start().starts_with("#error") {
            return Err(format!("ERROR: 0:{}: '#error' : {}", number + 1, line.trim()));
        }
        for c in line.chars() {
            match c {
                '{' => depth += 1,
                '}' => depth -= 1,
                _ => {}
            }
            if depth < 0 {
                return Err(format!("ERROR: 0:{}: '}}' : syntax error", number + 1));
            }
        }
    }
    if depth != 0 {
        return Err("ERROR: 0:0: '' : syntax error: unexpected end of file".to_string());
    }
    Ok(())
}

impl Backend for MockBackend {
    type Program = MockProgram;
    type Shader = MockShader;
    type Buffer = MockBuffer;
    type UniformLocation = MockLocation;

    fn create_program(&self) -> Option<MockProgram> {
        self.record(Call::CreateProgram);
        let mut state = self.state.borrow_mut();
        if state.refuse_program {
            return None;
        }
        state.programs.push(ProgramState::default());
        Some(MockProgram(state.programs.len() - 1))
    }

    fn create_shader(&self, stage: ShaderStage) -> Option<MockShader> {
        self.record(Call::CreateShader(stage));
        let mut state = self.state.borrow_mut();
        if state.refuse_shader == Some(stage) {
            return None;
        }
        state.shaders.push(ShaderState {
            stage,
            source: String::new(),
            compiled: false,
            log: String::new(),
        });
        Some(MockShader(state.shaders.len() - 1))
    }

    fn shader_source(&self, shader: &MockShader, source: &str) {
        self.state.borrow_mut().shaders[shader.0].source = source.to_string();
    }

    fn compile_shader(&self, shader: &MockShader) {
        self.record(Call::CompileShader(self.stage(shader)));
        let mut state = self.state.borrow_mut();
        let shader = &mut state.shaders[shader.0];
        match check_syntax(&shader.source) {
            Ok(()) => shader.compiled = true,
            Err(log) => shader.log = log,
        }
    }

    fn shader_compile_status(&self, shader: &MockShader) -> bool {
        self.state.borrow().shaders[shader.0].compiled
    }

    fn shader_info_log(&self, shader: &MockShader) -> String {
        self.state.borrow().shaders[shader.0].log.clone()
    }

    fn attach_shader(&self, program: &MockProgram, shader: &MockShader) {
        self.record(Call::AttachShader(self.stage(shader)));
        self.state.borrow_mut().programs[program.0].shaders.push(shader.0);
    }

    fn link_program(&self, program: &MockProgram) {
        self.record(Call::LinkProgram);
        let mut state = self.state.borrow_mut();
        if let Some(log) = state.link_error.clone() {
            state.programs[program.0].log = log;
            return;
        }

        let mut uniforms = vec![];
        let mut attributes = vec![];
        let mut stages = vec![];
        for &index in &state.programs[program.0].shaders {
            let shader = &state.shaders[index];
            if !shader.compiled {
                continue;
            }
            stages.push(shader.stage);
            for name in declarations(&shader.source, "uniform") {
                if !uniforms.contains(&name) {
                    uniforms.push(name);
                }
            }
            if shader.stage == ShaderStage::Vertex {
                attributes.extend(declarations(&shader.source, "attribute"));
            }
        }

        let program = &mut state.programs[program.0];
        if stages.contains(&ShaderStage::Vertex) && stages.contains(&ShaderStage::Fragment) {
            program.linked = true;
            program.uniforms = uniforms;
            program.attributes = attributes;
        } else {
            program.log = "error: program is missing a compiled shader stage".to_string();
        }
    }

    fn program_link_status(&self, program: &MockProgram) -> bool {
        self.state.borrow().programs[program.0].linked
    }

    fn program_info_log(&self, program: &MockProgram) -> String {
        self.state.borrow().programs[program.0].log.clone()
    }

    fn uniform_location(&self, program: &MockProgram, name: &str) -> Option<MockLocation> {
        let state = self.state.borrow();
        let program = &state.programs[program.0];
        if program.uniforms.iter().any(|uniform| uniform == name) {
            Some(MockLocation(name.to_string()))
        } else {
            None
        }
    }

    fn attrib_location(&self, program: &MockProgram, name: &str) -> Option<u32> {
        let state = self.state.borrow();
        state.programs[program.0]
            .attributes
            .iter()
            .position(|attribute| attribute == name)
            .map(|index| index as u32)
    }

    fn use_program(&self, _program: &MockProgram) {
        self.record(Call::UseProgram);
    }

    fn create_buffer(&self) -> Option<MockBuffer> {
        self.record(Call::CreateBuffer);
        if self.state.borrow().refuse_buffer {
            None
        } else {
            Some(MockBuffer)
        }
    }

    fn bind_array_buffer(&self, _buffer: &MockBuffer) {
        self.record(Call::BindArrayBuffer);
    }

    fn buffer_data_f32(&self, data: &[f32], usage: BufferUsage) {
        self.record(Call::BufferData(data.to_vec(), usage));
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(Call::EnableVertexAttribArray(index));
    }

    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        self.record(Call::VertexAttribPointer { index, size, normalized, stride, offset });
    }

    fn uniform1f(&self, location: &MockLocation, x: f32) {
        self.record(Call::Uniform(location.0.clone(), vec![x]));
    }

    fn uniform2f(&self, location: &MockLocation, x: f32, y: f32) {
        self.record(Call::Uniform(location.0.clone(), vec![x, y]));
    }

    fn uniform3f(&self, location: &MockLocation, x: f32, y: f32, z: f32) {
        self.record(Call::Uniform(location.0.clone(), vec![x, y, z]));
    }

    fn uniform4f(&self, location: &MockLocation, x: f32, y: f32, z: f32, w: f32) {
        self.record(Call::Uniform(location.0.clone(), vec![x, y, z, w]));
    }

    fn uniform1i(&self, location: &MockLocation, x: i32) {
        self.record(Call::Uniform(location.0.clone(), vec![x as f32]));
    }

    fn uniform_matrix4fv(&self, location: &MockLocation, _transpose: bool, data: &[f32; 16]) {
        self.record(Call::Uniform(location.0.clone(), data.to_vec()));
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(Call::Viewport(x, y, width, height));
    }

    fn blend_func(&self, src: BlendFactor, dst: BlendFactor) {
        self.record(Call::BlendFunc(src, dst));
    }

    fn enable(&self, flag: GlFlag) {
        self.record(Call::Enable(flag));
    }

    fn disable(&self, flag: GlFlag) {
        self.record(Call::Disable(flag));
    }

    fn draw_arrays(&self, primitive: Primitive, first: i32, count: i32) {
        self.record(Call::DrawArrays(primitive, first, count));
    }

    fn delete_program(&self, _program: &MockProgram) {
        self.record(Call::DeleteProgram);
    }

    fn delete_shader(&self, shader: &MockShader) {
        self.record(Call::DeleteShader(self.stage(shader)));
    }

    fn delete_buffer(&self, _buffer: &MockBuffer) {
        self.record(Call::DeleteBuffer);
    }
}

pub struct MockSurface {
    pub backend: MockBackend,
    pub size: Vector2<u32>,
    pub has_context: bool,
}

impl MockSurface {
    pub fn new(width: u32, height: u32) -> Self {
        MockSurface { backend: MockBackend::default(), size: vec2(width, height), has_context: true }
    }
}

impl Surface for MockSurface {
    type Backend = MockBackend;

    fn context(&self) -> fragment_canvas::Result<MockBackend> {
        if self.has_context {
            Ok(self.backend.clone())
        } else {
            Err(Error::ContextUnavailable)
        }
    }

    fn size(&self) -> Vector2<u32> {
        self.size
    }
}
