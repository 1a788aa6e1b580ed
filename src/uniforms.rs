use cgmath::*;
use log::*;

use crate::backend::*;

/// Elapsed time in seconds.
pub const TIME_UNIFORM: &str = "iTime";
/// Surface size in pixels.
pub const RESOLUTION_UNIFORM: &str = "iResolution";
/// The uniforms every `ShaderSurface` updates itself.
pub const DEFAULT_UNIFORMS: [&str; 2] = [TIME_UNIFORM, RESOLUTION_UNIFORM];

/// A value that can be written to a uniform.
///
/// Example usage in a uniform callback:
/// ```ignore
/// let callbacks = UniformCallbacks::new().with("tint", |gl, loc, _time| {
///     vec3(1.0f32, 0.5, 0.0).set(gl, loc);
/// });
/// ```
pub trait UniformValue {
    fn set<B: Backend>(&self, backend: &B, location: &B::UniformLocation);
}

impl UniformValue for f32 {
    fn set<B: Backend>(&self, backend: &B, location: &B::UniformLocation) {
        backend.uniform1f(location, *self);
    }
}

impl UniformValue for i32 {
    fn set<B: Backend>(&self, backend: &B, location: &B::UniformLocation) {
        backend.uniform1i(location, *self);
    }
}

impl UniformValue for [f32; 2] {
    fn set<B: Backend>(&self, backend: &B, location: &B::UniformLocation) {
        backend.uniform2f(location, self[0], self[1]);
    }
}

impl UniformValue for [f32; 3] {
    fn set<B: Backend>(&self, backend: &B, location: &B::UniformLocation) {
        backend.uniform3f(location, self[0], self[1], self[2]);
    }
}

impl UniformValue for [f32; 4] {
    fn set<B: Backend>(&self, backend: &B, location: &B::UniformLocation) {
        backend.uniform4f(location, self[0], self[1], self[2], self[3]);
    }
}

impl UniformValue for Vector2<f32> {
    fn set<B: Backend>(&self, backend: &B, location: &B::UniformLocation) {
        backend.uniform2f(location, self.x, self.y);
    }
}

impl UniformValue for Vector3<f32> {
    fn set<B: Backend>(&self, backend: &B, location: &B::UniformLocation) {
        backend.uniform3f(location, self.x, self.y, self.z);
    }
}

impl UniformValue for Vector4<f32> {
    fn set<B: Backend>(&self, backend: &B, location: &B::UniformLocation) {
        backend.uniform4f(location, self.x, self.y, self.z, self.w);
    }
}

impl UniformValue for Matrix4<f32> {
    fn set<B: Backend>(&self, backend: &B, location: &B::UniformLocation) {
        // Matrix4 is column-major, which is what GL expects untransposed
        let data: &[f32; 16] = self.as_ref();
        backend.uniform_matrix4fv(location, false, data);
    }
}

/// Writes a uniform's value for the current frame.
///
/// Called with the rendering context, the uniform's location, and the frame
/// timestamp in milliseconds (`None` if the frame was rendered without one).
pub type UniformCallback<B> = Box<dyn Fn(&B, &<B as Backend>::UniformLocation, Option<f64>)>;

/// Uniform callbacks keyed by uniform name, kept in insertion order.
pub struct UniformCallbacks<B: Backend> {
    entries: Vec<(String, UniformCallback<B>)>,
}

impl<B: Backend> Default for UniformCallbacks<B> {
    fn default() -> Self {
        UniformCallbacks { entries: vec![] }
    }
}

impl<B: Backend> UniformCallbacks<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the callback for `name`. Replacing an existing callback keeps its position.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        callback: impl Fn(&B, &B::UniformLocation, Option<f64>) + 'static,
    ) {
        let name = name.into();
        let callback: UniformCallback<B> = Box::new(callback);
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = callback,
            None => self.entries.push((name, callback)),
        }
    }

    /// Like `insert`, but by value so it can be chained.
    pub fn with(
        mut self,
        name: impl Into<String>,
        callback: impl Fn(&B, &B::UniformLocation, Option<f64>) + 'static,
    ) -> Self {
        self.insert(name, callback);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &UniformCallback<B>)> {
        self.entries.iter().map(|(name, callback)| (name.as_str(), callback))
    }
}

/// Uniform locations for a linked program, resolved once by name.
///
/// A name whose uniform isn't active in the program still has an entry, with no location.
pub struct UniformTable<B: Backend> {
    entries: Vec<(String, Option<B::UniformLocation>)>,
}

impl<B: Backend> UniformTable<B> {
    pub fn resolve<'a>(
        backend: &B,
        program: &B::Program,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut entries: Vec<(String, Option<B::UniformLocation>)> = vec![];
        for name in names {
            if entries.iter().any(|(existing, _)| existing == name) {
                continue;
            }
            let location = backend.uniform_location(program, name);
            if location.is_none() && !DEFAULT_UNIFORMS.contains(&name) {
                warn!("Uniform `{}` isn't active in the shader program; updates will be skipped", name);
            }
            entries.push((name.to_string(), location));
        }
        debug!(
            "Resolved {} uniforms ({} bound)",
            entries.len(),
            entries.iter().filter(|(_, location)| location.is_some()).count()
        );
        UniformTable { entries }
    }

    /// Returns the location of the uniform, if it's bound.
    pub fn get(&self, name: &str) -> Option<&B::UniformLocation> {
        self.entries.iter().find(|(existing, _)| existing == name).and_then(|(_, loc)| loc.as_ref())
    }

    /// Returns whether a location was looked up for `name`, bound or not.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(existing, _)| existing == name)
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Writes `value` to the uniform. Does nothing if it isn't bound.
    pub fn set(&self, backend: &B, name: &str, value: &impl UniformValue) {
        if let Some(location) = self.get(name) {
            value.set(backend, location);
        }
    }
}
