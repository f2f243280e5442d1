//! Command-recording graphics context
//!
//! [`RecordingContext`] implements [`GraphicsContext`] without touching a GPU.
//! Every call is appended to a command log that can be inspected afterwards,
//! which makes it usable both as a headless backend and as a test double.

use std::collections::HashMap;

use super::context::{
    AttribLocation, BufferHandle, BufferTarget, DrawMode, GraphicsContext, IndexType,
    ProgramHandle, TextureHandle, UniformLocation, VertexAttribLayout,
};
use crate::gfx::error::{GfxError, Result};

/// Largest texture side accepted by default, matching common GL limits
pub const DEFAULT_MAX_TEXTURE_SIZE: u32 = 16384;

/// One recorded pipeline call
#[derive(Clone, Debug, PartialEq)]
pub enum GlCommand {
    CreateBuffer {
        buffer: BufferHandle,
        target: BufferTarget,
        size: usize,
    },
    CreateTexture {
        texture: TextureHandle,
        width: u32,
        height: u32,
    },
    UseProgram(ProgramHandle),
    BindBuffer(BufferTarget, Option<BufferHandle>),
    EnableVertexAttribArray(AttribLocation),
    VertexAttribPointer(AttribLocation, VertexAttribLayout),
    UniformMatrix4(UniformLocation, [f32; 16]),
    UniformMatrix3(UniformLocation, [f32; 9]),
    Uniform4f(UniformLocation, [f32; 4]),
    Uniform3f(UniformLocation, [f32; 3]),
    Uniform1f(UniformLocation, f32),
    Uniform1i(UniformLocation, i32),
    ActiveTexture(u32),
    BindTexture2d(Option<TextureHandle>),
    DrawArrays {
        mode: DrawMode,
        first: u32,
        count: u32,
    },
    DrawElements {
        mode: DrawMode,
        count: u32,
        index_type: IndexType,
        offset: usize,
    },
}

impl GlCommand {
    /// True for any of the `Uniform*` commands
    pub fn is_uniform_upload(&self) -> bool {
        matches!(
            self,
            GlCommand::UniformMatrix4(..)
                | GlCommand::UniformMatrix3(..)
                | GlCommand::Uniform4f(..)
                | GlCommand::Uniform3f(..)
                | GlCommand::Uniform1f(..)
                | GlCommand::Uniform1i(..)
        )
    }

    pub fn is_draw_call(&self) -> bool {
        matches!(
            self,
            GlCommand::DrawArrays { .. } | GlCommand::DrawElements { .. }
        )
    }

    /// Location targeted by a uniform upload
    pub fn uniform_location(&self) -> Option<UniformLocation> {
        match self {
            GlCommand::UniformMatrix4(loc, _)
            | GlCommand::UniformMatrix3(loc, _)
            | GlCommand::Uniform4f(loc, _)
            | GlCommand::Uniform3f(loc, _)
            | GlCommand::Uniform1f(loc, _)
            | GlCommand::Uniform1i(loc, _) => Some(*loc),
            _ => None,
        }
    }
}

/// Identifiers a program was "linked" with
#[derive(Debug, Default)]
struct ProgramInterface {
    attributes: HashMap<String, AttribLocation>,
    uniforms: HashMap<String, UniformLocation>,
}

/// Headless [`GraphicsContext`] that records calls instead of executing them
///
/// Texture creation fails like a real driver would when a side is zero or
/// larger than the configured maximum texture size.
#[derive(Debug)]
pub struct RecordingContext {
    commands: Vec<GlCommand>,
    programs: HashMap<ProgramHandle, ProgramInterface>,
    next_buffer: u32,
    next_texture: u32,
    next_program: u32,
    max_texture_size: u32,
}

impl Default for RecordingContext {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            programs: HashMap::new(),
            next_buffer: 0,
            next_texture: 0,
            next_program: 0,
            max_texture_size: DEFAULT_MAX_TEXTURE_SIZE,
        }
    }
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: Set the largest accepted texture side
    pub fn with_max_texture_size(mut self, size: u32) -> Self {
        self.max_texture_size = size;
        self
    }

    /// Registers a program declaring the given attribute and uniform identifiers
    ///
    /// Locations are assigned in declaration order, starting at 0 for
    /// attributes and for uniforms independently.
    pub fn declare_program(&mut self, attributes: &[&str], uniforms: &[&str]) -> ProgramHandle {
        self.next_program += 1;
        let handle = ProgramHandle(self.next_program);

        let interface = ProgramInterface {
            attributes: attributes
                .iter()
                .enumerate()
                .map(|(i, name)| (name.to_string(), AttribLocation(i as u32)))
                .collect(),
            uniforms: uniforms
                .iter()
                .enumerate()
                .map(|(i, name)| (name.to_string(), UniformLocation(i as u32)))
                .collect(),
        };
        self.programs.insert(handle, interface);

        log::debug!(
            "declared program {:?} with {} attributes and {} uniforms",
            handle,
            attributes.len(),
            uniforms.len()
        );
        handle
    }

    /// All commands recorded so far, oldest first
    pub fn commands(&self) -> &[GlCommand] {
        &self.commands
    }

    /// Recorded draw calls
    pub fn draw_calls(&self) -> Vec<&GlCommand> {
        self.commands.iter().filter(|c| c.is_draw_call()).collect()
    }

    /// Recorded uniform uploads
    pub fn uniform_uploads(&self) -> Vec<&GlCommand> {
        self.commands
            .iter()
            .filter(|c| c.is_uniform_upload())
            .collect()
    }

    /// Drops the command log, keeping programs and handle counters
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    fn record(&mut self, command: GlCommand) {
        log::trace!("{:?}", command);
        self.commands.push(command);
    }
}

impl GraphicsContext for RecordingContext {
    fn create_buffer(&mut self, target: BufferTarget, data: &[u8]) -> Result<BufferHandle> {
        self.next_buffer += 1;
        let buffer = BufferHandle(self.next_buffer);
        self.record(GlCommand::CreateBuffer {
            buffer,
            target,
            size: data.len(),
        });
        Ok(buffer)
    }

    fn create_texture_rgba8(
        &mut self,
        width: u32,
        height: u32,
        _pixels: &[u8],
    ) -> Result<TextureHandle> {
        if width == 0 || height == 0 || width.max(height) > self.max_texture_size {
            return Err(GfxError::Backend(format!(
                "texture size {}x{} outside 1..={}",
                width, height, self.max_texture_size
            )));
        }

        self.next_texture += 1;
        let texture = TextureHandle(self.next_texture);
        self.record(GlCommand::CreateTexture {
            texture,
            width,
            height,
        });
        Ok(texture)
    }

    fn attrib_location(&self, program: ProgramHandle, name: &str) -> Option<AttribLocation> {
        self.programs
            .get(&program)
            .and_then(|p| p.attributes.get(name).copied())
    }

    fn uniform_location(&self, program: ProgramHandle, name: &str) -> Option<UniformLocation> {
        self.programs
            .get(&program)
            .and_then(|p| p.uniforms.get(name).copied())
    }

    fn use_program(&mut self, program: ProgramHandle) {
        self.record(GlCommand::UseProgram(program));
    }

    fn bind_buffer(&mut self, target: BufferTarget, buffer: Option<BufferHandle>) {
        self.record(GlCommand::BindBuffer(target, buffer));
    }

    fn enable_vertex_attrib_array(&mut self, location: AttribLocation) {
        self.record(GlCommand::EnableVertexAttribArray(location));
    }

    fn vertex_attrib_pointer(&mut self, location: AttribLocation, layout: VertexAttribLayout) {
        self.record(GlCommand::VertexAttribPointer(location, layout));
    }

    fn uniform_matrix4(&mut self, location: UniformLocation, value: &[f32; 16]) {
        self.record(GlCommand::UniformMatrix4(location, *value));
    }

    fn uniform_matrix3(&mut self, location: UniformLocation, value: &[f32; 9]) {
        self.record(GlCommand::UniformMatrix3(location, *value));
    }

    fn uniform4f(&mut self, location: UniformLocation, value: [f32; 4]) {
        self.record(GlCommand::Uniform4f(location, value));
    }

    fn uniform3f(&mut self, location: UniformLocation, value: [f32; 3]) {
        self.record(GlCommand::Uniform3f(location, value));
    }

    fn uniform1f(&mut self, location: UniformLocation, value: f32) {
        self.record(GlCommand::Uniform1f(location, value));
    }

    fn uniform1i(&mut self, location: UniformLocation, value: i32) {
        self.record(GlCommand::Uniform1i(location, value));
    }

    fn active_texture(&mut self, unit: u32) {
        self.record(GlCommand::ActiveTexture(unit));
    }

    fn bind_texture_2d(&mut self, texture: Option<TextureHandle>) {
        self.record(GlCommand::BindTexture2d(texture));
    }

    fn draw_arrays(&mut self, mode: DrawMode, first: u32, count: u32) {
        self.record(GlCommand::DrawArrays { mode, first, count });
    }

    fn draw_elements(&mut self, mode: DrawMode, count: u32, index_type: IndexType, offset: usize) {
        self.record(GlCommand::DrawElements {
            mode,
            count,
            index_type,
            offset,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_locations_resolve_in_order() {
        let mut ctx = RecordingContext::new();
        let program = ctx.declare_program(&["aPosition", "aNormal"], &["uModelMatrix"]);

        assert_eq!(ctx.attrib_location(program, "aPosition"), Some(AttribLocation(0)));
        assert_eq!(ctx.attrib_location(program, "aNormal"), Some(AttribLocation(1)));
        assert_eq!(ctx.attrib_location(program, "aTexcoord"), None);
        assert_eq!(ctx.uniform_location(program, "uModelMatrix"), Some(UniformLocation(0)));
        assert_eq!(ctx.uniform_location(ProgramHandle(99), "uModelMatrix"), None);
    }

    #[test]
    fn test_handles_are_sequential_and_logged() {
        let mut ctx = RecordingContext::new();
        let a = ctx.create_buffer(BufferTarget::Array, &[0; 12]).unwrap();
        let b = ctx.create_buffer(BufferTarget::ElementArray, &[0; 6]).unwrap();
        assert_eq!(a, BufferHandle(1));
        assert_eq!(b, BufferHandle(2));
        assert_eq!(
            ctx.commands()[1],
            GlCommand::CreateBuffer {
                buffer: b,
                target: BufferTarget::ElementArray,
                size: 6
            }
        );
    }

    #[test]
    fn test_texture_size_limits() {
        let mut ctx = RecordingContext::new().with_max_texture_size(4);

        assert_eq!(ctx.create_texture_rgba8(4, 2, &[0; 32]).unwrap(), TextureHandle(1));
        assert!(matches!(
            ctx.create_texture_rgba8(8, 2, &[0; 64]),
            Err(GfxError::Backend(_))
        ));
        assert!(matches!(
            ctx.create_texture_rgba8(0, 2, &[]),
            Err(GfxError::Backend(_))
        ));
        // failed creations are not recorded and do not consume handles
        assert_eq!(ctx.commands().len(), 1);
        assert_eq!(ctx.create_texture_rgba8(1, 1, &[0; 4]).unwrap(), TextureHandle(2));
    }

    #[test]
    fn test_filters_and_clear() {
        let mut ctx = RecordingContext::new();
        ctx.use_program(ProgramHandle(1));
        ctx.uniform1f(UniformLocation(3), 16.0);
        ctx.draw_arrays(DrawMode::Lines, 0, 2);

        assert_eq!(ctx.uniform_uploads().len(), 1);
        assert_eq!(ctx.uniform_uploads()[0].uniform_location(), Some(UniformLocation(3)));
        assert_eq!(ctx.draw_calls().len(), 1);

        ctx.clear();
        assert!(ctx.commands().is_empty());
    }
}
