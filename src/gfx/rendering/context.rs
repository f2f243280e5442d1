//! Graphics pipeline context abstraction
//!
//! Every pipeline mutation (program activation, buffer binding, uniform upload,
//! draw submission) goes through a [`GraphicsContext`] passed in explicitly by
//! the caller. Backends wrap a real GL-style API; [`RecordingContext`] keeps a
//! command log instead and serves as the headless backend and test double.
//!
//! [`RecordingContext`]: super::recording::RecordingContext

use crate::gfx::error::Result;

/// Handle to a buffer object owned by the context
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BufferHandle(pub u32);

/// Handle to a linked shader program
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProgramHandle(pub u32);

/// Handle to a 2D texture
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Vertex attribute slot in a program
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AttribLocation(pub u32);

/// Uniform slot in a program
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UniformLocation(pub u32);

/// Primitive topology used by a draw call
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DrawMode {
    Points,
    Lines,
    LineStrip,
    LineLoop,
    #[default]
    Triangles,
    TriangleStrip,
    TriangleFan,
}

/// Element type stored in an index buffer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IndexType {
    #[default]
    U16,
    U32,
}

impl IndexType {
    /// Size of one index in bytes
    pub fn size_in_bytes(self) -> usize {
        match self {
            IndexType::U16 => 2,
            IndexType::U32 => 4,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BufferTarget {
    /// Per-vertex attribute data
    Array,
    /// Index data for indexed draws
    ElementArray,
}

/// Layout passed to `vertex_attrib_pointer`
///
/// Components are always 32-bit floats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexAttribLayout {
    pub components: u32,
    pub normalized: bool,
    pub stride: u32,
    pub offset: usize,
}

impl VertexAttribLayout {
    /// Tightly packed, non-normalized float array starting at offset zero
    pub const fn packed_floats(components: u32) -> Self {
        Self {
            components,
            normalized: false,
            stride: 0,
            offset: 0,
        }
    }
}

/// Immediate-mode graphics pipeline
///
/// The method set mirrors the subset of a GL-style API that a renderable
/// object needs. Uniform setters take locations that were already resolved,
/// so implementations never see an "absent" location.
pub trait GraphicsContext {
    /// Creates a buffer and fills it with `data`
    fn create_buffer(&mut self, target: BufferTarget, data: &[u8]) -> Result<BufferHandle>;

    /// Creates an RGBA8 2D texture
    fn create_texture_rgba8(&mut self, width: u32, height: u32, pixels: &[u8])
        -> Result<TextureHandle>;

    /// Location of a vertex attribute, `None` if the program does not declare it
    fn attrib_location(&self, program: ProgramHandle, name: &str) -> Option<AttribLocation>;

    /// Location of a uniform, `None` if the program does not declare it
    fn uniform_location(&self, program: ProgramHandle, name: &str) -> Option<UniformLocation>;

    fn use_program(&mut self, program: ProgramHandle);

    fn bind_buffer(&mut self, target: BufferTarget, buffer: Option<BufferHandle>);

    fn enable_vertex_attrib_array(&mut self, location: AttribLocation);

    /// Describes the currently bound array buffer as the source of `location`
    fn vertex_attrib_pointer(&mut self, location: AttribLocation, layout: VertexAttribLayout);

    fn uniform_matrix4(&mut self, location: UniformLocation, value: &[f32; 16]);

    fn uniform_matrix3(&mut self, location: UniformLocation, value: &[f32; 9]);

    fn uniform4f(&mut self, location: UniformLocation, value: [f32; 4]);

    fn uniform3f(&mut self, location: UniformLocation, value: [f32; 3]);

    fn uniform1f(&mut self, location: UniformLocation, value: f32);

    fn uniform1i(&mut self, location: UniformLocation, value: i32);

    /// Selects the active texture unit (0-based)
    fn active_texture(&mut self, unit: u32);

    /// Binds a 2D texture to the active unit, `None` unbinds
    fn bind_texture_2d(&mut self, texture: Option<TextureHandle>);

    fn draw_arrays(&mut self, mode: DrawMode, first: u32, count: u32);

    /// Indexed draw from the bound element buffer; `offset` is in bytes
    fn draw_elements(&mut self, mode: DrawMode, count: u32, index_type: IndexType, offset: usize);
}
