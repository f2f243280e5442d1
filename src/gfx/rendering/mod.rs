// src/gfx/rendering/mod.rs
//! Pipeline context and shader descriptors
//!
//! Handles the boundary between renderable objects and the graphics API.

pub mod context;
pub mod recording;
pub mod shader;

// Re-export main types
pub use context::{
    AttribLocation, BufferHandle, BufferTarget, DrawMode, GraphicsContext, IndexType,
    ProgramHandle, TextureHandle, UniformLocation, VertexAttribLayout,
};
pub use recording::{GlCommand, RecordingContext};
pub use shader::{AttribLocations, ShaderBindingNames, ShaderProgram, UniformLocations};
