//! Mesh descriptors
//!
//! A [`Mesh`] does not own vertex data; it records the buffer handles and
//! counts a draw call needs. Buffers are created once through
//! [`Mesh::upload`] (or elsewhere) and shared by every object drawing the mesh.

use crate::gfx::{
    error::Result,
    geometry::GeometryData,
    rendering::context::{BufferHandle, BufferTarget, DrawMode, GraphicsContext, IndexType},
};

/// Index buffer used for indexed draws
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexBinding {
    pub buffer: BufferHandle,
    pub count: u32,
    pub index_type: IndexType,
}

impl IndexBinding {
    /// Size of the index data in bytes
    pub fn byte_len(&self) -> usize {
        self.count as usize * self.index_type.size_in_bytes()
    }
}

/// Geometry descriptor consumed by the render step
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mesh {
    pub draw_mode: DrawMode,
    pub vertex_count: u32,
    /// Three floats per vertex
    pub position_buffer: BufferHandle,
    /// Three floats per vertex
    pub normal_buffer: Option<BufferHandle>,
    /// Two floats per vertex
    pub texcoord_buffer: Option<BufferHandle>,
    pub index: Option<IndexBinding>,
}

impl Mesh {
    /// Creates an unindexed mesh with only a position buffer
    pub fn new(draw_mode: DrawMode, vertex_count: u32, position_buffer: BufferHandle) -> Self {
        Self {
            draw_mode,
            vertex_count,
            position_buffer,
            normal_buffer: None,
            texcoord_buffer: None,
            index: None,
        }
    }

    /// Builder pattern: Set the normal buffer
    pub fn with_normals(mut self, buffer: BufferHandle) -> Self {
        self.normal_buffer = Some(buffer);
        self
    }

    /// Builder pattern: Set the texture coordinate buffer
    pub fn with_texcoords(mut self, buffer: BufferHandle) -> Self {
        self.texcoord_buffer = Some(buffer);
        self
    }

    /// Builder pattern: Set the index buffer
    ///
    /// A count of zero leaves the mesh unindexed.
    pub fn with_indices(mut self, buffer: BufferHandle, count: u32, index_type: IndexType) -> Self {
        self.index = (count > 0).then_some(IndexBinding {
            buffer,
            count,
            index_type,
        });
        self
    }

    /// Number of indices, 0 for unindexed meshes
    pub fn index_count(&self) -> u32 {
        self.index.map_or(0, |index| index.count)
    }

    /// Validates `geometry` and uploads each attribute into its own buffer
    ///
    /// Indices are stored as `u16` when every index fits, `u32` otherwise.
    ///
    /// # Errors
    /// Geometry validation errors, and anything the context reports while
    /// creating buffers.
    pub fn upload<C>(ctx: &mut C, geometry: &GeometryData, draw_mode: DrawMode) -> Result<Self>
    where
        C: GraphicsContext + ?Sized,
    {
        geometry.validate()?;

        let position_buffer = ctx.create_buffer(
            BufferTarget::Array,
            bytemuck::cast_slice(&geometry.positions),
        )?;
        let mut mesh = Mesh::new(draw_mode, geometry.vertex_count() as u32, position_buffer);

        if !geometry.normals.is_empty() {
            let buffer =
                ctx.create_buffer(BufferTarget::Array, bytemuck::cast_slice(&geometry.normals))?;
            mesh = mesh.with_normals(buffer);
        }

        if !geometry.tex_coords.is_empty() {
            let buffer = ctx.create_buffer(
                BufferTarget::Array,
                bytemuck::cast_slice(&geometry.tex_coords),
            )?;
            mesh = mesh.with_texcoords(buffer);
        }

        if geometry.is_indexed() {
            let count = geometry.indices.len() as u32;
            let fits_u16 = geometry.indices.iter().all(|&i| i <= u16::MAX as u32);

            mesh = if fits_u16 {
                let narrow: Vec<u16> = geometry.indices.iter().map(|&i| i as u16).collect();
                let buffer =
                    ctx.create_buffer(BufferTarget::ElementArray, bytemuck::cast_slice(&narrow))?;
                mesh.with_indices(buffer, count, IndexType::U16)
            } else {
                let buffer = ctx.create_buffer(
                    BufferTarget::ElementArray,
                    bytemuck::cast_slice(&geometry.indices),
                )?;
                mesh.with_indices(buffer, count, IndexType::U32)
            };
        }

        log::debug!(
            "uploaded mesh: {} vertices, {} indices ({} bytes), {:?}",
            mesh.vertex_count,
            mesh.index_count(),
            mesh.index.map_or(0, |index| index.byte_len()),
            mesh.draw_mode
        );
        Ok(mesh)
    }
}
