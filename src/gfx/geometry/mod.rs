//! # Procedural Geometry Generation
//!
//! CPU-side vertex data and a few procedurally generated primitives, so
//! scenes can be built without external model files.
//!
//! ## Usage
//!
//! ```rust
//! use model_transform::gfx::geometry::{generate_cube, generate_plane, generate_sphere};
//!
//! let cube = generate_cube();
//! let sphere = generate_sphere(32, 16);
//! let floor = generate_plane(10.0, 10.0, 4, 4);
//! assert_eq!(cube.triangle_count(), 12);
//! ```

pub mod primitives;

pub use primitives::*;

use crate::gfx::error::{GfxError, Result};

/// Vertex attributes stored as separate arrays, ready for upload
///
/// `normals` and `tex_coords` are either empty or exactly as long as
/// `positions`. An empty `indices` means the geometry is drawn unindexed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub positions: Vec<[f32; 3]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Texture coordinates (u, v)
    pub tex_coords: Vec<[f32; 2]>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
}

impl GeometryData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles, assuming a triangle list
    pub fn triangle_count(&self) -> usize {
        if self.indices.is_empty() {
            self.positions.len() / 3
        } else {
            self.indices.len() / 3
        }
    }

    pub fn is_indexed(&self) -> bool {
        !self.indices.is_empty()
    }

    /// Checks attribute lengths and index range
    pub fn validate(&self) -> Result<()> {
        let vertex_count = self.positions.len();
        if vertex_count == 0 {
            return Err(GfxError::EmptyGeometry);
        }

        if !self.normals.is_empty() && self.normals.len() != vertex_count {
            return Err(GfxError::AttributeMismatch {
                attribute: "normals",
                expected: vertex_count,
                actual: self.normals.len(),
            });
        }

        if !self.tex_coords.is_empty() && self.tex_coords.len() != vertex_count {
            return Err(GfxError::AttributeMismatch {
                attribute: "tex_coords",
                expected: vertex_count,
                actual: self.tex_coords.len(),
            });
        }

        if let Some(&index) = self.indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(GfxError::IndexOutOfRange {
                index,
                vertex_count,
            });
        }

        Ok(())
    }

    /// Expands indexed geometry into a flat vertex list with no indices
    pub fn unindexed(&self) -> Self {
        if self.indices.is_empty() {
            return self.clone();
        }

        let pick = |i: &u32| *i as usize;
        Self {
            positions: self.indices.iter().map(|i| self.positions[pick(i)]).collect(),
            normals: if self.normals.is_empty() {
                Vec::new()
            } else {
                self.indices.iter().map(|i| self.normals[pick(i)]).collect()
            },
            tex_coords: if self.tex_coords.is_empty() {
                Vec::new()
            } else {
                self.indices.iter().map(|i| self.tex_coords[pick(i)]).collect()
            },
            indices: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_mismatched_normals() {
        let mut data = generate_cube();
        data.normals.pop();
        assert!(matches!(
            data.validate(),
            Err(GfxError::AttributeMismatch { attribute: "normals", expected: 24, actual: 23 })
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_range_index() {
        let mut data = generate_plane(1.0, 1.0, 1, 1);
        data.indices.push(4);
        assert!(matches!(
            data.validate(),
            Err(GfxError::IndexOutOfRange { index: 4, vertex_count: 4 })
        ));
    }

    #[test]
    fn test_validate_empty() {
        assert!(matches!(GeometryData::new().validate(), Err(GfxError::EmptyGeometry)));
    }

    #[test]
    fn test_unindexed_expands_triangles() {
        let plane = generate_plane(1.0, 1.0, 1, 1);
        let flat = plane.unindexed();

        assert!(!flat.is_indexed());
        assert_eq!(flat.vertex_count(), 6);
        assert_eq!(flat.triangle_count(), 2);
        assert_eq!(flat.positions[3], plane.positions[plane.indices[3] as usize]);
        assert!(flat.validate().is_ok());
    }
}
