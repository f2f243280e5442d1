//! Error types for the fallible parts of the graphics module
//!
//! The per-frame render path never fails: a shader that does not declare a
//! location simply skips that upload. Errors only come out of resource
//! creation (mesh upload, texture loading) and strict registry lookups.

use thiserror::Error;

/// Result alias used throughout [`crate::gfx`]
pub type Result<T> = std::result::Result<T, GfxError>;

#[derive(Debug, Error)]
pub enum GfxError {
    /// A per-vertex attribute array does not match the position count
    #[error("geometry attribute `{attribute}` has {actual} entries, expected {expected}")]
    AttributeMismatch {
        attribute: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An index references a vertex past the end of the position array
    #[error("index {index} is out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    /// Geometry has no vertices at all
    #[error("geometry contains no vertices")]
    EmptyGeometry,

    /// Pixel data length does not match `width * height * 4`
    #[error("texture `{name}` expects {expected} bytes of RGBA8 data, got {actual}")]
    TextureSizeMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// No texture is registered under the requested key
    #[error("unknown texture `{0}`")]
    UnknownTexture(String),

    /// The graphics context refused to create a resource
    #[error("graphics backend error: {0}")]
    Backend(String),
}
