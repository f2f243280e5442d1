//! # Prelude
//!
//! Commonly used types in one import:
//!
//! ```rust
//! use model_transform::prelude::*;
//! ```

// Re-export scene types
pub use crate::gfx::scene::{Mesh, ModelTransform, Scene};

// Re-export rendering types
pub use crate::gfx::rendering::{
    DrawMode, GraphicsContext, RecordingContext, ShaderBindingNames, ShaderProgram,
};

// Re-export resources and camera
pub use crate::gfx::camera::{Camera, OrbitCamera};
pub use crate::gfx::geometry::{generate_cube, generate_plane, generate_sphere, GeometryData};
pub use crate::gfx::resources::{LightingData, Material, TextureCache};

// Re-export errors and logging
pub use crate::gfx::error::GfxError;
pub use crate::logging::{init_logging, LoggingConfig};
