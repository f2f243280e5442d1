// src/lib.rs
//! Model Transform
//!
//! Renderable scene objects: a mesh and material placed in the world by
//! position, rotation and scale, drawn through an explicit graphics context.

pub mod gfx;
pub mod logging;
pub mod prelude;

// Re-export main types for convenience
pub use gfx::scene::ModelTransform;
pub use logging::{init_logging, LoggingConfig};
