//! # Graphics Module
//!
//! Everything needed to place objects in a 3D scene and draw them through an
//! immediate-mode graphics context.
//!
//! ## Architecture Overview
//!
//! - **Scene Objects** ([`scene`]) - [`ModelTransform`] composes
//!   `T * Ry * Rx * Rz * S` and drives the uniform/attribute/draw sequence
//! - **Rendering** ([`rendering`]) - [`GraphicsContext`] trait, shader
//!   descriptors with optional slots, and a command-recording context
//! - **Resources** ([`resources`]) - Materials, lighting and the texture cache
//! - **Camera** ([`camera`]) - Camera trait and an orbit camera
//! - **Geometry** ([`geometry`]) - Procedural primitives for mesh upload
//! - **Math** ([`math`]) - Degree-based rotations and normal matrices on cgmath
//!
//! ## Usage
//!
//! ```rust
//! use std::rc::Rc;
//! use cgmath::Vector3;
//! use model_transform::gfx::{
//!     camera::OrbitCamera,
//!     geometry::generate_cube,
//!     rendering::{DrawMode, RecordingContext, ShaderBindingNames, ShaderProgram},
//!     resources::{LightingData, Material, TextureCache},
//!     scene::{Mesh, ModelTransform},
//! };
//!
//! # fn main() -> model_transform::gfx::error::Result<()> {
//! let mut ctx = RecordingContext::new();
//! let program = ctx.declare_program(
//!     &["aPosition", "aNormal"],
//!     &["uModelMatrix", "uViewMatrix", "uProjectionMatrix"],
//! );
//! let shader = ShaderProgram::resolve(&ctx, program, &ShaderBindingNames::default());
//!
//! let mesh = Rc::new(Mesh::upload(&mut ctx, &generate_cube(), DrawMode::Triangles)?);
//! let mut cube = ModelTransform::new(mesh, Rc::new(Material::default()), None, None, None);
//!
//! let camera = OrbitCamera::new(5.0, 0.3, 0.0, Vector3::new(0.0, 0.0, 0.0), 16.0 / 9.0);
//! cube.rotation.y = 45.0;
//! cube.update()
//!     .render(&mut ctx, &shader, &camera, &LightingData::default(), &TextureCache::new());
//!
//! assert_eq!(ctx.draw_calls().len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! [`ModelTransform`]: scene::ModelTransform
//! [`GraphicsContext`]: rendering::GraphicsContext

pub mod camera;
pub mod error;
pub mod geometry;
pub mod math;
pub mod rendering;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use error::{GfxError, Result};
pub use rendering::{GraphicsContext, RecordingContext, ShaderProgram};
pub use scene::{Mesh, ModelTransform, Scene};
