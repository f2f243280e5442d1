//! # Scene Objects
//!
//! Renderable objects and the geometry descriptors they draw.
//!
//! ## Key Components
//!
//! - [`ModelTransform`] - A mesh and material placed in the world by position,
//!   rotation and scale, able to draw itself through a graphics context
//! - [`Mesh`] - Buffer handles and counts for one piece of geometry
//! - [`Scene`] - Ordered list of objects drawn with shared camera and lighting
//!
//! Meshes and materials are shared between objects through `Rc`; an object
//! never mutates or releases them.

pub mod mesh;
pub mod model_transform;
pub mod scene;

// Re-export main types
pub use mesh::{IndexBinding, Mesh};
pub use model_transform::ModelTransform;
pub use scene::Scene;
