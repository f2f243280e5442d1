// src/gfx/resources/mod.rs
//! Shared rendering resources
//!
//! Materials, lighting parameters and the texture registry. All of these are
//! read-only from a renderable object's point of view.

pub mod lighting;
pub mod material;
pub mod texture_cache;

// Re-export main types
pub use lighting::LightingData;
pub use material::{Material, TextureKey};
pub use texture_cache::TextureCache;
