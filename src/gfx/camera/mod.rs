//! Camera abstraction
//!
//! Renderable objects only need three things from a camera: its view matrix,
//! its projection matrix and its world space position (for specular lighting).

pub mod orbit_camera;

use cgmath::{Matrix4, Vector3};

// Re-export main types
pub use orbit_camera::{OrbitCamera, OrbitCameraBounds};

pub trait Camera {
    fn view_matrix(&self) -> Matrix4<f32>;

    fn projection_matrix(&self) -> Matrix4<f32>;

    /// Eye position in world space
    fn position(&self) -> Vector3<f32>;

    fn view_projection_matrix(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }
}
