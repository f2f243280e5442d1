//! Per-frame lighting inputs
//!
//! Shared by every object drawn in a frame. Shaders pick whichever parts they
//! declare uniforms for: directional, point, ambient, or any mix.

use cgmath::Vector3;

/// Lighting configuration for one frame
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LightingData {
    /// Direction of the directional light
    pub directional_light: Vector3<f32>,
    pub directional_color: Vector3<f32>,
    /// World space position of the point light
    pub point_light: Vector3<f32>,
    pub point_light_color: Vector3<f32>,
    pub ambient_color: Vector3<f32>,
}

impl Default for LightingData {
    fn default() -> Self {
        Self {
            directional_light: Vector3::new(-0.5, -1.0, -0.3),
            directional_color: Vector3::new(1.0, 1.0, 1.0),
            point_light: Vector3::new(5.0, 10.0, 5.0),
            point_light_color: Vector3::new(1.0, 1.0, 1.0),
            ambient_color: Vector3::new(0.1, 0.1, 0.1),
        }
    }
}

impl LightingData {
    /// Builder pattern: Set directional light direction and color
    pub fn with_directional(mut self, direction: Vector3<f32>, color: Vector3<f32>) -> Self {
        self.directional_light = direction;
        self.directional_color = color;
        self
    }

    /// Builder pattern: Set point light position and color
    pub fn with_point(mut self, position: Vector3<f32>, color: Vector3<f32>) -> Self {
        self.point_light = position;
        self.point_light_color = color;
        self
    }

    /// Builder pattern: Set ambient color
    pub fn with_ambient(mut self, color: Vector3<f32>) -> Self {
        self.ambient_color = color;
        self
    }
}
