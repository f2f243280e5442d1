//! Material definitions
//!
//! A material carries the surface parameters uploaded alongside each draw:
//! a tint color, a specular shininess exponent and an optional main texture
//! key resolved through the [`TextureCache`](super::texture_cache::TextureCache).
//! Materials are shared between objects through `Rc`.

/// Key used to look a texture up in the texture cache
pub type TextureKey = String;

/// Surface parameters for one or more renderable objects
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub name: String,
    /// RGBA tint multiplied into the surface color
    pub tint: [f32; 4],
    /// Specular exponent
    pub shininess: f32,
    pub main_texture: Option<TextureKey>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            tint: [1.0, 1.0, 1.0, 1.0],
            shininess: 32.0,
            main_texture: None,
        }
    }
}

impl Material {
    /// Creates an untextured material
    ///
    /// # Arguments
    /// * `name` - Name of this material, used in logs
    /// * `tint` - RGBA tint
    /// * `shininess` - Specular exponent, uploaded as given
    pub fn new(name: &str, tint: [f32; 4], shininess: f32) -> Self {
        Self {
            name: name.to_string(),
            tint,
            shininess,
            main_texture: None,
        }
    }

    /// Builder pattern: Set tint from RGB values, keeping alpha
    pub fn with_color(mut self, r: f32, g: f32, b: f32) -> Self {
        self.tint = [r, g, b, self.tint[3]];
        self
    }

    /// Builder pattern: Set alpha transparency
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.tint[3] = alpha.clamp(0.0, 1.0);
        self
    }

    /// Builder pattern: Set specular exponent
    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }

    /// Builder pattern: Set the main texture key
    pub fn with_texture(mut self, key: &str) -> Self {
        self.main_texture = Some(key.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let material = Material::new("crate", [1.0, 0.0, 0.0, 1.0], 8.0)
            .with_color(0.5, 0.25, 0.125)
            .with_alpha(2.0)
            .with_texture("wood");

        assert_eq!(material.tint, [0.5, 0.25, 0.125, 1.0]);
        assert_eq!(material.main_texture.as_deref(), Some("wood"));
        assert_eq!(material.shininess, 8.0);
    }

    #[test]
    fn test_shininess_is_kept_as_given() {
        assert_eq!(Material::new("m", [1.0; 4], -4.0).shininess, -4.0);
        assert_eq!(Material::default().with_shininess(0.5).shininess, 0.5);
    }
}
