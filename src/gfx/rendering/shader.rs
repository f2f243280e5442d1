//! Shader descriptors with optional attribute and uniform slots
//!
//! A [`ShaderProgram`] pairs a program handle with the locations of every
//! semantic input the renderer knows about. Each slot is an `Option`; a shader
//! variant that does not use, say, point lighting leaves that slot `None` and
//! the corresponding upload is skipped.

use super::context::{AttribLocation, GraphicsContext, ProgramHandle, UniformLocation};

/// Per-vertex inputs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttribLocations {
    pub position: Option<AttribLocation>,
    pub normal: Option<AttribLocation>,
    pub texcoord: Option<AttribLocation>,
}

/// Per-draw inputs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UniformLocations {
    pub model_matrix: Option<UniformLocation>,
    pub view_matrix: Option<UniformLocation>,
    pub projection_matrix: Option<UniformLocation>,
    pub tint: Option<UniformLocation>,
    pub model_inverse_transpose_matrix: Option<UniformLocation>,
    pub view_pos: Option<UniformLocation>,
    pub directional_light: Option<UniformLocation>,
    pub directional_color: Option<UniformLocation>,
    pub point_light: Option<UniformLocation>,
    pub point_light_color: Option<UniformLocation>,
    pub ambient_color: Option<UniformLocation>,
    pub shininess: Option<UniformLocation>,
    pub main_texture: Option<UniformLocation>,
}

/// Identifiers used in shader source for each semantic slot
///
/// Used by [`ShaderProgram::resolve`] to look locations up in a linked program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShaderBindingNames {
    pub position: String,
    pub normal: String,
    pub texcoord: String,
    pub model_matrix: String,
    pub view_matrix: String,
    pub projection_matrix: String,
    pub tint: String,
    pub model_inverse_transpose_matrix: String,
    pub view_pos: String,
    pub directional_light: String,
    pub directional_color: String,
    pub point_light: String,
    pub point_light_color: String,
    pub ambient_color: String,
    pub shininess: String,
    pub main_texture: String,
}

impl Default for ShaderBindingNames {
    fn default() -> Self {
        Self {
            position: "aPosition".to_string(),
            normal: "aNormal".to_string(),
            texcoord: "aTexcoord".to_string(),
            model_matrix: "uModelMatrix".to_string(),
            view_matrix: "uViewMatrix".to_string(),
            projection_matrix: "uProjectionMatrix".to_string(),
            tint: "uTint".to_string(),
            model_inverse_transpose_matrix: "uModelInverseTransposeMatrix".to_string(),
            view_pos: "uViewPos".to_string(),
            directional_light: "uDirectionalLight".to_string(),
            directional_color: "uDirectionalColor".to_string(),
            point_light: "uPointLight".to_string(),
            point_light_color: "uPointLightColor".to_string(),
            ambient_color: "uAmbientColor".to_string(),
            shininess: "uShininess".to_string(),
            main_texture: "uMainTex".to_string(),
        }
    }
}

/// A linked program and the locations of its semantic inputs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShaderProgram {
    pub program: ProgramHandle,
    pub attrib_loc: AttribLocations,
    pub uniform_loc: UniformLocations,
}

impl ShaderProgram {
    /// Creates a descriptor with every slot empty
    pub fn new(program: ProgramHandle) -> Self {
        Self {
            program,
            attrib_loc: AttribLocations::default(),
            uniform_loc: UniformLocations::default(),
        }
    }

    /// Builder pattern: set attribute locations
    pub fn with_attributes(mut self, attrib_loc: AttribLocations) -> Self {
        self.attrib_loc = attrib_loc;
        self
    }

    /// Builder pattern: set uniform locations
    pub fn with_uniforms(mut self, uniform_loc: UniformLocations) -> Self {
        self.uniform_loc = uniform_loc;
        self
    }

    /// Queries `ctx` for the location of every slot named in `names`
    ///
    /// Identifiers the program does not declare resolve to `None`.
    pub fn resolve<C>(ctx: &C, program: ProgramHandle, names: &ShaderBindingNames) -> Self
    where
        C: GraphicsContext + ?Sized,
    {
        let attrib = |name: &str| ctx.attrib_location(program, name);
        let uniform = |name: &str| ctx.uniform_location(program, name);

        let shader = Self {
            program,
            attrib_loc: AttribLocations {
                position: attrib(&names.position),
                normal: attrib(&names.normal),
                texcoord: attrib(&names.texcoord),
            },
            uniform_loc: UniformLocations {
                model_matrix: uniform(&names.model_matrix),
                view_matrix: uniform(&names.view_matrix),
                projection_matrix: uniform(&names.projection_matrix),
                tint: uniform(&names.tint),
                model_inverse_transpose_matrix: uniform(&names.model_inverse_transpose_matrix),
                view_pos: uniform(&names.view_pos),
                directional_light: uniform(&names.directional_light),
                directional_color: uniform(&names.directional_color),
                point_light: uniform(&names.point_light),
                point_light_color: uniform(&names.point_light_color),
                ambient_color: uniform(&names.ambient_color),
                shininess: uniform(&names.shininess),
                main_texture: uniform(&names.main_texture),
            },
        };

        log::debug!(
            "resolved shader {:?}: {} of 3 attributes, {} of 13 uniforms",
            program,
            shader.attrib_loc.declared_count(),
            shader.uniform_loc.declared_count()
        );
        shader
    }
}

impl AttribLocations {
    /// Number of slots the shader declares
    pub fn declared_count(&self) -> usize {
        [self.position, self.normal, self.texcoord]
            .iter()
            .filter(|loc| loc.is_some())
            .count()
    }
}

impl UniformLocations {
    /// Only the model, view and projection matrices
    pub fn mvp(
        model_matrix: UniformLocation,
        view_matrix: UniformLocation,
        projection_matrix: UniformLocation,
    ) -> Self {
        Self {
            model_matrix: Some(model_matrix),
            view_matrix: Some(view_matrix),
            projection_matrix: Some(projection_matrix),
            ..Default::default()
        }
    }

    /// Number of slots the shader declares
    pub fn declared_count(&self) -> usize {
        [
            self.model_matrix,
            self.view_matrix,
            self.projection_matrix,
            self.tint,
            self.model_inverse_transpose_matrix,
            self.view_pos,
            self.directional_light,
            self.directional_color,
            self.point_light,
            self.point_light_color,
            self.ambient_color,
            self.shininess,
            self.main_texture,
        ]
        .iter()
        .filter(|loc| loc.is_some())
        .count()
    }
}
