//! Renderable object with a position/rotation/scale transform
//!
//! A [`ModelTransform`] ties a shared [`Mesh`] and [`Material`] to a spatial
//! transform and knows how to draw itself: activate a shader, upload the
//! uniforms the shader declares, bind the vertex attributes and submit one
//! draw call.
//!
//! ## Frame usage
//!
//! ```no_run
//! # use std::rc::Rc;
//! # use cgmath::Vector3;
//! # use model_transform::gfx::{camera::OrbitCamera, resources::{LightingData, Material, TextureCache},
//! #     rendering::{RecordingContext, ShaderProgram, ProgramHandle}, scene::{Mesh, ModelTransform},
//! #     rendering::{BufferHandle, DrawMode}};
//! # let mut ctx = RecordingContext::new();
//! # let mesh = Rc::new(Mesh::new(DrawMode::Triangles, 3, BufferHandle(1)));
//! # let material = Rc::new(Material::default());
//! # let shader = ShaderProgram::new(ProgramHandle(1));
//! # let camera = OrbitCamera::new(5.0, 0.0, 0.0, Vector3::new(0.0, 0.0, 0.0), 1.0);
//! # let lighting = LightingData::default();
//! # let textures = TextureCache::new();
//! let mut cube = ModelTransform::new(mesh, material, None, None, None);
//!
//! // every frame
//! cube.rotation.y += 1.0;
//! cube.update()
//!     .render(&mut ctx, &shader, &camera, &lighting, &textures);
//! ```

use std::rc::Rc;

use cgmath::{Matrix4, SquareMatrix, Vector3, Zero};

use crate::gfx::{
    camera::Camera,
    math,
    rendering::{
        context::{BufferTarget, GraphicsContext, VertexAttribLayout},
        shader::ShaderProgram,
    },
    resources::{lighting::LightingData, material::Material, texture_cache::TextureCache},
};

use super::mesh::Mesh;

/// Texture unit the main texture is bound to
const MAIN_TEXTURE_UNIT: u32 = 0;

/// A mesh and material placed in the world
///
/// `model_matrix` is derived from `position`, `rotation` and `scale`. It is
/// not recomputed when those fields change: call [`update`](Self::update)
/// once after mutating them and before rendering.
#[derive(Clone, Debug)]
pub struct ModelTransform {
    pub mesh: Rc<Mesh>,
    pub material: Rc<Material>,
    /// Center of the model in world space
    pub position: Vector3<f32>,
    /// Euler angles in degrees: x = pitch, y = yaw, z = roll
    pub rotation: Vector3<f32>,
    /// Per-axis scale, (1, 1, 1) is the mesh's native size
    pub scale: Vector3<f32>,
    model_matrix: Matrix4<f32>,
}

impl ModelTransform {
    /// Creates a renderable object
    ///
    /// Missing vectors default to the origin, no rotation, and unit scale.
    /// The vectors are copied, so later changes to the caller's values do not
    /// affect the object.
    ///
    /// # Arguments
    /// * `mesh` - Shared geometry descriptor
    /// * `material` - Shared surface parameters
    /// * `position` - Center of the model in world space
    /// * `rotation` - Rotation in degrees (pitch, yaw, roll)
    /// * `scale` - Width, height and depth factors
    pub fn new(
        mesh: Rc<Mesh>,
        material: Rc<Material>,
        position: Option<Vector3<f32>>,
        rotation: Option<Vector3<f32>>,
        scale: Option<Vector3<f32>>,
    ) -> Self {
        let mut transform = Self {
            mesh,
            material,
            position: position.unwrap_or_else(Vector3::zero),
            rotation: rotation.unwrap_or_else(Vector3::zero),
            scale: scale.unwrap_or(Vector3::new(1.0, 1.0, 1.0)),
            model_matrix: Matrix4::identity(),
        };
        transform.update_matrix();
        transform
    }

    /// Builder pattern: Set position and recompose
    pub fn with_position(mut self, position: Vector3<f32>) -> Self {
        self.position = position;
        self.update_matrix();
        self
    }

    /// Builder pattern: Set rotation (degrees) and recompose
    pub fn with_rotation(mut self, rotation: Vector3<f32>) -> Self {
        self.rotation = rotation;
        self.update_matrix();
        self
    }

    /// Builder pattern: Set scale and recompose
    pub fn with_scale(mut self, scale: Vector3<f32>) -> Self {
        self.scale = scale;
        self.update_matrix();
        self
    }

    /// Model matrix as of the last [`update`](Self::update)
    pub fn model_matrix(&self) -> &Matrix4<f32> {
        &self.model_matrix
    }

    /// Recomposes the model matrix from the current position, rotation and scale
    pub fn update(&mut self) -> &mut Self {
        self.update_matrix();
        self
    }

    fn update_matrix(&mut self) {
        self.model_matrix = math::compose_trs(self.position, self.rotation, self.scale);
    }

    /// Local X axis of the model in world space
    pub fn local_right(&self) -> Vector3<f32> {
        math::basis_axis(&self.model_matrix, 0)
    }

    /// Local Y axis of the model in world space
    pub fn local_up(&self) -> Vector3<f32> {
        math::basis_axis(&self.model_matrix, 1)
    }

    /// Local Z axis of the model in world space
    pub fn local_forward(&self) -> Vector3<f32> {
        math::basis_axis(&self.model_matrix, 2)
    }

    /// Back to origin, no rotation, unit scale and an identity matrix
    pub fn reset(&mut self) -> &mut Self {
        self.position = Vector3::zero();
        self.scale = Vector3::new(1.0, 1.0, 1.0);
        self.rotation = Vector3::zero();
        // Identity is exactly what composing the reset fields gives.
        self.model_matrix = Matrix4::identity();
        self
    }

    /// Draws the mesh with `shader`
    ///
    /// Activates the program, uploads the uniforms and attributes the shader
    /// declares, then issues an indexed draw when the mesh has indices and a
    /// plain vertex draw otherwise.
    pub fn render<C>(
        &self,
        ctx: &mut C,
        shader: &ShaderProgram,
        camera: &dyn Camera,
        lighting: &LightingData,
        textures: &TextureCache,
    ) -> &Self
    where
        C: GraphicsContext + ?Sized,
    {
        ctx.use_program(shader.program);

        self.set_uniform_data(ctx, shader, camera, lighting, textures);
        self.set_vertex_arrays(ctx, shader);

        let mesh = &self.mesh;
        match mesh.index {
            Some(index) => {
                ctx.bind_buffer(BufferTarget::ElementArray, Some(index.buffer));
                ctx.draw_elements(mesh.draw_mode, index.count, index.index_type, 0);
            }
            None => ctx.draw_arrays(mesh.draw_mode, 0, mesh.vertex_count),
        }

        log::trace!(
            "drew {:?} with material '{}' ({} vertices, {} indices)",
            mesh.draw_mode,
            self.material.name,
            mesh.vertex_count,
            mesh.index_count()
        );
        self
    }

    /// Binds position, normal and texcoord buffers to the shader's attributes
    ///
    /// An attribute the shader does not declare, or the mesh has no buffer
    /// for, is skipped.
    pub fn set_vertex_arrays<C>(&self, ctx: &mut C, shader: &ShaderProgram)
    where
        C: GraphicsContext + ?Sized,
    {
        let attributes = [
            (shader.attrib_loc.position, Some(self.mesh.position_buffer), 3),
            (shader.attrib_loc.normal, self.mesh.normal_buffer, 3),
            (shader.attrib_loc.texcoord, self.mesh.texcoord_buffer, 2),
        ];

        for (location, buffer, components) in attributes {
            let (Some(location), Some(buffer)) = (location, buffer) else {
                continue;
            };
            ctx.bind_buffer(BufferTarget::Array, Some(buffer));
            ctx.enable_vertex_attrib_array(location);
            ctx.vertex_attrib_pointer(location, VertexAttribLayout::packed_floats(components));
        }
    }

    /// Uploads every uniform the shader declares
    ///
    /// Order: model, view and projection matrices, tint, normal matrix,
    /// camera position, directional light, point light, ambient color,
    /// shininess, main texture. The main texture is bound to unit 0; an
    /// unknown or missing texture key leaves the unit unbound.
    pub fn set_uniform_data<C>(
        &self,
        ctx: &mut C,
        shader: &ShaderProgram,
        camera: &dyn Camera,
        lighting: &LightingData,
        textures: &TextureCache,
    ) where
        C: GraphicsContext + ?Sized,
    {
        let loc = &shader.uniform_loc;

        if let Some(l) = loc.model_matrix {
            ctx.uniform_matrix4(l, self.model_matrix.as_ref());
        }
        if let Some(l) = loc.view_matrix {
            ctx.uniform_matrix4(l, camera.view_matrix().as_ref());
        }
        if let Some(l) = loc.projection_matrix {
            ctx.uniform_matrix4(l, camera.projection_matrix().as_ref());
        }

        if let Some(l) = loc.tint {
            ctx.uniform4f(l, self.material.tint);
        }

        if let Some(l) = loc.model_inverse_transpose_matrix {
            let normal_matrix = math::inverse_transpose_3x3(&self.model_matrix);
            ctx.uniform_matrix3(l, normal_matrix.as_ref());
        }

        // lighting
        let vec3_uniforms = [
            (loc.view_pos, camera.position()),
            (loc.directional_light, lighting.directional_light),
            (loc.directional_color, lighting.directional_color),
            (loc.point_light, lighting.point_light),
            (loc.point_light_color, lighting.point_light_color),
            (loc.ambient_color, lighting.ambient_color),
        ];
        for (location, value) in vec3_uniforms {
            if let Some(l) = location {
                ctx.uniform3f(l, value.into());
            }
        }

        if let Some(l) = loc.shininess {
            ctx.uniform1f(l, self.material.shininess);
        }

        // texturing
        if let Some(l) = loc.main_texture {
            let texture = self.material.main_texture.as_deref().and_then(|key| {
                let texture = textures.get(key);
                if texture.is_none() {
                    log::debug!(
                        "material '{}' references unknown texture '{}'",
                        self.material.name,
                        key
                    );
                }
                texture
            });

            ctx.active_texture(MAIN_TEXTURE_UNIT);
            ctx.bind_texture_2d(texture);
            ctx.uniform1i(l, MAIN_TEXTURE_UNIT as i32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::rendering::context::{BufferHandle, DrawMode};
    use cgmath::{InnerSpace, Matrix4};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn test_mesh() -> Rc<Mesh> {
        Rc::new(Mesh::new(DrawMode::Triangles, 3, BufferHandle(1)))
    }

    fn object(position: Vector3<f32>, rotation: Vector3<f32>, scale: Vector3<f32>) -> ModelTransform {
        ModelTransform::new(
            test_mesh(),
            Rc::new(Material::default()),
            Some(position),
            Some(rotation),
            Some(scale),
        )
    }

    fn assert_mat4_close(a: &Matrix4<f32>, b: &Matrix4<f32>, eps: f32) {
        let a: &[f32; 16] = a.as_ref();
        let b: &[f32; 16] = b.as_ref();
        for i in 0..16 {
            assert!((a[i] - b[i]).abs() < eps, "component {i}: {} vs {}", a[i], b[i]);
        }
    }

    fn assert_vec3_close(a: Vector3<f32>, b: Vector3<f32>) {
        assert!((a - b).magnitude() < 1e-5, "{:?} vs {:?}", a, b);
    }

    // Reference matrices written out by hand, column by column.
    fn ref_translation(p: Vector3<f32>) -> Matrix4<f32> {
        #[rustfmt::skip]
        let m = Matrix4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            p.x, p.y, p.z, 1.0,
        );
        m
    }

    fn ref_rot_x(deg: f32) -> Matrix4<f32> {
        let (s, c) = deg.to_radians().sin_cos();
        #[rustfmt::skip]
        let m = Matrix4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0,   c,   s, 0.0,
            0.0,  -s,   c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        m
    }

    fn ref_rot_y(deg: f32) -> Matrix4<f32> {
        let (s, c) = deg.to_radians().sin_cos();
        #[rustfmt::skip]
        let m = Matrix4::new(
              c, 0.0,  -s, 0.0,
            0.0, 1.0, 0.0, 0.0,
              s, 0.0,   c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        m
    }

    fn ref_rot_z(deg: f32) -> Matrix4<f32> {
        let (s, c) = deg.to_radians().sin_cos();
        #[rustfmt::skip]
        let m = Matrix4::new(
              c,   s, 0.0, 0.0,
             -s,   c, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        m
    }

    fn ref_scale(s: Vector3<f32>) -> Matrix4<f32> {
        Matrix4::from_diagonal(s.extend(1.0))
    }

    #[test]
    fn test_defaults_give_identity() {
        let model = ModelTransform::new(test_mesh(), Rc::new(Material::default()), None, None, None);
        assert_eq!(model.position, Vector3::zero());
        assert_eq!(model.rotation, Vector3::zero());
        assert_eq!(model.scale, Vector3::new(1.0, 1.0, 1.0));
        assert_mat4_close(model.model_matrix(), &Matrix4::identity(), 1e-6);
    }

    #[test]
    fn test_composition_matches_reference() {
        let p = Vector3::new(1.0, -2.0, 3.5);
        let r = Vector3::new(30.0, 45.0, -60.0);
        let s = Vector3::new(2.0, 0.5, 1.5);
        let model = object(p, r, s);

        let expected = ref_translation(p) * ref_rot_y(r.y) * ref_rot_x(r.x) * ref_rot_z(r.z) * ref_scale(s);
        assert_mat4_close(model.model_matrix(), &expected, 1e-5);
    }

    #[test]
    fn test_composition_matches_reference_randomized() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let mut v = |lo: f32, hi: f32| {
                Vector3::new(
                    rng.random_range(lo..hi),
                    rng.random_range(lo..hi),
                    rng.random_range(lo..hi),
                )
            };
            let p = v(-50.0, 50.0);
            let r = v(-360.0, 360.0);
            let s = v(0.1, 4.0);

            let model = object(p, r, s);
            let expected =
                ref_translation(p) * ref_rot_y(r.y) * ref_rot_x(r.x) * ref_rot_z(r.z) * ref_scale(s);
            assert_mat4_close(model.model_matrix(), &expected, 1e-3);
        }
    }

    #[test]
    fn test_rotation_order_matters() {
        let model = object(Vector3::zero(), Vector3::new(30.0, 60.0, 0.0), Vector3::new(1.0, 1.0, 1.0));
        let swapped = ref_rot_x(30.0) * ref_rot_y(60.0);

        let a: &[f32; 16] = model.model_matrix().as_ref();
        let b: &[f32; 16] = swapped.as_ref();
        let max_diff = a.iter().zip(b).map(|(x, y)| (x - y).abs()).fold(0.0, f32::max);
        assert!(max_diff > 1e-3);
    }

    #[test]
    fn test_matrix_is_stale_until_update() {
        let mut model = object(Vector3::zero(), Vector3::zero(), Vector3::new(1.0, 1.0, 1.0));
        model.position = Vector3::new(4.0, 5.0, 6.0);

        assert_eq!(model.model_matrix().w.truncate(), Vector3::zero());

        model.update();
        assert_eq!(model.model_matrix().w.truncate(), Vector3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_constructor_copies_inputs() {
        let mut p = Vector3::new(1.0, 2.0, 3.0);
        let mut r = Vector3::new(10.0, 20.0, 30.0);
        let model = object(p, r, Vector3::new(1.0, 1.0, 1.0));

        p.x = 9.0;
        p.y = 9.0;
        p.z = 9.0;
        r.y = 90.0;

        assert_eq!(p, Vector3::new(9.0, 9.0, 9.0));
        assert_eq!(r.y, 90.0);
        assert_eq!(model.position, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(model.rotation, Vector3::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn test_reset_yields_identity() {
        let mut model = object(
            Vector3::new(3.0, 2.0, 1.0),
            Vector3::new(15.0, 25.0, 35.0),
            Vector3::new(2.0, 2.0, 2.0),
        );
        model.reset();

        let m: &[f32; 16] = model.model_matrix().as_ref();
        let identity: [f32; 16] = [
            1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
        ];
        assert_eq!(m, &identity);
        assert_eq!(model.position, Vector3::zero());
        assert_eq!(model.scale, Vector3::new(1.0, 1.0, 1.0));

        // recomposing the reset fields agrees with the identity left by reset
        let after_reset = *model.model_matrix();
        model.update();
        assert_mat4_close(model.model_matrix(), &after_reset, 1e-6);
    }

    #[test]
    fn test_local_axes_identity() {
        let model = object(Vector3::new(7.0, 8.0, 9.0), Vector3::zero(), Vector3::new(1.0, 1.0, 1.0));
        assert_vec3_close(model.local_right(), Vector3::unit_x());
        assert_vec3_close(model.local_up(), Vector3::unit_y());
        assert_vec3_close(model.local_forward(), Vector3::unit_z());
    }

    #[test]
    fn test_local_axes_follow_yaw() {
        let model = object(Vector3::zero(), Vector3::new(0.0, 90.0, 0.0), Vector3::new(1.0, 1.0, 1.0));
        assert_vec3_close(model.local_right(), Vector3::new(0.0, 0.0, -1.0));
        assert_vec3_close(model.local_up(), Vector3::unit_y());
        assert_vec3_close(model.local_forward(), Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_local_axes_orthogonal_under_uniform_scale() {
        let model = object(
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(23.0, -71.0, 140.0),
            Vector3::new(3.0, 3.0, 3.0),
        );
        let (r, u, f) = (model.local_right(), model.local_up(), model.local_forward());

        assert!(r.dot(u).abs() < 1e-4);
        assert!(u.dot(f).abs() < 1e-4);
        assert!(f.dot(r).abs() < 1e-4);
        for axis in [r, u, f] {
            assert!((axis.magnitude() - 3.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_builders_recompose() {
        let model = ModelTransform::new(test_mesh(), Rc::new(Material::default()), None, None, None)
            .with_position(Vector3::new(1.0, 0.0, 0.0))
            .with_scale(Vector3::new(2.0, 2.0, 2.0));

        assert_vec3_close(model.model_matrix().w.truncate(), Vector3::new(1.0, 0.0, 0.0));
        assert_vec3_close(model.local_right(), Vector3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_update_chains() {
        let mut model = object(Vector3::zero(), Vector3::zero(), Vector3::new(1.0, 1.0, 1.0));
        model.position.y = 2.0;
        let up = model.update().local_up();
        assert_vec3_close(up, Vector3::unit_y());
        assert_eq!(model.model_matrix().w.y, 2.0);
    }
}
