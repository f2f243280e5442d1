use crate::gfx::{
    camera::Camera,
    rendering::{context::GraphicsContext, shader::ShaderProgram},
    resources::{lighting::LightingData, texture_cache::TextureCache},
};

use super::model_transform::ModelTransform;

/// Flat, ordered list of renderable objects sharing one camera and lighting
///
/// Objects are drawn in insertion order. There is no hierarchy: each object's
/// model matrix maps straight to world space.
#[derive(Default)]
pub struct Scene {
    pub objects: Vec<ModelTransform>,
    pub lighting: LightingData,
    pub textures: TextureCache,
}

impl Scene {
    pub fn new(lighting: LightingData) -> Self {
        Self {
            objects: Vec::new(),
            lighting,
            textures: TextureCache::new(),
        }
    }

    /// Adds an object, returning its index
    pub fn add_object(&mut self, object: ModelTransform) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    pub fn get_object(&self, index: usize) -> Option<&ModelTransform> {
        self.objects.get(index)
    }

    pub fn get_object_mut(&mut self, index: usize) -> Option<&mut ModelTransform> {
        self.objects.get_mut(index)
    }

    pub fn get_object_count(&self) -> usize {
        self.objects.len()
    }

    /// Recomposes every object's model matrix
    pub fn update_all_transforms(&mut self) {
        for object in &mut self.objects {
            object.update();
        }
    }

    /// Draws every object with `shader`, one draw call each
    pub fn render_all<C>(&self, ctx: &mut C, shader: &ShaderProgram, camera: &dyn Camera)
    where
        C: GraphicsContext + ?Sized,
    {
        for object in &self.objects {
            object.render(ctx, shader, camera, &self.lighting, &self.textures);
        }
        log::trace!("rendered {} objects", self.objects.len());
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use cgmath::Vector3;

    use super::*;
    use crate::gfx::{
        camera::OrbitCamera,
        rendering::{
            context::{BufferHandle, DrawMode, ProgramHandle},
            recording::RecordingContext,
        },
        resources::material::Material,
        scene::mesh::Mesh,
    };

    #[test]
    fn test_update_and_render_all() {
        let mesh = Rc::new(Mesh::new(DrawMode::Triangles, 3, BufferHandle(1)));
        let material = Rc::new(Material::default());

        let mut scene = Scene::new(LightingData::default());
        let first = scene.add_object(ModelTransform::new(mesh.clone(), material.clone(), None, None, None));
        scene.add_object(ModelTransform::new(mesh, material, None, None, None));
        assert_eq!(first, 0);
        assert_eq!(scene.get_object_count(), 2);

        scene.get_object_mut(1).unwrap().position = Vector3::new(0.0, 3.0, 0.0);
        scene.update_all_transforms();
        assert_eq!(scene.get_object(1).unwrap().model_matrix().w.y, 3.0);

        let mut ctx = RecordingContext::new();
        let camera = OrbitCamera::new(5.0, 0.0, 0.0, Vector3::new(0.0, 0.0, 0.0), 1.0);
        scene.render_all(&mut ctx, &ShaderProgram::new(ProgramHandle(1)), &camera);

        assert_eq!(ctx.draw_calls().len(), 2);
    }
}
