//! Headless spinning cube
//!
//! Builds a small scene (a textured cube over a floor plane), spins the cube
//! for a few frames and renders everything through a `RecordingContext`.
//! Run with `RUST_LOG=model_transform=trace` to see every recorded call.

use std::rc::Rc;

use anyhow::Context;
use cgmath::Vector3;
use model_transform::prelude::*;

const FRAMES: usize = 4;

fn checkerboard(size: u32) -> Vec<u8> {
    (0..size * size)
        .flat_map(|i| {
            let (x, y) = (i % size, i / size);
            if (x + y) % 2 == 0 {
                [230, 230, 230, 255]
            } else {
                [40, 40, 40, 255]
            }
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let mut ctx = RecordingContext::new();
    let program = ctx.declare_program(
        &["aPosition", "aNormal", "aTexcoord"],
        &[
            "uModelMatrix",
            "uViewMatrix",
            "uProjectionMatrix",
            "uTint",
            "uModelInverseTransposeMatrix",
            "uViewPos",
            "uDirectionalLight",
            "uDirectionalColor",
            "uAmbientColor",
            "uShininess",
            "uMainTex",
        ],
    );
    let shader = ShaderProgram::resolve(&ctx, program, &ShaderBindingNames::default());

    let mut scene = Scene::new(LightingData::default());
    scene
        .textures
        .load_rgba8(&mut ctx, "checker", 8, 8, &checkerboard(8))
        .context("failed to load checker texture")?;

    let cube_mesh = Rc::new(
        Mesh::upload(&mut ctx, &generate_cube(), DrawMode::Triangles)
            .context("failed to upload cube")?,
    );
    let floor_mesh = Rc::new(
        Mesh::upload(&mut ctx, &generate_plane(10.0, 10.0, 4, 4).unindexed(), DrawMode::Triangles)
            .context("failed to upload floor")?,
    );

    let crate_material = Rc::new(
        Material::new("crate", [1.0, 0.9, 0.8, 1.0], 48.0).with_texture("checker"),
    );
    let floor_material = Rc::new(Material::default().with_color(0.3, 0.5, 0.3));

    let cube = scene.add_object(ModelTransform::new(
        cube_mesh,
        crate_material,
        Some(Vector3::new(0.0, 1.0, 0.0)),
        None,
        Some(Vector3::new(1.5, 1.5, 1.5)),
    ));
    scene.add_object(ModelTransform::new(floor_mesh, floor_material, None, None, None));

    let camera = OrbitCamera::new(8.0, 0.4, 0.2, Vector3::new(0.0, 0.0, 0.0), 16.0 / 9.0);

    for frame in 0..FRAMES {
        ctx.clear();

        if let Some(object) = scene.get_object_mut(cube) {
            object.rotation.y += 15.0;
            object.rotation.x += 5.0;
        }
        scene.update_all_transforms();
        scene.render_all(&mut ctx, &shader, &camera);

        let forward = scene.objects[cube].local_forward();
        log::info!(
            "frame {}: {} draw calls, {} uniform uploads, cube forward = ({:.2}, {:.2}, {:.2})",
            frame,
            ctx.draw_calls().len(),
            ctx.uniform_uploads().len(),
            forward.x,
            forward.y,
            forward.z
        );
    }

    Ok(())
}
