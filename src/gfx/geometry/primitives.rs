//! # Primitive Shape Generation
//!
//! Y-up primitives with outward normals, UVs in `[0, 1]` and
//! counter-clockwise winding.

use super::GeometryData;
use std::f32::consts::PI;

/// Outward normal, then the tangent axes spanning the face (u, v)
const CUBE_FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
];

/// Generate a unit cube centered at the origin
///
/// Vertices span -0.5 to 0.5 on all axes. Each face has its own four
/// vertices so normals and UVs stay per-face.
pub fn generate_cube() -> GeometryData {
    let mut data = GeometryData::new();

    for (normal, u_axis, v_axis) in CUBE_FACES {
        let base = data.positions.len() as u32;

        for (u, v) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
            let (su, sv) = (u - 0.5, v - 0.5);
            let position = [
                normal[0] * 0.5 + u_axis[0] * su + v_axis[0] * sv,
                normal[1] * 0.5 + u_axis[1] * su + v_axis[1] * sv,
                normal[2] * 0.5 + u_axis[2] * su + v_axis[2] * sv,
            ];
            data.positions.push(position);
            data.normals.push(normal);
            data.tex_coords.push([u, v]);
        }

        data.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    data
}

/// Generate a UV sphere of radius 1.0 centered at the origin
///
/// The rings touching a pole get one triangle per segment; every other ring
/// gets two.
///
/// # Arguments
/// * `longitude_segments` - Number of vertical segments, at least 3
/// * `latitude_segments` - Number of horizontal rings, at least 2
pub fn generate_sphere(longitude_segments: u32, latitude_segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let long_segs = longitude_segments.max(3);
    let lat_segs = latitude_segments.max(2);

    for lat in 0..=lat_segs {
        let theta = lat as f32 * PI / lat_segs as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for long in 0..=long_segs {
            let phi = long as f32 * 2.0 * PI / long_segs as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();

            let point = [sin_theta * cos_phi, cos_theta, sin_theta * sin_phi];
            data.positions.push(point);
            // Unit sphere: the normal is the position
            data.normals.push(point);
            data.tex_coords
                .push([long as f32 / long_segs as f32, lat as f32 / lat_segs as f32]);
        }
    }

    let row = long_segs + 1;
    for lat in 0..lat_segs {
        for long in 0..long_segs {
            let first = lat * row + long;
            let second = first + row;

            if lat != 0 {
                data.indices.extend_from_slice(&[first, first + 1, second]);
            }
            if lat != lat_segs - 1 {
                data.indices
                    .extend_from_slice(&[second, first + 1, second + 1]);
            }
        }
    }

    data
}

/// Generate a plane in the XZ plane facing +Y
///
/// # Arguments
/// * `width` - Extent along X
/// * `depth` - Extent along Z
/// * `width_segments` - Subdivisions along X, at least 1
/// * `depth_segments` - Subdivisions along Z, at least 1
pub fn generate_plane(width: f32, depth: f32, width_segments: u32, depth_segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let w_segs = width_segments.max(1);
    let d_segs = depth_segments.max(1);

    for z in 0..=d_segs {
        let v = z as f32 / d_segs as f32;
        for x in 0..=w_segs {
            let u = x as f32 / w_segs as f32;

            data.positions.push([(u - 0.5) * width, 0.0, (v - 0.5) * depth]);
            data.normals.push([0.0, 1.0, 0.0]);
            data.tex_coords.push([u, v]);
        }
    }

    let row = w_segs + 1;
    for z in 0..d_segs {
        for x in 0..w_segs {
            let i = z * row + x;
            let next_row = i + row;

            // Counter-clockwise seen from +Y
            data.indices
                .extend_from_slice(&[i, next_row, i + 1, next_row, next_row + 1, i + 1]);
        }
    }

    data
}
