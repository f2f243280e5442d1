//! Matrix helpers on top of cgmath
//!
//! Rotation angles are always given in degrees. All matrices are cgmath
//! column-major, which is the layout the uniform upload expects.

use cgmath::{Deg, Matrix, Matrix3, Matrix4, SquareMatrix, Vector3};

pub fn translation(position: Vector3<f32>) -> Matrix4<f32> {
    Matrix4::from_translation(position)
}

/// Rotation around the X axis (pitch)
pub fn rotation_x(degrees: f32) -> Matrix4<f32> {
    Matrix4::from_angle_x(Deg(degrees))
}

/// Rotation around the Y axis (yaw)
pub fn rotation_y(degrees: f32) -> Matrix4<f32> {
    Matrix4::from_angle_y(Deg(degrees))
}

/// Rotation around the Z axis (roll)
pub fn rotation_z(degrees: f32) -> Matrix4<f32> {
    Matrix4::from_angle_z(Deg(degrees))
}

pub fn scaling(scale: Vector3<f32>) -> Matrix4<f32> {
    Matrix4::from_nonuniform_scale(scale.x, scale.y, scale.z)
}

/// Composes a model matrix from translation, euler rotation and scale
///
/// The product is `T * Ry * Rx * Rz * S`: yaw, then pitch, then roll, all in
/// local space, with the translation outermost. Changing the order changes how
/// combined rotations look on screen.
///
/// # Arguments
/// * `position` - World space translation
/// * `rotation` - Euler angles in degrees (x = pitch, y = yaw, z = roll)
/// * `scale` - Per-axis scale factors
pub fn compose_trs(
    position: Vector3<f32>,
    rotation: Vector3<f32>,
    scale: Vector3<f32>,
) -> Matrix4<f32> {
    let mut matrix = translation(position);
    matrix = matrix * rotation_y(rotation.y);
    matrix = matrix * rotation_x(rotation.x);
    matrix = matrix * rotation_z(rotation.z);
    matrix * scaling(scale)
}

/// Upper-left 3x3 block of an affine matrix
pub fn upper_3x3(matrix: &Matrix4<f32>) -> Matrix3<f32> {
    Matrix3::from_cols(
        matrix.x.truncate(),
        matrix.y.truncate(),
        matrix.z.truncate(),
    )
}

/// Normal matrix: inverse-transpose of the upper 3x3 block
///
/// Keeps normals perpendicular to surfaces under non-uniform scale.
/// A singular block (zero scale on some axis) yields the identity.
pub fn inverse_transpose_3x3(matrix: &Matrix4<f32>) -> Matrix3<f32> {
    match upper_3x3(matrix).invert() {
        Some(inverse) => inverse.transpose(),
        None => {
            log::debug!("model matrix is singular, using identity normal matrix");
            Matrix3::identity()
        }
    }
}

/// Basis column `index` (0 = X, 1 = Y, 2 = Z) of a matrix, without the w part
pub fn basis_axis(matrix: &Matrix4<f32>, index: usize) -> Vector3<f32> {
    matrix[index].truncate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{InnerSpace, Zero};

    fn assert_mat3_close(a: Matrix3<f32>, b: Matrix3<f32>) {
        let a: &[f32; 9] = a.as_ref();
        let b: &[f32; 9] = b.as_ref();
        for i in 0..9 {
            assert!((a[i] - b[i]).abs() < 1e-5, "component {i}: {} != {}", a[i], b[i]);
        }
    }

    #[test]
    fn test_rotation_takes_degrees() {
        let m = rotation_z(90.0);
        let x = basis_axis(&m, 0);
        assert!((x - Vector3::new(0.0, 1.0, 0.0)).magnitude() < 1e-6);
    }

    #[test]
    fn test_compose_identity_inputs() {
        let m = compose_trs(Vector3::zero(), Vector3::zero(), Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(m, Matrix4::identity());
    }

    #[test]
    fn test_inverse_transpose_of_pure_scale() {
        let m = scaling(Vector3::new(2.0, 4.0, 0.5));
        let expected = Matrix3::from_diagonal(Vector3::new(0.5, 0.25, 2.0));
        assert_mat3_close(inverse_transpose_3x3(&m), expected);
    }

    #[test]
    fn test_inverse_transpose_of_rotation_is_rotation() {
        let m = rotation_y(37.0) * rotation_x(-12.0);
        assert_mat3_close(inverse_transpose_3x3(&m), upper_3x3(&m));
    }

    #[test]
    fn test_inverse_transpose_ignores_translation() {
        let m = translation(Vector3::new(5.0, -3.0, 8.0));
        assert_mat3_close(inverse_transpose_3x3(&m), Matrix3::identity());
    }

    #[test]
    fn test_singular_matrix_falls_back_to_identity() {
        let m = scaling(Vector3::new(1.0, 0.0, 1.0));
        assert_mat3_close(inverse_transpose_3x3(&m), Matrix3::identity());
    }
}
