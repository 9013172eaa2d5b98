use super::{matrix::Matrix4x4, point::Point3, transform::Transform, vector::Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transforms/Transforms.html

/// Creates a new [Transform] that is a translation by `delta`.
pub fn translation(delta: Vec3) -> Transform {
    let m = Matrix4x4::new([
        [1.0, 0.0, 0.0, delta.x],
        [0.0, 1.0, 0.0, delta.y],
        [0.0, 0.0, 1.0, delta.z],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    let m_inv = Matrix4x4::new([
        [1.0, 0.0, 0.0, -delta.x],
        [0.0, 1.0, 0.0, -delta.y],
        [0.0, 0.0, 1.0, -delta.z],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    Transform::new_full(m, m_inv)
}

/// Creates a new [Transform] that is a scaling by `x`, `y` and `z`.
pub fn scale(x: f64, y: f64, z: f64) -> Transform {
    debug_assert!(x != 0.0 && y != 0.0 && z != 0.0);

    let m = Matrix4x4::new([
        [x, 0.0, 0.0, 0.0],
        [0.0, y, 0.0, 0.0],
        [0.0, 0.0, z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    let m_inv = Matrix4x4::new([
        [1.0 / x, 0.0, 0.0, 0.0],
        [0.0, 1.0 / y, 0.0, 0.0],
        [0.0, 0.0, 1.0 / z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    Transform::new_full(m, m_inv)
}

/// Creates a new [Transform] that is a rotation of `theta` radians around the x-axis.
pub fn rotation_x(theta: f64) -> Transform {
    let cos_theta = theta.cos();
    let sin_theta = theta.sin();
    let m = Matrix4x4::new([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, cos_theta, -sin_theta, 0.0],
        [0.0, sin_theta, cos_theta, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    Transform::new_full(m, m.transposed())
}

/// Creates a new [Transform] that is a rotation of `theta` radians around the y-axis.
pub fn rotation_y(theta: f64) -> Transform {
    let cos_theta = theta.cos();
    let sin_theta = theta.sin();
    let m = Matrix4x4::new([
        [cos_theta, 0.0, sin_theta, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-sin_theta, 0.0, cos_theta, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    Transform::new_full(m, m.transposed())
}

/// Creates a new [Transform] that is a rotation of `theta` radians around the z-axis.
pub fn rotation_z(theta: f64) -> Transform {
    let cos_theta = theta.cos();
    let sin_theta = theta.sin();
    let m = Matrix4x4::new([
        [cos_theta, -sin_theta, 0.0, 0.0],
        [sin_theta, cos_theta, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    Transform::new_full(m, m.transposed())
}

/// Creates a new [Transform] that is a rotation of `theta` radians around `axis`.
pub fn rotation(theta: f64, axis: Vec3) -> Transform {
    let a = axis.normalized();
    let cos_theta = theta.cos();
    let sin_theta = theta.sin();
    let m = Matrix4x4::new([
        [
            a.x * a.x + (1.0 - a.x * a.x) * cos_theta,
            a.x * a.y * (1.0 - cos_theta) - a.z * sin_theta,
            a.x * a.z * (1.0 - cos_theta) + a.y * sin_theta,
            0.0,
        ],
        [
            a.x * a.y * (1.0 - cos_theta) + a.z * sin_theta,
            a.y * a.y + (1.0 - a.y * a.y) * cos_theta,
            a.y * a.z * (1.0 - cos_theta) - a.x * sin_theta,
            0.0,
        ],
        [
            a.x * a.z * (1.0 - cos_theta) - a.y * sin_theta,
            a.y * a.z * (1.0 - cos_theta) + a.x * sin_theta,
            a.z * a.z + (1.0 - a.z * a.z) * cos_theta,
            0.0,
        ],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    Transform::new_full(m, m.transposed())
}

/// Creates a world-to-camera [Transform] with the camera at `pos` looking at
/// `target` with `up` as the up vector.
///
/// A degenerate basis, `up` parallel to the view direction or `target` equal
/// to `pos`, yields the identity transform instead of an error.
pub fn look_at(pos: Point3, target: Point3, up: Vec3) -> Transform {
    let to_target = target - pos;
    if to_target.len_sqr() < 1e-12 {
        log::warn!("look_at: camera position and target coincide");
        return Transform::identity();
    }

    let dir = to_target.normalized();
    let right = up.normalized().cross(dir);
    if right.len_sqr() < 1e-12 {
        log::warn!("look_at: up is parallel to the view direction");
        return Transform::identity();
    }
    let right = right.normalized();
    let new_up = dir.cross(right);

    let camera_to_world = Matrix4x4::new([
        [right.x, new_up.x, dir.x, pos.x],
        [right.y, new_up.y, dir.y, pos.y],
        [right.z, new_up.z, dir.z, pos.z],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    Transform::new_full(camera_to_world.inverted(), camera_to_world)
}
